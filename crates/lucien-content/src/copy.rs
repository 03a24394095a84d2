use lucien_routes::{Language, Section};

/// Navigation label for the static fallback block.
#[must_use]
pub const fn nav_label(section: Section, language: Language) -> &'static str {
    match (language, section) {
        (Language::En, Section::Core) => "Core",
        (Language::En, Section::Modules) => "Modules",
        (Language::En, Section::Capabilities) => "Capabilities",
        (Language::En, Section::Archive) => "Archive",
        (Language::En, Section::Diagnostics) => "Diagnostics",
        (Language::En, Section::Resonance) => "Resonance",
        (Language::En, Section::Signal) => "Signal",
        (Language::Cs, Section::Core) => "Jádro",
        (Language::Cs, Section::Modules) => "Moduly",
        (Language::Cs, Section::Capabilities) => "Schopnosti",
        (Language::Cs, Section::Archive) => "Archiv",
        (Language::Cs, Section::Diagnostics) => "Diagnostika",
        (Language::Cs, Section::Resonance) => "Rezonance",
        (Language::Cs, Section::Signal) => "Signál",
    }
}

/// Label a language uses to point at pages in the given language.
///
/// The fallback block closes with a row of cross-language links headed by
/// this word.
#[must_use]
pub const fn language_name(language: Language) -> &'static str {
    match language {
        Language::Cs => "Česky",
        Language::En => "English",
    }
}

/// One-paragraph site summary, the fallback body text.
#[must_use]
pub const fn summary(language: Language) -> &'static str {
    match language {
        Language::En => {
            "System Architect, AI Engineer, and strategic systems auditor. Lucien OS v2.0 is a dual-mode digital twin with projects, capabilities, archive, diagnostics, resonance, and a signal channel."
        }
        Language::Cs => {
            "Systémový architekt, AI inženýr a auditor strategických systémů. Lucien OS v2.0 jako digitální profil s projekty, schopnostmi, archivem, diagnostikou, rezonancí a signálním kanálem."
        }
    }
}

/// Person job title for structured data.
#[must_use]
pub const fn job_title(language: Language) -> &'static str {
    match language {
        Language::En => "System Architect & AI Engineer",
        Language::Cs => "Systémový architekt & AI inženýr",
    }
}

/// A professional service advertised in structured data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub name: &'static str,
    pub description: &'static str,
}

/// Services offered, localized.
#[must_use]
pub const fn services(language: Language) -> &'static [Service] {
    match language {
        Language::En => &[
            Service {
                name: "Systems Architecture",
                description: "Architecture design and structural audits for digital and industrial systems.",
            },
            Service {
                name: "AI Engineering",
                description: "Applied AI systems, OSINT fusion, and automation pipelines.",
            },
            Service {
                name: "Strategic Systems Audit",
                description: "Lean Six Sigma driven audits of logistics and operations.",
            },
        ],
        Language::Cs => &[
            Service {
                name: "Systémová architektura",
                description: "Návrh architektury a strukturální audity digitálních i průmyslových systémů.",
            },
            Service {
                name: "AI inženýrství",
                description: "Aplikované AI systémy, OSINT fúze a automatizace.",
            },
            Service {
                name: "Audit strategických systémů",
                description: "Audity logistiky a operací metodou Lean Six Sigma.",
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use lucien_routes::{Language, Route};
    use pretty_assertions::assert_eq;

    use super::{nav_label, services, summary};

    #[test]
    fn test_every_route_has_a_nav_label() {
        for route in Route::all() {
            assert!(!nav_label(route.section, route.language).is_empty());
        }
    }

    #[test]
    fn test_summaries_differ_per_language() {
        assert_ne!(summary(Language::Cs), summary(Language::En));
    }

    #[test]
    fn test_service_lists_are_parallel() {
        assert_eq!(
            services(Language::Cs).len(),
            services(Language::En).len()
        );
    }
}
