use lucien_routes::{Language, Section};

/// SEO copy for one route: document title and meta description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeoEntry {
    pub title: &'static str,
    pub description: &'static str,
}

/// Copy table lookup.
///
/// Exhaustive over both enumerations; adding a section or language without
/// copy is a compile error rather than a runtime fallback.
#[must_use]
pub const fn entry(section: Section, language: Language) -> SeoEntry {
    match (language, section) {
        (Language::En, Section::Core) => SeoEntry {
            title: "Adam Karl Lucien | System Architect & AI Engineer",
            description: "System Architect, AI Engineer, and strategic systems auditor. Explore Lucien OS v2.0, a dual-mode digital twin with projects, mission, and operations.",
        },
        (Language::En, Section::Modules) => SeoEntry {
            title: "Projects & Modules | Adam Karl Lucien",
            description: "Projects and systems: NOXIS, ARCHΞON, Lucien Control, industrial operations, and robotics protocols.",
        },
        (Language::En, Section::Capabilities) => SeoEntry {
            title: "Capabilities | Adam Karl Lucien",
            description: "Capability matrix across AI, OSINT fusion, systems architecture, logistics optimization, automation, and industrial engineering.",
        },
        (Language::En, Section::Archive) => SeoEntry {
            title: "Archive Timeline | Adam Karl Lucien",
            description: "Career timeline and mission log across AI systems, logistics, and industrial operations.",
        },
        (Language::En, Section::Diagnostics) => SeoEntry {
            title: "Diagnostics | Adam Karl Lucien",
            description: "Cognitive diagnostics, system profile, and analytical telemetry for the Lucien OS persona.",
        },
        (Language::En, Section::Resonance) => SeoEntry {
            title: "Resonance | Adam Karl Lucien",
            description: "Interests and resonance: systems dynamics, inner practices, philosophy, and curated media.",
        },
        (Language::En, Section::Signal) => SeoEntry {
            title: "Signal / Contact | Adam Karl Lucien",
            description: "Contact and secure signal channel to initiate collaboration or a systems audit.",
        },
        (Language::Cs, Section::Core) => SeoEntry {
            title: "Adam Karl Lucien | Systémový architekt & AI inženýr",
            description: "Systémový architekt, AI inženýr a auditor strategických systémů. Lucien OS v2.0 jako digitální profil s projekty, misí a operacemi.",
        },
        (Language::Cs, Section::Modules) => SeoEntry {
            title: "Projekty a moduly | Adam Karl Lucien",
            description: "Projekty a systémy: NOXIS, ARCHΞON, Lucien Control, průmyslové operace a robotika.",
        },
        (Language::Cs, Section::Capabilities) => SeoEntry {
            title: "Schopnosti | Adam Karl Lucien",
            description: "Matice schopností napříč AI, OSINT fúzí, architekturou systémů, logistikou, automatizací a průmyslovým inženýrstvím.",
        },
        (Language::Cs, Section::Archive) => SeoEntry {
            title: "Archiv a časová osa | Adam Karl Lucien",
            description: "Kariérní časová osa a log misí napříč AI, logistikou a průmyslovými operacemi.",
        },
        (Language::Cs, Section::Diagnostics) => SeoEntry {
            title: "Diagnostika | Adam Karl Lucien",
            description: "Diagnostika kognitivního profilu, systémová telemetrie a analytické charakteristiky.",
        },
        (Language::Cs, Section::Resonance) => SeoEntry {
            title: "Rezonance | Adam Karl Lucien",
            description: "Rezonance a zájmy: systémová dynamika, vnitřní disciplíny, filozofie a kurátorské odkazy.",
        },
        (Language::Cs, Section::Signal) => SeoEntry {
            title: "Signál / Kontakt | Adam Karl Lucien",
            description: "Kontakt a šifrovaný signální kanál pro spolupráci nebo audit systému.",
        },
    }
}
