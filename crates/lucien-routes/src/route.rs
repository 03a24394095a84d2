use crate::{Language, Section};

/// A visitor location: one [`Section`] in one [`Language`].
///
/// The single source of truth for "where the visitor is". At runtime exactly
/// one of these is owned by the router; at build time the generator iterates
/// [`Route::all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
    pub section: Section,
    pub language: Language,
}

impl Route {
    #[must_use]
    pub const fn new(section: Section, language: Language) -> Self {
        Self { section, language }
    }

    /// Canonical URL path for this route.
    ///
    /// Non-default languages get their tag as the first segment; non-root
    /// sections append their segment. Every non-root path carries a trailing
    /// slash; the default-language root collapses to `/`.
    #[must_use]
    pub fn path(self) -> String {
        let mut path = String::from("/");
        if !self.language.is_default() {
            path.push_str(self.language.tag());
            path.push('/');
        }
        let segment = self.section.segment();
        if !segment.is_empty() {
            path.push_str(segment);
            path.push('/');
        }
        path
    }

    /// Decode a request path into a route.
    ///
    /// Total by design: leading/trailing/repeated slashes are ignored, an
    /// unknown first segment falls back to the default language, an unknown
    /// section segment falls back to the landing section, and anything past
    /// the section segment is dropped. Malformed input degrades instead of
    /// failing.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let mut segment = segments.next();

        let mut language = Language::DEFAULT;
        if let Some(first) = segment
            && let Some(tagged) = Language::from_tag(first)
            && !tagged.is_default()
        {
            language = tagged;
            segment = segments.next();
        }

        let section = segment
            .and_then(Section::from_segment)
            .unwrap_or(Section::Core);
        Self { section, language }
    }

    /// Every route the site serves: the full section x language cross
    /// product, default language first, sections in navigation order.
    pub fn all() -> impl Iterator<Item = Self> {
        Language::ALL.into_iter().flat_map(|language| {
            Section::ALL
                .into_iter()
                .map(move |section| Self::new(section, language))
        })
    }
}

impl Default for Route {
    /// The default-language landing route, also the decode fallback.
    fn default() -> Self {
        Self::new(Section::Core, Language::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Language, Route, Section};

    // ==== encoding ====

    #[test]
    fn test_path_root_collapses_to_slash() {
        assert_eq!(Route::new(Section::Core, Language::Cs).path(), "/");
    }

    #[test]
    fn test_path_language_root() {
        assert_eq!(Route::new(Section::Core, Language::En).path(), "/en/");
    }

    #[test]
    fn test_path_default_language_section() {
        assert_eq!(Route::new(Section::Signal, Language::Cs).path(), "/signal/");
    }

    #[test]
    fn test_path_prefixed_section() {
        assert_eq!(
            Route::new(Section::Signal, Language::En).path(),
            "/en/signal/"
        );
    }

    // ==== decoding ====

    #[test]
    fn test_from_path_root() {
        assert_eq!(Route::from_path("/"), Route::default());
        assert_eq!(Route::from_path(""), Route::default());
    }

    #[test]
    fn test_from_path_without_trailing_slash() {
        assert_eq!(
            Route::from_path("/en/signal"),
            Route::new(Section::Signal, Language::En)
        );
    }

    #[test]
    fn test_from_path_tolerates_slash_noise() {
        let route = Route::new(Section::Modules, Language::En);
        assert_eq!(Route::from_path("/en/modules///"), route);
        assert_eq!(Route::from_path("en/modules/"), route);
        assert_eq!(Route::from_path("//en//modules"), route);
    }

    #[test]
    fn test_from_path_unknown_segment_falls_back_to_landing() {
        assert_eq!(Route::from_path("/unknown"), Route::default());
        assert_eq!(
            Route::from_path("/en/unknown/"),
            Route::new(Section::Core, Language::En)
        );
    }

    #[test]
    fn test_from_path_default_language_tag_is_not_a_prefix() {
        // Only non-default languages own a URL prefix, so "cs" is read as a
        // (then unknown) section segment.
        assert_eq!(Route::from_path("/cs/signal/"), Route::default());
    }

    #[test]
    fn test_from_path_ignores_extra_segments() {
        assert_eq!(
            Route::from_path("/signal/extra/deep"),
            Route::new(Section::Signal, Language::Cs)
        );
    }

    #[test]
    fn test_from_path_language_prefix_only() {
        assert_eq!(
            Route::from_path("/en"),
            Route::new(Section::Core, Language::En)
        );
    }

    // ==== enumeration and round trip ====

    #[test]
    fn test_all_covers_the_cross_product() {
        let routes: Vec<Route> = Route::all().collect();
        assert_eq!(routes.len(), Section::ALL.len() * Language::ALL.len());
        assert_eq!(routes[0], Route::default());
    }

    #[test]
    fn test_round_trip_every_route() {
        for route in Route::all() {
            assert_eq!(Route::from_path(&route.path()), route, "{}", route.path());
        }
    }
}
