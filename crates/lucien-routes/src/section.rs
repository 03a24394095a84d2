/// Content sections of the site, in navigation order.
///
/// The set is closed: adding a section means adding a variant here, a path
/// segment below, and a content entry in `lucien-content`. Everything else
/// (enumeration, sitemap, static pages) follows from [`Section::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Core,
    Modules,
    Capabilities,
    Archive,
    Diagnostics,
    Resonance,
    Signal,
}

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Self; 7] = [
        Self::Core,
        Self::Modules,
        Self::Capabilities,
        Self::Archive,
        Self::Diagnostics,
        Self::Resonance,
        Self::Signal,
    ];

    /// URL path segment for this section.
    ///
    /// Exactly one section (the landing section) owns the empty segment and
    /// thereby the site root.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Core => "",
            Self::Modules => "modules",
            Self::Capabilities => "capabilities",
            Self::Archive => "archive",
            Self::Diagnostics => "diagnostics",
            Self::Resonance => "resonance",
            Self::Signal => "signal",
        }
    }

    /// Reverse lookup from a path segment.
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.segment() == segment)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use super::Section;

    #[test]
    fn test_segments_are_pairwise_distinct() {
        let segments: HashSet<&str> = Section::ALL.iter().map(|s| s.segment()).collect();
        assert_eq!(segments.len(), Section::ALL.len());
    }

    #[test]
    fn test_exactly_one_root_segment() {
        let roots = Section::ALL
            .iter()
            .filter(|s| s.segment().is_empty())
            .count();
        assert_eq!(roots, 1);
    }

    #[test]
    fn test_from_segment_inverts_segment() {
        for section in Section::ALL {
            assert_eq!(Section::from_segment(section.segment()), Some(section));
        }
    }

    #[test]
    fn test_from_segment_rejects_unknown() {
        assert_eq!(Section::from_segment("unknown"), None);
        assert_eq!(Section::from_segment("Modules"), None);
    }
}
