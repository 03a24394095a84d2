/// Languages the site is served in.
///
/// Czech is the default: its pages live at unprefixed paths and every other
/// language claims a single-segment URL prefix equal to its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Cs,
    En,
}

impl Language {
    /// Both languages, default first.
    pub const ALL: [Self; 2] = [Self::Cs, Self::En];

    /// The language served without a URL prefix.
    pub const DEFAULT: Self = Self::Cs;

    /// BCP 47 primary tag, also the URL prefix segment for non-default
    /// languages.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Cs => "cs",
            Self::En => "en",
        }
    }

    /// Open Graph locale identifier.
    #[must_use]
    pub const fn locale(self) -> &'static str {
        match self {
            Self::Cs => "cs_CZ",
            Self::En => "en_US",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.tag() == tag)
    }

    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Cs)
    }

    /// The other language of the pair.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Cs => Self::En,
            Self::En => Self::Cs,
        }
    }
}
