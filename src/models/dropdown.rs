/// The dropdown panels hosted by the app bar.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Dropdown {
    Features,
    Support,
    Language,
}

impl Dropdown {
    pub const ALL: [Dropdown; 3] = [Self::Features, Self::Support, Self::Language];

    /// Stable key, rendered as the panel's `data-dropdown` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Features => "features",
            Self::Support => "support",
            Self::Language => "language",
        }
    }

    /// Text shown on the trigger that opens this dropdown.
    pub fn trigger_label(&self) -> &'static str {
        match self {
            Self::Features => "주요 기능",
            Self::Support => "고객센터",
            Self::Language => "한국어",
        }
    }
}

impl std::fmt::Display for Dropdown {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
