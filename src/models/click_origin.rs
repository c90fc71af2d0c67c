/// Where a pointer-down landed relative to the app bar's root element.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ClickOrigin {
    /// Target is the root or one of its descendants, open panels included.
    Inside,
    /// Target is elsewhere in the document, or the event had no target.
    Outside,
    /// The root element is not mounted, so containment is unknown.
    Detached,
}

impl ClickOrigin {
    /// Classifies a containment check made against the app bar root.
    ///
    /// `None` means there was no root to check against.
    pub fn from_containment(root_contains_target: Option<bool>) -> Self {
        match root_contains_target {
            Some(true) => Self::Inside,
            Some(false) => Self::Outside,
            None => Self::Detached,
        }
    }
}
