use crate::common::ThemeError;

/// Class that switches the whole document to dark styling.
pub const DARK_CLASS: &str = "dark";

/// The document-wide node whose classes drive light/dark styling.
pub trait PresentationRoot {
    fn set_class(&self, class: &str, enabled: bool) -> Result<(), ThemeError>;
}

/// The `<html>` element of the current browser document.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentRoot;

impl PresentationRoot for DocumentRoot {
    fn set_class(&self, class: &str, enabled: bool) -> Result<(), ThemeError> {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            .ok_or(ThemeError::MissingRoot)?;

        root.class_list()
            .toggle_with_force(class, enabled)
            .map(|_| ())
            .map_err(|e| ThemeError::ClassList(format!("{:?}", e)))
    }
}

/// Mirrors the dark-mode flag onto the presentation root.
///
/// This is the only place that writes the dark marker.
pub fn apply_theme<R: PresentationRoot + ?Sized>(
    root: &R,
    dark: bool,
) -> Result<(), ThemeError> {
    root.set_class(DARK_CLASS, dark)
}
