use crate::models::{ClickOrigin, Dropdown};

/// In-memory interaction state of one mounted app bar.
///
/// Every mutation is a total transition; the component stores the value in a
/// signal and re-renders whenever a transition changes it.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct AppBarState {
    open_dropdown: Option<Dropdown>,
    mobile_menu_open: bool,
    dark_mode: bool,
}

impl AppBarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_dropdown(&self) -> Option<Dropdown> {
        self.open_dropdown
    }

    pub fn is_open(&self, dropdown: Dropdown) -> bool {
        self.open_dropdown == Some(dropdown)
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Opens `dropdown`, or closes it when it is already the open one.
    ///
    /// There is a single slot, so opening one dropdown closes any other.
    pub fn toggle_dropdown(&mut self, dropdown: Dropdown) {
        self.open_dropdown = if self.is_open(dropdown) {
            None
        } else {
            Some(dropdown)
        };
        log::debug!("dropdown {} toggled, open: {}", dropdown, self.is_open(dropdown));
    }

    pub fn close_dropdown(&mut self) {
        self.open_dropdown = None;
    }

    /// Reacts to a document-wide pointer-down.
    ///
    /// Only presses outside the app bar close the open dropdown, so a press on
    /// a trigger or inside a panel never closes it before its click lands.
    pub fn handle_pointer_down(&mut self, origin: ClickOrigin) {
        if origin == ClickOrigin::Outside && self.open_dropdown.is_some() {
            log::debug!("outside click closed {:?}", self.open_dropdown);
            self.close_dropdown();
        }
    }

    pub fn route_changed(&mut self, path: &str) {
        log::debug!("route changed to {}", path);
        self.close_dropdown();
    }

    /// Flips dark mode and returns the new value.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    /// Flips the mobile menu flag and returns the new value.
    ///
    /// The mobile panel is not implemented; only the flag is tracked.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    /// Position class for the knob of the dark-mode switch.
    pub fn theme_knob_class(&self) -> &'static str {
        if self.dark_mode {
            "translate-x-4"
        } else {
            "translate-x-0"
        }
    }
}
