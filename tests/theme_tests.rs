mod common;

#[cfg(test)]
pub mod theme_tests {
    use super::common::*;

    use wakawaka::common::ThemeError;
    use wakawaka::models::AppBarState;
    use wakawaka::services::*;

    #[test]
    fn test_apply_theme_on_mount_is_noop() {
        let root = RecordingRoot::default();

        apply_theme(&root, AppBarState::new().dark_mode()).unwrap();

        assert!(!root.has_class(DARK_CLASS));
        assert_eq!(root.writes.get(), 1);
    }

    #[test]
    fn test_apply_theme_round_trip_success() {
        let root = RecordingRoot::default();
        let mut state = AppBarState::new();

        apply_theme(&root, state.toggle_dark_mode()).unwrap();
        assert!(root.has_class(DARK_CLASS));

        apply_theme(&root, state.toggle_dark_mode()).unwrap();
        assert!(!root.has_class(DARK_CLASS));
    }

    #[test]
    fn test_apply_theme_keeps_other_classes() {
        let root = RecordingRoot::default();
        root.classes.borrow_mut().insert("font-sans".to_string());

        apply_theme(&root, true).unwrap();
        apply_theme(&root, false).unwrap();

        assert!(root.has_class("font-sans"));
    }

    #[test]
    fn test_apply_theme_is_idempotent() {
        let root = RecordingRoot::default();

        apply_theme(&root, true).unwrap();
        apply_theme(&root, true).unwrap();

        assert_eq!(root.classes.borrow().len(), 1);
    }

    #[test]
    fn test_apply_theme_fails_on_missing_root() {
        let result = apply_theme(&MissingRoot, true);

        assert!(matches!(result, Err(ThemeError::MissingRoot)));
    }
}
