use super::*;

#[test]
fn ui_state_defaults_to_light_mode() {
    let s = UiState::default();
    assert!(!s.dark_mode);
}
