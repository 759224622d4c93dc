#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI chrome state independent of dashboard data.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    /// Whether the dark theme is active. Initialized from the stored
    /// preference on hydration (`util::dark_mode`).
    pub dark_mode: bool,
}
