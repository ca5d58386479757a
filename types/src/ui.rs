//! UI state types for the TUI layer.
//!
//! Pure data types with no IO and no ratatui dependency.

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
}

/// Vertical scroll position over content of known height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    offset: u16,
    max: u16,
}

impl ScrollState {
    #[must_use]
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    /// Updates the scroll limit from the content and viewport heights,
    /// clamping the current offset.
    pub fn set_bounds(&mut self, content_height: u16, viewport_height: u16) {
        self.max = content_height.saturating_sub(viewport_height);
        self.offset = self.offset.min(self.max);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.offset = self.offset.saturating_add(rows).min(self.max);
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.offset = self.max;
    }
}
