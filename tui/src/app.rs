use ratatui::buffer::Buffer;
use tracing::info;

use showcase_core::{Catalog, Summary};
use showcase_types::{ScrollState, UiOptions};

use crate::page::compose_page;
use crate::theme::{palette, render_context};

/// View state for the catalog screen.
#[derive(Debug)]
pub struct App {
    catalog: Catalog,
    options: UiOptions,
    scroll: ScrollState,
    viewport_height: u16,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(catalog: Catalog, options: UiOptions) -> Self {
        Self {
            catalog,
            options,
            scroll: ScrollState::default(),
            viewport_height: 0,
            status: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn ui_options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        self.catalog.summary()
    }

    #[must_use]
    pub const fn scroll(&self) -> ScrollState {
        self.scroll
    }

    #[must_use]
    pub fn status_message(&self) -> Option<&str> {
        self.status.as_deref()
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.scroll.scroll_down(rows);
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll.scroll_up(rows);
    }

    pub fn page_down(&mut self) {
        self.scroll.scroll_down(self.page_rows());
    }

    pub fn page_up(&mut self) {
        self.scroll.scroll_up(self.page_rows());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll.to_top();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll.to_bottom();
    }

    /// Gives every failed widget a fresh boundary; they render again next frame.
    pub fn reset_failed(&mut self) {
        let reset = self.catalog.reset_failed();
        info!(reset, "Reset failed widgets");
        self.status = Some(match reset {
            0 => "No failed widgets to reset".to_string(),
            1 => "Reset 1 widget".to_string(),
            n => format!("Reset {n} widgets"),
        });
    }

    /// Renders the catalog and lays it out `width` columns wide.
    pub fn render_page(&mut self, width: u16) -> Buffer {
        let ctx = render_context(width, self.options);
        let page = self.catalog.render(&ctx);
        compose_page(&page, width, &palette(self.options))
    }

    /// Records the page and viewport heights of the last frame.
    pub fn set_viewport(&mut self, content_height: u16, viewport_height: u16) {
        self.viewport_height = viewport_height;
        self.scroll.set_bounds(content_height, viewport_height);
    }

    fn page_rows(&self) -> u16 {
        self.viewport_height.saturating_sub(1).max(1)
    }
}
