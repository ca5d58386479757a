//! TUI rendering for Showcase using ratatui.

mod app;
mod input;
mod page;
mod theme;

pub use app::App;
pub use input::{MAX_EVENTS_PER_FRAME, apply_event, handle_events, handle_key};
pub use page::{blit_window, compose_page, page_height};
pub use theme::{Palette, palette, render_context, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use showcase_core::{Catalog, Markers, buffer_to_string};
use showcase_types::UiOptions;

const KEY_HINTS: [(&str, &str); 4] = [
    ("q", "quit"),
    ("j/k", "scroll"),
    ("g/G", "top/bottom"),
    ("r", "reset failed"),
];

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);

    let [page_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    let page = app.render_page(page_area.width);
    app.set_viewport(page.area.height, page_area.height);
    blit_window(&page, app.scroll().offset(), page_area, frame.buffer_mut());

    draw_status_bar(frame, app, status_area, &palette);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let markers = Markers::for_options(app.ui_options());
    let summary = app.summary();

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(
            format!("{} {}", markers.healthy, summary.healthy),
            Style::default().fg(palette.success),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} {}", markers.failed, summary.failed),
            Style::default().fg(palette.error),
        ),
    ];
    if let Some(message) = app.status_message() {
        spans.push(Span::styled(
            format!("  │ {message}"),
            Style::default().fg(palette.text_secondary),
        ));
    }

    let used: usize = spans.iter().map(|span| span.content.width()).sum();
    let hints = key_hints(palette);
    let hints_width: usize = hints.iter().map(|span| span.content.width()).sum();
    if used + hints_width < usize::from(area.width) {
        let gap = usize::from(area.width) - used - hints_width;
        spans.push(Span::raw(" ".repeat(gap)));
        spans.extend(hints);
    }

    let status = Paragraph::new(Line::from(spans)).style(
        Style::default()
            .bg(palette.bg_dark)
            .fg(palette.text_primary),
    );
    frame.render_widget(status, area);
}

fn key_hints(palette: &Palette) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (key, action) in KEY_HINTS {
        spans.push(Span::styled(key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action} "), styles::key_hint(palette)));
    }
    spans
}

/// Renders `catalog` once, `width` columns wide, as plain text.
pub fn dump_page(catalog: &mut Catalog, options: UiOptions, width: u16) -> String {
    let page = catalog.render(&render_context(width, options));
    buffer_to_string(&compose_page(&page, width, &palette(options)))
}
