//! Widgets that fail on every render.
//!
//! Each one fails a different way so the frames show how every kind of
//! failure payload is reported.

use std::panic;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Gauge, Paragraph, Widget},
};

use showcase_core::{DemoSlot, RenderFailure, Section, from_fn, render_widget, widget};

use crate::FAULTY_SECTION;

const FIRST_ROW: usize = 0;

/// Rows a half-drawn widget writes before it gives up.
const PARTIAL_ROWS: u16 = 2;

pub(crate) fn section() -> Section {
    Section::new(FAULTY_SECTION)
        .slot(DemoSlot::labeled(
            "PanickingWidget",
            from_fn(|_ctx| panic!("Intentional crash for testing")),
        ))
        .slot(DemoSlot::labeled(
            "ErroringWidget",
            from_fn(|_ctx| Err(RenderFailure::new("data source unavailable"))),
        ))
        .slot(DemoSlot::labeled(
            "OutOfBoundsWidget",
            from_fn(|ctx| {
                let rows: Vec<&str> = Vec::new();
                // Must stay a panicking index; `.get()` would hide the failure.
                Ok(render_widget(rows[FIRST_ROW], ctx.width, 1))
            }),
        ))
        .slot(DemoSlot::labeled(
            "SilentWidget",
            from_fn(|_ctx| panic::panic_any(0xDEAD_u32)),
        ))
        .slot(DemoSlot::labeled(
            "HalfDrawnWidget",
            from_fn(|ctx| {
                let area = Rect::new(0, 0, ctx.width, PARTIAL_ROWS * 2);
                let mut buf = Buffer::empty(area);
                Paragraph::new("this text must never reach the screen\n".repeat(2))
                    .render(Rect { height: PARTIAL_ROWS, ..area }, &mut buf);
                panic!("ran out of room after {PARTIAL_ROWS} rows");
            }),
        ))
        .slot(DemoSlot::labeled(
            "OverfullGauge",
            widget(1, || Gauge::default().ratio(1.5).label("150%")),
        ))
}
