use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line, Text},
    widgets::{Gauge, LineGauge, Paragraph, Sparkline, Wrap},
};

use showcase_core::{DemoSlot, Section, widget};

const THROUGHPUT: [u64; 24] = [
    2, 3, 5, 4, 6, 8, 7, 9, 12, 10, 8, 6, 7, 9, 11, 14, 13, 10, 8, 9, 6, 4, 3, 2,
];

pub(crate) fn section() -> Section {
    Section::new("Feedback")
        .slot(DemoSlot::labeled(
            "Gauge",
            widget(1, || {
                Gauge::default()
                    .ratio(0.42)
                    .label("42%")
                    .gauge_style(Style::new().fg(Color::Green))
            }),
        ))
        .slot(DemoSlot::labeled(
            "LineGauge",
            widget(1, || {
                LineGauge::default()
                    .ratio(0.7)
                    .label("Upload")
                    .filled_style(Style::new().fg(Color::Cyan))
            }),
        ))
        .slot(DemoSlot::labeled(
            "Sparkline",
            widget(3, || Sparkline::default().data(&THROUGHPUT).max(14)),
        ))
        .slot(DemoSlot::labeled(
            "Notice",
            widget(2, || {
                Paragraph::new(Text::from(vec![
                    Line::from("Heads up".bold()),
                    Line::from("Settings are saved when you leave this page."),
                ]))
                .wrap(Wrap { trim: true })
            }),
        ))
        .slot(DemoSlot::labeled("Spinner", "|/-\\ Loading..."))
}
