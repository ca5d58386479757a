//! Text entry and button-like controls.
//!
//! Nothing here takes input; each control is drawn in a fixed placeholder
//! state.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use showcase_core::{DemoSlot, Section, from_fn, render_widget, widget};

const RADIO_SIZES: [&str; 3] = ["Small", "Medium", "Large"];

fn field(title: &'static str) -> Block<'static> {
    Block::bordered().border_type(BorderType::Plain).title(title)
}

pub(crate) fn section() -> Section {
    Section::new("Basic Input Controls")
        .slot(DemoSlot::labeled(
            "TextInput",
            widget(3, || {
                Paragraph::new(Line::from(vec![
                    Span::styled("Enter text...", Style::new().add_modifier(Modifier::DIM)),
                    Span::raw("_"),
                ]))
                .block(field("Name"))
            }),
        ))
        .slot(DemoSlot::labeled(
            "SearchField",
            widget(3, || {
                Paragraph::new(Line::from(vec![
                    Span::raw("/ "),
                    Span::styled("Search widgets", Style::new().add_modifier(Modifier::DIM)),
                ]))
                .block(field("Search").border_type(BorderType::Rounded))
            }),
        ))
        .slot(DemoSlot::labeled(
            "TextArea",
            widget(5, || {
                Paragraph::new(Text::from(vec![
                    Line::from("Multi-line text goes here."),
                    Line::from("Long lines wrap at the field edge instead of scrolling sideways."),
                ]))
                .wrap(Wrap { trim: true })
                .block(field("Notes"))
            }),
        ))
}

pub(crate) fn buttons() -> Section {
    Section::new("Button Variants")
        .slot(DemoSlot::labeled(
            "ButtonGroup",
            from_fn(|ctx| {
                let labels = ["Primary", "Secondary", "Danger"];
                Ok(render_widget(ButtonRow(&labels), ctx.width, 3))
            }),
        ))
        .slot(DemoSlot::labeled(
            "Toggle",
            Text::from(vec![
                Line::from(vec![" ON ".reversed(), Span::raw(" Notifications")]),
                Line::from(vec![" OFF".dim(), Span::raw(" Dark mode")]),
            ]),
        ))
        .slot(DemoSlot::labeled(
            "CheckboxControl",
            Text::from(vec![
                Line::from("[x] Remember me"),
                Line::from("[ ] Subscribe to updates"),
            ]),
        ))
        .slot(DemoSlot::labeled(
            "RadioControl",
            from_fn(|ctx| {
                let options: Vec<Span> = RADIO_SIZES
                    .iter()
                    .enumerate()
                    .map(|(i, size)| {
                        let mark = if i == 0 { "(*)" } else { "( )" };
                        Span::raw(format!("{mark} {size}  "))
                    })
                    .collect();
                Ok(render_widget(Line::from(options), ctx.width, 1))
            }),
        ))
}

/// Equal-width bordered buttons side by side.
struct ButtonRow<'a>(&'a [&'a str]);

impl Widget for ButtonRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let count = u32::try_from(self.0.len()).unwrap_or(u32::MAX);
        let cells = Layout::horizontal(self.0.iter().map(|_| Constraint::Ratio(1, count)))
            .spacing(1)
            .split(area);
        for (label, cell) in self.0.iter().zip(cells.iter()) {
            Paragraph::new(*label)
                .alignment(Alignment::Center)
                .block(Block::bordered().border_type(BorderType::Rounded))
                .render(*cell, buf);
        }
    }
}
