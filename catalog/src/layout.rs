use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Stylize,
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use showcase_core::{DemoSlot, Section, from_fn, widget};

pub(crate) fn section() -> Section {
    Section::new("Layout")
        .slot(DemoSlot::labeled(
            "Panel",
            widget(4, || {
                Paragraph::new("Panels group related content under a title.")
                    .wrap(Wrap { trim: true })
                    .block(Block::bordered().title("Panel"))
            }),
        ))
        .slot(DemoSlot::labeled(
            "HStack",
            from_fn(|ctx| {
                let mut buf = Buffer::empty(Rect::new(0, 0, ctx.width, 3));
                let [left, middle, right] =
                    Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(buf.area);
                for (area, name) in [(left, "One"), (middle, "Two"), (right, "Three")] {
                    Paragraph::new(name)
                        .alignment(Alignment::Center)
                        .block(Block::bordered())
                        .render(area, &mut buf);
                }
                Ok(buf)
            }),
        ))
        .slot(DemoSlot::labeled(
            "Card",
            widget(5, || {
                Paragraph::new(vec![
                    Line::from("Body text sits between the header and footer."),
                    Line::from(""),
                    Line::from("Updated just now").dim(),
                ])
                .wrap(Wrap { trim: true })
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .title("Card title".bold()),
                )
            }),
        ))
}
