use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Style, Stylize},
    widgets::{
        BarChart, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Table,
    },
};

use showcase_core::{DemoSlot, Section, from_fn, widget};

static VISITS: [(&str, u64); 4] = [("Mon", 4), ("Tue", 7), ("Wed", 5), ("Thu", 9)];

const PEOPLE: [[&str; 3]; 3] = [
    ["Ada", "Engineer", "London"],
    ["Grace", "Admiral", "Arlington"],
    ["Linus", "Maintainer", "Portland"],
];

pub(crate) fn section() -> Section {
    Section::new("Data Display")
        .slot(DemoSlot::labeled(
            "Table",
            widget(4, || {
                Table::new(PEOPLE.map(Row::new), [Constraint::Length(10); 3])
                    .header(Row::new(["Name", "Role", "City"]).style(Style::new().bold()))
                    .column_spacing(2)
            }),
        ))
        .slot(DemoSlot::labeled(
            "BarChart",
            widget(6, || {
                BarChart::default()
                    .data(&VISITS[..])
                    .bar_width(5)
                    .bar_gap(2)
                    .max(10)
            }),
        ))
        .slot(DemoSlot::labeled(
            "ScrollBar",
            from_fn(|ctx| {
                let mut buf = Buffer::empty(Rect::new(0, 0, ctx.width, 1));
                let mut state = ScrollbarState::new(100).position(30);
                StatefulWidget::render(
                    Scrollbar::new(ScrollbarOrientation::HorizontalBottom),
                    buf.area,
                    &mut buf,
                    &mut state,
                );
                Ok(buf)
            }),
        ))
}
