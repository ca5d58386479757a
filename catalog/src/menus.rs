use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Text},
    widgets::{List, ListState, StatefulWidget},
};

use showcase_core::{DemoSlot, Section, from_fn};

const MENU_ITEMS: [&str; 4] = ["Open", "Save", "Export", "Close"];

pub(crate) fn section() -> Section {
    Section::new("Menus")
        .slot(DemoSlot::labeled(
            "DropdownMenu",
            from_fn(|ctx| {
                let list = List::new(MENU_ITEMS)
                    .highlight_symbol("> ")
                    .highlight_style(Style::new().bold());
                let mut state = ListState::default().with_selected(Some(1));
                let mut buf = Buffer::empty(Rect::new(0, 0, ctx.width, MENU_ITEMS.len() as u16));
                StatefulWidget::render(list, buf.area, &mut buf, &mut state);
                Ok(buf)
            }),
        ))
        .slot(DemoSlot::labeled(
            "MenuGroup",
            Text::from(vec![
                Line::from("File".bold()),
                Line::from("  New    Ctrl+N"),
                Line::from("  Open   Ctrl+O"),
                Line::from("Edit".bold()),
                Line::from("  Undo   Ctrl+Z"),
            ]),
        ))
}
