//! Lays a rendered catalog out as one tall buffer.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::Line,
    widgets::Widget,
};

use showcase_core::{BoundaryView, PageView};

use crate::theme::{Palette, styles};

enum Row<'a> {
    Title(&'a str),
    Subtitle(&'a str),
    Heading(&'a str),
    Frame(&'a BoundaryView),
    Blank,
}

impl Row<'_> {
    fn height(&self) -> u16 {
        match self {
            Row::Frame(view) => view.height(),
            Row::Title(_) | Row::Subtitle(_) | Row::Heading(_) | Row::Blank => 1,
        }
    }
}

fn rows(page: &PageView) -> Vec<Row<'_>> {
    let mut rows = vec![
        Row::Title(&page.title),
        Row::Subtitle(&page.subtitle),
        Row::Blank,
    ];
    for section in &page.sections {
        rows.push(Row::Heading(&section.heading));
        rows.extend(section.views.iter().map(Row::Frame));
        rows.push(Row::Blank);
    }
    rows
}

/// Total rows [`compose_page`] produces for `page`.
#[must_use]
pub fn page_height(page: &PageView) -> u16 {
    rows(page)
        .iter()
        .fold(0_u16, |total, row| total.saturating_add(row.height()))
}

/// Draws the whole page `width` columns wide, frames stacked in page order.
#[must_use]
pub fn compose_page(page: &PageView, width: u16, palette: &Palette) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, page_height(page)));
    let mut y = 0_u16;
    for row in rows(page) {
        let height = row.height();
        let area = Rect::new(0, y, width, height).intersection(buf.area);
        match row {
            Row::Title(text) => {
                Line::styled(text, styles::page_title(palette)).render(area, &mut buf);
            }
            Row::Subtitle(text) => {
                Line::styled(text, styles::subtitle(palette)).render(area, &mut buf);
            }
            Row::Heading(text) => {
                Line::styled(text, styles::section_heading(palette)).render(area, &mut buf);
            }
            Row::Frame(view) => view.render(area, &mut buf),
            Row::Blank => {}
        }
        y = y.saturating_add(height);
    }
    buf
}

/// Copies the rows `offset..offset + area.height` of `page` into `area`.
pub fn blit_window(page: &Buffer, offset: u16, area: Rect, dest: &mut Buffer) {
    let width = page.area.width.min(area.width);
    for dy in 0..area.height {
        let Some(src_y) = offset.checked_add(dy).filter(|y| *y < page.area.height) else {
            break;
        };
        for dx in 0..width {
            if let Some(cell) = page.cell(Position::new(dx, src_y))
                && let Some(target) = dest.cell_mut(Position::new(area.x + dx, area.y + dy))
            {
                *target = cell.clone();
            }
        }
    }
}
