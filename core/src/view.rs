//! Render context and the frames a boundary produces.

use ratatui::{
    buffer::{Buffer, Cell},
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Widget},
};

use showcase_types::BoundaryPhase;

use crate::marker::Markers;

/// Columns (and rows) taken by a frame's border around the body.
pub const FRAME_BORDER: u16 = 2;

/// Border and title styling for one frame state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStyle {
    pub border: Style,
    pub title: Style,
}

/// Everything content needs to know to render itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Columns available to the content.
    pub width: u16,
    pub markers: Markers,
    pub healthy: FrameStyle,
    pub failed: FrameStyle,
    /// Style of the failure message inside a failed frame.
    pub message: Style,
}

impl RenderContext {
    #[must_use]
    pub fn new(width: u16) -> Self {
        Self {
            width,
            markers: Markers::default(),
            healthy: FrameStyle::default(),
            failed: FrameStyle::default(),
            message: Style::default(),
        }
    }

    #[must_use]
    pub fn markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    #[must_use]
    pub fn frame_styles(mut self, healthy: FrameStyle, failed: FrameStyle) -> Self {
        self.healthy = healthy;
        self.failed = failed;
        self
    }

    #[must_use]
    pub fn message_style(mut self, style: Style) -> Self {
        self.message = style;
        self
    }

    /// The same context narrowed to `width` columns.
    #[must_use]
    pub fn with_width(&self, width: u16) -> Self {
        Self { width, ..*self }
    }

    #[must_use]
    pub const fn frame_style(&self, phase: BoundaryPhase) -> FrameStyle {
        match phase {
            BoundaryPhase::Healthy => self.healthy,
            BoundaryPhase::Failed => self.failed,
        }
    }
}

/// Output of one boundary render: a titled frame around a body buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryView {
    phase: BoundaryPhase,
    label: String,
    title: String,
    body: Buffer,
    style: FrameStyle,
}

impl BoundaryView {
    pub(crate) fn new(
        phase: BoundaryPhase,
        label: String,
        title: String,
        body: Buffer,
        style: FrameStyle,
    ) -> Self {
        Self {
            phase,
            label,
            title,
            body,
            style,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> BoundaryPhase {
        self.phase
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Marker and label, as shown in the frame's top border.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub const fn body(&self) -> &Buffer {
        &self.body
    }

    #[must_use]
    pub const fn width(&self) -> u16 {
        self.body.area.width.saturating_add(FRAME_BORDER)
    }

    #[must_use]
    pub const fn height(&self) -> u16 {
        self.body.area.height.saturating_add(FRAME_BORDER)
    }

    /// The frame drawn into its own buffer, as trimmed text rows.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let area = Rect::new(0, 0, self.width(), self.height());
        let mut buf = Buffer::empty(area);
        self.render(area, &mut buf);
        buffer_to_string(&buf)
    }
}

impl Widget for &BoundaryView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(Span::styled(format!(" {} ", self.title), self.style.title));
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.style.border)
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);
        copy_cells(&self.body, inner, buf);
    }
}

/// Copies `src` into `dest` at `area`, clipped to both.
pub(crate) fn copy_cells(src: &Buffer, area: Rect, dest: &mut Buffer) {
    let width = src.area.width.min(area.width);
    let height = src.area.height.min(area.height);
    for dy in 0..height {
        for dx in 0..width {
            let from = Position::new(src.area.x + dx, src.area.y + dy);
            let to = Position::new(area.x + dx, area.y + dy);
            if let Some(cell) = src.cell(from)
                && let Some(target) = dest.cell_mut(to)
            {
                *target = cell.clone();
            }
        }
    }
}

/// Re-homes `body` at the origin with exactly `width` columns.
///
/// Content is free to return a buffer of any shape; the frame only ever
/// shows the part that fits.
pub(crate) fn fit_width(body: Buffer, width: u16) -> Buffer {
    if body.area.x == 0 && body.area.y == 0 && body.area.width == width {
        return body;
    }
    let area = Rect::new(0, 0, width, body.area.height);
    let mut fitted = Buffer::empty(area);
    copy_cells(&body, area, &mut fitted);
    fitted
}

/// Flattens a buffer to text, one line per row with trailing blanks trimmed.
#[must_use]
pub fn buffer_to_string(buf: &Buffer) -> String {
    let width = usize::from(buf.area.width);
    if width == 0 {
        return String::new();
    }
    buf.content
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(Cell::symbol).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
