//! Things a boundary can render.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Text,
    widgets::{Paragraph, Widget, Wrap},
};

use showcase_types::RenderFailure;

use crate::slot::DemoSlot;
use crate::view::RenderContext;

/// Renderable child content.
///
/// Content draws itself into a fresh buffer `ctx.width` columns wide and
/// picks its own height. Failing is done either by returning `Err` or by
/// panicking; the enclosing boundary treats both the same way.
pub trait Content {
    fn render(&mut self, ctx: &RenderContext) -> Result<Buffer, RenderFailure>;

    /// Visits demonstration slots nested inside this content.
    fn visit_slots(&self, _visit: &mut dyn FnMut(&DemoSlot)) {}

    fn visit_slots_mut(&mut self, _visit: &mut dyn FnMut(&mut DemoSlot)) {}
}

/// Renders `widget` into a new `width` x `height` buffer at the origin.
pub fn render_widget<W: Widget>(widget: W, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    buf
}

/// Wrapped text, as tall as it needs to be.
fn render_text(text: Text<'static>, width: u16) -> Buffer {
    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
    let height = u16::try_from(paragraph.line_count(width)).unwrap_or(u16::MAX);
    render_widget(paragraph, width, height)
}

/// No children: renders nothing, zero rows tall.
impl Content for () {
    fn render(&mut self, ctx: &RenderContext) -> Result<Buffer, RenderFailure> {
        Ok(Buffer::empty(Rect::new(0, 0, ctx.width, 0)))
    }
}

impl Content for &'static str {
    fn render(&mut self, ctx: &RenderContext) -> Result<Buffer, RenderFailure> {
        Ok(render_text(Text::from(*self), ctx.width))
    }
}

impl Content for String {
    fn render(&mut self, ctx: &RenderContext) -> Result<Buffer, RenderFailure> {
        Ok(render_text(Text::from(self.clone()), ctx.width))
    }
}

impl Content for Text<'static> {
    fn render(&mut self, ctx: &RenderContext) -> Result<Buffer, RenderFailure> {
        Ok(render_text(self.clone(), ctx.width))
    }
}

/// Content backed by a closure.
pub struct FnContent<F>(F);

/// Wraps a render closure as [`Content`].
pub fn from_fn<F>(render: F) -> FnContent<F>
where
    F: FnMut(&RenderContext) -> Result<Buffer, RenderFailure>,
{
    FnContent(render)
}

impl<F> Content for FnContent<F>
where
    F: FnMut(&RenderContext) -> Result<Buffer, RenderFailure>,
{
    fn render(&mut self, ctx: &RenderContext) -> Result<Buffer, RenderFailure> {
        (self.0)(ctx)
    }
}

/// A ratatui widget rebuilt on every render at a fixed height.
pub struct WidgetContent<F> {
    height: u16,
    build: F,
}

/// Content that builds a widget with `build` and draws it `height` rows tall.
pub fn widget<F, W>(height: u16, build: F) -> WidgetContent<F>
where
    F: FnMut() -> W,
    W: Widget,
{
    WidgetContent { height, build }
}

impl<F, W> Content for WidgetContent<F>
where
    F: FnMut() -> W,
    W: Widget,
{
    fn render(&mut self, ctx: &RenderContext) -> Result<Buffer, RenderFailure> {
        Ok(render_widget((self.build)(), ctx.width, self.height))
    }
}
