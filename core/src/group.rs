use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use showcase_types::RenderFailure;

use crate::content::Content;
use crate::slot::DemoSlot;
use crate::view::RenderContext;

/// Slots stacked vertically inside another slot's content.
///
/// Every nested slot keeps its own boundary, so a failing child degrades
/// only its own frame and the enclosing slot stays healthy.
#[derive(Debug, Default)]
pub struct Group {
    slots: Vec<DemoSlot>,
}

impl Group {
    #[must_use]
    pub fn new(slots: Vec<DemoSlot>) -> Self {
        Self { slots }
    }

    #[must_use]
    pub fn slot(mut self, slot: DemoSlot) -> Self {
        self.slots.push(slot);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Content for Group {
    fn render(&mut self, ctx: &RenderContext) -> Result<Buffer, RenderFailure> {
        let views: Vec<_> = self.slots.iter_mut().map(|slot| slot.render(ctx)).collect();
        let height = views
            .iter()
            .fold(0_u16, |total, view| total.saturating_add(view.height()));

        let mut buf = Buffer::empty(Rect::new(0, 0, ctx.width, height));
        let mut y = 0_u16;
        for view in &views {
            let area = Rect::new(0, y, ctx.width, view.height()).intersection(buf.area);
            view.render(area, &mut buf);
            y = y.saturating_add(view.height());
        }
        Ok(buf)
    }

    fn visit_slots(&self, visit: &mut dyn FnMut(&DemoSlot)) {
        for slot in &self.slots {
            slot.visit(visit);
        }
    }

    fn visit_slots_mut(&mut self, visit: &mut dyn FnMut(&mut DemoSlot)) {
        for slot in &mut self.slots {
            slot.visit_mut(visit);
        }
    }
}
