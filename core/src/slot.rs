//! Labeled demonstration slots.

use std::fmt;

use ratatui::buffer::Buffer;
use tracing::debug;

use showcase_types::{BoundaryState, RenderFailure};

use crate::boundary::{IsolationBoundary, Reporter};
use crate::content::{Content, render_widget};
use crate::view::{BoundaryView, RenderContext};

/// A label paired with the content shown under it.
pub struct DemonstrationEntry {
    label: String,
    content: Box<dyn Content>,
}

impl DemonstrationEntry {
    pub fn new(label: impl Into<String>, content: impl Content + 'static) -> Self {
        Self {
            label: label.into(),
            content: Box::new(content),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for DemonstrationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemonstrationEntry")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Presents one entry through exactly one [`IsolationBoundary`].
///
/// The slot has no error handling of its own.
#[derive(Debug)]
pub struct DemoSlot {
    entry: DemonstrationEntry,
    boundary: IsolationBoundary,
}

impl DemoSlot {
    #[must_use]
    pub fn new(entry: DemonstrationEntry) -> Self {
        let boundary = IsolationBoundary::new(entry.label.clone());
        Self { entry, boundary }
    }

    pub fn labeled(label: impl Into<String>, content: impl Content + 'static) -> Self {
        Self::new(DemonstrationEntry::new(label, content))
    }

    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.boundary.set_reporter(reporter);
        self
    }

    pub fn set_reporter(&mut self, reporter: Reporter) {
        self.boundary.set_reporter(reporter);
    }

    #[must_use]
    pub fn label(&self) -> &str {
        self.entry.label()
    }

    #[must_use]
    pub const fn state(&self) -> &BoundaryState {
        self.boundary.state()
    }

    #[must_use]
    pub const fn boundary(&self) -> &IsolationBoundary {
        &self.boundary
    }

    pub fn render(&mut self, ctx: &RenderContext) -> BoundaryView {
        self.boundary.render(self.entry.content.as_mut(), ctx)
    }

    /// Replaces the boundary with a freshly constructed, healthy one.
    ///
    /// The reporter carries over; the failure state does not.
    pub fn reset(&mut self) {
        debug!(label = %self.entry.label, "Re-instantiating boundary");
        let reporter = self.boundary.reporter().clone();
        self.boundary = IsolationBoundary::new(self.entry.label.clone()).with_reporter(reporter);
    }

    /// Visits this slot and the slots nested in its content that are drawn.
    ///
    /// A failed slot shows its failure instead of its content, so its nested
    /// slots are skipped.
    pub fn visit(&self, visit: &mut dyn FnMut(&DemoSlot)) {
        visit(self);
        if !self.state().has_failed() {
            self.entry.content.visit_slots(visit);
        }
    }

    /// Visits this slot and every slot nested in its content, drawn or not.
    pub fn visit_mut(&mut self, visit: &mut dyn FnMut(&mut DemoSlot)) {
        visit(self);
        self.entry.content.visit_slots_mut(visit);
    }
}

/// Slots render as content too, so they nest inside other content.
impl Content for DemoSlot {
    fn render(&mut self, ctx: &RenderContext) -> Result<Buffer, RenderFailure> {
        let view = DemoSlot::render(self, ctx);
        Ok(render_widget(&view, view.width(), view.height()))
    }

    fn visit_slots(&self, visit: &mut dyn FnMut(&DemoSlot)) {
        self.visit(visit);
    }

    fn visit_slots_mut(&mut self, visit: &mut dyn FnMut(&mut DemoSlot)) {
        self.visit_mut(visit);
    }
}
