//! The demonstration page: titled sections of labeled slots.

use tracing::debug;

use showcase_types::BoundaryPhase;

use crate::boundary::Reporter;
use crate::slot::DemoSlot;
use crate::view::{BoundaryView, RenderContext};

#[derive(Debug)]
pub struct Section {
    heading: String,
    slots: Vec<DemoSlot>,
}

impl Section {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            slots: Vec::new(),
        }
    }

    #[must_use]
    pub fn slot(mut self, slot: DemoSlot) -> Self {
        self.slots.push(slot);
        self
    }

    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    #[must_use]
    pub fn slots(&self) -> &[DemoSlot] {
        &self.slots
    }
}

/// Slot counts across a page. Nested slots count while they are drawn, so
/// the slots inside a failed slot are left out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub healthy: usize,
    pub failed: usize,
}

#[derive(Debug)]
pub struct Catalog {
    title: String,
    subtitle: String,
    sections: Vec<Section>,
}

impl Catalog {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            sections: Vec::new(),
        }
    }

    #[must_use]
    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Keeps only sections whose heading satisfies `keep`.
    pub fn retain_sections(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.sections.retain(|section| keep(&section.heading));
    }

    /// Installs `reporter` on every slot, nested ones included.
    pub fn set_reporter(&mut self, reporter: &Reporter) {
        self.visit_mut(&mut |slot| slot.set_reporter(reporter.clone()));
    }

    /// Renders every slot. Slots render in page order; none of them can stop
    /// the others from rendering.
    pub fn render(&mut self, ctx: &RenderContext) -> PageView {
        let sections = self
            .sections
            .iter_mut()
            .map(|section| SectionView {
                heading: section.heading.clone(),
                views: section.slots.iter_mut().map(|slot| slot.render(ctx)).collect(),
            })
            .collect();
        PageView {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            sections,
        }
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        self.visit(&mut |slot| {
            summary.total += 1;
            match slot.state().phase() {
                BoundaryPhase::Healthy => summary.healthy += 1,
                BoundaryPhase::Failed => summary.failed += 1,
            }
        });
        summary
    }

    /// Re-instantiates the boundary of every failed slot. Returns how many
    /// were reset.
    pub fn reset_failed(&mut self) -> usize {
        let mut reset = 0;
        self.visit_mut(&mut |slot| {
            if slot.state().has_failed() {
                slot.reset();
                reset += 1;
            }
        });
        debug!(reset, "Reset failed boundaries");
        reset
    }

    pub fn visit(&self, visit: &mut dyn FnMut(&DemoSlot)) {
        for slot in self.sections.iter().flat_map(|s| &s.slots) {
            slot.visit(visit);
        }
    }

    pub fn visit_mut(&mut self, visit: &mut dyn FnMut(&mut DemoSlot)) {
        for slot in self.sections.iter_mut().flat_map(|s| &mut s.slots) {
            slot.visit_mut(visit);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub heading: String,
    pub views: Vec<BoundaryView>,
}

/// One render pass over a [`Catalog`].
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<SectionView>,
}

impl PageView {
    pub fn views(&self) -> impl Iterator<Item = &BoundaryView> {
        self.sections.iter().flat_map(|section| &section.views)
    }

    /// The first top-level view labeled `label`.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&BoundaryView> {
        self.views().find(|view| view.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use ratatui::buffer::Buffer;
    use showcase_types::{BoundaryState, RenderFailure};

    use super::*;
    use crate::content::{Content, from_fn};
    use crate::group::Group;

    fn failing(message: &'static str) -> DemoSlot {
        DemoSlot::labeled(
            message.to_uppercase(),
            from_fn(move |_ctx| Err(RenderFailure::new(message))),
        )
    }

    fn catalog() -> Catalog {
        Catalog::new("Widget Test Suite", "isolated")
            .section(
                Section::new("Basics")
                    .slot(DemoSlot::labeled("A", "fine"))
                    .slot(failing("x")),
            )
            .section(
                Section::new("Nested").slot(DemoSlot::labeled(
                    "Navigator",
                    Group::default()
                        .slot(DemoSlot::labeled("Home", "home"))
                        .slot(failing("y")),
                )),
            )
    }

    #[test]
    fn siblings_render_independently() {
        let mut catalog = catalog();
        let page = catalog.render(&RenderContext::new(40));

        let a = page.find("A").unwrap();
        let x = page.find("X").unwrap();
        assert_eq!(a.phase(), BoundaryPhase::Healthy);
        assert!(a.to_plain_text().contains("fine"));
        assert_eq!(x.phase(), BoundaryPhase::Failed);
        assert!(x.to_plain_text().contains('x'));
    }

    #[test]
    fn failure_mutates_only_the_failing_slot() {
        let mut catalog = catalog();
        catalog.render(&RenderContext::new(40));

        let mut states = Vec::new();
        catalog.visit(&mut |slot| states.push((slot.label().to_string(), slot.state().clone())));
        assert_eq!(
            states,
            vec![
                ("A".to_string(), BoundaryState::Healthy),
                (
                    "X".to_string(),
                    BoundaryState::Failed {
                        message: Some("x".to_string())
                    }
                ),
                ("Navigator".to_string(), BoundaryState::Healthy),
                ("Home".to_string(), BoundaryState::Healthy),
                (
                    "Y".to_string(),
                    BoundaryState::Failed {
                        message: Some("y".to_string())
                    }
                ),
            ]
        );
    }

    #[test]
    fn summary_counts_nested_slots() {
        let mut catalog = catalog();
        assert_eq!(
            catalog.summary(),
            Summary {
                total: 5,
                healthy: 5,
                failed: 0
            }
        );
        catalog.render(&RenderContext::new(40));
        assert_eq!(
            catalog.summary(),
            Summary {
                total: 5,
                healthy: 3,
                failed: 2
            }
        );
    }

    /// Fails on every render while still owning nested slots.
    struct BrokenContainer(Group);

    impl Content for BrokenContainer {
        fn render(&mut self, _ctx: &RenderContext) -> Result<Buffer, RenderFailure> {
            Err(RenderFailure::new("container broke"))
        }

        fn visit_slots(&self, visit: &mut dyn FnMut(&DemoSlot)) {
            self.0.visit_slots(visit);
        }

        fn visit_slots_mut(&mut self, visit: &mut dyn FnMut(&mut DemoSlot)) {
            self.0.visit_slots_mut(visit);
        }
    }

    #[test]
    fn summary_skips_slots_hidden_by_a_failed_parent() {
        let container = BrokenContainer(Group::default().slot(DemoSlot::labeled("Inner", "x")));
        let mut catalog = Catalog::new("t", "s")
            .section(Section::new("Nested").slot(DemoSlot::labeled("Outer", container)));
        assert_eq!(catalog.summary().total, 2);

        catalog.render(&RenderContext::new(40));
        assert_eq!(
            catalog.summary(),
            Summary {
                total: 1,
                healthy: 0,
                failed: 1
            }
        );
    }

    #[test]
    fn reset_failed_reinstantiates_only_failed_slots() {
        let mut catalog = catalog();
        catalog.render(&RenderContext::new(40));
        assert_eq!(catalog.reset_failed(), 2);
        assert_eq!(catalog.summary().failed, 0);

        // The faulty content is still faulty; the new boundaries catch it again.
        catalog.render(&RenderContext::new(40));
        assert_eq!(catalog.summary().failed, 2);
    }

    #[test]
    fn reporter_reaches_nested_slots() {
        let labels = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&labels);
        let mut catalog = catalog();
        catalog.set_reporter(&Reporter::new(move |report| {
            sink.borrow_mut().push(report.label.to_string());
        }));
        catalog.render(&RenderContext::new(40));

        assert_eq!(*labels.borrow(), ["X", "Y"]);
    }

    #[test]
    fn retain_sections_filters_by_heading() {
        let mut catalog = catalog();
        catalog.retain_sections(|heading| heading == "Nested");
        assert_eq!(catalog.sections().len(), 1);
        assert_eq!(catalog.summary().total, 3);
    }
}
