//! The widget catalog.
//!
//! Every entry is a stock ratatui widget with placeholder props and no-op
//! interaction, wrapped in its own [`DemoSlot`](showcase_core::DemoSlot).
//! The "Faulty Widgets" section holds widgets that fail on purpose so the
//! isolation is visible on screen.

mod data;
mod faulty;
mod feedback;
mod inputs;
mod layout;
mod menus;
mod navigation;

use showcase_core::{Catalog, Section};
use tracing::debug;

pub const TITLE: &str = "Widget Test Suite";
pub const SUBTITLE: &str = "Each widget is wrapped in an isolation boundary to contain failures";
pub const FAULTY_SECTION: &str = "Faulty Widgets";

/// Which parts of the catalog to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    pub include_faulty: bool,
    /// Section headings to keep (case-insensitive). Empty keeps all.
    pub sections: Vec<String>,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            include_faulty: true,
            sections: Vec::new(),
        }
    }
}

fn all_sections() -> Vec<Section> {
    vec![
        inputs::section(),
        inputs::buttons(),
        feedback::section(),
        navigation::section(),
        menus::section(),
        data::section(),
        layout::section(),
    ]
}

#[must_use]
pub fn build(options: &CatalogOptions) -> Catalog {
    let mut sections = all_sections();
    if options.include_faulty {
        sections.push(faulty::section());
    }

    let mut catalog = sections
        .into_iter()
        .fold(Catalog::new(TITLE, SUBTITLE), Catalog::section);
    if !options.sections.is_empty() {
        catalog.retain_sections(|heading| {
            options
                .sections
                .iter()
                .any(|wanted| wanted.trim().eq_ignore_ascii_case(heading))
        });
    }

    debug!(
        sections = catalog.sections().len(),
        widgets = catalog.summary().total,
        "Built widget catalog"
    );
    catalog
}
