//! The stock catalog as the binary builds it.

use showcase_catalog::{CatalogOptions, FAULTY_SECTION, SUBTITLE, TITLE, build};
use showcase_core::{BoundaryPhase, PageView, RenderContext};
use showcase_tui::dump_page;
use showcase_types::UiOptions;

#[test]
fn every_stock_widget_survives_the_faulty_ones() {
    let mut catalog = build(&CatalogOptions::default());
    let page = catalog.render(&RenderContext::new(80));

    for section in &page.sections {
        let expected = if section.heading == FAULTY_SECTION {
            BoundaryPhase::Failed
        } else {
            BoundaryPhase::Healthy
        };
        for view in &section.views {
            assert_eq!(view.phase(), expected, "{}", view.label());
        }
    }
}

#[test]
fn repeated_frames_keep_the_same_failures() {
    let mut catalog = build(&CatalogOptions::default());
    let ctx = RenderContext::new(80);
    let first = catalog.render(&ctx);
    let second = catalog.render(&ctx);

    let failed = |page: &PageView| -> Vec<String> {
        page.views()
            .filter(|view| view.phase() == BoundaryPhase::Failed)
            .map(|view| view.to_plain_text())
            .collect()
    };
    assert_eq!(failed(&first), failed(&second));
}

#[test]
fn dump_lists_title_and_every_section() {
    let mut catalog = build(&CatalogOptions::default());
    let headings: Vec<String> = catalog
        .sections()
        .iter()
        .map(|section| section.heading().to_string())
        .collect();
    let text = dump_page(&mut catalog, UiOptions::default(), 80);

    assert!(text.starts_with(&format!("{TITLE}\n{SUBTITLE}\n")), "{text}");
    for heading in headings {
        assert!(text.contains(&heading), "missing {heading}");
    }
    assert!(text.contains("✓ Navigator"));
    assert!(text.contains("✓ Home screen"));
}

#[test]
fn dump_at_zero_width_does_not_panic() {
    let mut catalog = build(&CatalogOptions::default());
    let text = dump_page(&mut catalog, UiOptions::default(), 0);
    assert!(text.is_empty());
}
