//! Config files driving the catalog.

use std::fs;

use showcase_catalog::{CatalogOptions, FAULTY_SECTION, build};
use showcase_config::ShowcaseConfig;
use tempfile::tempdir;

fn load(body: &str) -> ShowcaseConfig {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, body).unwrap();
    ShowcaseConfig::load_from(&path).unwrap().unwrap()
}

fn options(config: &ShowcaseConfig) -> CatalogOptions {
    let catalog = config.catalog();
    CatalogOptions {
        include_faulty: catalog.include_faulty,
        sections: catalog.sections,
    }
}

#[test]
fn include_faulty_false_hides_the_faulty_section() {
    let config = load("[catalog]\ninclude_faulty = false\n");
    let catalog = build(&options(&config));
    assert!(
        catalog
            .sections()
            .iter()
            .all(|section| section.heading() != FAULTY_SECTION)
    );
}

#[test]
fn section_filter_selects_headings() {
    let config = load("[catalog]\nsections = [\"menus\", \"Layout\"]\n");
    let catalog = build(&options(&config));
    let headings: Vec<&str> = catalog.sections().iter().map(|s| s.heading()).collect();
    assert_eq!(headings, ["Menus", "Layout"]);
}
