use ratatui::{
    style::{Style, Stylize},
    widgets::Tabs,
};

use showcase_core::{DemoSlot, Group, Section, widget};

const SELECTED_TAB: usize = 0;

pub(crate) fn section() -> Section {
    Section::new("Navigation")
        .slot(DemoSlot::labeled(
            "Tabs",
            widget(1, || {
                Tabs::new(["Home", "Profile", "Settings"])
                    .select(SELECTED_TAB)
                    .highlight_style(Style::new().reversed())
                    .divider("|")
            }),
        ))
        .slot(DemoSlot::labeled("Navigator", navigator()))
}

/// A stack navigator: one nested slot per screen, each with its own boundary.
fn navigator() -> Group {
    Group::default()
        .slot(DemoSlot::labeled("Home screen", "Home\n> Go to child"))
        .slot(DemoSlot::labeled("Child screen", "< Back\nChild content"))
}
