//! Active settings-section tracking. Unknown ids are allowed and render an
//! empty content pane through a graceful not-found lookup.

use crate::catalog::Catalog;

pub const DEFAULT_SECTION: &str = "my-details";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionNavigator {
    active: String,
}

impl Default for SectionNavigator {
    fn default() -> Self {
        Self {
            active: DEFAULT_SECTION.to_string(),
        }
    }
}

impl SectionNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Overwrite the active id unconditionally; no catalog validation.
    pub fn select(&mut self, id: impl Into<String>) {
        self.active = id.into();
    }

    /// Move to the neighboring tab in catalog order. An active id that is
    /// not in the catalog restarts from the first tab.
    pub fn step(&mut self, catalog: &Catalog, direction: i32) {
        let tabs = &catalog.navigation_items;
        if tabs.is_empty() {
            return;
        }
        let current = tabs.iter().position(|item| item.id == self.active);
        let next = match current {
            Some(index) => {
                let len = tabs.len() as i64;
                (index as i64 + i64::from(direction)).rem_euclid(len) as usize
            }
            None => 0,
        };
        self.active = tabs[next].id.clone();
    }

    /// Label for the active section's content pane, `None` when the id is
    /// not cataloged (the pane renders empty).
    #[must_use]
    pub fn content_label<'a>(&self, catalog: &'a Catalog) -> Option<&'a str> {
        catalog
            .navigation_item(&self.active)
            .map(|item| item.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_my_details() {
        assert_eq!(SectionNavigator::new().active(), DEFAULT_SECTION);
    }

    #[test]
    fn select_accepts_ids_absent_from_the_catalog() {
        let catalog = Catalog::builtin();
        let mut nav = SectionNavigator::new();
        nav.select("not-a-section");
        assert_eq!(nav.active(), "not-a-section");
        assert_eq!(nav.content_label(&catalog), None);
    }

    #[test]
    fn step_wraps_around_the_tab_order() {
        let catalog = Catalog::builtin();
        let mut nav = SectionNavigator::new();
        nav.step(&catalog, -1);
        assert_eq!(nav.active(), "notifications");
        nav.step(&catalog, 1);
        assert_eq!(nav.active(), DEFAULT_SECTION);
    }

    #[test]
    fn step_recovers_from_an_uncataloged_active_id() {
        let catalog = Catalog::builtin();
        let mut nav = SectionNavigator::new();
        nav.select("gone");
        nav.step(&catalog, 1);
        assert_eq!(nav.active(), DEFAULT_SECTION);
    }
}
