//! Timezone picker: a two-state dropdown with catalog-tolerant label
//! formatting. Stale or missing catalog entries degrade to the placeholder,
//! never to a panic.

use crate::catalog::{Catalog, TimezoneEntry};

/// Shown while no timezone is selected, or when the selected value has
/// disappeared from the catalog.
pub const TIMEZONE_PLACEHOLDER: &str = "Select Timezone";

/// Dropdown state: closed or open over the catalog rows, with a highlighted
/// row for keyboard navigation. Opening and moving the highlight never touch
/// the form; only a selection writes through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimezonePicker {
    open: bool,
    highlighted: usize,
}

impl TimezonePicker {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Flip open/closed. When opening, the highlight starts on the current
    /// selection so Enter with no movement re-selects it.
    pub fn toggle(&mut self, catalog: &Catalog, current_value: &str) {
        if self.open {
            self.open = false;
            return;
        }
        self.highlighted = catalog
            .timezones
            .iter()
            .position(|entry| entry.value == current_value)
            .unwrap_or(0);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn highlight_prev(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn highlight_next(&mut self, row_count: usize) {
        if row_count == 0 {
            self.highlighted = 0;
            return;
        }
        self.highlighted = (self.highlighted + 1).min(row_count - 1);
    }

    /// Value of the highlighted row; forces the picker closed either way.
    pub fn take_highlighted<'a>(&mut self, catalog: &'a Catalog) -> Option<&'a str> {
        self.open = false;
        catalog
            .timezones
            .get(self.highlighted)
            .map(|entry| entry.value.as_str())
    }
}

/// Catalog row normalized for display, with every absent sub-field resolved
/// to its documented fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedTimezone {
    pub name: String,
    pub abbreviation: Option<String>,
    pub utc: String,
}

/// Normalize a catalog entry: the sentinel keeps only its label, other rows
/// fall back to `label` for a missing name and `value` for a missing UTC
/// offset, and an empty abbreviation drops the parenthetical.
#[must_use]
pub fn format_entry(entry: &TimezoneEntry) -> FormattedTimezone {
    if entry.value.is_empty() {
        return FormattedTimezone {
            name: entry.label.clone(),
            abbreviation: None,
            utc: String::new(),
        };
    }
    FormattedTimezone {
        name: entry.name.clone().unwrap_or_else(|| entry.label.clone()),
        abbreviation: entry
            .abbreviation
            .clone()
            .filter(|abbreviation| !abbreviation.is_empty()),
        utc: entry.utc.clone().unwrap_or_else(|| entry.value.clone()),
    }
}

/// One dropdown row as shown in the open list.
#[must_use]
pub fn entry_row_label(entry: &TimezoneEntry) -> String {
    if entry.value.is_empty() {
        return entry.label.clone();
    }
    compose(&format_entry(entry))
}

/// Closed-state display string for the currently selected value. The empty
/// sentinel and any value no longer present in the catalog both resolve to
/// the placeholder.
#[must_use]
pub fn display_label(catalog: &Catalog, value: &str) -> String {
    let Some(entry) = catalog.timezone(value) else {
        return TIMEZONE_PLACEHOLDER.to_string();
    };
    if entry.value.is_empty() {
        return TIMEZONE_PLACEHOLDER.to_string();
    }
    compose(&format_entry(entry))
}

fn compose(formatted: &FormattedTimezone) -> String {
    match &formatted.abbreviation {
        Some(abbreviation) => {
            format!("{} ({}) {}", formatted.name, abbreviation, formatted.utc)
        }
        None => format!("{} {}", formatted.name, formatted.utc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("pst", "Pacific Standard Time (PST) UTC-08:00")]
    #[case("ist", "India Standard Time (IST) UTC+05:30")]
    #[case("utc", "Coordinated Universal Time UTC+00:00")]
    #[case("local", "Local Time local")]
    fn display_label_composes_with_fallbacks(#[case] value: &str, #[case] expected: &str) {
        let catalog = Catalog::builtin();
        assert_eq!(display_label(&catalog, value), expected);
    }

    #[test]
    fn sentinel_and_stale_values_resolve_to_the_placeholder() {
        let catalog = Catalog::builtin();
        assert_eq!(display_label(&catalog, ""), TIMEZONE_PLACEHOLDER);
        assert_eq!(display_label(&catalog, "mars"), TIMEZONE_PLACEHOLDER);
    }

    #[test]
    fn every_builtin_entry_displays_its_name_or_label() {
        let catalog = Catalog::builtin();
        for entry in catalog.timezones.iter().filter(|e| !e.value.is_empty()) {
            let label = display_label(&catalog, &entry.value);
            let expected = entry.name.as_deref().unwrap_or(&entry.label);
            assert!(
                label.contains(expected),
                "{label:?} should contain {expected:?}"
            );
        }
    }

    #[test]
    fn toggling_open_highlights_the_current_selection() {
        let catalog = Catalog::builtin();
        let mut picker = TimezonePicker::default();
        picker.toggle(&catalog, "est");
        assert!(picker.is_open());
        assert_eq!(
            catalog.timezones[picker.highlighted()].value,
            "est".to_string()
        );

        picker.toggle(&catalog, "est");
        assert!(!picker.is_open());
    }

    #[test]
    fn opening_on_a_stale_value_starts_at_the_top() {
        let catalog = Catalog::builtin();
        let mut picker = TimezonePicker::default();
        picker.toggle(&catalog, "mars");
        assert_eq!(picker.highlighted(), 0);
    }

    #[test]
    fn highlight_movement_saturates_at_both_ends() {
        let catalog = Catalog::builtin();
        let rows = catalog.timezones.len();
        let mut picker = TimezonePicker::default();
        picker.toggle(&catalog, "");

        picker.highlight_prev();
        assert_eq!(picker.highlighted(), 0);
        for _ in 0..rows + 5 {
            picker.highlight_next(rows);
        }
        assert_eq!(picker.highlighted(), rows - 1);
    }

    #[test]
    fn take_highlighted_closes_and_yields_the_row_value() {
        let catalog = Catalog::builtin();
        let mut picker = TimezonePicker::default();
        picker.toggle(&catalog, "gmt");
        let value = picker.take_highlighted(&catalog);
        assert_eq!(value, Some("gmt"));
        assert!(!picker.is_open());
    }
}
