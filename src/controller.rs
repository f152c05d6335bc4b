//! Settings screen controller: owns the form aggregate and routes every
//! interaction. All mutation happens synchronously inside one handler; the
//! controller is exclusively owned by the live screen and never shared.

use std::path::Path;

use tracing::debug;

use crate::bio;
use crate::catalog::Catalog;
use crate::form::{FieldId, FormState};
use crate::image::{self, StageError};
use crate::section::SectionNavigator;
use crate::timezone::{self, TimezonePicker};

/// Blocking notice surfaced to the user until explicitly dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
}

/// Ephemeral visual flags. Reset on blur/leave and never serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransientFlags {
    pub drag_over: bool,
    pub timezone_tooltip: bool,
    pub photo_tooltip: bool,
}

#[derive(Debug, Default)]
pub struct SettingsController {
    catalog: Catalog,
    form: FormState,
    section: SectionNavigator,
    timezone: TimezonePicker,
    flags: TransientFlags,
    notice: Option<Notice>,
}

impl SettingsController {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read-only snapshot of the form for rendering.
    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[must_use]
    pub fn flags(&self) -> TransientFlags {
        self.flags
    }

    // --- field store ---

    /// Merge one field. Catalog-backed fields are only written from
    /// catalog-rendered choices, so no validation happens here.
    pub fn set_field(&mut self, field: FieldId, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn push_char(&mut self, field: FieldId, ch: char) {
        self.form.push_char(field, ch);
    }

    pub fn pop_char(&mut self, field: FieldId) {
        self.form.pop_char(field);
    }

    /// Step a catalog-backed choice field to its neighboring option. The
    /// next value always comes out of the catalog, which is what keeps the
    /// membership invariant structural.
    pub fn cycle_choice(&mut self, field: FieldId, direction: i32) {
        let next = {
            let options: Vec<&str> = match field {
                FieldId::Country => {
                    self.catalog.countries.iter().map(|c| c.value.as_str()).collect()
                }
                FieldId::CountryCode => {
                    self.catalog.country_codes.iter().map(|c| c.value.as_str()).collect()
                }
                FieldId::FontFamily => {
                    self.catalog.text_formats.iter().map(|c| c.value.as_str()).collect()
                }
                _ => return,
            };
            next_option(&options, self.form.value(field), direction).map(str::to_string)
        };
        if let Some(value) = next {
            debug!(?field, %value, "choice cycled");
            self.form.set(field, value);
        }
    }

    /// Calling-code prefix shown before the mobile number.
    #[must_use]
    pub fn calling_code(&self) -> &str {
        self.catalog.calling_code(&self.form.country_code)
    }

    // --- section navigator ---

    #[must_use]
    pub fn section(&self) -> &str {
        self.section.active()
    }

    pub fn select_section(&mut self, id: impl Into<String>) {
        let id = id.into();
        debug!(%id, "section selected");
        self.section.select(id);
        self.timezone.close();
    }

    pub fn step_section(&mut self, direction: i32) {
        self.section.step(&self.catalog, direction);
        self.timezone.close();
    }

    #[must_use]
    pub fn section_content_label(&self) -> Option<&str> {
        self.section.content_label(&self.catalog)
    }

    // --- timezone picker ---

    #[must_use]
    pub fn timezone_picker(&self) -> &TimezonePicker {
        &self.timezone
    }

    pub fn toggle_timezone(&mut self) {
        self.timezone.toggle(&self.catalog, &self.form.timezone);
    }

    pub fn close_timezone(&mut self) {
        self.timezone.close();
    }

    pub fn timezone_highlight_prev(&mut self) {
        self.timezone.highlight_prev();
    }

    pub fn timezone_highlight_next(&mut self) {
        self.timezone.highlight_next(self.catalog.timezones.len());
    }

    /// Write a catalog value (or the empty sentinel, which clears) into the
    /// form and force the picker closed.
    pub fn select_timezone(&mut self, value: impl Into<String>) {
        let value = value.into();
        debug!(%value, "timezone selected");
        self.form.set(FieldId::Timezone, value);
        self.timezone.close();
    }

    /// Commit the highlighted dropdown row.
    pub fn select_highlighted_timezone(&mut self) {
        let value = self
            .timezone
            .take_highlighted(&self.catalog)
            .map(str::to_string);
        if let Some(value) = value {
            self.select_timezone(value);
        }
    }

    #[must_use]
    pub fn timezone_label(&self) -> String {
        timezone::display_label(&self.catalog, &self.form.timezone)
    }

    // --- image stager ---

    /// Stage a picked or dropped file. Unsupported image subtypes raise the
    /// blocking notice; non-image files are dropped without one.
    pub fn stage_image(&mut self, path: &Path, bytes: Vec<u8>) {
        self.flags.drag_over = false;
        match image::stage_from_path(path, bytes) {
            Ok(staged) => {
                debug!(name = %staged.name, media_type = %staged.media_type, "image staged");
                self.form.profile_image = Some(staged);
            }
            Err(StageError::UnsupportedImageType) => {
                self.notice = Some(Notice {
                    text: StageError::UnsupportedImageType.to_string(),
                });
            }
            Err(StageError::NotAnImage) => {
                debug!(path = %path.display(), "non-image drop ignored");
            }
        }
    }

    pub fn set_drag_over(&mut self, over: bool) {
        self.flags.drag_over = over;
    }

    // --- tooltips ---

    pub fn set_timezone_tooltip(&mut self, shown: bool) {
        self.flags.timezone_tooltip = shown;
    }

    pub fn set_photo_tooltip(&mut self, shown: bool) {
        self.flags.photo_tooltip = shown;
    }

    // --- notice ---

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // --- bio budget ---

    #[must_use]
    pub fn bio_word_count(&self) -> usize {
        bio::word_count(&self.form.bio)
    }

    #[must_use]
    pub fn bio_budget_label(&self) -> String {
        bio::budget_label(&self.form.bio)
    }

    #[must_use]
    pub fn bio_over_limit(&self) -> bool {
        bio::over_limit(&self.form.bio)
    }

    // --- inert triggers (wiring is the host's concern) ---

    pub fn save(&self) {
        debug!("save triggered");
    }

    pub fn cancel(&self) {
        debug!("cancel triggered");
    }

    pub fn verify_email(&self) {
        debug!("email verify triggered");
    }

    pub fn verify_mobile(&self) {
        debug!("mobile verify triggered");
    }

    pub fn reset_password(&self) {
        debug!("password reset triggered");
    }
}

/// Neighboring option in a circular list; `None` when the list is empty.
/// A current value missing from the list restarts from the first option.
fn next_option<'a>(options: &[&'a str], current: &str, direction: i32) -> Option<&'a str> {
    if options.is_empty() {
        return None;
    }
    let index = match options.iter().position(|option| *option == current) {
        Some(index) => {
            let len = options.len() as i64;
            (index as i64 + i64::from(direction)).rem_euclid(len) as usize
        }
        None => 0,
    };
    Some(options[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SettingsController {
        SettingsController::new(Catalog::builtin())
    }

    #[test]
    fn cycle_choice_only_lands_on_cataloged_values() {
        let mut ctrl = controller();
        for _ in 0..ctrl.catalog().text_formats.len() + 3 {
            ctrl.cycle_choice(FieldId::FontFamily, 1);
            let value = ctrl.form().font_family.clone();
            assert!(ctrl.catalog().text_format(&value).is_some());
        }
    }

    #[test]
    fn cycle_choice_ignores_free_text_fields() {
        let mut ctrl = controller();
        ctrl.set_field(FieldId::Role, "engineer");
        ctrl.cycle_choice(FieldId::Role, 1);
        assert_eq!(ctrl.form().role, "engineer");
    }

    #[test]
    fn cycle_choice_restarts_from_the_first_option_on_a_stale_value() {
        let mut ctrl = controller();
        ctrl.set_field(FieldId::Country, "ZZ");
        ctrl.cycle_choice(FieldId::Country, 1);
        assert_eq!(ctrl.form().country, "");
    }

    #[test]
    fn next_option_handles_the_empty_list() {
        assert_eq!(next_option(&[], "x", 1), None);
    }

    #[test]
    fn selecting_the_sentinel_clears_the_timezone() {
        let mut ctrl = controller();
        ctrl.select_timezone("est");
        assert_eq!(ctrl.form().timezone, "est");
        ctrl.select_timezone("");
        assert_eq!(ctrl.timezone_label(), timezone::TIMEZONE_PLACEHOLDER);
    }

    #[test]
    fn unsupported_image_raises_the_notice_and_stages_nothing() {
        let mut ctrl = controller();
        ctrl.stage_image(Path::new("photo.webp"), vec![0xFF]);
        assert!(ctrl.form().profile_image.is_none());
        let notice = ctrl.notice().expect("blocking notice");
        assert!(notice.text.contains("SVG, PNG, JPG, or GIF"));
        ctrl.dismiss_notice();
        assert!(ctrl.notice().is_none());
    }

    #[test]
    fn non_image_drop_is_silent_and_leaves_state_unchanged() {
        let mut ctrl = controller();
        ctrl.set_drag_over(true);
        ctrl.stage_image(Path::new("notes.txt"), vec![1]);
        assert!(ctrl.form().profile_image.is_none());
        assert!(ctrl.notice().is_none());
        assert!(!ctrl.flags().drag_over, "drop always clears the drag flag");
    }

    #[test]
    fn staging_replaces_the_previous_reference() {
        let mut ctrl = controller();
        ctrl.stage_image(Path::new("one.png"), vec![1]);
        ctrl.stage_image(Path::new("two.gif"), vec![2]);
        let staged = ctrl.form().profile_image.as_ref().expect("staged image");
        assert_eq!(staged.name, "two.gif");
        assert_eq!(staged.media_type, "image/gif");
    }

    #[test]
    fn switching_sections_keeps_the_dropdown_closed_but_the_form_intact() {
        let mut ctrl = controller();
        ctrl.set_field(FieldId::FirstName, "Ada");
        ctrl.toggle_timezone();
        ctrl.select_section("plan");
        assert!(!ctrl.timezone_picker().is_open());
        assert_eq!(ctrl.form().first_name, "Ada");
    }
}
