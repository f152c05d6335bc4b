//! Explicit screen state for the shell: sidebar and search flags, the focus
//! model, and the inline photo-path prompt. Everything the original kept as
//! ambient page state lives here and is passed down to the views.

use formdeck::form::FieldId;
use formdeck::SettingsController;

/// Interactive controls of the "My details" section, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormControl {
    FirstName,
    LastName,
    Email,
    VerifyEmail,
    Photo,
    OldPassword,
    NewPassword,
    ResetPassword,
    Role,
    Country,
    MobileCode,
    MobileNumber,
    VerifyMobile,
    Timezone,
    FontFamily,
    Bio,
    Cancel,
    Save,
}

pub(crate) const FORM_CONTROLS: &[FormControl] = &[
    FormControl::FirstName,
    FormControl::LastName,
    FormControl::Email,
    FormControl::VerifyEmail,
    FormControl::Photo,
    FormControl::OldPassword,
    FormControl::NewPassword,
    FormControl::ResetPassword,
    FormControl::Role,
    FormControl::Country,
    FormControl::MobileCode,
    FormControl::MobileNumber,
    FormControl::VerifyMobile,
    FormControl::Timezone,
    FormControl::FontFamily,
    FormControl::Bio,
    FormControl::Cancel,
    FormControl::Save,
];

impl FormControl {
    /// Field edited by plain typing while this control is focused.
    pub(crate) fn text_field(self) -> Option<FieldId> {
        match self {
            FormControl::FirstName => Some(FieldId::FirstName),
            FormControl::LastName => Some(FieldId::LastName),
            FormControl::Email => Some(FieldId::Email),
            FormControl::OldPassword => Some(FieldId::OldPassword),
            FormControl::NewPassword => Some(FieldId::NewPassword),
            FormControl::Role => Some(FieldId::Role),
            FormControl::MobileNumber => Some(FieldId::MobileNumber),
            FormControl::Bio => Some(FieldId::Bio),
            _ => None,
        }
    }

    /// Catalog-backed field cycled with Left/Right while focused.
    pub(crate) fn choice_field(self) -> Option<FieldId> {
        match self {
            FormControl::Country => Some(FieldId::Country),
            FormControl::MobileCode => Some(FieldId::CountryCode),
            FormControl::FontFamily => Some(FieldId::FontFamily),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    /// The section tab row above the form.
    Tabs,
    /// Index into `FORM_CONTROLS`.
    Form(usize),
    /// The header search box.
    Search,
    /// Inline path prompt of the photo upload zone.
    PhotoPrompt,
}

#[derive(Debug)]
pub(crate) struct ScreenState {
    pub controller: SettingsController,
    pub sidebar_open: bool,
    pub current_page: String,
    pub search_query: String,
    pub tab_cursor: usize,
    pub focus: Focus,
    pub photo_prompt: String,
    pub should_quit: bool,
}

impl ScreenState {
    pub(crate) fn new(controller: SettingsController) -> Self {
        Self {
            controller,
            sidebar_open: true,
            current_page: "settings".to_string(),
            search_query: String::new(),
            tab_cursor: 0,
            focus: Focus::Tabs,
            photo_prompt: String::new(),
            should_quit: false,
        }
    }

    pub(crate) fn focused_control(&self) -> Option<FormControl> {
        match self.focus {
            Focus::Form(index) => FORM_CONTROLS.get(index).copied(),
            _ => None,
        }
    }

    /// Move focus, keeping the hover-analog tooltips in step: a tooltip is
    /// shown while its control is focused and cleared the moment focus
    /// leaves (reset-on-blur).
    pub(crate) fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        let focused = self.focused_control();
        self.controller
            .set_photo_tooltip(focused == Some(FormControl::Photo));
        self.controller
            .set_timezone_tooltip(focused == Some(FormControl::Timezone));
    }

    pub(crate) fn focus_next_control(&mut self) {
        match self.focus {
            Focus::Form(index) if index + 1 < FORM_CONTROLS.len() => {
                self.set_focus(Focus::Form(index + 1));
            }
            Focus::Form(_) => self.set_focus(Focus::Tabs),
            Focus::Tabs if self.form_visible() => self.set_focus(Focus::Form(0)),
            _ => {}
        }
    }

    pub(crate) fn focus_prev_control(&mut self) {
        match self.focus {
            Focus::Form(0) => self.set_focus(Focus::Tabs),
            Focus::Form(index) => self.set_focus(Focus::Form(index - 1)),
            Focus::Tabs if self.form_visible() => {
                self.set_focus(Focus::Form(FORM_CONTROLS.len() - 1));
            }
            _ => {}
        }
    }

    /// The detailed form only renders on the "my-details" section.
    pub(crate) fn form_visible(&self) -> bool {
        self.controller.section() == "my-details"
    }

    /// Keep the tab cursor on the active section after a section change.
    pub(crate) fn sync_tab_cursor(&mut self) {
        let active = self.controller.section();
        self.tab_cursor = self
            .controller
            .catalog()
            .navigation_items
            .iter()
            .position(|item| item.id == active)
            .unwrap_or(0);
        if !self.form_visible() {
            self.set_focus(Focus::Tabs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formdeck::catalog::Catalog;

    fn screen() -> ScreenState {
        ScreenState::new(SettingsController::new(Catalog::builtin()))
    }

    #[test]
    fn traversal_covers_every_control_and_wraps_to_the_tabs() {
        let mut screen = screen();
        screen.set_focus(Focus::Form(0));
        for _ in 0..FORM_CONTROLS.len() - 1 {
            screen.focus_next_control();
        }
        assert_eq!(screen.focused_control(), Some(FormControl::Save));
        screen.focus_next_control();
        assert_eq!(screen.focus, Focus::Tabs);
    }

    #[test]
    fn tooltips_follow_focus_and_reset_on_blur() {
        let mut screen = screen();
        let photo = FORM_CONTROLS
            .iter()
            .position(|c| *c == FormControl::Photo)
            .expect("photo control");
        screen.set_focus(Focus::Form(photo));
        assert!(screen.controller.flags().photo_tooltip);

        screen.focus_next_control();
        assert!(!screen.controller.flags().photo_tooltip);
    }

    #[test]
    fn leaving_my_details_parks_focus_on_the_tabs() {
        let mut screen = screen();
        screen.set_focus(Focus::Form(2));
        screen.controller.select_section("billing");
        screen.sync_tab_cursor();
        assert_eq!(screen.focus, Focus::Tabs);
        assert!(!screen.form_visible());
    }
}
