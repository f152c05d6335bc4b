//! Synchronous draw/poll/dispatch loop. One interaction handler runs at a
//! time; every mutation happens before the next event is read.

use std::fs;
use std::path::Path;

use anyhow::Result;
use crossterm::event;
use tracing::{debug, warn};

use crate::config::ShellConfig;
use crate::input::{self, InputEvent};
use crate::screen::{Focus, FormControl, ScreenState, FORM_CONTROLS};
use crate::terminal::ShellTerminal;
use crate::theme::GlyphSet;
use crate::ui;

pub(crate) fn run(
    terminal: &mut ShellTerminal,
    screen: &mut ScreenState,
    config: &ShellConfig,
) -> Result<()> {
    let palette = config.theme.palette();
    let glyphs = if config.ascii {
        GlyphSet::ascii()
    } else {
        GlyphSet::unicode()
    };
    while !screen.should_quit {
        terminal.draw(|frame| ui::draw(frame, screen, &palette, &glyphs))?;
        let input = input::map_event(event::read()?);
        dispatch(screen, input);
    }
    Ok(())
}

/// Route one semantic event. Split out of `run` so behavior is testable
/// without a live terminal.
pub(crate) fn dispatch(screen: &mut ScreenState, input: InputEvent) {
    match input {
        InputEvent::Quit => {
            screen.should_quit = true;
            return;
        }
        InputEvent::Resize | InputEvent::Ignored => return,
        _ => {}
    }

    // A blocking notice captures all input until dismissed.
    if screen.controller.notice().is_some() {
        if matches!(input, InputEvent::Enter | InputEvent::Escape) {
            screen.controller.dismiss_notice();
        }
        return;
    }

    match input {
        InputEvent::ToggleSidebar => {
            screen.sidebar_open = !screen.sidebar_open;
            debug!(open = screen.sidebar_open, "sidebar toggled");
            return;
        }
        InputEvent::FocusSearch => {
            if screen.focus == Focus::Search {
                screen.set_focus(Focus::Tabs);
            } else {
                screen.set_focus(Focus::Search);
            }
            return;
        }
        InputEvent::SaveTrigger => {
            screen.controller.save();
            return;
        }
        InputEvent::NextSection => {
            screen.controller.step_section(1);
            screen.sync_tab_cursor();
            return;
        }
        InputEvent::PrevSection => {
            screen.controller.step_section(-1);
            screen.sync_tab_cursor();
            return;
        }
        _ => {}
    }

    // The open timezone dropdown owns navigation keys until it closes.
    if screen.controller.timezone_picker().is_open() {
        match input {
            InputEvent::Up => screen.controller.timezone_highlight_prev(),
            InputEvent::Down => screen.controller.timezone_highlight_next(),
            InputEvent::Enter => screen.controller.select_highlighted_timezone(),
            InputEvent::Escape => screen.controller.close_timezone(),
            _ => {}
        }
        return;
    }

    match screen.focus {
        Focus::Search => handle_search(screen, input),
        Focus::PhotoPrompt => handle_photo_prompt(screen, input),
        Focus::Tabs => handle_tabs(screen, input),
        Focus::Form(index) => handle_form(screen, index, input),
    }
}

fn handle_search(screen: &mut ScreenState, input: InputEvent) {
    match input {
        InputEvent::Char(ch) => screen.search_query.push(ch),
        InputEvent::Backspace => {
            screen.search_query.pop();
        }
        InputEvent::Enter | InputEvent::Escape => screen.set_focus(Focus::Tabs),
        _ => {}
    }
}

fn handle_tabs(screen: &mut ScreenState, input: InputEvent) {
    let tab_count = screen.controller.catalog().navigation_items.len();
    match input {
        InputEvent::Left => screen.tab_cursor = screen.tab_cursor.saturating_sub(1),
        InputEvent::Right if tab_count > 0 => {
            screen.tab_cursor = (screen.tab_cursor + 1).min(tab_count - 1);
        }
        InputEvent::Enter => {
            let id = screen
                .controller
                .catalog()
                .navigation_items
                .get(screen.tab_cursor)
                .map(|item| item.id.clone());
            if let Some(id) = id {
                screen.controller.select_section(id);
                screen.sync_tab_cursor();
            }
        }
        InputEvent::Down | InputEvent::NextControl if screen.form_visible() => {
            screen.set_focus(Focus::Form(0));
        }
        InputEvent::PrevControl => screen.focus_prev_control(),
        _ => {}
    }
}

fn handle_photo_prompt(screen: &mut ScreenState, input: InputEvent) {
    match input {
        InputEvent::Char(ch) => screen.photo_prompt.push(ch),
        InputEvent::Backspace => {
            screen.photo_prompt.pop();
        }
        InputEvent::Paste(text) => screen.photo_prompt.push_str(text.trim()),
        InputEvent::Enter => submit_photo_prompt(screen),
        InputEvent::Escape => {
            screen.photo_prompt.clear();
            screen.controller.set_drag_over(false);
            screen.set_focus(Focus::Form(control_index(FormControl::Photo)));
        }
        _ => {}
    }
}

fn submit_photo_prompt(screen: &mut ScreenState) {
    let raw = screen.photo_prompt.trim().to_string();
    screen.photo_prompt.clear();
    screen.set_focus(Focus::Form(control_index(FormControl::Photo)));
    if raw.is_empty() {
        screen.controller.set_drag_over(false);
        return;
    }
    stage_path(screen, Path::new(&raw));
}

/// Read the file at the runtime boundary and hand its bytes to the staging
/// pipeline. Unreadable paths are logged and ignored; type policy lives in
/// the controller.
fn stage_path(screen: &mut ScreenState, path: &Path) {
    match fs::read(path) {
        Ok(bytes) => screen.controller.stage_image(path, bytes),
        Err(error) => {
            warn!(path = %path.display(), %error, "could not read image file");
            screen.controller.set_drag_over(false);
        }
    }
}

fn handle_form(screen: &mut ScreenState, index: usize, input: InputEvent) {
    let Some(control) = FORM_CONTROLS.get(index).copied() else {
        screen.set_focus(Focus::Tabs);
        return;
    };
    match input {
        InputEvent::NextControl => screen.focus_next_control(),
        InputEvent::PrevControl | InputEvent::Up => screen.focus_prev_control(),
        InputEvent::Down => screen.focus_next_control(),
        InputEvent::Escape => screen.set_focus(Focus::Tabs),
        InputEvent::Left | InputEvent::Right => {
            if let Some(field) = control.choice_field() {
                let direction = if input == InputEvent::Left { -1 } else { 1 };
                screen.controller.cycle_choice(field, direction);
            }
        }
        InputEvent::Char(ch) => {
            if let Some(field) = control.text_field() {
                screen.controller.push_char(field, ch);
            }
        }
        InputEvent::Backspace => {
            if let Some(field) = control.text_field() {
                screen.controller.pop_char(field);
            }
        }
        InputEvent::Paste(text) => handle_paste(screen, control, &text),
        InputEvent::Enter => activate(screen, control),
        _ => {}
    }
}

/// A paste on the upload zone is a file drop; on a text field it is typed
/// input. Anywhere else it is ignored.
fn handle_paste(screen: &mut ScreenState, control: FormControl, text: &str) {
    if control == FormControl::Photo {
        screen.controller.set_drag_over(true);
        stage_path(screen, Path::new(text.trim()));
        return;
    }
    if let Some(field) = control.text_field() {
        let merged = format!("{}{}", screen.controller.form().value(field), text);
        screen.controller.set_field(field, merged);
    }
}

fn activate(screen: &mut ScreenState, control: FormControl) {
    match control {
        FormControl::VerifyEmail => screen.controller.verify_email(),
        FormControl::VerifyMobile => screen.controller.verify_mobile(),
        FormControl::ResetPassword => screen.controller.reset_password(),
        FormControl::Cancel => screen.controller.cancel(),
        FormControl::Save => screen.controller.save(),
        FormControl::Timezone => screen.controller.toggle_timezone(),
        FormControl::Photo => {
            screen.photo_prompt.clear();
            screen.controller.set_drag_over(true);
            screen.set_focus(Focus::PhotoPrompt);
        }
        FormControl::Bio => screen.controller.push_char(formdeck::form::FieldId::Bio, '\n'),
        FormControl::Country | FormControl::MobileCode | FormControl::FontFamily => {
            if let Some(field) = control.choice_field() {
                screen.controller.cycle_choice(field, 1);
            }
        }
        _ => screen.focus_next_control(),
    }
}

fn control_index(control: FormControl) -> usize {
    FORM_CONTROLS
        .iter()
        .position(|candidate| *candidate == control)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formdeck::catalog::Catalog;
    use formdeck::SettingsController;

    fn screen() -> ScreenState {
        ScreenState::new(SettingsController::new(Catalog::builtin()))
    }

    fn focus_on(screen: &mut ScreenState, control: FormControl) {
        screen.set_focus(Focus::Form(control_index(control)));
    }

    #[test]
    fn typing_routes_to_the_focused_field_only() {
        let mut screen = screen();
        focus_on(&mut screen, FormControl::FirstName);
        for ch in "Ada".chars() {
            dispatch(&mut screen, InputEvent::Char(ch));
        }
        assert_eq!(screen.controller.form().first_name, "Ada");
        assert_eq!(screen.controller.form().last_name, "");
    }

    #[test]
    fn toggling_the_dropdown_without_selecting_keeps_the_timezone() {
        let mut screen = screen();
        focus_on(&mut screen, FormControl::Timezone);
        dispatch(&mut screen, InputEvent::Enter);
        assert!(screen.controller.timezone_picker().is_open());
        dispatch(&mut screen, InputEvent::Escape);
        assert!(!screen.controller.timezone_picker().is_open());
        assert_eq!(screen.controller.form().timezone, "");
    }

    #[test]
    fn dropdown_selection_writes_through_and_closes() {
        let mut screen = screen();
        focus_on(&mut screen, FormControl::Timezone);
        dispatch(&mut screen, InputEvent::Enter);
        dispatch(&mut screen, InputEvent::Down);
        dispatch(&mut screen, InputEvent::Enter);
        assert!(!screen.controller.timezone_picker().is_open());
        let selected = screen.controller.form().timezone.clone();
        assert!(screen.controller.catalog().timezone(&selected).is_some());
    }

    #[test]
    fn notice_blocks_input_until_dismissed() {
        let mut screen = screen();
        focus_on(&mut screen, FormControl::FirstName);
        screen.controller.stage_image(Path::new("x.webp"), vec![1]);
        assert!(screen.controller.notice().is_some());

        dispatch(&mut screen, InputEvent::Char('z'));
        assert_eq!(screen.controller.form().first_name, "");
        assert!(screen.controller.notice().is_some());

        dispatch(&mut screen, InputEvent::Enter);
        assert!(screen.controller.notice().is_none());
    }

    #[test]
    fn section_paging_preserves_form_values() {
        let mut screen = screen();
        focus_on(&mut screen, FormControl::Email);
        for ch in "a@b.c".chars() {
            dispatch(&mut screen, InputEvent::Char(ch));
        }
        dispatch(&mut screen, InputEvent::NextSection);
        assert_ne!(screen.controller.section(), "my-details");
        dispatch(&mut screen, InputEvent::PrevSection);
        assert_eq!(screen.controller.section(), "my-details");
        assert_eq!(screen.controller.form().email, "a@b.c");
    }

    #[test]
    fn choice_rows_cycle_with_arrows_and_stay_cataloged() {
        let mut screen = screen();
        focus_on(&mut screen, FormControl::FontFamily);
        dispatch(&mut screen, InputEvent::Right);
        assert_eq!(screen.controller.form().font_family, "medium");
        dispatch(&mut screen, InputEvent::Left);
        assert_eq!(screen.controller.form().font_family, "regular");
    }

    #[test]
    fn search_chord_captures_typing_and_releases_on_escape() {
        let mut screen = screen();
        dispatch(&mut screen, InputEvent::FocusSearch);
        dispatch(&mut screen, InputEvent::Char('q'));
        assert_eq!(screen.search_query, "q");
        dispatch(&mut screen, InputEvent::Escape);
        assert_eq!(screen.focus, Focus::Tabs);
    }

    #[test]
    fn quit_chord_stops_the_loop() {
        let mut screen = screen();
        dispatch(&mut screen, InputEvent::Quit);
        assert!(screen.should_quit);
    }
}
