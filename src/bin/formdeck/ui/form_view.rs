//! Settings content pane: section tabs, the "My details" form rows, and the
//! placeholder pane shown for every other section.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use formdeck::timezone;

use crate::screen::{Focus, FormControl, ScreenState};
use crate::theme::{GlyphSet, Palette};
use crate::ui::truncate_display;

const LABEL_WIDTH: usize = 18;
const FIELD_WIDTH: usize = 28;

pub(crate) fn draw(
    frame: &mut Frame,
    area: Rect,
    screen: &ScreenState,
    palette: &Palette,
    glyphs: &GlyphSet,
) {
    let mut canvas = Canvas {
        lines: Vec::new(),
        focused_line: None,
        screen,
        palette,
        glyphs,
    };

    canvas.search_strip();
    canvas.tabs();
    canvas.blank();
    if screen.form_visible() {
        canvas.my_details();
    } else {
        canvas.placeholder();
    }

    let visible = usize::from(area.height.saturating_sub(2));
    let scroll = canvas
        .focused_line
        .map_or(0, |line| line.saturating_sub(visible.saturating_sub(3)));
    let block = Block::bordered().border_style(Style::default().fg(palette.border));
    frame.render_widget(
        Paragraph::new(Text::from(canvas.lines))
            .block(block)
            .scroll((scroll as u16, 0)),
        area,
    );
}

struct Canvas<'a> {
    lines: Vec<Line<'a>>,
    focused_line: Option<usize>,
    screen: &'a ScreenState,
    palette: &'a Palette,
    glyphs: &'a GlyphSet,
}

impl<'a> Canvas<'a> {
    fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Remember the first line belonging to the focused control so the
    /// scroll calculation can keep it visible.
    fn mark_focus(&mut self, control: FormControl) {
        if self.focused(control) && self.focused_line.is_none() {
            self.focused_line = Some(self.lines.len());
        }
    }

    fn focused(&self, control: FormControl) -> bool {
        self.screen.focused_control() == Some(control)
    }

    fn search_strip(&mut self) {
        if self.screen.search_query.is_empty() {
            return;
        }
        self.push(Line::styled(
            "Search Results",
            Style::default()
                .fg(self.palette.accent_strong)
                .add_modifier(Modifier::BOLD),
        ));
        self.push(Line::styled(
            format!(
                "Currently searching for: \"{}\"",
                truncate_display(&self.screen.search_query, 40)
            ),
            Style::default().fg(self.palette.dim),
        ));
        self.blank();
    }

    fn tabs(&mut self) {
        let catalog = self.screen.controller.catalog();
        let active = self.screen.controller.section();
        let on_tabs = self.screen.focus == Focus::Tabs;
        if on_tabs {
            self.focused_line = Some(self.lines.len());
        }
        let mut spans: Vec<Span> = Vec::new();
        for (index, item) in catalog.navigation_items.iter().enumerate() {
            let is_active = item.id == active;
            let under_cursor = on_tabs && index == self.screen.tab_cursor;
            let mut style = if is_active {
                Style::default()
                    .fg(self.palette.accent_strong)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(self.palette.dim)
            };
            if under_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!(" {} ", item.label), style));
            if let Some(count) = item.notification_count {
                spans.push(Span::styled(
                    format!("({count}) "),
                    Style::default().fg(self.palette.text).bg(self.palette.badge),
                ));
            }
        }
        self.push(Line::from(spans));
    }

    fn placeholder(&mut self) {
        match self.screen.controller.section_content_label() {
            Some(label) => {
                let text = format!("Content for {label}");
                self.push(Line::styled(text, Style::default().fg(self.palette.dim)));
            }
            // Uncataloged id: an empty pane, not an error.
            None => {}
        }
    }

    fn my_details(&mut self) {
        let catalog = self.screen.controller.catalog();
        let labels = catalog.labels.clone();
        let placeholders = catalog.placeholders.clone();
        let buttons = catalog.buttons.clone();
        let form = self.screen.controller.form().clone();

        self.push(Line::styled(
            labels.personal_information.clone(),
            Style::default()
                .fg(self.palette.text)
                .add_modifier(Modifier::BOLD),
        ));
        self.push(Line::styled(
            labels.personal_information_subtext.clone(),
            Style::default().fg(self.palette.dim),
        ));
        self.blank();

        // Name row: two inputs share one label.
        self.mark_focus(FormControl::FirstName);
        self.mark_focus(FormControl::LastName);
        let name_line = Line::from(vec![
            self.marker(FormControl::FirstName),
            self.label(&format!("{} {}", labels.name, self.glyphs.required)),
            self.field_box(
                &form.first_name,
                &placeholders.first_name,
                self.focused(FormControl::FirstName),
                false,
            ),
            Span::raw(" "),
            self.field_box(
                &form.last_name,
                &placeholders.last_name,
                self.focused(FormControl::LastName),
                false,
            ),
        ]);
        self.push(name_line);
        self.blank();

        self.mark_focus(FormControl::Email);
        self.mark_focus(FormControl::VerifyEmail);
        let email_line = Line::from(vec![
            self.marker(FormControl::Email),
            self.label(&format!("{} {}", labels.email, self.glyphs.required)),
            self.field_box(
                &form.email,
                &placeholders.email,
                self.focused(FormControl::Email),
                false,
            ),
            Span::raw("  "),
            self.button(&buttons.verify, self.focused(FormControl::VerifyEmail)),
        ]);
        self.push(email_line);
        self.blank();

        self.photo_rows(&labels);
        self.password_rows(&labels, &placeholders, &buttons);
        self.role_rows(&labels, &placeholders);
        self.choice_row(
            FormControl::Country,
            &format!("{} {}", labels.country, self.glyphs.required),
            country_label(&self.screen.controller, &form.country),
        );
        self.blank();
        self.mobile_rows(&labels, &buttons);
        self.timezone_rows(&labels);
        self.bio_rows(&labels, &placeholders);

        self.mark_focus(FormControl::Cancel);
        self.mark_focus(FormControl::Save);
        let footer = Line::from(vec![
            Span::raw("  "),
            self.button(&buttons.cancel, self.focused(FormControl::Cancel)),
            Span::raw(" "),
            self.button(&buttons.save, self.focused(FormControl::Save)),
        ]);
        self.push(footer);
    }

    fn photo_rows(&mut self, labels: &formdeck::catalog::FormLabels) {
        let flags = self.screen.controller.flags();
        self.mark_focus(FormControl::Photo);
        let mut spans = vec![
            self.marker(FormControl::Photo),
            self.label(&format!(
                "{} {} {}",
                labels.your_photo, self.glyphs.required, self.glyphs.help
            )),
        ];
        match &self.screen.controller.form().profile_image {
            Some(staged) => spans.push(Span::styled(
                format!(
                    "{} ({}, {} bytes)",
                    truncate_display(&staged.name, 24),
                    staged.media_type,
                    staged.bytes.len()
                ),
                Style::default().fg(self.palette.accent_strong),
            )),
            None => spans.push(Span::styled(
                labels.your_photo_subtext.clone(),
                Style::default().fg(self.palette.dim),
            )),
        }
        self.push(Line::from(spans));

        if flags.photo_tooltip {
            self.tooltip("Please Upload your photo");
        }

        let upload_label = if self.screen.controller.form().profile_image.is_some() {
            "Click to change or drag and drop"
        } else {
            "Click to upload or drag and drop"
        };
        let active = flags.drag_over || self.focused(FormControl::Photo);
        let zone_style = if active {
            Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.dim)
        };
        self.push(Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH + 2)),
            Span::styled(format!("[ {upload_label} ]"), zone_style),
        ]));
        self.push(Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH + 2)),
            Span::styled(
                "SVG, PNG, JPG or GIF (max 800x400px)",
                Style::default().fg(self.palette.dim),
            ),
        ]));

        if self.screen.focus == Focus::PhotoPrompt {
            self.focused_line = Some(self.lines.len());
            self.push(Line::from(vec![
                Span::raw(" ".repeat(LABEL_WIDTH + 2)),
                Span::styled(
                    format!("Path: {}_", self.screen.photo_prompt),
                    Style::default().fg(self.palette.accent),
                ),
            ]));
        }
        self.blank();
    }

    fn password_rows(
        &mut self,
        labels: &formdeck::catalog::FormLabels,
        placeholders: &formdeck::catalog::Placeholders,
        buttons: &formdeck::catalog::ButtonLabels,
    ) {
        let form = self.screen.controller.form().clone();
        self.push(Line::styled(
            labels.change_password.clone(),
            Style::default()
                .fg(self.palette.text)
                .add_modifier(Modifier::BOLD),
        ));
        self.push(Line::styled(
            labels.change_password_note.clone(),
            Style::default().fg(self.palette.dim),
        ));

        self.mark_focus(FormControl::OldPassword);
        let old_line = Line::from(vec![
            self.marker(FormControl::OldPassword),
            self.label(&labels.old_password),
            self.field_box(
                &form.old_password,
                &placeholders.old_password,
                self.focused(FormControl::OldPassword),
                true,
            ),
        ]);
        self.push(old_line);

        self.mark_focus(FormControl::NewPassword);
        let new_line = Line::from(vec![
            self.marker(FormControl::NewPassword),
            self.label(&labels.new_password),
            self.field_box(
                &form.new_password,
                &placeholders.new_password,
                self.focused(FormControl::NewPassword),
                true,
            ),
        ]);
        self.push(new_line);

        for requirement in &self.screen.controller.catalog().password_requirements {
            self.push(Line::from(vec![
                Span::raw(" ".repeat(LABEL_WIDTH + 2)),
                Span::styled(
                    format!("{} ", self.glyphs.check),
                    Style::default().fg(self.palette.accent),
                ),
                Span::styled(
                    requirement.text.clone(),
                    Style::default().fg(self.palette.dim),
                ),
            ]));
        }

        self.mark_focus(FormControl::ResetPassword);
        let reset = Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH + 2)),
            self.button(&buttons.reset_password, self.focused(FormControl::ResetPassword)),
        ]);
        self.push(reset);
        self.blank();
    }

    fn role_rows(
        &mut self,
        labels: &formdeck::catalog::FormLabels,
        placeholders: &formdeck::catalog::Placeholders,
    ) {
        let form = self.screen.controller.form().clone();
        self.mark_focus(FormControl::Role);
        let role_line = Line::from(vec![
            self.marker(FormControl::Role),
            self.label(&labels.role),
            self.field_box(
                &form.role,
                &placeholders.role,
                self.focused(FormControl::Role),
                false,
            ),
        ]);
        self.push(role_line);
        self.push(Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH + 2)),
            Span::styled(
                format!("{} Settings > Team > Edit Roles", labels.role_note),
                Style::default().fg(self.palette.dim),
            ),
        ]));
        self.blank();
    }

    fn mobile_rows(
        &mut self,
        labels: &formdeck::catalog::FormLabels,
        buttons: &formdeck::catalog::ButtonLabels,
    ) {
        let controller = &self.screen.controller;
        let form = controller.form().clone();
        let code_label = format!("{} {}", form.country_code, controller.calling_code());
        self.mark_focus(FormControl::MobileCode);
        self.mark_focus(FormControl::MobileNumber);
        self.mark_focus(FormControl::VerifyMobile);
        let line = Line::from(vec![
            self.marker(FormControl::MobileNumber),
            self.label(&format!("{} {}", labels.mobile_number, self.glyphs.required)),
            self.chooser(&code_label, self.focused(FormControl::MobileCode)),
            Span::raw(" "),
            self.field_box(
                &form.mobile_number,
                "Enter mobile number",
                self.focused(FormControl::MobileNumber),
                false,
            ),
            Span::raw("  "),
            self.button(&buttons.verify, self.focused(FormControl::VerifyMobile)),
        ]);
        self.push(line);
        self.blank();
    }

    fn timezone_rows(&mut self, labels: &formdeck::catalog::FormLabels) {
        let controller = &self.screen.controller;
        let picker = controller.timezone_picker();
        self.mark_focus(FormControl::Timezone);
        let closed_style = if self.focused(FormControl::Timezone) {
            Style::default().fg(self.palette.accent)
        } else {
            Style::default().fg(self.palette.text)
        };
        let line = Line::from(vec![
            self.marker(FormControl::Timezone),
            self.label(&format!("{} {}", labels.timezone, self.glyphs.help)),
            Span::styled(
                format!(
                    "[ {} {} ]",
                    truncate_display(&controller.timezone_label(), FIELD_WIDTH + 12),
                    self.glyphs.arrow_down
                ),
                closed_style,
            ),
        ]);
        self.push(line);

        if controller.flags().timezone_tooltip {
            self.tooltip("Please enter your current timezone");
        }

        if picker.is_open() {
            for (index, entry) in controller.catalog().timezones.iter().enumerate() {
                let highlighted = index == picker.highlighted();
                let marker = if highlighted { self.glyphs.marker } else { " " };
                let style = if highlighted {
                    Style::default()
                        .fg(self.palette.accent)
                        .add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(self.palette.text)
                };
                self.push(Line::from(vec![
                    Span::raw(" ".repeat(LABEL_WIDTH + 2)),
                    Span::styled(
                        format!("{marker} {}", timezone::entry_row_label(entry)),
                        style,
                    ),
                ]));
            }
        }
        self.blank();
    }

    fn bio_rows(
        &mut self,
        labels: &formdeck::catalog::FormLabels,
        placeholders: &formdeck::catalog::Placeholders,
    ) {
        let controller = &self.screen.controller;
        let form = controller.form().clone();
        self.mark_focus(FormControl::Bio);
        self.push(Line::from(vec![
            self.marker(FormControl::Bio),
            self.label(&format!("{} {}", labels.bio, self.glyphs.required)),
            Span::styled(
                labels.bio_subtext.clone(),
                Style::default().fg(self.palette.dim),
            ),
        ]));

        self.choice_row(
            FormControl::FontFamily,
            "Text format",
            format_label(controller, &form.font_family),
        );

        let focused = self.focused(FormControl::Bio);
        if form.bio.is_empty() {
            self.push(Line::from(vec![
                Span::raw(" ".repeat(LABEL_WIDTH + 2)),
                Span::styled(
                    placeholders.bio.clone(),
                    Style::default().fg(self.palette.dim),
                ),
            ]));
        } else {
            let line_count = form.bio.lines().count();
            for (index, text_line) in form.bio.lines().enumerate() {
                let cursor = focused && index + 1 == line_count;
                self.push(Line::from(vec![
                    Span::raw(" ".repeat(LABEL_WIDTH + 2)),
                    Span::styled(
                        format!(
                            "{}{}",
                            truncate_display(text_line, FIELD_WIDTH + 20),
                            if cursor { "_" } else { "" }
                        ),
                        Style::default().fg(self.palette.text),
                    ),
                ]));
            }
        }

        let budget_style = if controller.bio_over_limit() {
            Style::default().fg(self.palette.error)
        } else {
            Style::default().fg(self.palette.dim)
        };
        self.push(Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH + 2)),
            Span::styled(controller.bio_budget_label(), budget_style),
        ]));
        self.blank();
    }

    fn choice_row(&mut self, control: FormControl, label: &str, value_label: String) {
        self.mark_focus(control);
        let line = Line::from(vec![
            self.marker(control),
            self.label(label),
            self.chooser(&value_label, self.focused(control)),
        ]);
        self.push(line);
    }

    fn tooltip(&mut self, text: &str) {
        self.push(Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH + 2)),
            Span::styled(
                format!("({text})"),
                Style::default()
                    .fg(self.palette.badge)
                    .bg(self.palette.text),
            ),
        ]));
    }

    fn button(&self, label: &str, focused: bool) -> Span<'a> {
        let style = if focused {
            Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(self.palette.accent_strong)
        };
        Span::styled(format!("[ {label} ]"), style)
    }

    fn marker(&self, control: FormControl) -> Span<'a> {
        if self.focused(control) {
            Span::styled(
                format!("{} ", self.glyphs.marker),
                Style::default().fg(self.palette.accent),
            )
        } else {
            Span::raw("  ")
        }
    }

    fn label(&self, text: &str) -> Span<'a> {
        let clipped = truncate_display(text, LABEL_WIDTH);
        let padding = LABEL_WIDTH.saturating_sub(crate::ui::display_width(&clipped));
        Span::styled(
            format!("{clipped}{} ", " ".repeat(padding)),
            Style::default().fg(self.palette.text),
        )
    }

    fn field_box(&self, value: &str, placeholder: &str, focused: bool, masked: bool) -> Span<'a> {
        let shown = if value.is_empty() {
            truncate_display(placeholder, FIELD_WIDTH)
        } else if masked {
            "\u{2022}".repeat(value.chars().count().min(FIELD_WIDTH))
        } else {
            truncate_display(value, FIELD_WIDTH)
        };
        let cursor = if focused { "_" } else { "" };
        let style = if value.is_empty() {
            Style::default().fg(self.palette.dim)
        } else {
            Style::default().fg(self.palette.text)
        };
        let style = if focused {
            style.add_modifier(Modifier::UNDERLINED)
        } else {
            style
        };
        Span::styled(format!("[{shown}{cursor}]"), style)
    }

    fn chooser(&self, value_label: &str, focused: bool) -> Span<'a> {
        let style = if focused {
            Style::default()
                .fg(self.palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.palette.text)
        };
        Span::styled(
            format!(
                "< {} {} >",
                truncate_display(value_label, FIELD_WIDTH),
                self.glyphs.arrow_down
            ),
            style,
        )
    }
}

fn country_label(controller: &formdeck::SettingsController, value: &str) -> String {
    controller
        .catalog()
        .country(value)
        .map_or_else(|| value.to_string(), |entry| entry.label.clone())
}

fn format_label(controller: &formdeck::SettingsController, value: &str) -> String {
    controller
        .catalog()
        .text_format(value)
        .map_or_else(|| value.to_string(), |entry| entry.label.clone())
}
