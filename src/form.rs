//! Field store for the settings form: one owned aggregate, merged a single
//! field at a time. Writes cannot fail; catalog-backed fields are only ever
//! written from catalog-rendered choices.

use crate::image::StagedImage;

/// Every text-backed field in the form. The staged profile image is set
/// through the staging pipeline, not through `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    OldPassword,
    NewPassword,
    Role,
    Country,
    CountryCode,
    MobileNumber,
    Timezone,
    Bio,
    FontFamily,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub old_password: String,
    pub new_password: String,
    pub role: String,
    pub country: String,
    pub country_code: String,
    pub mobile_number: String,
    pub timezone: String,
    pub bio: String,
    pub font_family: String,
    pub profile_image: Option<StagedImage>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            old_password: String::new(),
            new_password: String::new(),
            role: String::new(),
            country: String::new(),
            country_code: "US".to_string(),
            mobile_number: String::new(),
            timezone: String::new(),
            bio: String::new(),
            font_family: "regular".to_string(),
            profile_image: None,
        }
    }
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one field, leaving every other field untouched.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldId::FirstName => self.first_name = value,
            FieldId::LastName => self.last_name = value,
            FieldId::Email => self.email = value,
            FieldId::OldPassword => self.old_password = value,
            FieldId::NewPassword => self.new_password = value,
            FieldId::Role => self.role = value,
            FieldId::Country => self.country = value,
            FieldId::CountryCode => self.country_code = value,
            FieldId::MobileNumber => self.mobile_number = value,
            FieldId::Timezone => self.timezone = value,
            FieldId::Bio => self.bio = value,
            FieldId::FontFamily => self.font_family = value,
        }
    }

    #[must_use]
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::OldPassword => &self.old_password,
            FieldId::NewPassword => &self.new_password,
            FieldId::Role => &self.role,
            FieldId::Country => &self.country,
            FieldId::CountryCode => &self.country_code,
            FieldId::MobileNumber => &self.mobile_number,
            FieldId::Timezone => &self.timezone,
            FieldId::Bio => &self.bio,
            FieldId::FontFamily => &self.font_family,
        }
    }

    /// Append one typed character to a field.
    pub fn push_char(&mut self, field: FieldId, ch: char) {
        let mut value = self.value(field).to_string();
        value.push(ch);
        self.set(field, value);
    }

    /// Remove the last character of a field, if any.
    pub fn pop_char(&mut self, field: FieldId) {
        let mut value = self.value(field).to_string();
        value.pop();
        self.set(field, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_initial_screen_state() {
        let form = FormState::new();
        assert_eq!(form.country_code, "US");
        assert_eq!(form.font_family, "regular");
        assert_eq!(form.timezone, "");
        assert!(form.profile_image.is_none());
        assert_eq!(form.first_name, "");
    }

    #[test]
    fn setting_one_field_leaves_every_other_field_alone() {
        let mut form = FormState::new();
        form.set(FieldId::Email, "ada@example.com");
        form.set(FieldId::FirstName, "Ada");
        form.set(FieldId::LastName, "Lovelace");

        assert_eq!(form.first_name, "Ada");
        assert_eq!(form.last_name, "Lovelace");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.country_code, "US");
        assert_eq!(form.bio, "");
    }

    #[test]
    fn push_and_pop_edit_only_the_addressed_field() {
        let mut form = FormState::new();
        form.push_char(FieldId::Role, 'd');
        form.push_char(FieldId::Role, 'e');
        form.push_char(FieldId::Role, 'v');
        assert_eq!(form.role, "dev");

        form.pop_char(FieldId::Role);
        assert_eq!(form.role, "de");
        assert_eq!(form.first_name, "");

        // Popping an empty field is a no-op, not an error.
        form.pop_char(FieldId::FirstName);
        assert_eq!(form.first_name, "");
    }
}
