//! Read-only option catalogs the settings screen consumes and never mutates.

use serde::{Deserialize, Serialize};

/// One settings-section tab, optionally carrying a notification badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_count: Option<u32>,
}

/// Generic value/label pair backing the country and text-format dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCode {
    pub value: String,
    pub code: String,
}

/// Timezone row. `name`, `abbreviation`, and `utc` are not guaranteed for
/// every locale entry; formatting falls back to `label`/`value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneEntry {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordRequirement {
    pub id: String,
    pub text: String,
}

/// Top-level page entry shown in the dashboard sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarPage {
    pub id: String,
    pub label: String,
}

/// Static label text for the settings form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormLabels {
    pub personal_information: String,
    pub personal_information_subtext: String,
    pub name: String,
    pub email: String,
    pub your_photo: String,
    pub your_photo_subtext: String,
    pub change_password: String,
    pub change_password_note: String,
    pub old_password: String,
    pub new_password: String,
    pub role: String,
    pub role_note: String,
    pub country: String,
    pub mobile_number: String,
    pub timezone: String,
    pub bio: String,
    pub bio_subtext: String,
}

impl Default for FormLabels {
    fn default() -> Self {
        Self {
            personal_information: "Personal Information".to_string(),
            personal_information_subtext: "Update your photo and personal details here."
                .to_string(),
            name: "Name".to_string(),
            email: "Email Address".to_string(),
            your_photo: "Your photo".to_string(),
            your_photo_subtext: "This will be displayed on your profile.".to_string(),
            change_password: "Change Password".to_string(),
            change_password_note: "Your new password must be different from previous passwords."
                .to_string(),
            old_password: "Old Password".to_string(),
            new_password: "New Password".to_string(),
            role: "Role".to_string(),
            role_note: "Role can only be changed by an admin under".to_string(),
            country: "Country".to_string(),
            mobile_number: "Mobile Number".to_string(),
            timezone: "Timezone".to_string(),
            bio: "Bio".to_string(),
            bio_subtext: "Write a short introduction.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub old_password: String,
    pub new_password: String,
    pub role: String,
    pub mobile_number: String,
    pub bio: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            first_name: "Enter first name".to_string(),
            last_name: "Enter last name".to_string(),
            email: "Enter email address".to_string(),
            old_password: "Enter old password".to_string(),
            new_password: "Enter new password".to_string(),
            role: "Enter your role".to_string(),
            mobile_number: "Enter mobile number".to_string(),
            bio: "Write something about yourself...".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonLabels {
    pub cancel: String,
    pub save: String,
    pub verify: String,
    pub reset_password: String,
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            cancel: "Cancel".to_string(),
            save: "Save".to_string(),
            verify: "Verify".to_string(),
            reset_password: "Reset Password".to_string(),
        }
    }
}

/// The full option catalog handed to the settings screen at construction.
///
/// Hosts may supply their own as JSON; missing tables fall back to the
/// built-in data set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub navigation_items: Vec<NavigationItem>,
    pub countries: Vec<ChoiceOption>,
    pub country_codes: Vec<CountryCode>,
    pub timezones: Vec<TimezoneEntry>,
    pub text_formats: Vec<ChoiceOption>,
    pub password_requirements: Vec<PasswordRequirement>,
    pub menu_pages: Vec<SidebarPage>,
    pub footer_pages: Vec<SidebarPage>,
    pub labels: FormLabels,
    pub placeholders: Placeholders,
    pub buttons: ButtonLabels,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Calling-code prefix used when the selected country code is not cataloged.
pub const FALLBACK_CALLING_CODE: &str = "+1";

impl Catalog {
    /// Built-in data set matching the stock dashboard.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            navigation_items: vec![
                nav_item("my-details", "My details", None),
                nav_item("profile", "Profile", None),
                nav_item("password", "Password", None),
                nav_item("team", "Team", Some(4)),
                nav_item("plan", "Plan", None),
                nav_item("billing", "Billing", None),
                nav_item("notifications", "Notifications", Some(2)),
            ],
            countries: vec![
                choice("", "Select Country"),
                choice("AU", "Australia"),
                choice("CA", "Canada"),
                choice("DE", "Germany"),
                choice("IN", "India"),
                choice("JP", "Japan"),
                choice("GB", "United Kingdom"),
                choice("US", "United States"),
            ],
            country_codes: vec![
                country_code("US", "+1"),
                country_code("CA", "+1"),
                country_code("GB", "+44"),
                country_code("AU", "+61"),
                country_code("DE", "+49"),
                country_code("IN", "+91"),
                country_code("JP", "+81"),
            ],
            timezones: vec![
                TimezoneEntry {
                    value: String::new(),
                    label: "Select Timezone".to_string(),
                    name: None,
                    abbreviation: None,
                    utc: None,
                },
                timezone("pst", "Pacific Standard Time (PST) UTC-08:00",
                    Some("Pacific Standard Time"), Some("PST"), Some("UTC-08:00")),
                timezone("mst", "Mountain Standard Time (MST) UTC-07:00",
                    Some("Mountain Standard Time"), Some("MST"), Some("UTC-07:00")),
                timezone("cst", "Central Standard Time (CST) UTC-06:00",
                    Some("Central Standard Time"), Some("CST"), Some("UTC-06:00")),
                timezone("est", "Eastern Standard Time (EST) UTC-05:00",
                    Some("Eastern Standard Time"), Some("EST"), Some("UTC-05:00")),
                timezone("gmt", "Greenwich Mean Time (GMT) UTC+00:00",
                    Some("Greenwich Mean Time"), Some("GMT"), Some("UTC+00:00")),
                timezone("cet", "Central European Time (CET) UTC+01:00",
                    Some("Central European Time"), Some("CET"), Some("UTC+01:00")),
                timezone("ist", "India Standard Time (IST) UTC+05:30",
                    Some("India Standard Time"), Some("IST"), Some("UTC+05:30")),
                timezone("jst", "Japan Standard Time (JST) UTC+09:00",
                    Some("Japan Standard Time"), Some("JST"), Some("UTC+09:00")),
                timezone("aest", "Australian Eastern Standard Time (AEST) UTC+10:00",
                    Some("Australian Eastern Standard Time"), Some("AEST"), Some("UTC+10:00")),
                // Sparse locale rows; formatting must fall back to label/value.
                timezone("utc", "Coordinated Universal Time UTC+00:00",
                    Some("Coordinated Universal Time"), None, Some("UTC+00:00")),
                timezone("local", "Local Time", None, None, None),
            ],
            text_formats: vec![
                choice("regular", "Regular"),
                choice("medium", "Medium"),
                choice("semibold", "Semi Bold"),
                choice("bold", "Bold"),
            ],
            password_requirements: vec![
                requirement("length", "Must be at least 8 characters"),
                requirement("special", "Must contain one special character"),
                requirement("case", "Must contain one uppercase letter"),
            ],
            menu_pages: vec![
                page("dashboard", "Dashboard"),
                page("products", "Products"),
                page("customers", "Customers"),
                page("marketing", "Marketing"),
                page("reporting", "Reporting"),
                page("settings", "Settings"),
            ],
            footer_pages: vec![page("support", "Support")],
            labels: FormLabels::default(),
            placeholders: Placeholders::default(),
            buttons: ButtonLabels::default(),
        }
    }

    /// Parse a host-supplied catalog; absent tables keep built-in defaults
    /// only when the host omits them entirely (serde `default`).
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[must_use]
    pub fn navigation_item(&self, id: &str) -> Option<&NavigationItem> {
        self.navigation_items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn timezone(&self, value: &str) -> Option<&TimezoneEntry> {
        self.timezones.iter().find(|entry| entry.value == value)
    }

    #[must_use]
    pub fn country(&self, value: &str) -> Option<&ChoiceOption> {
        self.countries.iter().find(|entry| entry.value == value)
    }

    #[must_use]
    pub fn text_format(&self, value: &str) -> Option<&ChoiceOption> {
        self.text_formats.iter().find(|entry| entry.value == value)
    }

    #[must_use]
    pub fn country_code(&self, value: &str) -> Option<&CountryCode> {
        self.country_codes.iter().find(|entry| entry.value == value)
    }

    /// Calling-code prefix for the selected country code, `+1` on a miss.
    #[must_use]
    pub fn calling_code(&self, value: &str) -> &str {
        self.country_code(value)
            .map_or(FALLBACK_CALLING_CODE, |entry| entry.code.as_str())
    }
}

fn nav_item(id: &str, label: &str, notification_count: Option<u32>) -> NavigationItem {
    NavigationItem {
        id: id.to_string(),
        label: label.to_string(),
        notification_count,
    }
}

fn choice(value: &str, label: &str) -> ChoiceOption {
    ChoiceOption {
        value: value.to_string(),
        label: label.to_string(),
    }
}

fn country_code(value: &str, code: &str) -> CountryCode {
    CountryCode {
        value: value.to_string(),
        code: code.to_string(),
    }
}

fn timezone(
    value: &str,
    label: &str,
    name: Option<&str>,
    abbreviation: Option<&str>,
    utc: Option<&str>,
) -> TimezoneEntry {
    TimezoneEntry {
        value: value.to_string(),
        label: label.to_string(),
        name: name.map(str::to_string),
        abbreviation: abbreviation.map(str::to_string),
        utc: utc.map(str::to_string),
    }
}

fn requirement(id: &str, text: &str) -> PasswordRequirement {
    PasswordRequirement {
        id: id.to_string(),
        text: text.to_string(),
    }
}

fn page(id: &str, label: &str) -> SidebarPage {
    SidebarPage {
        id: id.to_string(),
        label: label.to_string(),
    }
}
