use crate::error::ConfigError;
use derive_getters::Getters;
use serde::Deserialize;

/// Selectors and messages used by the page behaviours.
/// Every key is optional: what is missing keeps its default value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Getters)]
#[serde(default)]
pub struct Config {
    delete_confirmation: DeleteConfirmationConfig,
    date_picker: DatePickerConfig,
    weekend_guard: WeekendGuardConfig,
    submission_guard: SubmissionGuardConfig,
    checkbox_gate: CheckboxGateConfig,
    bar_navigation: BarNavigationConfig,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json_wasm::from_str(json).map_err(|error| ConfigError::Invalid(error.to_string()))
    }
}

// region Sections
#[derive(Debug, Clone, PartialEq, Deserialize, Getters)]
#[serde(default)]
pub struct DeleteConfirmationConfig {
    trigger: String,
    message: String,
}

impl Default for DeleteConfirmationConfig {
    fn default() -> Self {
        Self {
            trigger: "#deletebutton".to_owned(),
            message: "Are you sure?".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Getters)]
#[serde(default)]
pub struct DatePickerConfig {
    native_picker: String,
    fallback_picker: String,
    /// `display` value given to the fallback picker when it replaces the native one.
    fallback_display: String,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            native_picker: ".nativeDatePicker".to_owned(),
            fallback_picker: ".fallbackDatePicker".to_owned(),
            fallback_display: "inline".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Getters)]
#[serde(default)]
pub struct WeekendGuardConfig {
    form: String,
    date_field: String,
    message: String,
}

impl Default for WeekendGuardConfig {
    fn default() -> Self {
        Self {
            form: "#form".to_owned(),
            date_field: "#date1".to_owned(),
            message: "The date selected is a weekend where exchanges are normally closed, Press OK if you want to continue.".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Getters)]
#[serde(default)]
pub struct SubmissionGuardConfig {
    forms: String,
}

impl Default for SubmissionGuardConfig {
    fn default() -> Self {
        Self {
            forms: "form".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Getters)]
#[serde(default)]
pub struct CheckboxGateConfig {
    checkboxes: String,
    button: String,
}

impl Default for CheckboxGateConfig {
    fn default() -> Self {
        Self {
            checkboxes: r#"input[type="checkbox"]"#.to_owned(),
            button: "#button".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Getters)]
#[serde(default)]
pub struct BarNavigationConfig {
    bars: String,
    attribute: String,
}

impl Default for BarNavigationConfig {
    fn default() -> Self {
        Self {
            bars: ".bar".to_owned(),
            attribute: "data-link".to_owned(),
        }
    }
}
// endregion
