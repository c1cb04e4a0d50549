/// CSS `display` value hiding an element.
pub const HIDDEN: &str = "none";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DatePickerMode {
    Native,
    Fallback,
}

impl DatePickerMode {
    /// Decide from the type an input reports once it has been asked to become a date input.
    /// Browsers without a date widget silently keep `text`.
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type.trim().eq_ignore_ascii_case("text") {
            DatePickerMode::Fallback
        } else {
            DatePickerMode::Native
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        input_type = {"date", "text", "TEXT", ""},
        expected_mode = {DatePickerMode::Native, DatePickerMode::Fallback, DatePickerMode::Fallback, DatePickerMode::Native}
    )]
    fn should_detect_mode(input_type: &str, expected_mode: DatePickerMode) {
        assert_eq!(expected_mode, DatePickerMode::from_input_type(input_type));
    }
}
