use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("No date has been provided.")]
    Empty,
    #[error("`{0}` is not a valid date.")]
    Invalid(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Attribute `{0}` is missing.")]
    MissingAttribute(String),
    #[error("Attribute `{0}` is blank.")]
    BlankAttribute(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration is invalid: {0}")]
    Invalid(String),
}
