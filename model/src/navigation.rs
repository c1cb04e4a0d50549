use crate::error::NavigationError;
use std::fmt::{Display, Formatter};

/// Where a clicked element sends the browser. Never blank.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NavigationTarget(String);

impl NavigationTarget {
    /// Build a target from the raw value of `attribute_name`, as read on the clicked element.
    pub fn from_attribute(
        attribute_name: &str,
        value: Option<String>,
    ) -> Result<Self, NavigationError> {
        let value =
            value.ok_or_else(|| NavigationError::MissingAttribute(attribute_name.to_owned()))?;
        let value = value.trim();
        if value.is_empty() {
            Err(NavigationError::BlankAttribute(attribute_name.to_owned()))
        } else {
            Ok(Self(value.to_owned()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NavigationTarget {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
