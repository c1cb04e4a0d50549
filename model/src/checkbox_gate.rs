#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ButtonState {
    Enabled,
    Disabled,
}

impl ButtonState {
    pub fn is_disabled(&self) -> bool {
        *self == ButtonState::Disabled
    }
}

/// The button is enabled as soon as one box is checked.
/// The scan stops at the first checked box.
pub fn compute_button_state<I>(checked_states: I) -> ButtonState
where
    I: IntoIterator<Item = bool>,
{
    if checked_states.into_iter().any(|checked| checked) {
        ButtonState::Enabled
    } else {
        ButtonState::Disabled
    }
}
