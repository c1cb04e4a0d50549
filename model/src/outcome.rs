/// What a handler does with the default action of the event it received.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    Proceed,
    Cancel,
}

impl Outcome {
    pub fn is_cancel(&self) -> bool {
        *self == Outcome::Cancel
    }
}
