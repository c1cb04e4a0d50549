/// A synchronous yes/no question asked to the user.
pub trait Prompt {
    /// Returns `true` when the user accepts.
    fn confirm(&self, message: &str) -> bool;
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::Prompt;
    use std::cell::RefCell;

    /// Always gives the same answer and remembers every question.
    pub struct ScriptedPrompt {
        answer: bool,
        asked: RefCell<Vec<String>>,
    }

    impl ScriptedPrompt {
        pub fn accepting() -> Self {
            Self {
                answer: true,
                asked: RefCell::new(vec![]),
            }
        }

        pub fn declining() -> Self {
            Self {
                answer: false,
                asked: RefCell::new(vec![]),
            }
        }

        pub fn asked(&self) -> Vec<String> {
            self.asked.borrow().clone()
        }
    }

    impl Prompt for ScriptedPrompt {
        fn confirm(&self, message: &str) -> bool {
            self.asked.borrow_mut().push(message.to_owned());
            self.answer
        }
    }
}
