use crate::outcome::Outcome;
use crate::prompt::Prompt;

/// Let a destructive action through only once the user has accepted it.
pub fn confirm_deletion(prompt: &dyn Prompt, message: &str) -> Outcome {
    if prompt.confirm(message) {
        Outcome::Proceed
    } else {
        Outcome::Cancel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::tests::ScriptedPrompt;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        prompt = {ScriptedPrompt::accepting(), ScriptedPrompt::declining()},
        expected_outcome = {Outcome::Proceed, Outcome::Cancel}
    )]
    fn should_follow_user_answer(prompt: ScriptedPrompt, expected_outcome: Outcome) {
        let outcome = confirm_deletion(&prompt, "Are you sure?");

        assert_eq!(expected_outcome, outcome);
        assert_eq!(vec!["Are you sure?".to_owned()], prompt.asked());
    }
}
