use crate::Result;
use crate::utils::get_window;
use model::navigation::NavigationTarget;
use model::prompt::Prompt;
use model::tools::LogOnError;

/// Asks through `window.confirm`.
pub struct BrowserPrompt;

impl Prompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        get_window()
            .and_then(|window| Ok(window.confirm_with_message(message)?))
            .log_on_error("Can't show confirmation dialog, treating it as declined.", false)
    }
}

/// Sends the current browsing context somewhere else.
pub trait Navigator {
    fn navigate(&self, target: &NavigationTarget) -> Result<()>;
}

/// Navigates by setting `location.href`.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, target: &NavigationTarget) -> Result<()> {
        get_window()?.location().set_href(target.as_str())?;
        Ok(())
    }
}
