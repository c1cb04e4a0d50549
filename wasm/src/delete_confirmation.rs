use crate::Result;
use crate::utils::{Root, add_event_listener};
use model::config::DeleteConfirmationConfig;
use model::delete_confirmation::confirm_deletion;
use model::prompt::Prompt;
use std::rc::Rc;
use web_sys::Event;

/// Ask for a confirmation before the delete trigger does anything.
pub fn init_delete_confirmation(
    root: &impl Root,
    config: &DeleteConfirmationConfig,
    prompt: Rc<dyn Prompt>,
) -> Result<()> {
    let Some(trigger) = root.find_first(config.trigger())? else {
        log::debug!("No delete trigger matching `{}`, skipping.", config.trigger());
        return Ok(());
    };

    let message = config.message().clone();
    add_event_listener(&[trigger], "click", move |event: Event| {
        if confirm_deletion(prompt.as_ref(), &message).is_cancel() {
            event.prevent_default();
        }
    })
}
