use crate::Result;
use crate::utils::{Root, add_event_listener, query_selector_all_dyn};
use model::checkbox_gate::compute_button_state;
use model::config::CheckboxGateConfig;
use model::tools::LogOnError;
use web_sys::{Element, Event, HtmlInputElement};

/// Keep the action button disabled while no checkbox is checked.
pub fn init_checkbox_gate(root: &impl Root, config: &CheckboxGateConfig) -> Result<()> {
    let Some(button) = root.find_first(config.button())? else {
        log::debug!("No gated button matching `{}`, skipping.", config.button());
        return Ok(());
    };
    let checkboxes = query_selector_all_dyn::<HtmlInputElement>(root, config.checkboxes())?;
    if checkboxes.is_empty() {
        log::debug!("No checkboxes matching `{}`, skipping.", config.checkboxes());
        return Ok(());
    }
    update_button(&button, &checkboxes)?;

    let tracked_checkboxes = checkboxes.clone();
    add_event_listener(checkboxes.as_slice(), "click", move |_: Event| {
        update_button(&button, &tracked_checkboxes).log_on_error("Can't update gated button.", ());
    })
}

fn update_button(button: &Element, checkboxes: &[HtmlInputElement]) -> Result<()> {
    let state = compute_button_state(checkboxes.iter().map(HtmlInputElement::checked));
    button.toggle_attribute_with_force("disabled", state.is_disabled())?;

    Ok(())
}
