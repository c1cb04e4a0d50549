use crate::Result;
use crate::browser::Navigator;
use crate::utils::{Root, add_event_listener, query_selector_all_dyn};
use model::config::BarNavigationConfig;
use model::navigation::NavigationTarget;
use model::tools::LogOnError;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

/// Make every bar navigate to the link it carries.
/// A single listener serves all bars: the clicked one is the event's current target.
pub fn init_bar_navigation(
    root: &impl Root,
    config: &BarNavigationConfig,
    navigator: Rc<dyn Navigator>,
) -> Result<()> {
    let bars = query_selector_all_dyn::<Element>(root, config.bars())?;
    if bars.is_empty() {
        log::debug!("No bars matching `{}`, skipping.", config.bars());
        return Ok(());
    }

    let attribute = config.attribute().clone();
    add_event_listener(bars.as_slice(), "click", move |event: Event| {
        follow_clicked_bar(&event, &attribute, navigator.as_ref());
    })?;
    log::info!("Navigation installed on {} bar(s).", bars.len());

    Ok(())
}

fn follow_clicked_bar(event: &Event, attribute: &str, navigator: &dyn Navigator) {
    let Some(bar) = event
        .current_target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        log::error!("Clicked bar is not an element.");
        return;
    };

    match NavigationTarget::from_attribute(attribute, bar.get_attribute(attribute)) {
        Ok(target) => navigator
            .navigate(&target)
            .log_on_error(&format!("Can't navigate to `{target}`."), ()),
        Err(error) => log::warn!("Bar can't be followed: {error}"),
    }
}
