pub mod bar_navigation;
pub mod browser;
pub mod checkbox_gate;
pub mod config;
pub mod date_picker;
pub mod delete_confirmation;
pub mod error;
pub mod submission_guard;
pub mod utils;
pub mod weekend_guard;

use crate::browser::{BrowserNavigator, BrowserPrompt, Navigator};
use crate::error::Error;
use crate::utils::get_document;
use model::prompt::Prompt;
use model::tools::LogOnError;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[wasm_bindgen(start)]
fn run() {
    utils::set_panic_hook();
    wasm_logger::init(wasm_logger::Config::default());
    init_page().log_on_error("Can't initialize page.", ());
}

/// Install every behaviour on the current document.
/// A behaviour failing to initialize doesn't prevent the next ones from being installed.
fn init_page() -> Result<()> {
    let document = get_document()?;
    let config = config::load_config(&document);
    let prompt: Rc<dyn Prompt> = Rc::new(BrowserPrompt);
    let navigator: Rc<dyn Navigator> = Rc::new(BrowserNavigator);

    report(
        "delete confirmation",
        delete_confirmation::init_delete_confirmation(
            &document,
            config.delete_confirmation(),
            prompt.clone(),
        ),
    );
    report(
        "date picker",
        date_picker::init_date_picker(&document, config.date_picker()),
    );
    report(
        "weekend guard",
        weekend_guard::init_weekend_guard(&document, config.weekend_guard(), prompt),
    );
    report(
        "submit-once guard",
        submission_guard::init_submission_guard(&document, config.submission_guard()),
    );
    report(
        "checkbox gate",
        checkbox_gate::init_checkbox_gate(&document, config.checkbox_gate()),
    );
    report(
        "bar navigation",
        bar_navigation::init_bar_navigation(&document, config.bar_navigation(), navigator),
    );

    Ok(())
}

fn report(behaviour: &str, result: Result<()>) {
    result.log_on_error(&format!("Can't initialize {behaviour}."), ());
}
