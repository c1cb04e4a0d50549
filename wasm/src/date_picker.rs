use crate::Result;
use crate::utils::{Root, get_document, query_selector_optional, set_display};
use model::config::DatePickerConfig;
use model::date_picker::{DatePickerMode, HIDDEN};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

/// Swap the native date picker for the fallback one when the browser has no date widget.
pub fn init_date_picker(root: &impl Root, config: &DatePickerConfig) -> Result<()> {
    let native_picker = query_selector_optional::<HtmlElement>(root, config.native_picker())?;
    let fallback_picker = query_selector_optional::<HtmlElement>(root, config.fallback_picker())?;
    let (Some(native_picker), Some(fallback_picker)) = (native_picker, fallback_picker) else {
        log::debug!("No date pickers on this page, skipping.");
        return Ok(());
    };

    let mode = detect_date_picker_mode(&get_document()?)?;
    apply_date_picker_mode(&native_picker, &fallback_picker, mode, config)?;
    log::info!("Date picker mode: {mode:?}");

    Ok(())
}

/// Show only the picker matching `mode`.
pub fn apply_date_picker_mode(
    native_picker: &HtmlElement,
    fallback_picker: &HtmlElement,
    mode: DatePickerMode,
    config: &DatePickerConfig,
) -> Result<()> {
    match mode {
        DatePickerMode::Native => set_display(fallback_picker, HIDDEN),
        DatePickerMode::Fallback => {
            set_display(native_picker, HIDDEN)?;
            set_display(fallback_picker, config.fallback_display())
        }
    }
}

/// Ask a fresh input to become a date input and look at what it really became.
pub fn detect_date_picker_mode(document: &Document) -> Result<DatePickerMode> {
    let input = document
        .create_element("input")?
        .dyn_into::<HtmlInputElement>()?;
    if let Err(error) = input.set_attribute("type", "date") {
        log::error!("Can't turn an input into a date input: {error:?}");
    }

    Ok(DatePickerMode::from_input_type(&input.type_()))
}
