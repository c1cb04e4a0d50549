use crate::Result;
use crate::error::Error;
use model::config::Config;
use model::tools::LogOnError;
use web_sys::Document;

/// Id of the `<script type="application/json">` element overriding the default configuration.
pub const CONFIG_ELEMENT_ID: &str = "ui-config";

/// Load the page configuration.
/// Falls back to the defaults when the page brings none or when it can't be read.
pub fn load_config(document: &Document) -> Config {
    read_config(document)
        .log_on_error("Can't read page configuration, using defaults.", None)
        .unwrap_or_default()
}

fn read_config(document: &Document) -> Result<Option<Config>> {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let json = element.text_content().unwrap_or_default();

    let config = Config::from_json(&json).map_err(|error| {
        Error::from_parent(format!("`#{CONFIG_ELEMENT_ID}` is not valid."), error.into())
    })?;

    Ok(Some(config))
}
