use model::error::ConfigError;
use std::fmt::{Debug, Display, Formatter};
use wasm_bindgen::JsValue;
use web_sys::{Element, Node};

pub struct Error {
    msg: String,
    parent: Option<Box<Error>>,
}

impl Error {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            parent: None,
        }
    }

    pub fn from_parent(msg: impl Into<String>, parent: Error) -> Self {
        Self {
            msg: msg.into(),
            parent: Some(Box::from(parent)),
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.parent {
            None => {
                write!(f, "{}", self.msg)
            }
            Some(parent) => {
                write!(f, "{}: caused by:\n{:?}", self.msg, parent)
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::new(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<Element> for Error {
    fn from(element: Element) -> Self {
        Self::new(format!("A cast has failed for element: {element:?}"))
    }
}

impl From<Node> for Error {
    fn from(node: Node) -> Self {
        Self::new(format!("A cast has failed for node: {node:?}"))
    }
}

impl From<ConfigError> for Error {
    fn from(error: ConfigError) -> Self {
        Self::new(error.to_string())
    }
}
