use crate::Result;
use crate::error::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn get_window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::new("No global `window` exists."))
}

pub fn get_document() -> Result<Document> {
    get_window()?
        .document()
        .ok_or_else(|| Error::new("No document on window."))
}

// region Root
/// Where a behaviour looks for its elements: the whole document or a single container.
pub trait Root {
    fn find_first(&self, selectors: &str) -> Result<Option<Element>>;

    fn find_all(&self, selectors: &str) -> Result<NodeList>;
}

impl Root for Document {
    fn find_first(&self, selectors: &str) -> Result<Option<Element>> {
        Ok(self.query_selector(selectors)?)
    }

    fn find_all(&self, selectors: &str) -> Result<NodeList> {
        Ok(self.query_selector_all(selectors)?)
    }
}

impl Root for Element {
    fn find_first(&self, selectors: &str) -> Result<Option<Element>> {
        Ok(self.query_selector(selectors)?)
    }

    fn find_all(&self, selectors: &str) -> Result<NodeList> {
        Ok(self.query_selector_all(selectors)?)
    }
}

pub fn query_selector_optional<T: JsCast>(root: &impl Root, selectors: &str) -> Result<Option<T>> {
    match root.find_first(selectors)? {
        None => Ok(None),
        Some(element) => Ok(Some(element.dyn_into::<T>()?)),
    }
}

pub fn query_selector_all_dyn<T: JsCast>(root: &impl Root, selectors: &str) -> Result<Vec<T>> {
    let nodes = root.find_all(selectors)?;
    let mut elements = vec![];
    for index in 0..nodes.length() {
        if let Some(node) = nodes.item(index) {
            elements.push(node.dyn_into::<T>()?);
        }
    }

    Ok(elements)
}
// endregion

pub fn set_display(element: &HtmlElement, display: &str) -> Result<()> {
    element.style().set_property("display", display)?;
    Ok(())
}

/// Attach the same handler to every target.
/// The listener is leaked: it lives as long as the page.
pub fn add_event_listener<T, F>(targets: &[T], event_type: &str, handler: F) -> Result<()>
where
    T: AsRef<EventTarget>,
    F: FnMut(Event) + 'static,
{
    attach_listener(targets, event_type, false, handler)
}

/// Same as [`add_event_listener`], in the capture phase.
/// On its own target, a capturing listener runs before every bubbling one.
pub fn add_capturing_event_listener<T, F>(targets: &[T], event_type: &str, handler: F) -> Result<()>
where
    T: AsRef<EventTarget>,
    F: FnMut(Event) + 'static,
{
    attach_listener(targets, event_type, true, handler)
}

fn attach_listener<T, F>(targets: &[T], event_type: &str, capture: bool, handler: F) -> Result<()>
where
    T: AsRef<EventTarget>,
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    for target in targets {
        target.as_ref().add_event_listener_with_event_listener_and_bool(
            event_type,
            closure.as_ref().unchecked_ref(),
            capture,
        )?;
    }
    closure.forget();

    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
pub mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::EventInit;

    wasm_bindgen_test_configure!(run_in_browser);

    /// A detached `div` holding `inner_html`, so that tests never see each other's elements.
    pub fn create_container(inner_html: &str) -> Element {
        let container = get_document().unwrap().create_element("div").unwrap();
        container.set_inner_html(inner_html);
        container
    }

    /// Dispatch a bubbling, cancelable event.
    /// Returns `false` when a listener prevented the default action.
    pub fn dispatch(target: &EventTarget, event_type: &str) -> bool {
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = Event::new_with_event_init_dict(event_type, &init).unwrap();
        target.dispatch_event(&event).unwrap()
    }

    pub fn find(root: &Element, selectors: &str) -> Element {
        root.find_first(selectors).unwrap().unwrap()
    }

    #[wasm_bindgen_test]
    fn should_get_window() {
        get_window().unwrap();
    }

    #[wasm_bindgen_test]
    fn should_query_inside_container_only() {
        let container =
            create_container(r#"<p class="item">1</p><div><p class="item">2</p></div>"#);

        let items = query_selector_all_dyn::<HtmlElement>(&container, ".item").unwrap();
        let missing = query_selector_optional::<HtmlElement>(&container, ".missing").unwrap();

        assert_eq!(2, items.len());
        assert_eq!(Some("2".to_owned()), items[1].text_content());
        assert!(missing.is_none());
    }

    #[wasm_bindgen_test]
    fn should_fail_on_wrong_element_type() {
        let container = create_container("<p>text</p>");

        let result = query_selector_optional::<web_sys::HtmlInputElement>(&container, "p");

        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn should_share_handler_between_targets() {
        let container = create_container("<span></span><span></span>");
        let spans = query_selector_all_dyn::<Element>(&container, "span").unwrap();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();

        add_event_listener(spans.as_slice(), "click", move |_: Event| {
            counter.set(counter.get() + 1)
        })
        .unwrap();
        dispatch(&spans[0], "click");
        dispatch(&spans[1], "click");

        assert_eq!(2, calls.get());
    }

    #[wasm_bindgen_test]
    fn should_run_capturing_listener_first() {
        let container = create_container("<span></span>");
        let span = find(&container, "span");
        let order = Rc::new(std::cell::RefCell::new(vec![]));
        let bubbling = order.clone();
        let capturing = order.clone();

        add_event_listener(&[span.clone()], "click", move |_: Event| {
            bubbling.borrow_mut().push("bubble")
        })
        .unwrap();
        add_capturing_event_listener(&[span.clone()], "click", move |_: Event| {
            capturing.borrow_mut().push("capture")
        })
        .unwrap();
        dispatch(&span, "click");

        assert_eq!(vec!["capture", "bubble"], *order.borrow());
    }
}
