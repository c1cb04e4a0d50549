use crate::Result;
use crate::utils::{Root, add_capturing_event_listener, add_event_listener, query_selector_all_dyn};
use model::config::SubmissionGuardConfig;
use model::submission_guard::SubmissionGuard;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Element, Event};

/// Let every form of the page be submitted only once.
///
/// Each form gets its own guard, shared by two listeners:
/// - a capturing one, suppressing later submissions before the page's other listeners see them,
/// - a bubbling one, marking the form as submitting once every other listener let it through.
pub fn init_submission_guard(root: &impl Root, config: &SubmissionGuardConfig) -> Result<()> {
    let forms = query_selector_all_dyn::<Element>(root, config.forms())?;
    for form in &forms {
        let guard = Rc::new(RefCell::new(SubmissionGuard::new()));

        let interceptor = guard.clone();
        add_capturing_event_listener(std::slice::from_ref(form), "submit", move |event: Event| {
            let mut guard = interceptor.borrow_mut();
            if guard.intercept().is_cancel() {
                event.prevent_default();
                event.stop_immediate_propagation();
                log::debug!(
                    "Form is already submitting, submission suppressed [count: {}]",
                    guard.suppressed()
                );
            }
        })?;

        add_event_listener(std::slice::from_ref(form), "submit", move |event: Event| {
            if guard.borrow_mut().on_submit(event.default_prevented()).is_cancel() {
                event.prevent_default();
                event.stop_propagation();
            }
        })?;
    }
    log::info!("Submit-once guard installed on {} form(s).", forms.len());

    Ok(())
}
