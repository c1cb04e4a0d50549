use crate::Result;
use crate::utils::{Root, add_event_listener, query_selector_optional};
use model::config::WeekendGuardConfig;
use model::prompt::Prompt;
use model::weekend_guard::check_weekend;
use std::rc::Rc;
use web_sys::{Event, HtmlInputElement};

/// Warn before submitting a date on which exchanges are normally closed.
/// Declining clears the date and cancels the submission.
pub fn init_weekend_guard(
    root: &impl Root,
    config: &WeekendGuardConfig,
    prompt: Rc<dyn Prompt>,
) -> Result<()> {
    let form = root.find_first(config.form())?;
    let date_field = query_selector_optional::<HtmlInputElement>(root, config.date_field())?;
    let (Some(form), Some(date_field)) = (form, date_field) else {
        log::debug!("No date form on this page, skipping weekend guard.");
        return Ok(());
    };

    let message = config.message().clone();
    add_event_listener(&[form], "submit", move |event: Event| {
        let verdict = check_weekend(&date_field.value(), prompt.as_ref(), &message);
        log::debug!("Weekend guard verdict: {verdict:?}");

        if verdict.should_clear_date() {
            date_field.set_value("");
        }
        if verdict.outcome().is_cancel() {
            event.prevent_default();
        }
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::submission_guard::init_submission_guard;
    use crate::utils::tests::{create_container, dispatch, find};
    use model::config::SubmissionGuardConfig;
    use model::prompt::tests::ScriptedPrompt;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    const MARKUP: &str = r#"<form id="form"><input type="date" id="date1"></form>"#;

    fn create_form(date: &str) -> (Element, HtmlInputElement) {
        let container = create_container(MARKUP);
        let date_field = find(&container, "#date1")
            .dyn_into::<HtmlInputElement>()
            .unwrap();
        date_field.set_value(date);
        (container, date_field)
    }

    #[wasm_bindgen_test]
    fn should_clear_weekend_date_and_cancel_when_declined() {
        let (container, date_field) = create_form("2024-06-01");
        let prompt = Rc::new(ScriptedPrompt::declining());
        init_weekend_guard(&container, &WeekendGuardConfig::default(), prompt.clone()).unwrap();

        let submitted = dispatch(&find(&container, "#form"), "submit");

        assert!(!submitted);
        assert_eq!("", date_field.value());
        assert_eq!(
            vec![WeekendGuardConfig::default().message().clone()],
            prompt.asked()
        );
    }

    #[wasm_bindgen_test]
    fn should_keep_weekend_date_when_accepted() {
        let (container, date_field) = create_form("2024-06-02");
        let prompt = Rc::new(ScriptedPrompt::accepting());
        init_weekend_guard(&container, &WeekendGuardConfig::default(), prompt.clone()).unwrap();

        let submitted = dispatch(&find(&container, "#form"), "submit");

        assert!(submitted);
        assert_eq!("2024-06-02", date_field.value());
        assert_eq!(1, prompt.asked().len());
    }

    #[wasm_bindgen_test]
    fn should_not_ask_for_weekday_or_empty_date() {
        for date in ["2024-06-03", ""] {
            let (container, date_field) = create_form(date);
            let prompt = Rc::new(ScriptedPrompt::declining());
            init_weekend_guard(&container, &WeekendGuardConfig::default(), prompt.clone())
                .unwrap();

            let submitted = dispatch(&find(&container, "#form"), "submit");

            assert!(submitted);
            assert_eq!(date, date_field.value());
            assert!(prompt.asked().is_empty());
        }
    }

    #[wasm_bindgen_test]
    fn should_not_lock_form_after_declined_weekend() {
        let (container, date_field) = create_form("2024-06-01");
        let prompt = Rc::new(ScriptedPrompt::declining());
        init_weekend_guard(&container, &WeekendGuardConfig::default(), prompt).unwrap();
        init_submission_guard(&container, &SubmissionGuardConfig::default()).unwrap();
        let form = find(&container, "#form");

        assert!(!dispatch(&form, "submit"));

        date_field.set_value("2024-06-03");
        assert!(dispatch(&form, "submit"));
        assert!(!dispatch(&form, "submit"));
    }

    #[wasm_bindgen_test]
    fn should_not_ask_again_for_suppressed_submission() {
        let (container, date_field) = create_form("2024-06-01");
        let prompt = Rc::new(ScriptedPrompt::accepting());
        init_weekend_guard(&container, &WeekendGuardConfig::default(), prompt.clone()).unwrap();
        init_submission_guard(&container, &SubmissionGuardConfig::default()).unwrap();
        let form = find(&container, "#form");

        assert!(dispatch(&form, "submit"));
        assert!(!dispatch(&form, "submit"));

        assert_eq!(1, prompt.asked().len());
        assert_eq!("2024-06-01", date_field.value());
    }
}
