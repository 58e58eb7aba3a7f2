use crate::utils::*;
use enhancer_core as enhancer;
use enhancer::{CopyFeedback, CopyOutcome, PageConfig, TriggerSurface};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use gloo::utils::{document, window};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::Element;

pub(crate) struct Trigger(Element);

impl TriggerSurface for Trigger {
    fn label(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_label(&mut self, label: &str) {
        self.0.set_text_content(Some(label));
    }

    fn set_confirmed(&mut self, confirmed: bool) {
        use enhancer::{NEUTRAL_CLASS, SUCCESS_CLASS};
        let classes = self.0.class_list();
        let result = if confirmed {
            classes
                .add_1(SUCCESS_CLASS)
                .and_then(|_| classes.remove_1(NEUTRAL_CLASS))
        } else {
            classes
                .remove_1(SUCCESS_CLASS)
                .and_then(|_| classes.add_1(NEUTRAL_CLASS))
        };
        if let Err(err) = result {
            log::error!("failed to restyle copy button: {}", describe_js(&err));
        }
    }
}

pub(crate) struct CopyButton {
    trigger: Trigger,
    feedback: CopyFeedback<Timeout>,
}

impl CopyButton {
    fn new(element: Element) -> Self {
        Self {
            trigger: Trigger(element),
            feedback: CopyFeedback::new(),
        }
    }
}

/// Text of the element a trigger points at, or `None` when the reference does
/// not resolve.
pub(crate) fn target_text(reference: Option<&str>) -> Option<String> {
    let target = document().get_element_by_id(enhancer::target_id(reference)?)?;
    Some(target.text_content().unwrap_or_default())
}

async fn write_clipboard(text: &str) -> CopyOutcome {
    let promise = window().navigator().clipboard().write_text(text);
    match JsFuture::from(promise).await {
        Ok(_) => CopyOutcome::Copied,
        Err(err) => CopyOutcome::Failed(describe_js(&err)),
    }
}

/// Shows the confirmation and schedules the revert, replacing any revert that
/// is still pending on this button.
fn confirm(button: &Rc<RefCell<CopyButton>>) {
    let weak = Rc::downgrade(button);
    let mut state = button.borrow_mut();
    let CopyButton { trigger, feedback } = &mut *state;
    feedback.confirm(trigger, move || {
        Timeout::new(enhancer::REVERT_DELAY_MS, move || {
            if let Some(button) = weak.upgrade() {
                let mut state = button.borrow_mut();
                let CopyButton { trigger, feedback } = &mut *state;
                feedback.expire(trigger);
            }
        })
    });
}

/// Applies the result of a copy. `alert` is how a failure reaches the user,
/// `gloo::dialogs::alert` outside of tests.
pub(crate) fn finish(
    button: &Rc<RefCell<CopyButton>>,
    outcome: CopyOutcome,
    alert: impl FnOnce(&str),
) {
    match &outcome {
        CopyOutcome::Copied => confirm(button),
        CopyOutcome::Failed(reason) => log::error!("Failed to copy text: {}", reason),
        CopyOutcome::TargetMissing => log::debug!("copy target not found"),
    }
    if let Some(message) = outcome.alert_message() {
        alert(message);
    }
}

fn on_click(button: &Rc<RefCell<CopyButton>>, attribute: &str) {
    let reference = button.borrow().trigger.0.get_attribute(attribute);
    let Some(text) = target_text(reference.as_deref()) else {
        finish(button, CopyOutcome::TargetMissing, gloo::dialogs::alert);
        return;
    };

    let button = button.clone();
    spawn_local(async move {
        let outcome = write_clipboard(&text).await;
        finish(&button, outcome, gloo::dialogs::alert);
    });
}

/// Wires every copy trigger on the page and returns how many were found.
pub(crate) fn bind_copy_buttons(config: &PageConfig) -> enhancer::Result<usize> {
    let elements = query_all(&config.copy_selector)?;
    for element in &elements {
        let button = Rc::new(RefCell::new(CopyButton::new(element.clone())));
        let attribute = config.copy_target_attribute.clone();
        EventListener::new(element, "click", move |_| on_click(&button, &attribute)).forget();
    }
    Ok(elements.len())
}
