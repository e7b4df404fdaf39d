//! Notification banners.
//!
//! A notification is a dismissible alert wrapping caller-supplied text and
//! a close button. It carries no behavior besides removing itself from its
//! container; inserting it is the caller's job.

use crate::dom::Element;
use spf_schema::Severity;

/// Class that marks an alert as closable by the user.
pub const DISMISSIBLE: &str = "alert-dismissible";

const ALERT_CLASSES: [&str; 6] = [DISMISSIBLE, "fade", "show", "is-no-rounded", "m-0", "p-2"];

/// Build a notification for `text` (already localized and escaped) with
/// the given severity.
///
/// Empty text still yields an element; it just renders blank.
pub fn create_message(text: &str, severity: Severity) -> Element {
    let severity_class = severity.alert_class();
    let mut alert = Element::new("div")
        .with_classes(&["alert", severity_class.as_str()])
        .with_classes(&ALERT_CLASSES)
        .with_attr("role", "alert");

    let mut body = Element::new("div").with_classes(&["container", "text-center"]);
    body.append_markup(text);
    body.append(close_button());

    alert.append(body);
    alert
}

/// Build a notification with the default severity ([`Severity::Danger`]).
pub fn create_error(text: &str) -> Element {
    create_message(text, Severity::default())
}

fn close_button() -> Element {
    Element::new("button")
        .with_classes(&["btn-close", "btn-sm", "m-1", "p-2"])
        .with_attr("type", "button")
        .with_attr("data-bs-dismiss", "alert")
        .with_attr("aria-label", "Close")
}

/// Append one danger notification per entry, in order.
pub fn append_errors<S: AsRef<str>>(container: &mut Element, errors: &[S]) -> usize {
    for error in errors {
        container.append(create_error(error.as_ref()));
    }
    errors.len()
}

/// Close the `index`-th notification in `container`, the effect of the
/// user pressing its close button. Elements that are not dismissible
/// alerts stay put.
pub fn dismiss(container: &mut Element, index: usize) -> Option<Element> {
    let target = container.child_elements().nth(index)?;
    if !target.has_class(DISMISSIBLE) {
        return None;
    }
    container.remove_child_element(index)
}

/// Severity of a notification element, read back from its classes.
pub fn severity_of(alert: &Element) -> Option<Severity> {
    [Severity::Success, Severity::Danger, Severity::Warning]
        .into_iter()
        .find(|s| alert.has_class(&s.alert_class()))
}
