use super::*;
use crate::testing::{ElementState, FakeDom};

fn state(text: &str, class: &str) -> ElementState {
    ElementState { text: text.to_owned(), class: class.to_owned() }
}

#[test]
fn class_names_match_stylesheet() {
    assert_eq!(MessageKind::Error.class_name(), "error-message");
    assert_eq!(MessageKind::Success.class_name(), "success-message");
    assert_eq!(MessageKind::Neutral.class_name(), "message");
}

#[test]
fn error_message_sets_text_and_class() {
    let dom = FakeDom::default().with_element("msg", "", "message");
    show_error_message(&dom, "msg", "Bad input");
    assert_eq!(dom.element("msg"), Some(state("Bad input", "error-message")));
}

#[test]
fn success_message_sets_text_and_class() {
    let dom = FakeDom::default().with_element("msg", "Bad input", "error-message");
    show_success_message(&dom, "msg", "Registered!");
    assert_eq!(dom.element("msg"), Some(state("Registered!", "success-message")));
}

#[test]
fn clear_resets_to_neutral() {
    let dom = FakeDom::default().with_element("msg", "", "message");
    show_error_message(&dom, "msg", "Bad input");
    clear_message(&dom, "msg");
    assert_eq!(dom.element("msg"), Some(state("", "message")));
}

#[test]
fn clear_is_idempotent() {
    let dom = FakeDom::default().with_element("msg", "Saved", "success-message");
    clear_message(&dom, "msg");
    let once = dom.element("msg");
    clear_message(&dom, "msg");
    assert_eq!(dom.element("msg"), once);
}

#[test]
fn missing_element_is_noop() {
    let dom = FakeDom::default().with_element("other", "keep", "message");
    show_error_message(&dom, "msg", "Bad input");
    show_success_message(&dom, "msg", "ok");
    clear_message(&dom, "msg");
    assert_eq!(dom.element("msg"), None);
    assert_eq!(dom.element("other"), Some(state("keep", "message")));
}

#[test]
fn text_is_written_verbatim() {
    let dom = FakeDom::default().with_element("msg", "", "message");
    show_error_message(&dom, "msg", "<b>not html</b>");
    assert_eq!(dom.element("msg").unwrap().text, "<b>not html</b>");
}
