//! Inline success/error messages on form pages.
//!
//! A message element is any element with an id; these helpers set its text
//! and swap its class between `error-message`, `success-message` and the
//! neutral `message`. A missing element is silently ignored.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use crate::host::{Dom, MessageElement};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Success,
    Neutral,
}

impl MessageKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Error => "error-message",
            Self::Success => "success-message",
            Self::Neutral => "message",
        }
    }
}

/// Set the text and class of element `element_id`, if it exists.
pub fn show_message<D: Dom + ?Sized>(dom: &D, element_id: &str, kind: MessageKind, text: &str) {
    if let Some(element) = dom.get_element_by_id(element_id) {
        element.set_text(text);
        element.set_class(kind.class_name());
    }
}

pub fn show_error_message<D: Dom + ?Sized>(dom: &D, element_id: &str, text: &str) {
    show_message(dom, element_id, MessageKind::Error, text);
}

pub fn show_success_message<D: Dom + ?Sized>(dom: &D, element_id: &str, text: &str) {
    show_message(dom, element_id, MessageKind::Success, text);
}

/// Blank the element and return it to the neutral class.
pub fn clear_message<D: Dom + ?Sized>(dom: &D, element_id: &str) {
    show_message(dom, element_id, MessageKind::Neutral, "");
}
