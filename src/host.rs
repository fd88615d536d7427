//! Browser host abstraction: page navigation and element lookup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API client redirects through `Navigator` and the message helpers write
//! through `Dom`, so neither touches `window`/`document` directly. The
//! `hydrate` build provides `BrowserHost`, backed by `web-sys`.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

/// Sends the browser to another page.
pub trait Navigator {
    fn redirect(&self, path: &str);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn redirect(&self, path: &str) {
        (**self).redirect(path);
    }
}

/// The two element properties the message helpers write.
pub trait MessageElement {
    fn set_text(&self, text: &str);
    fn set_class(&self, class_name: &str);
}

/// Element lookup by id.
pub trait Dom {
    type Element: MessageElement;

    fn get_element_by_id(&self, id: &str) -> Option<Self::Element>;
}

impl<D: Dom + ?Sized> Dom for &D {
    type Element = D::Element;

    fn get_element_by_id(&self, id: &str) -> Option<Self::Element> {
        (**self).get_element_by_id(id)
    }
}

/// `window.location` + `document` of the current page.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

#[cfg(feature = "hydrate")]
impl Navigator for BrowserHost {
    fn redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("redirect to {path} skipped: no window");
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            log::warn!("redirect to {path} failed: {e:?}");
        }
    }
}

#[cfg(feature = "hydrate")]
impl Dom for BrowserHost {
    type Element = web_sys::Element;

    fn get_element_by_id(&self, id: &str) -> Option<Self::Element> {
        web_sys::window()?.document()?.get_element_by_id(id)
    }
}

#[cfg(feature = "hydrate")]
impl MessageElement for web_sys::Element {
    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_class(&self, class_name: &str) {
        self.set_class_name(class_name);
    }
}
