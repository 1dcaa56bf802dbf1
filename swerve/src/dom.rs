//! DOM - browser bindings for detection, selection and the applier

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CssStyleDeclaration, Document, EventTarget, HtmlElement, TransitionEvent};

use crate::capability::{Capabilities, StyleProbe};
use crate::completion::PendingTransitions;
use crate::error::{Result, SwerveError, js_message};
use crate::request::{Defaults, StyleNode, Swerve};

/// The current page's document
pub fn document() -> Result<Document> {
    web_sys::window()
        .ok_or(SwerveError::NoWindow)?
        .document()
        .ok_or(SwerveError::NoDocument)
}

impl StyleProbe for CssStyleDeclaration {
    fn has_property(&self, dom_name: &str) -> bool {
        js_sys::Reflect::get(self, &JsValue::from_str(dom_name))
            .map(|v| !v.is_undefined())
            .unwrap_or(false)
    }
}

impl Capabilities {
    /// Probe a scratch `div` created in `document`
    pub fn detect_in(document: &Document) -> Result<Self> {
        let scratch: HtmlElement = document
            .create_element("div")
            .map_err(|e| SwerveError::ScratchElement { message: js_message(&e) })?
            .dyn_into()
            .map_err(|_| SwerveError::ScratchElement {
                message: "div is not an HtmlElement".to_string(),
            })?;
        Ok(Self::detect(&scratch.style()))
    }
}

/// Transition-end listener attached to one element; detaches on drop
pub struct TransitionListener {
    target: HtmlElement,
    event: &'static str,
    closure: Closure<dyn FnMut(TransitionEvent)>,
}

impl Drop for TransitionListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

impl StyleNode for HtmlElement {
    type Listener = TransitionListener;

    fn set_style(&self, css_name: &str, value: &str) -> Result<()> {
        self.style()
            .set_property(css_name, value)
            .map_err(|e| SwerveError::Style {
                property: css_name.to_string(),
                message: js_message(&e),
            })
    }

    fn style_value(&self, css_name: &str) -> Option<String> {
        self.style()
            .get_property_value(css_name)
            .ok()
            .filter(|v| !v.is_empty())
    }

    fn parent(&self) -> Option<Self> {
        self.parent_element().and_then(|p| p.dyn_into::<HtmlElement>().ok())
    }

    fn listen_transition_end(
        &self,
        event: &'static str,
        pending: Rc<RefCell<PendingTransitions>>,
    ) -> Result<TransitionListener> {
        let me: EventTarget = self.clone().into();
        let closure = Closure::<dyn FnMut(TransitionEvent)>::new(move |e: TransitionEvent| {
            let own = e.target().as_ref() == Some(&me) && e.pseudo_element().is_empty();
            pending.borrow_mut().complete_from(own, &e.property_name());
        });
        self.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| SwerveError::Listener {
                event: event.to_string(),
                message: js_message(&e),
            })?;
        Ok(TransitionListener {
            target: self.clone(),
            event,
            closure,
        })
    }
}

impl Swerve<HtmlElement> {
    /// Every element in `document` matching a CSS selector
    pub fn select(caps: Rc<Capabilities>, document: &Document, selector: &str) -> Result<Self> {
        Self::select_with_defaults(caps, document, selector, Defaults::default())
    }

    pub fn select_with_defaults(
        caps: Rc<Capabilities>,
        document: &Document,
        selector: &str,
        defaults: Defaults,
    ) -> Result<Self> {
        let list = document
            .query_selector_all(selector)
            .map_err(|e| SwerveError::Selector {
                selector: selector.to_string(),
                message: js_message(&e),
            })?;

        let nodes: Vec<HtmlElement> = (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
            .collect();
        tracing::debug!(selector, matched = nodes.len(), "selected");

        Ok(Self::with_defaults(caps, nodes, defaults))
    }

    /// A request for a single element
    pub fn node(caps: Rc<Capabilities>, element: HtmlElement) -> Self {
        Self::new(caps, vec![element])
    }
}
