//! Small helpers over `web_sys` shared by the controllers.

use wasm_bindgen::JsCast;
use web_sys::{
    window, Document, Element, Event, EventTarget, HtmlElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::NodeRef;

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn random() -> f64 {
    web_sys::js_sys::Math::random()
}

pub fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if result.is_err() {
        log::debug!("class update failed for {}", class);
    }
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if element.style().set_property(property, value).is_err() {
        log::debug!("style update failed for {}", property);
    }
}

/// Scrolls the element matching `selector` into view. Missing targets are
/// ignored.
pub fn smooth_scroll_to(selector: &str) {
    let Some(target) = document().and_then(|d| d.query_selector(selector).ok().flatten()) else {
        return;
    };
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    options.block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Elements of the injected navbar, resolved once after injection.
#[derive(Clone)]
pub struct NavbarDom {
    pub navbar: Option<Element>,
    pub hamburger: Element,
    pub nav_links: Element,
    pub toggle_button: Option<Element>,
    pub submenu: Option<Element>,
    pub links: Vec<Element>,
}

impl NavbarDom {
    /// `None` when the partial has no hamburger or link list: the navbar
    /// controller is simply not wired.
    pub fn resolve(document: &Document) -> Option<Self> {
        let hamburger = document.get_element_by_id("hamburger")?;
        let nav_links = document.query_selector(".nav-links").ok().flatten()?;
        Some(Self {
            navbar: document.query_selector(".navbar").ok().flatten(),
            hamburger,
            nav_links,
            toggle_button: document.query_selector(".toggle-button").ok().flatten(),
            submenu: document.query_selector(".services-submenu").ok().flatten(),
            links: query_all(document, ".nav-link"),
        })
    }
}

/// Locks page scrolling behind a modal, pinning the page at `scroll_top`.
pub fn lock_body_scroll(scroll_top: Option<f64>) {
    let Some(body) = body() else { return };
    set_style(&body, "overflow", "hidden");
    if let Some(top) = scroll_top {
        set_style(&body, "position", "fixed");
        set_style(&body, "top", &format!("-{}px", top));
        set_style(&body, "width", "100%");
    }
}

pub fn unlock_body_scroll() {
    let Some(body) = body() else { return };
    for property in ["overflow", "position", "top", "width"] {
        if body.style().remove_property(property).is_err() {
            log::debug!("style removal failed for {}", property);
        }
    }
}

/// True only when both are present and the event target is the node itself.
fn is_same_target<T: PartialEq>(target: Option<T>, node: Option<T>) -> bool {
    matches!((target, node), (Some(target), Some(node)) if target == node)
}

/// Whether a click landed on the overlay itself rather than on its content.
///
/// Yew delegates listeners to the body, so `current_target` cannot be used
/// to identify the overlay.
pub fn clicked_backdrop(e: &Event, overlay: &NodeRef) -> bool {
    is_same_target(e.target(), overlay.get().map(EventTarget::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_overlay_itself_counts_as_backdrop() {
        let overlay = "overlay";
        assert!(is_same_target(Some(overlay), Some("overlay")));
        assert!(!is_same_target(Some("overlay-content"), Some(overlay)));
        assert!(!is_same_target(Some("body"), Some(overlay)));
        // Unmounted overlay or a synthetic event without a target.
        assert!(!is_same_target(Some(overlay), None));
        assert!(!is_same_target(None::<&str>, None));
    }
}
