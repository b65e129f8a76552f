//! Wiring for the injected navbar partial: mobile menu, scrolled state,
//! active section link and in-page smooth scrolling.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, HtmlElement, Node};
use yew::prelude::*;

use crate::config;
use crate::dom::{self, NavbarDom};
use crate::hooks::active_listener;
use crate::state::navigation::{active_section, link_targets, navbar_scrolled, NavMenu, SectionBounds};
use crate::state::throttle::{now_ms, Throttle};

fn apply_menu(nav: &NavbarDom, menu: NavMenu) {
    dom::set_class(&nav.nav_links, "active", menu.open);
    dom::set_class(&nav.hamburger, "active", menu.open);
    if let Some(submenu) = &nav.submenu {
        dom::set_class(submenu, "active", menu.submenu_open);
    }
    if let Some(toggle) = &nav.toggle_button {
        dom::set_class(toggle, "active", menu.submenu_open);
    }
}

fn section_bounds(document: &web_sys::Document) -> Vec<SectionBounds> {
    dom::query_all(document, "section[id]")
        .into_iter()
        .filter_map(|section| section.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBounds {
            id: section.id(),
            top: f64::from(section.offset_top()),
            height: f64::from(section.offset_height()),
        })
        .collect()
}

/// Scrolled class plus active link for the current scroll position.
fn update_scroll_state(nav: &NavbarDom) {
    let Some(document) = dom::document() else { return };
    let y = dom::scroll_y();
    if let Some(navbar) = &nav.navbar {
        dom::set_class(navbar, "scrolled", navbar_scrolled(y));
    }
    let sections = section_bounds(&document);
    let current = active_section(&sections, y);
    for link in &nav.links {
        let href = link.get_attribute("href").unwrap_or_default();
        dom::set_class(link, "active", link_targets(&href, current));
    }
}

fn event_node(e: &Event) -> Option<Node> {
    e.target().and_then(|t| t.dyn_into::<Node>().ok())
}

fn wire(nav: NavbarDom) -> Vec<EventListener> {
    let menu = Rc::new(RefCell::new(NavMenu::default()));
    let mut listeners = Vec::new();
    let nav = Rc::new(nav);

    {
        let hamburger = nav.hamburger.clone();
        let (nav, menu) = (nav.clone(), menu.clone());
        listeners.push(EventListener::new(&hamburger, "click", move |_| {
            menu.borrow_mut().toggle();
            apply_menu(&nav, *menu.borrow());
        }));
    }

    if let Some(toggle) = nav.toggle_button.clone() {
        let (nav, menu) = (nav.clone(), menu.clone());
        listeners.push(active_listener(&toggle, "click", move |e| {
            e.prevent_default();
            e.stop_propagation();
            menu.borrow_mut().toggle_submenu();
            apply_menu(&nav, *menu.borrow());
        }));
    }

    for link in nav.links.iter().cloned() {
        let (nav, menu) = (nav.clone(), menu.clone());
        let text = link.text_content().unwrap_or_default();
        listeners.push(EventListener::new(&link, "click", move |_| {
            menu.borrow_mut().link_clicked(&text, dom::viewport_width());
            apply_menu(&nav, *menu.borrow());
        }));
    }

    let Some(window) = window() else { return listeners };
    let Some(document) = window.document() else { return listeners };

    {
        let (nav, menu) = (nav.clone(), menu.clone());
        listeners.push(EventListener::new(&document, "click", move |e| {
            let target = event_node(e);
            let inside = nav.nav_links.contains(target.as_ref()) || nav.hamburger.contains(target.as_ref());
            if !inside {
                menu.borrow_mut().close();
                apply_menu(&nav, *menu.borrow());
            }
        }));
    }

    // In-page anchors, delegated so links rendered after boot are covered.
    listeners.push(active_listener(&document, "click", |e| {
        let anchor = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten());
        let Some(anchor) = anchor else { return };
        e.prevent_default();
        if let Some(href) = anchor.get_attribute("href") {
            if href.len() > 1 {
                dom::smooth_scroll_to(&href);
            }
        }
    }));

    {
        let (nav, menu) = (nav.clone(), menu.clone());
        listeners.push(EventListener::new(&window, "resize", move |_| {
            menu.borrow_mut().resized(dom::viewport_width());
            apply_menu(&nav, *menu.borrow());
        }));
    }

    {
        let nav = nav.clone();
        let mut throttle = Throttle::new(config::SCROLL_THROTTLE_MS);
        listeners.push(EventListener::new(&window, "scroll", move |_| {
            if throttle.ready(now_ms()) {
                update_scroll_state(&nav);
            }
        }));
    }

    update_scroll_state(&nav);
    listeners
}

/// Wires the navbar once `ready` is set. Listeners live until the caller
/// unmounts or `ready` drops back to false.
#[hook]
pub fn use_navbar(ready: bool) {
    use_effect_with_deps(
        move |ready| {
            let listeners = if *ready {
                match dom::document().as_ref().and_then(NavbarDom::resolve) {
                    Some(nav) => wire(nav),
                    None => {
                        debug!("navbar partial has no menu, skipping wiring");
                        Vec::new()
                    }
                }
            } else {
                Vec::new()
            };
            move || drop(listeners)
        },
        ready,
    );
}
