//! Hooks shared by the page controllers: global event listeners, timer
//! slots and intersection-triggered reveals.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

/// A pending timeout owned by one controller. Replacing the value cancels
/// the previous timeout.
pub type TimerSlot = Rc<RefCell<Option<Timeout>>>;

pub fn schedule<F>(slot: &TimerSlot, millis: u32, callback: F)
where
    F: FnOnce() + 'static,
{
    slot.borrow_mut().replace(Timeout::new(millis, callback));
}

pub fn cancel(slot: &TimerSlot) {
    slot.borrow_mut().take();
}

/// One fresh ref per rendered item, so handlers reach their own element.
pub fn node_refs(count: usize) -> Vec<NodeRef> {
    (0..count).map(|_| NodeRef::default()).collect()
}

/// [`node_refs`] kept across renders and rebuilt when `count` changes.
#[hook]
pub fn use_node_refs(count: usize) -> Rc<Vec<NodeRef>> {
    use_memo(|count| node_refs(*count), count)
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ListenOn {
    Window,
    Document,
}

impl ListenOn {
    fn target(&self) -> Option<EventTarget> {
        let window = window()?;
        match self {
            ListenOn::Window => Some(window.into()),
            ListenOn::Document => window.document().map(Into::into),
        }
    }
}

/// Listens on the window or document for the component's lifetime. The
/// callback passed in the latest render is the one invoked.
#[hook]
pub fn use_global_listener(on: ListenOn, event_type: &'static str, handler: Callback<Event>) {
    let latest = use_mut_ref(|| handler.clone());
    *latest.borrow_mut() = handler;

    use_effect_with_deps(
        move |_| {
            let listener = on.target().map(|target| {
                EventListener::new(&target, event_type, move |event| {
                    let handler = latest.borrow().clone();
                    handler.emit(event.clone());
                })
            });
            move || drop(listener)
        },
        (on, event_type),
    );
}

/// Attaches a listener that may call `prevent_default`. Yew registers
/// wheel and touch handlers as passive, so those go through here.
pub fn active_listener<F>(target: &EventTarget, event_type: &'static str, callback: F) -> EventListener
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(
        target,
        event_type,
        EventListenerOptions::enable_prevent_default(),
        callback,
    )
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealMode {
    /// Reveal on first intersection and stop observing.
    Once,
    /// Follow visibility in both directions.
    Toggle,
}

#[derive(Clone, PartialEq, Debug)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
    pub mode: RevealMode,
}

impl RevealOptions {
    pub const fn once(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: "0px",
            mode: RevealMode::Once,
        }
    }

    pub const fn toggle(threshold: f64) -> Self {
        Self {
            threshold,
            root_margin: "0px",
            mode: RevealMode::Toggle,
        }
    }

    pub const fn with_margin(mut self, root_margin: &'static str) -> Self {
        self.root_margin = root_margin;
        self
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe<F>(element: &Element, options: &RevealOptions, on_change: F) -> Option<(IntersectionObserver, ObserverCallback)>
where
    F: Fn(bool) + 'static,
{
    let mode = options.mode;
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                on_change(true);
                if mode == RevealMode::Once {
                    observer.unobserve(&entry.target());
                }
            } else if mode == RevealMode::Toggle {
                on_change(false);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let mut init = IntersectionObserverInit::new();
    init.threshold(&JsValue::from_f64(options.threshold));
    init.root_margin(options.root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(err) => {
            log::warn!("IntersectionObserver unavailable: {:?}", err);
            None
        }
    }
}

/// Whether the referenced element has been (or, in toggle mode, currently
/// is) visible enough.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> bool {
    let visible = use_state(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |(node, options): &(NodeRef, RevealOptions)| {
                let observer = node
                    .cast::<Element>()
                    .and_then(|element| observe(&element, options, move |v| visible.set(v)));
                move || {
                    if let Some((observer, _callback)) = observer {
                        observer.disconnect();
                    }
                }
            },
            (node, options),
        );
    }
    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub options: RevealOptions,
    #[prop_or_default]
    pub class: Classes,
    /// Added once the element is revealed.
    #[prop_or("revealed")]
    pub active_class: &'static str,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), props.options.clone());

    html! {
        <div ref={node} class={classes!(props.class.clone(), visible.then_some(props.active_class))}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_item_gets_its_own_ref() {
        let refs = node_refs(6);
        assert_eq!(refs.len(), 6);
        for (i, a) in refs.iter().enumerate() {
            for b in &refs[i + 1..] {
                assert!(a != b);
            }
        }
        assert!(node_refs(0).is_empty());
    }
}
