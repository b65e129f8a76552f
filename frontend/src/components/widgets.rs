use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::dom;
use crate::hooks::{use_global_listener, ListenOn};

#[derive(Properties, PartialEq)]
pub struct RotatingTextProps {
    pub lines: Vec<&'static str>,
}

#[function_component(RotatingText)]
pub fn rotating_text(props: &RotatingTextProps) -> Html {
    let index = use_state(|| 0usize);

    {
        let index = index.clone();
        let count = props.lines.len();
        use_effect_with_deps(move |_| {
            let interval = (count > 1).then(|| {
                let mut current = 0usize;
                Interval::new(config::ROTATING_TEXT_MS, move || {
                    current = (current + 1) % count;
                    index.set(current);
                })
            });
            move || drop(interval)
        }, props.lines.len());
    }

    html! {
        <span id="rotating-text">{ props.lines.get(*index).copied().unwrap_or_default() }</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct TechTrackProps {
    #[prop_or_default]
    pub children: Children,
}

/// Marquee of logos; the CSS animation pauses while hovered.
#[function_component(TechTrack)]
pub fn tech_track(props: &TechTrackProps) -> Html {
    let paused = use_state(|| false);
    let on_enter = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(true))
    };
    let on_leave = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(false))
    };
    let state = if *paused { "paused" } else { "running" };

    html! {
        <div class="tech-track" style={format!("animation-play-state: {};", state)}
            onmouseenter={on_enter} onmouseleave={on_leave}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ReadMoreProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ReadMoreOverlay)]
pub fn read_more_overlay(props: &ReadMoreProps) -> Html {
    let open = use_state(|| false);
    let backdrop = use_node_ref();

    {
        use_effect_with_deps(move |open: &bool| {
            if let Some(body) = dom::body() {
                dom::set_class(&body, "overlay-open", *open);
            }
            || ()
        }, *open);
    }

    let on_open = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(true))
    };
    let on_close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };
    let on_backdrop = {
        let open = open.clone();
        let backdrop = backdrop.clone();
        Callback::from(move |e: MouseEvent| {
            if dom::clicked_backdrop(&e, &backdrop) {
                open.set(false);
            }
        })
    };
    let display = if *open { "flex" } else { "none" };

    html! {
        <>
            <button class="read-more" onclick={on_open}>{"Read more"}</button>
            <div class="overlay2" ref={backdrop} style={format!("display: {};", display)} onclick={on_backdrop}>
                <div class="overlay2-content">
                    <span class="close" onclick={on_close}>{"×"}</span>
                    { for props.children.iter() }
                </div>
            </div>
        </>
    }
}

fn place(element: &HtmlElement, x: i32, y: i32) {
    dom::set_style(element, "left", &format!("{}px", x));
    dom::set_style(element, "top", &format!("{}px", y));
    dom::set_style(element, "opacity", "1");
}

/// Dot that tracks the pointer and a ring that trails it.
#[function_component(CursorFollower)]
pub fn cursor_follower() -> Html {
    let cursor = use_node_ref();
    let follower = use_node_ref();

    {
        let cursor = cursor.clone();
        let follower = follower.clone();
        use_global_listener(ListenOn::Document, "mousemove", Callback::from(move |e: Event| {
            let Some(e) = e.dyn_ref::<MouseEvent>() else { return };
            let (x, y) = (e.client_x(), e.client_y());
            if let Some(cursor) = cursor.cast::<HtmlElement>() {
                place(&cursor, x, y);
            }
            if let Some(follower) = follower.cast::<HtmlElement>() {
                Timeout::new(config::CURSOR_FOLLOW_MS, move || place(&follower, x, y)).forget();
            }
        }));
    }

    html! {
        <>
            <div id="cursor" class="cursor" ref={cursor}></div>
            <div id="cursorFollower" class="cursor-follower" ref={follower}></div>
        </>
    }
}
