//! Tools carousel with its tooltip and tap highlight.
//!
//! The carousel exposes pause/resume to the tooltip as a [`CarouselControl`]
//! prop; nothing else reaches into its timers.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Interval;
use log::debug;
use web_sys::{window, Element, HtmlElement};
use yew::prelude::*;

use crate::config;
use crate::content::TOOLS;
use crate::dom;
use crate::hooks::{cancel, schedule, use_global_listener, use_node_refs, ListenOn, TimerSlot};
use crate::state::carousel::{LoopingCarousel, Motion, TrackFrame};
use crate::state::layout::place_tooltip;
use crate::state::throttle::{now_ms, Throttle};

/// Hooks the tooltip uses to hold the carousel still while it is shown.
#[derive(Clone, PartialEq)]
pub struct CarouselControl {
    pub pause: Callback<()>,
    pub resume: Callback<()>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum TooltipRequest {
    Show {
        id: u32,
        text: &'static str,
        item_left: f64,
        item_top: f64,
        item_width: f64,
    },
    Hide {
        id: u32,
    },
}

fn is_touch_width() -> bool {
    dom::viewport_width() <= config::TOUCH_MAX
}

fn px(value: &str) -> f64 {
    value.trim().trim_end_matches("px").parse().unwrap_or(0.0)
}

#[derive(Clone)]
struct TrackDriver {
    machine: Rc<RefCell<LoopingCarousel>>,
    track: NodeRef,
    auto: Rc<RefCell<Option<Interval>>>,
    settle: TimerSlot,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    update: UseForceUpdateHandle,
}

impl TrackDriver {
    fn apply(&self, frame: TrackFrame) {
        if let Some(track) = self.track.cast::<HtmlElement>() {
            dom::set_style(&track, "transition", frame.transition());
            dom::set_style(&track, "transform", &frame.transform());
        }
    }

    fn run(&self, motion: Option<Motion>) {
        let Some(motion) = motion else { return };
        match motion {
            Motion::Slide(frame) => self.apply(frame),
            Motion::SlideThenSettle(frame) => {
                self.apply(frame);
                let driver = self.clone();
                schedule(&self.settle, config::TOOLS_TRANSITION_MS, move || {
                    let settled = driver.machine.borrow_mut().settle();
                    if let Some(frame) = settled {
                        driver.apply(frame);
                    }
                });
            }
            Motion::TeleportThenSlide { teleport, slide } => {
                self.apply(teleport);
                let driver = self.clone();
                let handle = request_animation_frame(move |_| driver.apply(slide));
                *self.frame.borrow_mut() = Some(handle);
            }
        }
        self.update.force_update();
    }

    fn next(&self) {
        let motion = self.machine.borrow_mut().next();
        self.run(motion);
    }

    fn prev(&self) {
        let motion = self.machine.borrow_mut().prev();
        self.run(motion);
    }

    fn go_to(&self, index: usize) {
        let frame = self.machine.borrow_mut().go_to(index);
        if let Some(frame) = frame {
            cancel(&self.settle);
            self.apply(frame);
            self.update.force_update();
        }
        self.restart();
    }

    fn start(&self) {
        let driver = self.clone();
        let interval = Interval::new(config::TOOLS_AUTO_MS, move || driver.next());
        *self.auto.borrow_mut() = Some(interval);
    }

    fn stop(&self) {
        self.auto.borrow_mut().take();
    }

    fn restart(&self) {
        self.stop();
        self.start();
    }

    fn pause(&self) {
        self.machine.borrow_mut().pause();
        self.stop();
    }

    fn resume(&self) {
        self.machine.borrow_mut().resume();
        self.start();
    }

    /// Item width including horizontal margins, from the first rendered item.
    fn measure(&self) {
        let Some(track) = self.track.cast::<Element>() else { return };
        let Some(first) = track.first_element_child() else { return };
        let mut width = first.get_bounding_client_rect().width();
        if let Some(Ok(Some(style))) = window().map(|w| w.get_computed_style(&first)) {
            width += px(&style.get_property_value("margin-left").unwrap_or_default());
            width += px(&style.get_property_value("margin-right").unwrap_or_default());
        }
        let frame = self.machine.borrow_mut().set_item_width(width);
        self.apply(frame);
    }

    fn teardown(&self) {
        self.stop();
        cancel(&self.settle);
        self.frame.borrow_mut().take();
    }
}

#[function_component(ToolsCarousel)]
pub fn tools_carousel() -> Html {
    let update = use_force_update();
    let driver = TrackDriver {
        machine: use_mut_ref(|| LoopingCarousel::new(TOOLS.len())),
        track: use_node_ref(),
        auto: use_mut_ref(|| None),
        settle: use_mut_ref(|| None),
        frame: use_mut_ref(|| None),
        update,
    };
    let tooltip = use_state(|| None::<TooltipRequest>);
    let tooltip_serial = use_mut_ref(|| 0u32);
    let highlighted = use_state(|| None::<usize>);
    let highlight_timer: TimerSlot = use_mut_ref(|| None);
    // Real items followed by one clone of each.
    let items = use_node_refs(TOOLS.len() * 2);
    let resize_throttle = use_mut_ref(|| Throttle::new(config::TOOLS_RESIZE_THROTTLE_MS));

    {
        let driver = driver.clone();
        use_effect_with_deps(move |_| {
            if TOOLS.is_empty() {
                debug!("tools carousel has no items");
            } else {
                driver.measure();
                driver.start();
            }
            move || driver.teardown()
        }, ());
    }

    {
        let driver = driver.clone();
        use_global_listener(ListenOn::Window, "resize", Callback::from(move |_: Event| {
            if resize_throttle.borrow_mut().ready(now_ms()) {
                driver.measure();
            }
        }));
    }

    if TOOLS.is_empty() {
        return html! {};
    }

    let control = CarouselControl {
        pause: {
            let driver = driver.clone();
            Callback::from(move |_| driver.pause())
        },
        resume: {
            let driver = driver.clone();
            Callback::from(move |_| driver.resume())
        },
    };

    let next_serial = {
        let tooltip_serial = tooltip_serial.clone();
        move || {
            let mut serial = tooltip_serial.borrow_mut();
            *serial += 1;
            *serial
        }
    };

    let show_tooltip = {
        let tooltip = tooltip.clone();
        let next_serial = next_serial.clone();
        move |item: &Element, text: &'static str| {
            let rect = item.get_bounding_client_rect();
            tooltip.set(Some(TooltipRequest::Show {
                id: next_serial(),
                text,
                item_left: rect.left(),
                item_top: rect.top(),
                item_width: rect.width(),
            }));
        }
    };

    let on_enter = {
        let show_tooltip = show_tooltip.clone();
        move |item: NodeRef, text: &'static str| {
            let show_tooltip = show_tooltip.clone();
            Callback::from(move |_: MouseEvent| {
                if is_touch_width() {
                    return;
                }
                if let Some(item) = item.cast::<Element>() {
                    show_tooltip(&item, text);
                }
            })
        }
    };

    let on_leave = {
        let tooltip = tooltip.clone();
        Callback::from(move |_: MouseEvent| {
            if !is_touch_width() {
                tooltip.set(Some(TooltipRequest::Hide { id: next_serial() }));
            }
        })
    };

    let on_tap = {
        let show_tooltip = show_tooltip.clone();
        let highlighted = highlighted.clone();
        move |slot: usize, item: NodeRef, text: &'static str| {
            let show_tooltip = show_tooltip.clone();
            let highlighted = highlighted.clone();
            let highlight_timer = highlight_timer.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                if let Some(item) = item.cast::<Element>() {
                    show_tooltip(&item, text);
                }
                highlighted.set(Some(slot));
                let highlighted = highlighted.clone();
                schedule(&highlight_timer, config::TOOL_HIGHLIGHT_MS, move || highlighted.set(None));
            })
        }
    };

    let on_container_enter = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| {
            if dom::viewport_width() > config::TOUCH_MAX {
                driver.pause();
            }
        })
    };

    let on_container_leave = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| {
            if dom::viewport_width() > config::TOUCH_MAX {
                driver.resume();
            }
        })
    };

    let on_prev = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| {
            driver.prev();
            driver.restart();
        })
    };

    let on_next = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| {
            driver.next();
            driver.restart();
        })
    };

    let active_dot = driver.machine.borrow().active_dot();
    let rendered = TOOLS.iter().chain(TOOLS.iter()).zip(items.iter()).enumerate();

    html! {
        <div class="tools-section">
            <style>
                {r#"
                    .tools-container {
                        overflow: hidden;
                        position: relative;
                    }
                    #toolsTrack {
                        display: flex;
                        will-change: transform;
                    }
                    .tool-item {
                        flex: 0 0 auto;
                        margin: 0 12px;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .tool-item.active {
                        transform: scale(1.1);
                        box-shadow: 0 0 20px rgba(255, 27, 141, 0.6);
                    }
                    .carousel-dot {
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.3);
                        cursor: pointer;
                    }
                    .carousel-dot.active {
                        background: #FF1B8D;
                    }
                    #globalTooltip {
                        position: fixed;
                        transform: translate(-50%, -100%);
                        opacity: 0;
                        pointer-events: none;
                        transition: opacity 0.2s ease;
                        z-index: 60;
                    }
                    #globalTooltip::after {
                        content: '';
                        position: absolute;
                        top: 100%;
                        left: var(--arrow-left, 50%);
                        transform: translateX(-50%);
                        border: 6px solid transparent;
                        border-top-color: rgba(15, 5, 24, 0.95);
                    }
                "#}
            </style>
            <button id="toolsPrev" class="tools-nav" onclick={on_prev}><i class="fas fa-chevron-left"></i></button>
            <div class="tools-container" onmouseenter={on_container_enter} onmouseleave={on_container_leave}>
                <div id="toolsTrack" ref={driver.track.clone()}>
                    { for rendered.map(|(slot, (tool, item))| html! {
                        <div key={slot} ref={item.clone()}
                            class={classes!("tool-item", (*highlighted == Some(slot)).then_some("active"))}
                            data-tooltip={tool.tooltip}
                            aria-hidden={(slot >= TOOLS.len()).to_string()}
                            onmouseenter={on_enter(item.clone(), tool.tooltip)}
                            onmouseleave={on_leave.clone()}
                            onclick={on_tap(slot, item.clone(), tool.tooltip)}>
                            <img src={tool.icon} alt={tool.name} />
                            <span>{ tool.name }</span>
                        </div>
                    }) }
                </div>
            </div>
            <button id="toolsNext" class="tools-nav" onclick={on_next}><i class="fas fa-chevron-right"></i></button>
            <div id="toolsDots">
                { for (0..TOOLS.len()).map(|i| {
                    let driver = driver.clone();
                    html! {
                        <div key={i}
                            class={classes!("carousel-dot", (i == active_dot).then_some("active"))}
                            onclick={Callback::from(move |_: MouseEvent| driver.go_to(i))}></div>
                    }
                }) }
            </div>
            <ToolTooltip request={(*tooltip).clone()} {control} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ToolTooltipProps {
    pub request: Option<TooltipRequest>,
    pub control: CarouselControl,
}

#[function_component(ToolTooltip)]
pub fn tool_tooltip(props: &ToolTooltipProps) -> Html {
    let node = use_node_ref();
    let hide_timer: TimerSlot = use_mut_ref(|| None);
    let resume_timer: TimerSlot = use_mut_ref(|| None);

    let hide = {
        let node = node.clone();
        let hide_timer = hide_timer.clone();
        Rc::new(move || {
            cancel(&hide_timer);
            if let Some(tooltip) = node.cast::<HtmlElement>() {
                dom::set_style(&tooltip, "opacity", "0");
            }
        })
    };

    {
        let node = node.clone();
        let hide = hide.clone();
        let control = props.control.clone();
        use_effect_with_deps(move |request: &Option<TooltipRequest>| {
            match request {
                Some(TooltipRequest::Show { text, item_left, item_top, item_width, .. }) => {
                    cancel(&hide_timer);
                    control.pause.emit(());
                    if let Some(tooltip) = node.cast::<HtmlElement>() {
                        tooltip.set_text_content(Some(*text));
                        let placement = place_tooltip(
                            *item_left,
                            *item_top,
                            *item_width,
                            f64::from(tooltip.offset_width()),
                            dom::viewport_width(),
                        );
                        dom::set_style(&tooltip, "left", &format!("{}px", placement.left));
                        dom::set_style(&tooltip, "top", &format!("{}px", placement.top));
                        dom::set_style(&tooltip, "--arrow-left", &format!("{}px", placement.arrow_left));
                        dom::set_style(&tooltip, "opacity", "1");
                    }
                    if is_touch_width() {
                        let hide = hide.clone();
                        let resume = control.resume.clone();
                        schedule(&hide_timer, config::TOOLTIP_TOUCH_HIDE_MS, move || {
                            hide();
                            schedule(&resume_timer, config::TOOLTIP_RESUME_MS, move || resume.emit(()));
                        });
                    }
                }
                Some(TooltipRequest::Hide { .. }) => hide(),
                None => {}
            }
            || ()
        }, props.request.clone());
    }

    {
        let hide = hide.clone();
        use_global_listener(ListenOn::Document, "click", Callback::from(move |_: Event| hide()));
    }

    html! {
        <div id="globalTooltip" ref={node}></div>
    }
}
