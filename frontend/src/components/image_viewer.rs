use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, TouchEvent, WheelEvent};
use yew::prelude::*;

use crate::config;
use crate::dom;
use crate::hooks::{active_listener, cancel, schedule, use_global_listener, ListenOn, TimerSlot};
use crate::state::viewer::{ImageViewer, KeyOutcome, ProjectEntry, ZoomChange};

/// Opens the viewer on `items[index]`. A fresh `id` reopens even when the
/// same card is clicked twice.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewerRequest {
    pub id: u32,
    pub items: Vec<ProjectEntry>,
    pub index: usize,
}

#[derive(Properties, PartialEq)]
pub struct ImageModalProps {
    pub request: Option<ViewerRequest>,
}

#[derive(Clone)]
struct ModalDriver {
    viewer: Rc<RefCell<ImageViewer>>,
    hint: UseStateHandle<bool>,
    hint_timer: TimerSlot,
    update: UseForceUpdateHandle,
}

impl ModalDriver {
    fn refresh(&self) {
        self.update.force_update();
    }

    fn zoomed(&self, change: ZoomChange) {
        match change {
            ZoomChange::ZoomedIn => {
                self.hint.set(true);
                let hint = self.hint.clone();
                schedule(&self.hint_timer, config::PAN_HINT_MS, move || hint.set(false));
            }
            ZoomChange::ZoomedOut | ZoomChange::Reset if !self.viewer.borrow().is_zoomed() => {
                cancel(&self.hint_timer);
                self.hint.set(false);
            }
            _ => {}
        }
        self.refresh();
    }

    fn with_zoom(&self, op: fn(&mut ImageViewer) -> ZoomChange) {
        let change = op(&mut self.viewer.borrow_mut());
        self.zoomed(change);
    }

    fn close(&self) {
        self.viewer.borrow_mut().close();
        cancel(&self.hint_timer);
        self.hint.set(false);
        dom::unlock_body_scroll();
        self.refresh();
    }

    fn navigate(&self, forward: bool) {
        let moved = {
            let mut viewer = self.viewer.borrow_mut();
            if forward { viewer.next() } else { viewer.prev() }
        };
        if moved {
            self.zoomed(ZoomChange::Reset);
        }
    }
}

fn first_touch(e: &TouchEvent) -> Option<(f64, f64)> {
    e.touches()
        .get(0)
        .map(|t| (f64::from(t.client_x()), f64::from(t.client_y())))
}

#[function_component(ImageModal)]
pub fn image_modal(props: &ImageModalProps) -> Html {
    let driver = ModalDriver {
        viewer: use_mut_ref(ImageViewer::new),
        hint: use_state(|| false),
        hint_timer: use_mut_ref(|| None),
        update: use_force_update(),
    };
    let section = use_node_ref();
    let overlay = use_node_ref();

    {
        let driver = driver.clone();
        use_effect_with_deps(move |request: &Option<ViewerRequest>| {
            if let Some(request) = request {
                let opened = driver
                    .viewer
                    .borrow_mut()
                    .open(request.items.clone(), request.index);
                if opened {
                    log::debug!("Opening image viewer at {}", request.index);
                    dom::lock_body_scroll(None);
                    driver.refresh();
                }
            }
            || ()
        }, props.request.clone());
    }

    {
        let driver = driver.clone();
        use_global_listener(ListenOn::Document, "keydown", Callback::from(move |e: Event| {
            let Some(e) = e.dyn_ref::<KeyboardEvent>() else { return };
            let outcome = driver.viewer.borrow_mut().handle_key(&e.key(), e.shift_key());
            match outcome {
                KeyOutcome::Close => driver.close(),
                KeyOutcome::Navigated => driver.zoomed(ZoomChange::Reset),
                KeyOutcome::Panned => driver.refresh(),
                KeyOutcome::Zoomed(change) => driver.zoomed(change),
                KeyOutcome::Ignored => {}
            }
        }));
    }

    {
        let driver = driver.clone();
        use_global_listener(ListenOn::Document, "mousemove", Callback::from(move |e: Event| {
            let Some(e) = e.dyn_ref::<MouseEvent>() else { return };
            let moved = driver
                .viewer
                .borrow_mut()
                .drag_to(f64::from(e.client_x()), f64::from(e.client_y()));
            if moved {
                e.prevent_default();
                driver.refresh();
            }
        }));
    }

    {
        let driver = driver.clone();
        use_global_listener(ListenOn::Document, "mouseup", Callback::from(move |_: Event| {
            if driver.viewer.borrow_mut().end_drag() {
                driver.refresh();
            }
        }));
    }

    // Wheel and touchmove call prevent_default, so they bypass Yew's
    // passive listeners.
    {
        let driver = driver.clone();
        let section = section.clone();
        use_effect_with_deps(move |_| {
            let listeners = section.cast::<Element>().map(|target| {
                let wheel_driver = driver.clone();
                let wheel = active_listener(&target, "wheel", move |e| {
                    e.prevent_default();
                    if !wheel_driver.viewer.borrow().is_open() {
                        return;
                    }
                    if let Some(e) = e.dyn_ref::<WheelEvent>() {
                        let change = wheel_driver.viewer.borrow_mut().wheel(e.delta_y());
                        wheel_driver.zoomed(change);
                    }
                });
                let touch_driver = driver.clone();
                let touch_move = active_listener(&target, "touchmove", move |e| {
                    let Some(e) = e.dyn_ref::<TouchEvent>() else { return };
                    let Some((x, y)) = first_touch(e) else { return };
                    if touch_driver.viewer.borrow_mut().drag_to(x, y) {
                        e.prevent_default();
                        touch_driver.refresh();
                    }
                });
                (wheel, touch_move)
            });
            move || drop(listeners)
        }, ());
    }

    let viewer = driver.viewer.borrow();

    let on_mouse_down = {
        let driver = driver.clone();
        Callback::from(move |e: MouseEvent| {
            if driver
                .viewer
                .borrow_mut()
                .begin_drag(f64::from(e.client_x()), f64::from(e.client_y()))
            {
                driver.refresh();
            }
        })
    };
    let on_touch_start = {
        let driver = driver.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some((x, y)) = first_touch(&e) {
                driver.viewer.borrow_mut().begin_drag(x, y);
            }
        })
    };
    let on_touch_end = {
        let driver = driver.clone();
        Callback::from(move |_: TouchEvent| {
            if driver.viewer.borrow_mut().end_drag() {
                driver.refresh();
            }
        })
    };
    let on_overlay_click = {
        let driver = driver.clone();
        let overlay = overlay.clone();
        Callback::from(move |e: MouseEvent| {
            if dom::clicked_backdrop(&e, &overlay) {
                driver.close();
            }
        })
    };
    let on_close = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.close())
    };
    let on_prev = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.navigate(false))
    };
    let on_next = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.navigate(true))
    };
    let on_zoom_in = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.with_zoom(ImageViewer::zoom_in))
    };
    let on_zoom_out = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.with_zoom(ImageViewer::zoom_out))
    };
    let on_zoom_reset = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.with_zoom(ImageViewer::reset_zoom))
    };
    let on_load = {
        let driver = driver.clone();
        Callback::from(move |_: Event| {
            driver.viewer.borrow_mut().image_loaded();
            driver.zoomed(ZoomChange::Reset);
        })
    };
    let on_drag_start = Callback::from(|e: DragEvent| e.prevent_default());

    let hidden = viewer.chrome_hidden().then_some("hidden");
    let current = viewer.current().cloned();

    html! {
        <div id="modalOverlay" ref={overlay} class={classes!("modal-overlay", viewer.is_open().then_some("active"))} onclick={on_overlay_click}>
            <style>
                {r#"
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        display: none;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.92);
                        z-index: 1000;
                    }
                    .modal-overlay.active { display: flex; }
                    .modal-overlay .hidden { display: none; }
                    #modalImageSection { cursor: zoom-in; overflow: hidden; }
                    #modalImageSection.zoomed { cursor: grab; }
                    #modalImageSection.dragging { cursor: grabbing; }
                    #modalImage { transition: transform 0.2s ease; user-select: none; }
                    #modalImageSection.dragging #modalImage { transition: none; }
                    #panIndicator { opacity: 0; transition: opacity 0.3s ease; pointer-events: none; }
                    #panIndicator.show { opacity: 1; }
                "#}
            </style>
            <button class="modal-close" onclick={on_close}><i class="fas fa-times"></i></button>
            <div id="modalCounter" class={classes!("modal-counter", hidden)}>{ viewer.counter() }</div>
            <button id="prevBtn" class={classes!("modal-nav", "prev", hidden)} disabled={!viewer.has_prev()} onclick={on_prev}>
                <i class="fas fa-chevron-left"></i>
            </button>
            <div id="modalImageSection" ref={section}
                class={classes!(viewer.is_zoomed().then_some("zoomed"), viewer.is_dragging().then_some("dragging"))}
                onmousedown={on_mouse_down}
                ontouchstart={on_touch_start}
                ontouchend={on_touch_end}>
                if viewer.is_loading() {
                    <div id="modalLoading" class="modal-loading"><div class="spinner"></div></div>
                }
                if let Some(project) = current.as_ref() {
                    <img id="modalImage" src={project.image.clone()} alt={project.title.clone()}
                        style={format!("transform: {};", viewer.transform())}
                        onload={on_load}
                        ondragstart={on_drag_start} />
                }
                <div id="panIndicator" class={classes!((*driver.hint).then_some("show"))}>
                    <i class="fas fa-arrows-alt"></i>{" Drag to pan"}
                </div>
            </div>
            <button id="nextBtn" class={classes!("modal-nav", "next", hidden)} disabled={!viewer.has_next()} onclick={on_next}>
                <i class="fas fa-chevron-right"></i>
            </button>
            if let Some(project) = current.as_ref() {
                <div id="modalInfo" class={classes!("modal-info", hidden)}>
                    <h3 id="modalTitle">{ &project.title }</h3>
                    <p id="modalDescription">{ &project.description }</p>
                </div>
            }
            <div class="modal-zoom-controls">
                <button onclick={on_zoom_out}><i class="fas fa-search-minus"></i></button>
                <button onclick={on_zoom_reset}>{"1:1"}</button>
                <button onclick={on_zoom_in}><i class="fas fa-search-plus"></i></button>
            </div>
        </div>
    }
}
