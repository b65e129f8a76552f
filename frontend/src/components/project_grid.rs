use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::components::image_viewer::{ImageModal, ViewerRequest};
use crate::config;
use crate::content;
use crate::dom;
use crate::hooks::{use_global_listener, ListenOn};
use crate::state::layout::{card_in_view, grid_device, project_card_class};
use crate::state::throttle::{now_ms, FrameGate, Throttle};
use crate::state::viewer::Gallery;

/// Which cards are inside the reveal band right now.
fn visible_cards(grid: &NodeRef) -> Vec<bool> {
    let Some(grid) = grid.cast::<Element>() else {
        return Vec::new();
    };
    let height = dom::viewport_height();
    let Ok(cards) = grid.query_selector_all(".project-card") else {
        return Vec::new();
    };
    (0..cards.length())
        .filter_map(|i| cards.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|card| {
            let rect = card.get_bounding_client_rect();
            card_in_view(rect.top(), rect.bottom(), height)
        })
        .collect()
}

#[function_component(ProjectGrid)]
pub fn project_grid() -> Html {
    let projects = use_memo(
        |_| match content::projects() {
            Ok(projects) => projects,
            Err(err) => {
                warn!("project content unreadable: {}", err);
                Vec::new()
            }
        },
        (),
    );
    let gallery = use_memo(|projects| Gallery::collect(projects), projects.clone());

    let grid = use_node_ref();
    let shown = use_state(Vec::<bool>::new);
    let width = use_state(dom::viewport_width);
    let request = use_state(|| None::<ViewerRequest>);
    let serial = use_mut_ref(|| 0u32);

    let gate = use_mut_ref(FrameGate::default);
    let frame: Rc<RefCell<Option<AnimationFrame>>> = use_mut_ref(|| None);
    let resize_throttle = use_mut_ref(|| Throttle::new(config::RESIZE_THROTTLE_MS));

    let last_shown = use_mut_ref(Vec::<bool>::new);

    let refresh = {
        let grid = grid.clone();
        let shown = shown.clone();
        Callback::from(move |_: ()| {
            let next = visible_cards(&grid);
            if next != *last_shown.borrow() {
                *last_shown.borrow_mut() = next.clone();
                shown.set(next);
            }
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with_deps(move |_| {
            refresh.emit(());
            || ()
        }, projects.len());
    }

    {
        let refresh = refresh.clone();
        let frame = frame.clone();
        use_global_listener(ListenOn::Window, "scroll", Callback::from(move |_: Event| {
            if !gate.borrow_mut().claim() {
                return;
            }
            let gate = gate.clone();
            let refresh = refresh.clone();
            let handle = request_animation_frame(move |_| {
                refresh.emit(());
                gate.borrow_mut().release();
            });
            *frame.borrow_mut() = Some(handle);
        }));
    }

    {
        let refresh = refresh.clone();
        let width = width.clone();
        use_global_listener(ListenOn::Window, "resize", Callback::from(move |_: Event| {
            if !resize_throttle.borrow_mut().ready(now_ms()) {
                return;
            }
            width.set(dom::viewport_width());
            refresh.emit(());
        }));
    }

    {
        use_effect_with_deps(move |_| move || drop(frame.borrow_mut().take()), ());
    }

    let device = grid_device(*width);

    html! {
        <>
            <div class="projects-grid" ref={grid}>
                { for projects.iter().enumerate().map(|(idx, project)| {
                    let onclick = {
                        let gallery = gallery.clone();
                        let request = request.clone();
                        let serial = serial.clone();
                        let category = project.category.clone();
                        Callback::from(move |_: MouseEvent| {
                            let Some((items, index)) = gallery.locate(&category, idx) else { return };
                            let id = {
                                let mut serial = serial.borrow_mut();
                                *serial += 1;
                                *serial
                            };
                            request.set(Some(ViewerRequest { id, items, index }));
                        })
                    };
                    let visible = shown.get(idx).copied().unwrap_or(false);
                    html! {
                        <div key={idx}
                            class={classes!("project-card", project_card_class(idx, device), visible.then_some("show"))}
                            data-category={project.category.clone()}
                            {onclick}>
                            <img src={project.image.clone()} alt={project.title.clone()} loading="lazy" />
                            <div class="project-overlay">
                                <h3>{ &project.title }</h3>
                                <p>{ &project.description }</p>
                            </div>
                        </div>
                    }
                }) }
            </div>
            <ImageModal request={(*request).clone()} />
        </>
    }
}
