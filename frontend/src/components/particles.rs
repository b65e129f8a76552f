use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::dom;
use crate::hooks::{use_global_listener, ListenOn};
use crate::state::particles::ParticleField;

struct Scene {
    context: CanvasRenderingContext2d,
    field: ParticleField,
}

impl Scene {
    fn draw(&mut self) {
        let (width, height) = self.field.size();
        self.context.clear_rect(0.0, 0.0, width, height);
        self.field.step();
        self.context.set_global_alpha(0.5);
        for particle in self.field.particles() {
            self.context.set_fill_style(&JsValue::from_str(particle.color));
            self.context.begin_path();
            if self
                .context
                .arc(particle.x, particle.y, particle.radius, 0.0, PI * 2.0)
                .is_ok()
            {
                self.context.fill();
            }
        }
    }
}

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

fn animate(scene: Rc<RefCell<Option<Scene>>>, frame: FrameSlot) {
    if let Some(scene) = scene.borrow_mut().as_mut() {
        scene.draw();
    }
    let next = frame.clone();
    let handle = request_animation_frame(move |_| animate(scene, next));
    *frame.borrow_mut() = Some(handle);
}

/// Sizes the canvas to the viewport and spawns a fresh field.
fn reset(canvas: &HtmlCanvasElement) -> Option<Scene> {
    let width = dom::viewport_width();
    let height = dom::viewport_height();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    let mut rng = dom::random;
    Some(Scene {
        context,
        field: ParticleField::new(width, height, &mut rng),
    })
}

#[function_component(ParticleBackground)]
pub fn particle_background() -> Html {
    let canvas = use_node_ref();
    let scene: Rc<RefCell<Option<Scene>>> = use_mut_ref(|| None);

    {
        let canvas = canvas.clone();
        let scene = scene.clone();
        use_effect_with_deps(move |_| {
            let frame: FrameSlot = Rc::new(RefCell::new(None));
            if let Some(element) = canvas.cast::<HtmlCanvasElement>() {
                *scene.borrow_mut() = reset(&element);
                animate(scene, frame.clone());
            } else {
                log::debug!("particle canvas missing");
            }
            move || {
                frame.borrow_mut().take();
            }
        }, ());
    }

    {
        let canvas = canvas.clone();
        use_global_listener(ListenOn::Window, "resize", Callback::from(move |_: Event| {
            if let Some(element) = canvas.cast::<HtmlCanvasElement>() {
                *scene.borrow_mut() = reset(&element);
            }
        }));
    }

    html! {
        <canvas ref={canvas} id="particle-canvas" class="particle-canvas"></canvas>
    }
}
