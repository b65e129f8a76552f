use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, warn};
use web_sys::TouchEvent;
use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::config;
use crate::content;
use crate::hooks::{schedule, TimerSlot};
use crate::state::reviews::{truncate_review, ReviewSlider, Swipe, SwipeTracker, Testimonial};

#[derive(Clone)]
struct SliderDriver {
    slider: Rc<RefCell<ReviewSlider>>,
    auto: Rc<RefCell<Option<Interval>>>,
    swap: TimerSlot,
    reveal: TimerSlot,
    fading: UseStateHandle<bool>,
    image_shown: UseStateHandle<bool>,
    update: UseForceUpdateHandle,
}

impl SliderDriver {
    /// fade out -> swap content -> reveal image. Dropped while a
    /// transition is already running.
    fn go(&self, request: impl FnOnce(&mut ReviewSlider) -> bool) {
        if !request(&mut self.slider.borrow_mut()) {
            return;
        }
        self.fading.set(true);
        let driver = self.clone();
        schedule(&self.swap, config::REVIEW_FADE_MS, move || {
            let swapped = driver.slider.borrow_mut().swap();
            if let Some(index) = swapped {
                debug!("Showing review {}", index);
            }
            driver.image_shown.set(false);
            let image_shown = driver.image_shown.clone();
            schedule(&driver.reveal, config::REVIEW_IMAGE_REVEAL_MS, move || image_shown.set(true));
            driver.fading.set(false);
            driver.update.force_update();
        });
        self.restart();
    }

    fn next(&self) {
        self.go(ReviewSlider::request_next);
    }

    fn prev(&self) {
        self.go(ReviewSlider::request_prev);
    }

    fn start(&self) {
        let driver = self.clone();
        let interval = Interval::new(config::REVIEW_AUTO_MS, move || driver.next());
        *self.auto.borrow_mut() = Some(interval);
    }

    fn stop(&self) {
        self.auto.borrow_mut().take();
    }

    fn restart(&self) {
        self.stop();
        self.start();
    }

    fn swipe(&self, gesture: Option<Option<Swipe>>) {
        // None: there was no drag in progress.
        let Some(direction) = gesture else { return };
        match direction {
            Some(Swipe::Prev) => self.prev(),
            Some(Swipe::Next) => self.next(),
            None => {}
        }
        self.restart();
    }
}

fn touch_x(e: &TouchEvent) -> Option<f64> {
    e.touches().get(0).map(|touch| f64::from(touch.client_x()))
}

#[function_component(ReviewCarousel)]
pub fn review_carousel() -> Html {
    let reviews = use_memo(
        |_| match content::testimonials() {
            Ok(reviews) => reviews,
            Err(err) => {
                warn!("review content unreadable: {}", err);
                Vec::new()
            }
        },
        (),
    );
    let driver = SliderDriver {
        slider: use_mut_ref(|| ReviewSlider::new(reviews.len())),
        auto: use_mut_ref(|| None),
        swap: use_mut_ref(|| None),
        reveal: use_mut_ref(|| None),
        fading: use_state(|| false),
        image_shown: use_state(|| true),
        update: use_force_update(),
    };
    let swipe = use_mut_ref(SwipeTracker::default);
    let (window_width, _) = use_window_size();

    {
        let driver = driver.clone();
        let empty = reviews.is_empty();
        use_effect_with_deps(move |_| {
            if !empty {
                driver.start();
            }
            move || driver.stop()
        }, ());
    }

    if reviews.is_empty() {
        return html! {};
    }

    let index = driver.slider.borrow().index();
    let review: &Testimonial = &reviews[index];

    let on_touch_start = {
        let swipe = swipe.clone();
        let driver = driver.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = touch_x(&e) {
                swipe.borrow_mut().begin(x);
                driver.stop();
            }
        })
    };
    let on_touch_move = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(x) = touch_x(&e) {
                swipe.borrow_mut().track(x);
            }
        })
    };
    let on_touch_end = {
        let swipe = swipe.clone();
        let driver = driver.clone();
        Callback::from(move |_: TouchEvent| {
            let gesture = swipe.borrow_mut().finish();
            driver.swipe(gesture);
        })
    };
    let on_mouse_down = {
        let swipe = swipe.clone();
        let driver = driver.clone();
        Callback::from(move |e: MouseEvent| {
            swipe.borrow_mut().begin(f64::from(e.client_x()));
            driver.stop();
        })
    };
    let on_mouse_move = {
        let swipe = swipe.clone();
        Callback::from(move |e: MouseEvent| swipe.borrow_mut().track(f64::from(e.client_x())))
    };
    let on_mouse_up = {
        let swipe = swipe.clone();
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| {
            let gesture = swipe.borrow_mut().finish();
            driver.swipe(gesture);
        })
    };
    let on_slider_leave = {
        let swipe = swipe.clone();
        Callback::from(move |_: MouseEvent| swipe.borrow_mut().cancel())
    };
    let on_box_enter = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.stop())
    };
    let on_box_leave = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| driver.restart())
    };

    html! {
        <div class={classes!("box-right", (*driver.fading).then_some("fade"))}
            onmouseenter={on_box_enter} onmouseleave={on_box_leave}>
            <div class="box-content"
                ontouchstart={on_touch_start}
                ontouchmove={on_touch_move}
                ontouchend={on_touch_end}
                onmousedown={on_mouse_down}
                onmousemove={on_mouse_move}
                onmouseup={on_mouse_up}
                onmouseleave={on_slider_leave}>
                <img class={classes!("review-img", (*driver.image_shown).then_some("active"))}
                    src={review.image.clone()} alt={review.name.clone()} />
                <div class="star">{ review.stars() }</div>
                <p class="user-review">{ truncate_review(&review.text, window_width) }</p>
                <div class="user">
                    <h3>{ &review.name }</h3>
                    <p>{ &review.role }</p>
                </div>
            </div>
            <div class="dotsR">
                { for (0..reviews.len()).map(|i| {
                    let driver = driver.clone();
                    html! {
                        <div key={i}
                            class={classes!("dotR", (i == index).then_some("active"))}
                            onclick={Callback::from(move |_: MouseEvent| driver.go(|s| s.request(i)))}></div>
                    }
                }) }
            </div>
        </div>
    }
}
