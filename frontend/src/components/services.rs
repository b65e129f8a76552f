//! Services page sections: hero title, service cards and the scroll-aware
//! glass panel.

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::content::Service;
use crate::dom;
use crate::hooks::{schedule, use_global_listener, use_reveal, ListenOn, RevealOptions, TimerSlot};
use crate::state::layout::{card_device, service_card_classes, Device};
use crate::state::throttle::{now_ms, Throttle};

const HERO_REVEAL: RevealOptions = RevealOptions::toggle(0.4);
const CARD_REVEAL: RevealOptions = RevealOptions::toggle(0.25).with_margin("0px 0px -80px 0px");

#[derive(Properties, PartialEq)]
pub struct ServiceHeroProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ServiceHero)]
pub fn service_hero(props: &ServiceHeroProps) -> Html {
    let hero = use_node_ref();
    let visible = use_reveal(hero.clone(), HERO_REVEAL);

    html! {
        <section class="service-hero" ref={hero}>
            <h2 class={classes!(visible.then_some("animate-in"))}>{ &props.title }</h2>
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    index: usize,
    device: Device,
    title: &'static str,
    description: &'static str,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), CARD_REVEAL);

    html! {
        <div ref={node} class={classes!(
            "service-card",
            service_card_classes(props.index, props.device),
            visible.then_some("show")
        )}>
            <h3>{ props.title }</h3>
            <p>{ props.description }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardsProps {
    pub services: &'static [Service],
}

/// Entrance directions follow the current device class; visibility toggles
/// `show` in both directions.
#[function_component(ServiceCards)]
pub fn service_cards(props: &ServiceCardsProps) -> Html {
    let device = use_state(|| card_device(dom::viewport_width()));
    let throttle = use_mut_ref(|| Throttle::new(config::RESIZE_THROTTLE_MS));

    {
        let device = device.clone();
        use_global_listener(ListenOn::Window, "resize", Callback::from(move |_: Event| {
            if throttle.borrow_mut().ready(now_ms()) {
                device.set(card_device(dom::viewport_width()));
            }
        }));
    }

    html! {
        <div class="services-grid">
            { for props.services.iter().enumerate().map(|(index, service)| html! {
                <ServiceCard key={index} {index} device={*device}
                    title={service.title} description={service.description} />
            }) }
        </div>
    }
}

fn set_blur(panel: &HtmlElement, value: &str) {
    dom::set_style(panel, "backdrop-filter", value);
    dom::set_style(panel, "-webkit-backdrop-filter", value);
}

/// Drops the panel's backdrop blur while the page scrolls and restores it
/// once scrolling has been quiet for a moment.
#[hook]
pub fn use_scroll_blur(panel: NodeRef) {
    let restore: TimerSlot = use_mut_ref(|| None);

    {
        let restore = restore.clone();
        use_global_listener(ListenOn::Window, "scroll", Callback::from(move |_: Event| {
            let Some(element) = panel.cast::<HtmlElement>() else { return };
            set_blur(&element, "none");
            schedule(&restore, config::BLUR_RESTORE_MS, move || set_blur(&element, "blur(4px)"));
        }));
    }

    use_effect_with_deps(move |_| move || drop(restore.borrow_mut().take()), ());
}
