use yew::prelude::*;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::{Children, Properties};

use crate::hooks::{Reveal, RevealOptions};
use crate::state::faq::{is_toggle_key, Accordion};

const FAQ_REVEAL: RevealOptions = RevealOptions::once(0.1).with_margin("0px 0px -50px 0px");

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    let onkeydown = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: KeyboardEvent| {
            if is_toggle_key(&e.key()) {
                e.prevent_default();
                on_toggle.emit(());
            }
        })
    };

    html! {
        <Reveal class="faq-item faq-scroll-reveal" active_class="faq-visible" options={FAQ_REVEAL}>
            <button class="faq-toggle-button" aria-expanded={props.open.to_string()} {onclick} {onkeydown}>
                <span class="question-text">{&props.question}</span>
                <i class={classes!("fas", "fa-chevron-down", "faq-chevron-icon", props.open.then_some("faq-rotated"))}></i>
            </button>
            <div class={classes!("faq-accordion-content", props.open.then_some("faq-expanded"))}>
                { for props.children.iter() }
            </div>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: Vec<(&'static str, &'static str)>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let accordion = use_state(Accordion::default);

    html! {
        <section class="faq-section">
            <style>
                {r#"
                    .faq-accordion-content {
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease;
                    }
                    .faq-accordion-content.faq-expanded {
                        max-height: 500px;
                    }
                    .faq-chevron-icon {
                        transition: transform 0.3s ease;
                    }
                    .faq-chevron-icon.faq-rotated {
                        transform: rotate(180deg);
                    }
                    .faq-scroll-reveal {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .faq-scroll-reveal.faq-visible {
                        opacity: 1;
                        transform: translateY(0);
                    }
                "#}
            </style>
            <h2>{"Frequently Asked Questions"}</h2>
            { for props.entries.iter().enumerate().map(|(index, (question, answer))| {
                let on_toggle = {
                    let accordion = accordion.clone();
                    Callback::from(move |_: ()| {
                        let mut next = *accordion;
                        next.toggle(index);
                        accordion.set(next);
                    })
                };
                html! {
                    <FaqItem key={index} question={*question} open={accordion.is_open(index)} {on_toggle}>
                        <p>{*answer}</p>
                    </FaqItem>
                }
            }) }
        </section>
    }
}
