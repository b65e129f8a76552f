use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

use crate::state::typewriter::Typewriter;

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub words: Vec<&'static str>,
}

fn tick(machine: Rc<RefCell<Typewriter>>, pending: Rc<RefCell<Option<Timeout>>>, text: UseStateHandle<String>) {
    let (shown, delay) = machine.borrow_mut().tick();
    text.set(shown);
    let next = pending.clone();
    let timeout = Timeout::new(delay, move || tick(machine, next, text));
    *pending.borrow_mut() = Some(timeout);
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterProps) -> Html {
    let text = use_state(String::new);

    {
        let text = text.clone();
        use_effect_with_deps(move |words: &Vec<&'static str>| {
            let machine = Rc::new(RefCell::new(Typewriter::new(words.iter().copied())));
            let pending = Rc::new(RefCell::new(None::<Timeout>));
            tick(machine, pending.clone(), text);
            move || {
                pending.borrow_mut().take();
            }
        }, props.words.clone());
    }

    html! {
        <span class="typewriter-text">
            { (*text).clone() }
            <span class="typewriter-cursor">{"|"}</span>
        </span>
    }
}
