use yew::prelude::*;

use crate::config;
use crate::content::SLIDES;
use crate::hooks::{schedule, TimerSlot};
use crate::state::carousel::{Deck, DeckDirection};

/// Hero carousel: the front item fills the stage, the rest queue up as
/// thumbnails. Any move reschedules the automatic advance.
#[function_component(ProjectDeck)]
pub fn project_deck() -> Html {
    let deck = use_mut_ref(|| Deck::new(SLIDES.len()));
    let update = use_force_update();
    let clear_timer: TimerSlot = use_mut_ref(|| None);
    let auto_timer: TimerSlot = use_mut_ref(|| None);
    let moves = use_mut_ref(|| 0u32);

    let shift: Callback<DeckDirection> = {
        let deck = deck.clone();
        let update = update.clone();
        let clear_timer = clear_timer.clone();
        let moves = moves.clone();
        Callback::from(move |direction: DeckDirection| {
            deck.borrow_mut().shift(direction);
            *moves.borrow_mut() += 1;
            update.force_update();

            let deck = deck.clone();
            let update = update.clone();
            schedule(&clear_timer, config::DECK_TRANSITION_MS, move || {
                deck.borrow_mut().clear_direction();
                update.force_update();
            });
        })
    };

    {
        let shift = shift.clone();
        let auto_timer = auto_timer.clone();
        // A timeout rather than an interval: every move pushes the next
        // automatic one back by the full delay.
        use_effect_with_deps(move |_| {
            let shift = shift.clone();
            schedule(&auto_timer, config::DECK_AUTO_MS, move || shift.emit(DeckDirection::Next));
            || ()
        }, *moves.borrow());
    }

    {
        use_effect_with_deps(move |_| {
            move || {
                auto_timer.borrow_mut().take();
                clear_timer.borrow_mut().take();
            }
        }, ());
    }

    if SLIDES.is_empty() {
        return html! {};
    }

    let deck_ref = deck.borrow();
    let order: Vec<usize> = deck_ref.order().collect();
    let direction = deck_ref.direction().map(|d| d.class());

    let on_next = {
        let shift = shift.clone();
        Callback::from(move |_: MouseEvent| shift.emit(DeckDirection::Next))
    };
    let on_prev = {
        let shift = shift.clone();
        Callback::from(move |_: MouseEvent| shift.emit(DeckDirection::Prev))
    };

    html! {
        <div class={classes!("carousel", direction)}>
            <div class="list">
                { for order.iter().map(|&i| {
                    let slide = &SLIDES[i];
                    html! {
                        <div class="item" key={i}>
                            <img src={slide.image} alt={slide.topic} />
                            <div class="content">
                                <div class="title">{ slide.title }</div>
                                <div class="topic">{ slide.topic }</div>
                                <div class="des">{ slide.description }</div>
                            </div>
                        </div>
                    }
                }) }
            </div>
            <div class="thumbnail">
                { for order.iter().map(|&i| {
                    let slide = &SLIDES[i];
                    html! {
                        <div class="titem" key={i}>
                            <img src={slide.image} alt={slide.topic} />
                            <div class="content"><div class="title">{ slide.topic }</div></div>
                        </div>
                    }
                }) }
            </div>
            <div class="arrows">
                <button id="prev" onclick={on_prev}>{"<"}</button>
                <button id="next" onclick={on_next}>{">"}</button>
            </div>
        </div>
    }
}
