use yew::prelude::*;

use crate::dom;
use crate::state::particles::{confetti_burst, ConfettiLayer, PieceKey};

#[derive(Properties, PartialEq)]
pub struct ConfettiProps {
    /// Each increment fires one burst. Zero fires nothing.
    pub trigger: u32,
}

#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    let layer = use_mut_ref(ConfettiLayer::default);
    let update = use_force_update();

    {
        let layer = layer.clone();
        let update = update.clone();
        use_effect_with_deps(move |trigger: &u32| {
            let id = *trigger;
            if id > 0 {
                let mut rng = dom::random;
                layer.borrow_mut().add_burst(id, confetti_burst(&mut rng));
                update.force_update();
            }
            || ()
        }, props.trigger);
    }

    let on_landed = {
        let layer = layer.clone();
        move |key: PieceKey| {
            let layer = layer.clone();
            let update = update.clone();
            Callback::from(move |_: AnimationEvent| {
                if layer.borrow_mut().land(key) {
                    update.force_update();
                }
            })
        }
    };

    let layer = layer.borrow();
    if layer.is_empty() {
        return html! {};
    }

    html! {
        <>
            <style>
                {r#"
                    .contact-confetti-piece {
                        position: fixed;
                        width: 10px;
                        height: 10px;
                        z-index: 100;
                        pointer-events: none;
                        animation-name: confettiFall;
                        animation-timing-function: linear;
                        animation-fill-mode: forwards;
                    }
                    @keyframes confettiFall {
                        0% { transform: translateY(0) rotate(0deg); opacity: 1; }
                        100% { transform: translateY(100vh) rotate(720deg); opacity: 0; }
                    }
                "#}
            </style>
            { for layer.pieces().map(|(key, piece)| html! {
                <div key={format!("{}-{}", key.0, key.1)} class="contact-confetti-piece"
                    style={piece.style()} onanimationend={on_landed(*key)}></div>
            }) }
        </>
    }
}
