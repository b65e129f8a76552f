use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::config;

/// One toast request. A new `id` replaces whatever toast is showing.
#[derive(Clone, PartialEq, Debug)]
pub struct ToastMessage {
    pub id: u32,
    pub text: String,
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<ToastMessage>,
}

#[derive(Clone, Copy, PartialEq)]
enum Stage {
    Hidden,
    Shown,
    Fading,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let stage = use_state(|| Stage::Hidden);

    {
        let stage = stage.clone();
        use_effect_with_deps(move |message: &Option<ToastMessage>| {
            let mut timers = Vec::new();
            if message.is_some() {
                stage.set(Stage::Shown);
                let fade = stage.clone();
                timers.push(Timeout::new(config::TOAST_MS, move || fade.set(Stage::Fading)));
                let hide = stage.clone();
                timers.push(Timeout::new(config::TOAST_MS + config::TOAST_FADE_MS, move || {
                    hide.set(Stage::Hidden)
                }));
            }
            // Dropping the handles cancels a toast that is being replaced.
            move || drop(timers)
        }, props.message.clone());
    }

    let Some(message) = props.message.as_ref() else {
        return html! {};
    };
    if *stage == Stage::Hidden {
        return html! {};
    }

    html! {
        <div key={message.id} class={classes!("toast-notification", (*stage == Stage::Fading).then_some("fading"))}>
            <style>
                {r#"
                    .toast-notification {
                        position: fixed;
                        bottom: 20px;
                        left: 50%;
                        transform: translateX(-50%);
                        background: rgba(239, 68, 68, 0.9);
                        color: #fff;
                        padding: 12px 24px;
                        border-radius: 9999px;
                        box-shadow: 0 10px 15px rgba(0,0,0,0.3);
                        z-index: 50;
                        font-size: 14px;
                        font-weight: 500;
                        backdrop-filter: blur(4px);
                        display: flex;
                        align-items: center;
                        gap: 8px;
                        opacity: 1;
                        transition: opacity 0.3s;
                    }
                    .toast-notification.fading {
                        opacity: 0;
                    }
                "#}
            </style>
            <i class="fas fa-exclamation-circle"></i>
            {" "}{&message.text}
        </div>
    }
}
