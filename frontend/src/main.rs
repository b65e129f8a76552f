use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info, Level};
use gloo_net::http::Request;
use web_sys::Element;

mod config;
mod content;
mod dom;
mod error;
mod hooks;
mod state;
mod components {
    pub mod confetti;
    pub mod contact_form;
    pub mod deck;
    pub mod faq;
    pub mod image_viewer;
    pub mod navbar;
    pub mod particles;
    pub mod project_grid;
    pub mod reviews;
    pub mod services;
    pub mod toast;
    pub mod tools;
    pub mod typewriter;
    pub mod videos;
    pub mod widgets;
}
mod pages {
    pub mod home;
    pub mod services;
    pub mod contact;
}

use components::navbar::use_navbar;
use components::widgets::CursorFollower;
use error::BootError;
use pages::{
    home::Home,
    services::Services,
    contact::Contact,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/contact")]
    Contact,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum BootState {
    Loading,
    Ready,
    Failed,
}

/// Nothing interactive starts until the navbar partial is in place. A
/// failed fetch leaves the whole site uninitialized.
fn initialized(state: &BootState) -> bool {
    matches!(state, BootState::Ready)
}

fn static_shell() -> Html {
    html! {
        <main class="static-shell">
            <h1>{"Griddezign"}</h1>
            <p>{"We design brands people remember"}</p>
        </main>
    }
}

async fn fetch_navbar() -> Result<String, BootError> {
    let response = Request::get(&config::navbar_partial_url()).send().await?;
    if !response.ok() {
        return Err(BootError::Status(response.status()));
    }
    response.text().await.map_err(BootError::Body)
}

async fn boot(host: NodeRef) -> Result<(), BootError> {
    let markup = fetch_navbar().await?;
    let host = host.cast::<Element>().ok_or(BootError::MissingHost)?;
    host.set_inner_html(&markup);
    Ok(())
}

#[function_component]
fn App() -> Html {
    let navbar_host = use_node_ref();
    let boot_state = use_state(|| BootState::Loading);

    {
        let navbar_host = navbar_host.clone();
        let boot_state = boot_state.clone();
        use_effect_with_deps(move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match boot(navbar_host).await {
                    Ok(()) => {
                        info!("Navbar injected");
                        boot_state.set(BootState::Ready);
                    }
                    Err(e) => {
                        error!("Initialization error: {}", e);
                        boot_state.set(BootState::Failed);
                    }
                }
            });
            || ()
        }, ());
    }

    let ready = initialized(&boot_state);
    use_navbar(ready);

    html! {
        <BrowserRouter>
            <div id="navbar" ref={navbar_host}></div>
            if ready {
                <CursorFollower />
                <Switch<Route> render={switch} />
            } else if *boot_state == BootState::Failed {
                { static_shell() }
            }
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting application");

    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_loaded_navbar_starts_the_site() {
        assert!(initialized(&BootState::Ready));
        assert!(!initialized(&BootState::Loading));
        assert!(!initialized(&BootState::Failed));
    }
}
