use yew::prelude::*;

use crate::components::project_grid::ProjectGrid;
use crate::components::services::{use_scroll_blur, ServiceCards, ServiceHero};
use crate::components::tools::ToolsCarousel;
use crate::components::videos::VideoGallery;
use crate::content::{SERVICES, VIDEOS};

#[function_component]
pub fn Services() -> Html {
    let glass = use_node_ref();
    use_scroll_blur(glass.clone());

    html! {
        <div class="services-page">
            <ServiceHero title="What we do">
                <p>{"Identity, interfaces and motion for brands that want to be noticed."}</p>
            </ServiceHero>

            <div class="services-main" ref={glass}>
                <section id="services">
                    <ServiceCards services={&SERVICES[..]} />
                </section>

                <section id="toolkit" class="toolkit-section">
                    <h2>{"Our toolkit"}</h2>
                    <ToolsCarousel />
                </section>

                <section id="projects" class="projects-section">
                    <h2>{"Selected projects"}</h2>
                    <ProjectGrid />
                </section>

                <section id="videos" class="videos-section">
                    <h2>{"Motion work"}</h2>
                    <VideoGallery videos={&VIDEOS[..]} />
                </section>
            </div>
        </div>
    }
}
