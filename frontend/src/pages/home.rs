use yew::prelude::*;

use crate::components::deck::ProjectDeck;
use crate::components::reviews::ReviewCarousel;
use crate::components::widgets::{ReadMoreOverlay, RotatingText, TechTrack};
use crate::content::{TAGLINES, TOOLS};
use crate::hooks::{use_reveal, RevealOptions};

const FOUNDER_REVEAL: RevealOptions = RevealOptions::once(0.5);

#[function_component]
pub fn Home() -> Html {
    let founder = use_node_ref();
    let founder_visible = use_reveal(founder.clone(), FOUNDER_REVEAL);

    html! {
        <div class="home-page">
            <section id="home" class="hero">
                <h1>{"We design brands people remember"}</h1>
                <p class="hero-tagline"><RotatingText lines={TAGLINES.to_vec()} /></p>
                <a href="#work" class="cta-button">{"See our work"}</a>
            </section>

            <section id="work">
                <ProjectDeck />
            </section>

            <section id="about" class="founder-glass">
                <div class="left-content">
                    <img src="./assets/founder.webp" alt="Founder portrait" loading="lazy" />
                </div>
                <div ref={founder} class={classes!("right-content", founder_visible.then_some("active"))}>
                    <h2>{"Meet the founder"}</h2>
                    <p>
                        {"Griddezign started as a one-person studio drawing logos for friends' businesses. \
                          Ten years later it is a small team that still sketches every idea on paper first."}
                    </p>
                    <ReadMoreOverlay>
                        <h3>{"The longer story"}</h3>
                        <p>
                            {"Before the studio there was a print shop, a lot of misaligned business cards and \
                              an obsession with grids. Every project since has been built on the same idea: \
                              structure first, then personality."}
                        </p>
                        <p>
                            {"Today we work with startups and established brands on identity, interfaces and \
                              motion, keeping teams small so the people you brief are the people who design."}
                        </p>
                    </ReadMoreOverlay>
                </div>
            </section>

            <section id="reviews" class="reviews">
                <h2>{"What clients say"}</h2>
                <ReviewCarousel />
            </section>

            <section id="tools" class="tech">
                <h2>{"Tools we use"}</h2>
                <div class="tech-wrapper">
                    <TechTrack>
                        { for TOOLS.iter().chain(TOOLS.iter()).enumerate().map(|(i, tool)| html! {
                            <div key={i} class="tech-item" aria-hidden={(i >= TOOLS.len()).to_string()}>
                                <img src={tool.icon} alt={tool.name} />
                            </div>
                        }) }
                    </TechTrack>
                </div>
            </section>
        </div>
    }
}
