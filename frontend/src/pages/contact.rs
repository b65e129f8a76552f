use yew::prelude::*;

use crate::components::contact_form::ContactWizard;
use crate::components::faq::Faq;
use crate::components::particles::ParticleBackground;
use crate::components::typewriter::TypewriterText;
use crate::content::{FAQS, TYPEWRITER_WORDS};
use crate::hooks::{Reveal, RevealOptions};

const CONTACT_REVEAL: RevealOptions = RevealOptions::once(0.1).with_margin("0px 0px -50px 0px");

#[function_component]
pub fn Contact() -> Html {
    html! {
        <div class="contact-page">
            <section id="contact-hero" class="contact-hero">
                <ParticleBackground />
                <h1>{"Let's build "}<TypewriterText words={TYPEWRITER_WORDS.to_vec()} /></h1>
            </section>

            <Reveal class="contact-scroll-reveal" active_class="contact-visible" options={CONTACT_REVEAL}>
                <section id="contact" class="contact-section">
                    <h2>{"Tell us about your project"}</h2>
                    <ContactWizard />
                </section>
            </Reveal>

            <Reveal class="contact-scroll-reveal" active_class="contact-visible" options={CONTACT_REVEAL}>
                <section id="faq">
                    <Faq entries={FAQS.to_vec()} />
                </section>
            </Reveal>
        </div>
    }
}
