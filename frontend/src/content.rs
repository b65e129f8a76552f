//! Site copy and media catalog.

use crate::state::reviews::Testimonial;
use crate::state::viewer::ProjectEntry;

const REVIEWS_JSON: &str = include_str!("../content/reviews.json");
const PROJECTS_JSON: &str = include_str!("../content/projects.json");

pub fn testimonials() -> Result<Vec<Testimonial>, serde_json::Error> {
    serde_json::from_str(REVIEWS_JSON)
}

pub fn projects() -> Result<Vec<ProjectEntry>, serde_json::Error> {
    serde_json::from_str(PROJECTS_JSON)
}

pub const TAGLINES: [&str; 5] = [
    "Brand identity with purpose",
    "Interfaces that feel effortless",
    "Creating memorable experiences",
    "Design that communicates and converts",
    "Bringing ideas to life through designs",
];

pub const TYPEWRITER_WORDS: [&str; 3] = [
    "Something Creative",
    "Amazing Websites",
    "Visual Experiences",
];

pub struct Slide {
    pub title: &'static str,
    pub topic: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const SLIDES: [Slide; 4] = [
    Slide {
        title: "GRIDDEZIGN",
        topic: "Brand Identity",
        description: "Logos, colour systems and guidelines that keep a brand recognisable everywhere it shows up.",
        image: "./assets/slides/branding.webp",
    },
    Slide {
        title: "GRIDDEZIGN",
        topic: "UI / UX",
        description: "Product interfaces designed around how people actually move through them.",
        image: "./assets/slides/uiux.webp",
    },
    Slide {
        title: "GRIDDEZIGN",
        topic: "Motion",
        description: "Animated explainers and social loops that make a message stick.",
        image: "./assets/slides/motion.webp",
    },
    Slide {
        title: "GRIDDEZIGN",
        topic: "Print",
        description: "Posters, packaging and editorial layouts with a strong grid underneath.",
        image: "./assets/slides/print.webp",
    },
];

pub struct Tool {
    pub name: &'static str,
    pub icon: &'static str,
    pub tooltip: &'static str,
}

pub const TOOLS: [Tool; 8] = [
    Tool { name: "Figma", icon: "./assets/tools/figma.svg", tooltip: "Figma: interface design and prototyping" },
    Tool { name: "Photoshop", icon: "./assets/tools/photoshop.svg", tooltip: "Photoshop: photo editing and compositing" },
    Tool { name: "Illustrator", icon: "./assets/tools/illustrator.svg", tooltip: "Illustrator: logos and vector artwork" },
    Tool { name: "After Effects", icon: "./assets/tools/after-effects.svg", tooltip: "After Effects: motion graphics" },
    Tool { name: "Premiere Pro", icon: "./assets/tools/premiere.svg", tooltip: "Premiere Pro: video editing" },
    Tool { name: "Blender", icon: "./assets/tools/blender.svg", tooltip: "Blender: 3D modelling and rendering" },
    Tool { name: "InDesign", icon: "./assets/tools/indesign.svg", tooltip: "InDesign: print and editorial layout" },
    Tool { name: "Webflow", icon: "./assets/tools/webflow.svg", tooltip: "Webflow: marketing sites without the wait" },
];

#[derive(Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

pub static SERVICES: [Service; 8] = [
    Service { title: "Brand Identity", description: "Logo, type and colour systems." },
    Service { title: "UI / UX Design", description: "Apps and dashboards people enjoy using." },
    Service { title: "Web Design", description: "Responsive marketing sites." },
    Service { title: "Motion Graphics", description: "Explainers, reels and loops." },
    Service { title: "Packaging", description: "Labels, boxes and unboxing moments." },
    Service { title: "Print & Editorial", description: "Posters, brochures and magazines." },
    Service { title: "Social Media", description: "Templates and campaign creatives." },
    Service { title: "3D Visuals", description: "Product renders and scenes." },
];

#[derive(Debug, PartialEq)]
pub struct Video {
    pub title: &'static str,
    pub src: &'static str,
    pub thumbnail: &'static str,
}

pub static VIDEOS: [Video; 4] = [
    Video { title: "Logo reveal for Aurum Coffee", src: "./assets/videos/aurum-reveal.mp4", thumbnail: "./assets/videos/aurum-reveal.webp" },
    Video { title: "Kaveri Festival teaser", src: "./assets/videos/kaveri-teaser.mp4", thumbnail: "./assets/videos/kaveri-teaser.webp" },
    Video { title: "Loop Fitness app walkthrough", src: "./assets/videos/loop-walkthrough.mp4", thumbnail: "./assets/videos/loop-walkthrough.webp" },
    Video { title: "Product spin for Neem Organics", src: "./assets/videos/neem-spin.mp4", thumbnail: "./assets/videos/neem-spin.webp" },
];

pub const SUBJECTS: [(&str, &str); 5] = [
    ("branding", "Brand Identity"),
    ("web-design", "Web Design"),
    ("ui-ux", "UI / UX"),
    ("motion", "Motion Graphics"),
    ("other", "Something else"),
];

pub const FAQS: [(&str, &str); 5] = [
    ("How long does a branding project take?", "Most identity projects run four to six weeks from kickoff to final files."),
    ("Do you work with startups?", "Yes. We have packages sized for early-stage teams as well as established brands."),
    ("What do I need before we start?", "A short brief, any existing brand material and a rough budget. We help with the rest."),
    ("Can you hand off to our developers?", "Every UI project ships with a documented Figma file and exported assets."),
    ("How many revisions are included?", "Two rounds per deliverable; more can be added when scope changes."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_parses() {
        let reviews = testimonials().unwrap();
        assert_eq!(reviews.len(), 10);
        assert!(reviews.iter().all(|r| r.rating <= 5));
        let projects = projects().unwrap();
        assert!(!projects.is_empty());
    }
}
