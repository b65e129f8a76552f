//! DOM-free state machines driven by the components.

pub mod carousel;
pub mod contact;
pub mod faq;
pub mod layout;
pub mod navigation;
pub mod particles;
pub mod reviews;
pub mod throttle;
pub mod typewriter;
pub mod viewer;
