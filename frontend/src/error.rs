use thiserror::Error;

/// Failures while fetching and injecting the navbar partial. Any of them
/// stops the rest of the page wiring; there is no retry.
#[derive(Debug, Error)]
pub enum BootError {
    #[error("navbar request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("navbar fetch failed with status {0}")]
    Status(u16),
    #[error("navbar body unreadable: {0}")]
    Body(#[source] gloo_net::Error),
    #[error("#navbar host element missing")]
    MissingHost,
}
