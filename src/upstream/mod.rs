//! Upstream: the external generation API the relay forwards to.
//!
//! DESIGN
//! ======
//! Handlers depend on the `TextGenerator` / `ImageGenerator` traits, not on
//! a concrete client, so tests swap in mocks. The production implementations
//! target Pollinations: text is a plain `GET` keyed by the URL-encoded prompt,
//! and images are served from a predictable URL that the relay builds without
//! contacting the upstream.

pub mod pollinations;
pub mod types;

pub use types::{GeneratedImage, ImageGenerator, TextGenerator, UpstreamError};
