//! Async Hermes client.
//!
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
mod cancel;
pub(crate) mod core;
pub(crate) mod error_classification;

pub use builder::HermesClientBuilder;
pub use cancel::{cancel_pair, CancelHandle, CancelSignal};
pub use core::HermesClient;
