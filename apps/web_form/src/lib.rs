#![forbid(unsafe_code)]

//! Browser front-end for the cardiovascular risk prediction page.
//!
//! On `wasm32` the module mounts itself on load: it looks up the required page elements,
//! wires input, submit, and click listeners to a [`form_controller::FormController`], and
//! posts submissions to the page origin's `/predict` endpoint.

pub mod bindings;
pub mod error;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use bindings::DomBindings;
pub use error::DomError;

#[cfg(target_arch = "wasm32")]
pub use wasm::{close_modal, start};
