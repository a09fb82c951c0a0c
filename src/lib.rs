//! skyview — typed client and text views for a Skyhash node.
//!
//! SYSTEM CONTEXT
//! ==============
//! `constants` and `config` resolve where the API lives, `net` talks to the
//! object store and node manager, `router` maps client paths to views, and
//! `views` loads and renders each page. `services` is the container the
//! binary builds once and lends to every view.

pub mod config;
pub mod constants;
pub mod error;
pub mod net;
pub mod router;
pub mod services;
pub mod views;

#[cfg(test)]
mod testing;
