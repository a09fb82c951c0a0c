//! Networking modules for the Skyhash HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the shared client and response parsing, `skyobject` and
//! `skywire` wrap the object store and node manager endpoints, `boards` is
//! a facade over `skyobject`, and `types` defines the wire schema.

pub mod boards;
pub mod http;
pub mod skyobject;
pub mod skywire;
pub mod types;
