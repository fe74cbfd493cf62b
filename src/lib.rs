//! PRISM API: Prompt Refinement & Image Synthesis Manager.
//!
//! The library holds the settings loader and the HTTP surface so both can be
//! exercised from `tests/`; `main.rs` wires them into a running server.

pub mod config;
pub mod error;
pub mod routes;
