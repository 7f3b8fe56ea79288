//! Route registration
//!
//! Each group of endpoints builds its own `Router`; `main` merges them and
//! attaches the shared application state.

pub mod api;
pub mod ws;
