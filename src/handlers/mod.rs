//! HTTP and WebSocket request handlers
//!
//! This module organizes all request handlers into logical groups:
//! - `api` - Health check endpoint
//! - `ws` - WebSocket real-time voice sessions
pub mod api;
pub mod ws;

// Re-export commonly used handlers for convenient access
pub use api::health_check;
pub use ws::ws_voice_handler;
