//! Login form implementation
//!
//! Split into state, geometry, components and the top-level renderer

pub mod components;
pub mod layout;
pub mod renderer;
pub mod state;

// Re-export main types and functions for external use
pub use layout::{FormLayout, HitTarget};
pub use renderer::render_login;
pub use state::{Focus, FormState, Presence};
