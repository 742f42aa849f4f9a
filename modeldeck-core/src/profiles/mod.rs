//! Profile storage and environment-variable rendering.
//!
//! This module provides:
//! - `Profile` - A validated, named API endpoint configuration
//! - `ProfileRegistry` - In-memory ordered registry with the active-profile pointer
//! - `ProfileStore` - JSON-file-backed persistence with import/export
//! - `Shell` / `render_commands` - Environment-variable assignment rendering

mod env;
mod registry;
mod store;
mod types;

pub use env::{
    environment_vars, render_commands, Shell, ENV_API_KEY, ENV_AUTH_TOKEN, ENV_BASE_URL, ENV_MODEL,
};
pub use registry::ProfileRegistry;
pub use store::ProfileStore;
pub use types::{Profile, StoreError};
