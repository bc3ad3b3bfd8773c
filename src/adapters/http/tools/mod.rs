//! Tools HTTP adapter - REST API for the facility tools.
//!
//! Provides endpoints for:
//! - Listing available tools
//! - Invoking a tool by name

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;

pub use handlers::ToolsAppState;
pub use routes::tools_router;
