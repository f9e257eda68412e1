//! HTTP API handlers for magpho-tools

pub mod buildinfo;
pub mod catalog;
pub mod health;
pub mod morphospace;
pub mod tools;

pub use buildinfo::get_build_info;
pub use health::health_routes;
pub use tools::{list_tools, unknown_tool, ToolError};
