//! MCP tool handlers for the kanban server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each group of related board events is in a separate file.

pub mod drag;
pub mod edit;
pub mod navigate;
pub mod tasks;
