//! # Datetime MCP Server Core
//!
//! Timezone queries backing the MCP tool and resource surface.
//!
//! ## Modules
//! - `error`: Custom error types and error handling
//! - `models`: Data structures for tool requests
//! - `provider`: Timezone lookup, validation and formatting
//! - `utils`: Format constants, curated zone list and URI helpers

pub mod error;
pub mod models;
pub mod provider;
pub mod utils;
