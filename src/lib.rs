//! chromehist — an MCP server exposing the local Chrome browsing history.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod database;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod types;
