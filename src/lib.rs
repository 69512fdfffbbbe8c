//! Weightcast Library
//!
//! Goal projection and metabolic estimation for personal weight tracking,
//! plus the MCP tool layer that serves it.

pub mod build_info;
pub mod config;
pub mod engine;
pub mod mcp;
pub mod models;
pub mod tools;
pub mod units;
