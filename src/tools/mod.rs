//! Weightcast Tools module
//!
//! MCP tool implementations on top of the engine.

pub mod inputs;
pub mod metrics;
pub mod status;
