pub mod config;
pub mod errors;
pub mod mcp;
pub mod slug;
pub mod store;
pub mod types;
