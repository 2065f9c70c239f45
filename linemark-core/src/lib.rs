//! Linemark Core - Marker toggle engine for markdown lines
//!
//! This crate contains the core logic for linemark, independent of any
//! host editor:
//! - Leading markdown token detection (bullet, checkbox, quote)
//! - Marker pair wrap/unwrap toggling
//! - Toggle command catalog
//! - Host editor seam and Rope-based buffer
//! - Configuration management

pub mod buffer;
pub mod commands;
pub mod config;
pub mod host;
pub mod marker;
pub mod token;

// Re-export commonly used types
pub use buffer::{Buffer, CursorHost};
pub use commands::ToggleCommand;
pub use config::Config;
pub use host::HostEditor;
pub use marker::{toggle, MarkerSpec};
pub use token::{classify, TokenClassification, TokenKind};
