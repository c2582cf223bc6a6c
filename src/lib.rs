//! popchip - renders and serves The Pop and Chip Shop landing page.
//!
//! The page model (`content`, `nav`, `page`) is plain data and pure render
//! functions; `cli` wires it to the build, serve, menu and validate
//! commands.

mod asset;
pub mod cli;
pub mod config;
pub mod content;
pub mod core;
pub mod embed;
pub mod logger;
pub mod nav;
pub mod page;
mod utils;
