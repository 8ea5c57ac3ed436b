//! HTTP service that renders QR codes, optionally branded with a logo.

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod server;

pub use bootstrap::init_foundation;
