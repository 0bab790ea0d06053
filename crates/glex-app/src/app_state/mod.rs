//! Top-level windowed application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop: window and GPU setup on resume, size and scale tracking,
//! and one scene render per redraw.

mod core;
mod event_handler;
mod init;
mod render;

pub use self::core::GlexApp;
