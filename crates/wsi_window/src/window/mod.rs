//! Window management subsystem
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Application Code            │
//! │     (impl EventHandler)         │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!         ┌─────▼─────┐
//!         │  Window   │ ← Public API (handle.rs)
//!         └─────┬─────┘
//!               │ Drives
//!      ┌────────▼────────┐
//!      │ WindowBackend   │ ← Backend trait (backend.rs)
//!      └────────┬────────┘
//!               │ Implemented by
//!   ┌───────────▼───────────┐
//!   │ platform::GlfwBackend │
//!   │ platform::Headless    │
//!   └───────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - **`handle`**: application-facing [`Window`]
//! - **`backend`**: contract every platform backend implements
//! - **`handler`**: [`EventHandler`], one callback per event kind

pub mod backend;
pub mod handle;
pub mod handler;

pub use backend::{NativeWindow, WindowBackend};
pub use handle::Window;
pub use handler::EventHandler;
