//! Core circ library (event pipeline, reducers, config).
//!
//! The engine turns raw inbound protocol lines into semantic events and
//! folds them into a hierarchical application state:
//!
//! ```text
//! raw batch ──▶ stages (parser, …, logger) ──▶ reduce_root ──▶ RootState
//! ```
//!
//! Everything here is synchronous and run-to-completion; transport, timers
//! and rendering are external collaborators that enqueue events and read
//! state.

pub mod config;
pub mod dispatch;
pub mod engine;
pub mod events;
pub mod stages;
pub mod state;
