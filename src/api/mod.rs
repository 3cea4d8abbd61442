//! Client side of the Tool Executor HTTP service.
//!
//! The executor does the real work (files, search, git, the coordination
//! database). This module only knows how to reach it and what the
//! request bodies look like.

mod client;
pub mod types;

pub use client::ExecutorClient;
