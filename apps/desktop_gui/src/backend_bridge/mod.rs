//! Bridge between the UI thread and the backend worker that performs HTTP calls.

pub mod commands;
pub mod runtime;
