//! Contract clause analysis built around a multi-strategy legal-term recognizer.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod terms;
