//! The `CtWriteLambda` function.
//!
//! [`handler::RequestHandler`] does the work; [`lambda`] connects it to the
//! AWS Lambda Runtime API and `src/main.rs` runs it locally.

pub mod config;
pub mod handler;
pub mod lambda;
pub mod logs;
pub mod util;
