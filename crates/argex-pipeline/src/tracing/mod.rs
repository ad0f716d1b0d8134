//! Logging setup for argex binaries and tests.
//! `tracing` with an `EnvFilter` read from `ARGEX_LOG`.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with};
