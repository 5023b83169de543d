//! Async comparison support.
//!
//! This module compares two `futures-io::AsyncRead` sources, which keeps it
//! runtime-agnostic and compatible with tokio, async-std, smol, and other
//! async runtimes.
//!
//! - [`compare_async`] - Creates a future resolving to the comparison result
//!
//! This module requires the `async-io` feature to be enabled.

mod future;

pub use future::{CompareFuture, compare_async};
