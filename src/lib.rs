//! streameq
//!
//! Streaming equivalence check for byte streams and files.
//!
//! `streameq` answers one question: do two byte streams contain the same
//! bytes? It reads both inputs incrementally through one bounded buffer per
//! side and stops as soon as the answer is known. It is meant for tooling that
//! compares large inputs:
//!
//! - backups against their source
//! - test fixtures and golden files
//! - build artifacts
//!
//! The two inputs do not need to agree on how they chunk their reads. Each
//! step compares only the bytes currently available on both sides, so short
//! reads and uneven chunk boundaries never produce a false mismatch.
//!
//! The crate intentionally:
//! - does NOT buffer whole inputs
//! - does NOT pre-check sizes or hash contents
//! - does NOT retry failed reads
//! - does NOT keep global or shared state
//!
//! # Sync
//!
//! ```no_run
//! use std::fs::File;
//! use streameq::{compare_readers, files_equal};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     if files_equal("a.bin", "b.bin")? {
//!         println!("identical");
//!     }
//!
//!     let a = File::open("a.bin")?;
//!     let b = std::io::stdin();
//!     println!("stdin matches: {}", compare_readers(a, b, 64 * 1024)?);
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_io::AsyncRead;
//! use streameq::{compare_async, CompareConfig};
//!
//! async fn demo<A: AsyncRead, B: AsyncRead>(a: A, b: B) -> Result<bool, streameq::CompareError> {
//!     compare_async(a, b, CompareConfig::default()).await
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod compare;
mod config;
mod error;
mod file;
mod source;

mod buffer; // internal per-side windows

#[cfg(feature = "async-io")]
mod async_compare;

//
// Public surface (intentionally tiny)
//

pub use compare::{Comparator, Outcome, compare, compare_readers};
pub use config::{CompareConfig, DEFAULT_BUFFER_SIZE};
pub use error::{CompareError, Side};
pub use file::{files_equal, files_equal_with};
pub use source::{ByteSource, Fill, ReadSource, ReadStatus};

#[doc(hidden)]
pub use source::ScriptedSource;

#[cfg(feature = "async-io")]
pub use async_compare::{CompareFuture, compare_async};
