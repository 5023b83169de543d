//! Future adapter for comparing two async readers.
//!
//! # Example
//!
//! ```ignore
//! use futures_io::AsyncRead;
//! use streameq::{compare_async, CompareConfig};
//!
//! async fn demo<A: AsyncRead, B: AsyncRead>(a: A, b: B) -> Result<(), streameq::CompareError> {
//!     let equal = compare_async(a, b, CompareConfig::default()).await?;
//!     println!("equal: {}", equal);
//!     Ok(())
//! }
//! ```

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::buffer::{Window, settle};
use crate::config::CompareConfig;
use crate::error::{CompareError, Side};

#[derive(Debug)]
struct Windows {
    left: Window,
    right: Window,
}

pin_project! {
    /// A future that compares two async readers.
    ///
    /// This uses `futures_io::AsyncRead` which is runtime-agnostic. Only one
    /// read is outstanding at a time: the right reader is polled only after
    /// the left reader's pending read has completed.
    ///
    /// Dropping the future stops the comparison. Both readers are dropped
    /// along with it.
    #[must_use = "futures do nothing unless polled"]
    pub struct CompareFuture<A, B> {
        #[pin]
        left: A,
        #[pin]
        right: B,
        config: CompareConfig,
        // Allocated on first poll.
        windows: Option<Windows>,
        finished: bool,
    }
}

impl<A, B> CompareFuture<A, B> {
    /// Creates a new comparison future.
    ///
    /// # Arguments
    ///
    /// * `left` - First async reader
    /// * `right` - Second async reader
    /// * `config` - The comparison configuration
    pub fn new(left: A, right: B, config: CompareConfig) -> Self {
        Self {
            left,
            right,
            config,
            windows: None,
            finished: false,
        }
    }
}

impl<A: AsyncRead, B: AsyncRead> Future for CompareFuture<A, B> {
    type Output = Result<bool, CompareError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        if *this.finished {
            panic!("CompareFuture polled after completion");
        }

        if this.windows.is_none() {
            if let Err(e) = this.config.validate() {
                *this.finished = true;
                return Poll::Ready(Err(e));
            }
        }
        let size = this.config.buffer_size();
        let windows = this.windows.get_or_insert_with(|| Windows {
            left: Window::new(size),
            right: Window::new(size),
        });

        loop {
            if windows.left.needs_fill() {
                match windows.left.poll_fill(this.left.as_mut(), cx) {
                    Poll::Pending => return Poll::Pending,
                    Poll::Ready(Err(source)) => {
                        *this.finished = true;
                        return Poll::Ready(Err(CompareError::Read {
                            side: Side::Left,
                            source,
                        }));
                    }
                    Poll::Ready(Ok(n)) => {
                        log::trace!("left read {} bytes at {}", n, windows.left.consumed());
                    }
                }
            }

            if windows.right.needs_fill() {
                match windows.right.poll_fill(this.right.as_mut(), cx) {
                    Poll::Pending => return Poll::Pending,
                    Poll::Ready(Err(source)) => {
                        *this.finished = true;
                        return Poll::Ready(Err(CompareError::Read {
                            side: Side::Right,
                            source,
                        }));
                    }
                    Poll::Ready(Ok(n)) => {
                        log::trace!("right read {} bytes at {}", n, windows.right.consumed());
                    }
                }
            }

            if let Some(equal) = settle(&mut windows.left, &mut windows.right) {
                *this.finished = true;
                return Poll::Ready(Ok(equal));
            }
        }
    }
}

/// Creates a future that compares two async readers.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O.
///
/// # Runtime Compatibility
///
/// For tokio users, you can use `tokio_util::compat` to convert
/// `tokio::io::AsyncRead` to `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use streameq::{compare_async, CompareConfig};
///
/// let a = tokio::fs::File::open("a.bin").await?;
/// let b = tokio::fs::File::open("b.bin").await?;
/// let equal = compare_async(a.compat(), b.compat(), CompareConfig::default()).await?;
/// ```
pub fn compare_async<A: AsyncRead, B: AsyncRead>(
    left: A,
    right: B,
    config: CompareConfig,
) -> CompareFuture<A, B> {
    CompareFuture::new(left, right, config)
}
