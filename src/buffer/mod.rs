//! Internal per-side read buffers.
//!
//! Each comparison owns two [`Window`]s for the duration of one call. They are
//! never pooled or shared. This module is an implementation detail and not
//! part of the public API.

mod window;

pub(crate) use window::{Window, settle};
