//! # `ctfp-memo`
//!
//! Memoizing wrappers for single-argument functions. A wrapped function is invoked at most once
//! per distinct argument; later calls with an equal argument are answered from a cache that
//! lives as long as the wrapper and is never evicted.
//!
//! - [`Memoizer`] is the single-threaded wrapper, built with [`memoize`].
//! - [`SharedMemoizer`] can be shared across threads and collapses concurrent first calls for
//!   the same argument into one computation.
//!
//! Arguments are turned into cache keys through [`MemoKey`]. Arguments without a usable key are
//! refused with [`MemoError::TypeKind`].

mod config;
mod errors;
mod key;
mod memoizer;
mod shared;
mod stats;

pub use config::{MemoConfig, DEFAULT_LABEL};
pub use errors::{MemoError, MemoResult};
pub use key::MemoKey;
pub use memoizer::{memoize, Memoizer};
pub use shared::SharedMemoizer;
pub use stats::MemoStatsSnapshot;
