//! Growable per-bucket element storage for the distribution pass.
//!
//! Two behaviorally equivalent strategies sit behind the same API. The
//! default `block-arena` feature selects pooled block-linked storage, which
//! keeps allocation count independent of the bucket count; without it each
//! bucket is a plain growable `Vec`.

#[cfg(feature = "block-arena")]
mod arena;
#[cfg(not(feature = "block-arena"))]
mod plain;

#[cfg(feature = "block-arena")]
pub(crate) use arena::BucketStore;
#[cfg(not(feature = "block-arena"))]
pub(crate) use plain::BucketStore;
