//! Shared lock and pointer types used across the buffer layer.

pub use parking_lot::{Mutex, RawRwLock, RwLock};

pub use std::sync::Arc;

/// Owned read guard over an `Arc<RwLock<T>>`.
pub type ArcReadGuard<T> = lock_api::ArcRwLockReadGuard<RawRwLock, T>;
