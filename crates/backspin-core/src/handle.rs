//! Scoped shared-read access to a host buffer.

use core::fmt;

use crate::buffer::{SampleBuffer, SharedBuffer};
use crate::compat::{ArcReadGuard, RwLock};
use crate::view::BufferView;

/// Read-locked handle to a [`SharedBuffer`].
///
/// While a handle is alive no writer can reshape, reload or free the buffer.
/// The lock is released when the handle is dropped. The handle keeps the
/// shared slot alive but never owns the storage itself.
pub struct BufferHandle {
    guard: ArcReadGuard<SampleBuffer>,
}

impl BufferHandle {
    /// Take the read lock without blocking.
    ///
    /// Returns `None` while a writer holds the buffer; audio-thread callers
    /// treat that as "not available this block".
    #[inline]
    pub fn acquire(shared: &SharedBuffer) -> Option<Self> {
        RwLock::try_read_arc(shared).map(|guard| Self { guard })
    }

    /// Take the read lock, waiting for any writer. Not for the audio thread.
    pub fn acquire_blocking(shared: &SharedBuffer) -> Self {
        Self {
            guard: RwLock::read_arc(shared),
        }
    }

    #[inline]
    pub fn buffer(&self) -> &SampleBuffer {
        &self.guard
    }

    /// The slot this handle reads from.
    #[inline]
    pub fn shared(&self) -> &SharedBuffer {
        ArcReadGuard::rwlock(&self.guard)
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.guard.channels()
    }

    #[inline]
    pub fn frames(&self) -> usize {
        self.guard.frames()
    }

    #[inline]
    pub fn samples(&self) -> usize {
        self.guard.samples()
    }

    #[inline]
    pub fn sample_rate(&self) -> f64 {
        self.guard.sample_rate()
    }

    #[inline]
    pub fn sample_duration(&self) -> f64 {
        self.guard.sample_duration()
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.guard.generation()
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.guard.is_loaded()
    }

    /// View over the sample data, `None` while not loaded.
    #[inline]
    pub fn view(&self) -> Option<BufferView<'_>> {
        self.guard.view()
    }
}

impl fmt::Debug for BufferHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferHandle")
            .field("channels", &self.channels())
            .field("frames", &self.frames())
            .field("sample_rate", &self.sample_rate())
            .field("generation", &self.generation())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::Arc;

    fn shared() -> SharedBuffer {
        SampleBuffer::from_mono(&[0.0, 1.0, 2.0, 3.0], 44100.0)
            .unwrap()
            .into_shared()
    }

    #[test]
    fn test_acquire_exposes_shape() {
        let buf = shared();
        let handle = BufferHandle::acquire(&buf).unwrap();
        assert_eq!(handle.channels(), 1);
        assert_eq!(handle.frames(), 4);
        assert_eq!(handle.samples(), 4);
        assert_eq!(handle.sample_rate(), 44100.0);
        assert!(handle.view().is_some());
        assert!(Arc::ptr_eq(handle.shared(), &buf));
    }

    #[test]
    fn test_readers_share_writers_wait() {
        let buf = shared();
        let a = BufferHandle::acquire(&buf).unwrap();
        let b = BufferHandle::acquire(&buf).unwrap();
        assert!(buf.try_write().is_none());

        drop(a);
        assert!(buf.try_write().is_none());
        drop(b);
        assert!(buf.try_write().is_some());
    }

    #[test]
    fn test_acquire_fails_while_writing() {
        let buf = shared();
        let guard = buf.write();
        assert!(BufferHandle::acquire(&buf).is_none());
        drop(guard);
        assert!(BufferHandle::acquire(&buf).is_some());
    }

    #[test]
    fn test_acquire_blocking_waits_for_writer() {
        let buf = shared();
        let writer = buf.write();
        let reader = {
            let buf = Arc::clone(&buf);
            std::thread::spawn(move || BufferHandle::acquire_blocking(&buf).frames())
        };
        std::thread::sleep(std::time::Duration::from_millis(10));
        drop(writer);
        assert_eq!(reader.join().unwrap(), 4);
    }

    #[test]
    fn test_handle_keeps_slot_alive() {
        let buf = shared();
        let handle = BufferHandle::acquire(&buf).unwrap();
        drop(buf);
        assert_eq!(handle.frames(), 4);
    }
}
