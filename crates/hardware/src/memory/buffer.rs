//! Region Buffer Implementation.
//!
//! This module provides the host allocation backing one memory region. On Unix
//! hosts it uses an anonymous `mmap`, so a large region such as the stack only
//! consumes host pages once they are touched. Other hosts fall back to a boxed
//! slice. The buffer is released when it is dropped, which is what makes
//! unloading an address space (or abandoning a half-loaded one) free its
//! regions exactly once.
//!
//! Host allocation failure is unrecoverable: the process logs the failure and
//! exits with `ENOMEM`.

use std::fmt;
use std::process;
use std::ptr::NonNull;
use std::slice;

/// Exclusively owned, zero-initialized byte storage for one region.
pub struct RegionBuffer {
    ptr: NonNull<u8>,
    len: usize,
}

// SAFETY: the buffer exclusively owns its allocation; no aliasing pointers
// escape except through borrows tied to `&self` / `&mut self`.
unsafe impl Send for RegionBuffer {}
// SAFETY: shared access only hands out `&[u8]`.
unsafe impl Sync for RegionBuffer {}

impl RegionBuffer {
    /// Allocates a zero-filled buffer of `len` bytes.
    ///
    /// A zero-length buffer performs no host allocation.
    ///
    /// # Arguments
    ///
    /// * `len` - Size of the buffer in bytes.
    ///
    /// # Returns
    ///
    /// The new buffer. Terminates the process if the host is out of memory.
    pub fn new(len: usize) -> Self {
        if len == 0 {
            return Self {
                ptr: NonNull::dangling(),
                len,
            };
        }

        match Self::host_alloc(len) {
            Some(ptr) => Self { ptr, len },
            None => {
                tracing::error!(len, "unable to allocate processor memory region");
                process::exit(libc::ENOMEM);
            }
        }
    }

    #[cfg(unix)]
    fn host_alloc(len: usize) -> Option<NonNull<u8>> {
        // SAFETY: anonymous private mapping with no fixed address; the kernel
        // picks the placement and zero-fills the pages.
        let ptr = unsafe {
            libc::mmap(
                std::ptr::null_mut(),
                len,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };
        if ptr == libc::MAP_FAILED {
            return None;
        }
        NonNull::new(ptr.cast::<u8>())
    }

    #[cfg(not(unix))]
    fn host_alloc(len: usize) -> Option<NonNull<u8>> {
        let boxed = vec![0u8; len].into_boxed_slice();
        NonNull::new(Box::into_raw(boxed).cast::<u8>())
    }

    #[cfg(unix)]
    fn host_free(ptr: NonNull<u8>, len: usize) {
        // SAFETY: `ptr`/`len` describe exactly the mapping created in `host_alloc`.
        let _ = unsafe { libc::munmap(ptr.as_ptr().cast(), len) };
    }

    #[cfg(not(unix))]
    fn host_free(ptr: NonNull<u8>, len: usize) {
        // SAFETY: `ptr`/`len` came from `Box::into_raw` on a `[u8]` of this length.
        drop(unsafe { Box::from_raw(slice::from_raw_parts_mut(ptr.as_ptr(), len)) });
    }

    /// Returns the size of the buffer in bytes.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer holds no bytes.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the buffer contents.
    pub const fn as_slice(&self) -> &[u8] {
        // SAFETY: `ptr` is valid for `len` initialized bytes (or dangling with
        // `len == 0`) for the lifetime of `self`.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Returns the buffer contents mutably.
    pub const fn as_mut_slice(&mut self) -> &mut [u8] {
        // SAFETY: as in `as_slice`; `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl Drop for RegionBuffer {
    fn drop(&mut self) {
        if self.len != 0 {
            Self::host_free(self.ptr, self.len);
        }
    }
}

impl fmt::Debug for RegionBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionBuffer").field("len", &self.len).finish()
    }
}
