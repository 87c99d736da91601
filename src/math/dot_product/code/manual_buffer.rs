//! Manually managed buffer implementation.
//!
//! Both inputs are copied into raw blocks obtained from the C allocator and
//! summed through pointers. The blocks are owned by [`RawBuffer`], which frees
//! them on drop, so every exit path (including an early `?`) releases them.

use super::check_lengths;
use crate::error::{DotError, DotResult};
use std::mem::size_of;
use std::ptr::NonNull;

/// A fixed-size block of `f64` from `libc::malloc`, released with `libc::free`.
///
/// Only constructed fully initialised, so reading any of its `len` elements
/// is always valid.
pub struct RawBuffer {
    ptr: NonNull<f64>,
    len: usize,
}

impl RawBuffer {
    /// Allocate a buffer of `src.len()` elements and copy `src` into it.
    ///
    /// An empty source allocates nothing.
    pub fn from_slice(src: &[f64]) -> DotResult<Self> {
        let len = src.len();
        if len == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len: 0,
            });
        }

        let bytes = len
            .checked_mul(size_of::<f64>())
            .ok_or(DotError::Allocation { len })?;

        // SAFETY: bytes is non-zero; a null return is handled below.
        let raw = unsafe { malloc(bytes) } as *mut f64;
        let ptr = NonNull::new(raw).ok_or(DotError::Allocation { len })?;
        #[cfg(test)]
        tracking::acquired();

        // One increment per element.
        let mut i = 0;
        while i < len {
            // SAFETY: i < len and the block holds len f64 values; malloc
            // returns memory aligned for any fundamental type.
            unsafe { ptr.as_ptr().add(i).write(src[i]) };
            i += 1;
        }

        Ok(Self { ptr, len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_ptr(&self) -> *const f64 {
        self.ptr.as_ptr()
    }

    pub fn as_slice(&self) -> &[f64] {
        // SAFETY: every element was written in from_slice; a dangling
        // pointer with len 0 is a valid empty slice.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

#[cfg(not(test))]
unsafe fn malloc(bytes: usize) -> *mut libc::c_void {
    libc::malloc(bytes)
}

#[cfg(test)]
unsafe fn malloc(bytes: usize) -> *mut libc::c_void {
    if tracking::should_fail() {
        return std::ptr::null_mut();
    }
    libc::malloc(bytes)
}


impl Drop for RawBuffer {
    fn drop(&mut self) {
        if self.len > 0 {
            // SAFETY: ptr came from libc::malloc and is freed exactly once.
            unsafe { libc::free(self.ptr.as_ptr() as *mut libc::c_void) };
            #[cfg(test)]
            tracking::released();
        }
    }
}

/// Compute the dot product over manually allocated copies of the inputs.
pub fn dot_product_manual_buffer(a: &[f64], b: &[f64]) -> DotResult<f64> {
    check_lengths(a, b)?;

    let buf_a = RawBuffer::from_slice(a)?;
    let buf_b = RawBuffer::from_slice(b)?;

    let pa = buf_a.as_ptr();
    let pb = buf_b.as_ptr();
    let mut sum = 0.0;
    for i in 0..buf_a.len() {
        // SAFETY: both buffers hold buf_a.len() initialised elements.
        unsafe {
            sum += *pa.add(i) * *pb.add(i);
        }
    }
    Ok(sum)
}
