#![allow(dead_code)]

//! Instrumentation of the element moves, swaps and comparisons a sort performs.
//!
//! Buffers are registered under a name (`"input"` for the slice being sorted,
//! `"scratch"` for a merge buffer) so every operation can be reported as a
//! buffer-relative [`Location`]. Operations touching memory outside any
//! registered buffer are not recorded. Operations are logged per thread.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub buffer: &'static str,
    pub idx: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    Move { from: Location, to: Location },

    Swap { a: Location, b: Location },

    Compare { lhs: Location, rhs: Location },
}

impl Operation {
    /// Whether this operation changes the position of an element.
    pub fn is_data_movement(&self) -> bool {
        !matches!(self, Operation::Compare { .. })
    }
}

#[cfg(feature = "tracking")]
mod tracking_impl {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::thread::{self, ThreadId};

    use super::*;

    #[derive(Default)]
    struct TrackingRegister {
        known_buffers: HashMap<&'static str, (usize, usize)>,
        ops: Vec<Operation>,
    }

    impl TrackingRegister {
        fn register_buffer<T>(&mut self, name: &'static str, begin: *const T, len: usize) {
            let begin = begin as usize;
            let end = begin + len * std::mem::size_of::<T>();
            let old = self.known_buffers.insert(name, (begin, end));
            assert!(old.is_none(), "duplicate buffer {name}");
        }

        fn deregister_buffer(&mut self, name: &'static str) {
            let old = self.known_buffers.remove(name);
            assert!(old.is_some(), "unknown buffer {name}");
        }

        fn locate<T>(&self, ptr: *const T) -> Option<Location> {
            let iptr = ptr as usize;
            for (buf, (begin, end)) in self.known_buffers.iter() {
                if (*begin..*end).contains(&iptr) {
                    return Some(Location {
                        buffer: *buf,
                        idx: (iptr - begin) / std::mem::size_of::<T>(),
                    });
                }
            }
            None
        }
    }

    lazy_static::lazy_static! {
        static ref TRACKING_REGISTERS: Mutex<HashMap<ThreadId, TrackingRegister>> = {
            Mutex::new(HashMap::new())
        };
    }

    fn with_register<R>(f: impl FnOnce(&mut TrackingRegister) -> R) -> R {
        let mut registers = TRACKING_REGISTERS.lock().unwrap();
        f(registers.entry(thread::current().id()).or_default())
    }

    /// Drains the operations recorded on the calling thread.
    pub fn read_tracked_ops() -> Vec<Operation> {
        with_register(|register| {
            assert!(register.known_buffers.is_empty());
            core::mem::take(&mut register.ops)
        })
    }

    pub fn register_buffer<T>(name: &'static str, begin: *const T, len: usize) {
        with_register(|register| register.register_buffer(name, begin, len));
    }

    pub fn deregister_buffer(name: &'static str) {
        with_register(|register| register.deregister_buffer(name));
    }

    pub fn register_cmp<T>(left: *const T, right: *const T) {
        with_register(|register| {
            if let (Some(lhs), Some(rhs)) = (register.locate(left), register.locate(right)) {
                register.ops.push(Operation::Compare { lhs, rhs })
            }
        });
    }

    pub fn track_copy<T>(src: *const T, dst: *mut T, count: usize) {
        if count == 0 {
            return;
        }

        with_register(|register| {
            let (Some(from), Some(to)) = (register.locate(src), register.locate(dst)) else {
                return;
            };
            let step = |i: usize| Operation::Move {
                from: Location {
                    idx: from.idx + i,
                    buffer: from.buffer,
                },
                to: Location {
                    idx: to.idx + i,
                    buffer: to.buffer,
                },
            };

            // An overlapping copy to a higher address moves the last element first.
            if (src..src.wrapping_add(count)).contains(&(dst as *const T)) {
                register.ops.extend((0..count).rev().map(step));
            } else {
                register.ops.extend((0..count).map(step));
            }
        });
    }

    pub fn track_swap_nonoverlapping<T>(a: *const T, b: *mut T, count: usize) {
        if count == 0 {
            return;
        }

        with_register(|register| {
            let (Some(a_loc), Some(b_loc)) = (register.locate(a), register.locate(b)) else {
                return;
            };
            for i in 0..count {
                register.ops.push(Operation::Swap {
                    a: Location {
                        idx: a_loc.idx + i,
                        buffer: a_loc.buffer,
                    },
                    b: Location {
                        idx: b_loc.idx + i,
                        buffer: b_loc.buffer,
                    },
                });
            }
        });
    }
}

/// Dummy implementation.
#[cfg(not(feature = "tracking"))]
#[allow(dead_code)]
mod tracking_impl {
    #[inline]
    pub fn register_cmp<T>(_left: *const T, _right: *const T) {}
    #[inline]
    pub fn register_buffer<T>(_name: &'static str, _begin: *const T, _len: usize) {}
    #[inline]
    pub fn deregister_buffer(_name: &'static str) {}
    #[inline]
    pub fn track_copy<T>(_src: *const T, _dst: *mut T, _count: usize) {}
    #[inline]
    pub fn track_swap_nonoverlapping<T>(_a: *const T, _b: *mut T, _count: usize) {}
}

#[cfg(not(feature = "tracking"))]
pub(crate) use core::ptr;

#[cfg(feature = "tracking")]
pub use tracking_impl::read_tracked_ops;
pub(crate) use tracking_impl::register_cmp;

/// A registered buffer, deregistered again when the guard is dropped. This
/// includes unwinding out of a panicking comparison, so the register of the
/// thread is left clean for the next sort.
pub(crate) struct BufferGuard {
    name: &'static str,
}

impl BufferGuard {
    pub fn register<T>(name: &'static str, begin: *const T, len: usize) -> Self {
        tracking_impl::register_buffer(name, begin, len);
        Self { name }
    }
}

impl Drop for BufferGuard {
    fn drop(&mut self) {
        tracking_impl::deregister_buffer(self.name);
    }
}

#[cfg(feature = "tracking")]
pub(crate) mod ptr {
    use core::ptr as cptr;

    pub use cptr::{read, write};

    #[inline]
    pub unsafe fn swap_nonoverlapping<T>(a: *mut T, b: *mut T, count: usize) {
        super::tracking_impl::track_swap_nonoverlapping(a, b, count);
        unsafe { cptr::swap_nonoverlapping(a, b, count) }
    }

    #[inline]
    pub unsafe fn copy_nonoverlapping<T>(src: *const T, dst: *mut T, count: usize) {
        super::tracking_impl::track_copy(src, dst, count);
        unsafe { cptr::copy_nonoverlapping(src, dst, count) }
    }

    #[inline]
    pub unsafe fn copy<T>(src: *const T, dst: *mut T, count: usize) {
        super::tracking_impl::track_copy(src, dst, count);
        unsafe { cptr::copy(src, dst, count) }
    }
}
