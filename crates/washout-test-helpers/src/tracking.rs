//! Heap allocation tracking for the tick path.
//!
//! Install [`TrackingAllocator`] as the global allocator in a test binary,
//! open an [`AllocationGuard`] around the code under test, then check it with
//! [`assert_rt_safe!`](crate::assert_rt_safe). Counters are thread-local, so
//! parallel tests do not see each other's allocations.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
    static ALLOCATED_BYTES: Cell<usize> = const { Cell::new(0) };
    static ARMED: Cell<u32> = const { Cell::new(0) };
}

fn record(bytes: usize) {
    if ARMED.with(|armed| armed.get()) == 0 {
        return;
    }
    ALLOCATIONS.with(|count| count.set(count.get().saturating_add(1)));
    ALLOCATED_BYTES.with(|total| total.set(total.get().saturating_add(bytes)));
}

/// Global allocator that forwards to [`System`] and counts allocations made
/// while a guard is open on the current thread.
pub struct TrackingAllocator;

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            record(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            record(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) };
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() && new_size > layout.size() {
            record(new_size - layout.size());
        }
        new_ptr
    }
}

/// Open tracking window. Nested guards are allowed; tracking stays armed
/// until the last one drops.
pub struct AllocationGuard {
    start_count: usize,
    start_bytes: usize,
}

impl AllocationGuard {
    pub fn new() -> Self {
        ARMED.with(|armed| armed.set(armed.get().saturating_add(1)));
        Self {
            start_count: ALLOCATIONS.with(|c| c.get()),
            start_bytes: ALLOCATED_BYTES.with(|b| b.get()),
        }
    }

    /// Allocations seen since this guard opened.
    pub fn allocations(&self) -> usize {
        ALLOCATIONS
            .with(|c| c.get())
            .saturating_sub(self.start_count)
    }

    /// Bytes requested since this guard opened.
    pub fn bytes(&self) -> usize {
        ALLOCATED_BYTES
            .with(|b| b.get())
            .saturating_sub(self.start_bytes)
    }

    pub fn has_allocations(&self) -> bool {
        self.allocations() > 0
    }
}

impl Default for AllocationGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AllocationGuard {
    fn drop(&mut self) {
        ARMED.with(|armed| armed.set(armed.get().saturating_sub(1)));
    }
}

/// Open a new [`AllocationGuard`].
pub fn track() -> AllocationGuard {
    AllocationGuard::new()
}

/// Panic if the guard saw any allocation.
#[macro_export]
macro_rules! assert_rt_safe {
    ($guard:expr) => {
        $crate::assert_rt_safe!($guard, "tick path")
    };
    ($guard:expr, $context:expr) => {{
        let guard = &$guard;
        let allocations = guard.allocations();
        if allocations > 0 {
            panic!(
                "RT path allocation violation in '{}': {} allocations ({} bytes) at {}:{}",
                $context,
                allocations,
                guard.bytes(),
                file!(),
                line!()
            );
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_does_not_allocate() {
        let guard = track();
        let mut acc = 0.0_f64;
        for i in 0..64 {
            acc = acc * 0.975 + f64::from(i);
        }
        std::hint::black_box(acc);
        assert_rt_safe!(guard);
    }

    #[test]
    #[should_panic(expected = "RT path allocation violation")]
    fn vec_allocation_is_caught() {
        let guard = track();
        let v: Vec<f64> = vec![0.0; 6];
        std::hint::black_box(&v);
        assert_rt_safe!(guard, "vec");
    }

    #[test]
    fn counts_and_bytes_grow() {
        let guard = track();
        let v: Vec<u64> = Vec::with_capacity(16);
        std::hint::black_box(&v);
        assert!(guard.allocations() >= 1);
        assert!(guard.bytes() >= 128);
    }

    #[test]
    fn nested_guards_keep_tracking_armed() {
        let outer = track();
        {
            let inner = track();
            assert_rt_safe!(inner);
        }
        let s = String::from("still armed");
        std::hint::black_box(&s);
        assert!(outer.has_allocations());
    }
}
