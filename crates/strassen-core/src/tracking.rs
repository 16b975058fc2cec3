//! Thread-local matrix allocation counters.
//!
//! Every `Matrix` (and Strassen working buffer) construction, clone and drop
//! updates the counters of the thread it happens on. Multiplication is sequential, so a snapshot taken
//! before and after a top-level call shows exactly what that call left alive.

use std::cell::Cell;

thread_local! {
    static LIVE: Cell<u64> = const { Cell::new(0) };
    static PEAK: Cell<u64> = const { Cell::new(0) };
    static ALLOCATED: Cell<u64> = const { Cell::new(0) };
}

/// Snapshot of allocation counters for the current thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocationStats {
    /// Matrices currently alive.
    pub live: u64,
    /// Highest `live` value observed since the last reset.
    pub peak: u64,
    /// Matrices created since the last reset.
    pub allocated: u64,
}

/// Take a snapshot of the current thread's counters.
#[must_use]
pub fn snapshot() -> AllocationStats {
    AllocationStats {
        live: LIVE.with(Cell::get),
        peak: PEAK.with(Cell::get),
        allocated: ALLOCATED.with(Cell::get),
    }
}

/// Reset `peak` to the current live count and `allocated` to zero.
///
/// `live` is untouched: matrices that are still alive will be released later.
pub fn reset() {
    let live = LIVE.with(Cell::get);
    PEAK.with(|p| p.set(live));
    ALLOCATED.with(|a| a.set(0));
}

pub(crate) fn record_alloc() {
    let live = LIVE.with(|l| {
        let v = l.get() + 1;
        l.set(v);
        v
    });
    PEAK.with(|p| p.set(p.get().max(live)));
    ALLOCATED.with(|a| a.set(a.get() + 1));
}

pub(crate) fn record_release() {
    LIVE.with(|l| l.set(l.get().saturating_sub(1)));
}
