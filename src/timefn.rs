// timefn: monotonic timer helpers for the benchmark harness.
//
// std::time::Instant is monotonic and MT-safe on every supported platform.
// The harness accumulates nanosecond spans around each codec call so that
// file I/O and verification are excluded from the reported throughput.

use std::time::Instant;

/// Nanosecond duration type.
pub type DurationNs = u64;

/// Opaque timestamp.  The absolute value is not meaningful; use it only to
/// compute a duration between two measurements.
#[derive(Clone, Copy)]
pub struct TimeT {
    pub(crate) t: Instant,
}

impl TimeT {
    /// A timestamp taken now.
    pub fn new() -> Self {
        TimeT { t: Instant::now() }
    }
}

impl Default for TimeT {
    fn default() -> Self {
        TimeT::new()
    }
}

/// Returns the current monotonic timestamp.
pub fn get_time() -> TimeT {
    TimeT { t: Instant::now() }
}

/// Returns the nanosecond duration between `clock_start` and `clock_end`.
pub fn span_ns(clock_start: TimeT, clock_end: TimeT) -> DurationNs {
    clock_end
        .t
        .duration_since(clock_start.t)
        .as_nanos() as DurationNs
}

/// Nanoseconds elapsed since `clock_start`.
pub fn clock_span_ns(clock_start: TimeT) -> DurationNs {
    clock_start.t.elapsed().as_nanos() as DurationNs
}

/// Run `f`, adding its wall-clock duration to `total`.
#[inline]
pub fn timed<R>(total: &mut DurationNs, f: impl FnOnce() -> R) -> R {
    let start = get_time();
    let result = f();
    *total += clock_span_ns(start);
    result
}
