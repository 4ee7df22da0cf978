//! Advisory domain ceilings and driver tuning constants.
//!
//! The ceilings are guardrails for the driver's strategy selection, not
//! preconditions enforced by the strategies themselves: exceeding one
//! risks impractical runtime (recursive), precision drift (closed-form),
//! or cache memory growth (the memoized family), never a wrong answer
//! inside the supported range.

/// Largest index the naive recursive strategy handles in practical time.
///
/// Call count grows as roughly φⁿ; past this point a single run takes
/// minutes on commodity hardware.
pub const RECURSIVE_ADVISORY_CEILING: u64 = 37;

/// Largest index the closed-form strategy is advertised for.
///
/// The working precision scales with n (see `binet`), so results stay
/// exact well past this point, but the ceiling is kept as the documented
/// comparison boundary for the approximate-then-exact approach.
pub const CLOSED_FORM_ADVISORY_CEILING: u64 = 500;

/// Largest index the cache-backed strategies are advertised for.
///
/// Bounded by the memory held by a contiguous cache of ever-larger
/// values, not by correctness.
pub const MEMOIZED_ADVISORY_CEILING: u64 = 150_000;

/// Stride used to warm top-down memoized caches in stair steps.
///
/// A cold top-down call recurses to depth n; warming the cache at
/// multiples of this stride first bounds native stack depth to the
/// stride while keeping total work linear.
pub const RAMP_STRIDE: u64 = 3_000;
