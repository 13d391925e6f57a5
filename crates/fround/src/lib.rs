//! Rounding of double-precision values to the nearest single-precision
//! value, widened back to double precision.
//!
//! The public [`f64_to_f32`] is backed either by the hardware narrowing cast
//! or by [`polyfill::f64_to_f32`], whichever [`backend_name`] reports; the
//! choice is made once, at first use, by probing the hardware cast against
//! the bit-level rounder. Both backends implement round-to-nearest,
//! ties-to-even. Call the polyfill directly for behavior that cannot depend
//! on the host primitive.

mod backend;
pub mod polyfill;

use backend::Backend;
use std::sync::LazyLock;

static BACKEND: LazyLock<Backend> = LazyLock::new(backend::resolve);

/// Round `x` to the nearest single-precision value, widened back to double
/// precision.
///
/// Total over all inputs: NaN stays NaN, infinities and signed zeros pass
/// through, magnitudes beyond the single-precision range become signed
/// infinity, and magnitudes below half the smallest subnormal become signed
/// zero.
pub fn f64_to_f32(x: f64) -> f64 {
    (BACKEND.convert)(x)
}

/// Name of the backend resolved at first use: `"native"` or `"polyfill"`.
pub fn backend_name() -> &'static str {
    BACKEND.name
}
