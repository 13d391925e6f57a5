//! Selection between the native narrowing primitive and the bit-level
//! polyfill.

use crate::polyfill;
use log::debug;

/// A resolved conversion backend.
#[derive(Clone, Copy)]
pub(crate) struct Backend {
    pub name: &'static str,
    pub convert: fn(f64) -> f64,
}

pub(crate) const NATIVE: Backend = Backend {
    name: "native",
    convert: native,
};

pub(crate) const POLYFILL: Backend = Backend {
    name: "polyfill",
    convert: polyfill::f64_to_f32,
};

/// The hardware narrowing cast, widened back to double.
fn native(x: f64) -> f64 {
    x as f32 as f64
}

/// Probe patterns covering inexact rounding, ties, overflow, underflow,
/// signed zero and NaN.
const PROBES: [u64; 8] = [
    0x3fb9_9999_9999_999a, // 0.1, rounds up on sticky bits
    0x3ff0_0000_1000_0000, // 1 + 2^-24, ties down to 1.0
    0x3ff0_0000_3000_0000, // 1 + 3*2^-24, ties up to 1 + 2^-22
    0x47ef_ffff_f000_0000, // midpoint above the largest single, overflows to infinity
    0x8000_0000_0000_0000, // -0.0
    0x3690_0000_0000_0000, // 2^-150, ties down to zero
    0x3698_0000_0000_0000, // 1.5 * 2^-150, rounds up to the smallest subnormal
    0x7ff8_0000_0000_0001, // NaN with payload bits
];

/// Whether `convert` agrees with the bit-level rounder on every probe.
fn conforms(convert: fn(f64) -> f64) -> bool {
    PROBES.iter().all(|&pattern| {
        let x = f64::from_bits(pattern);
        let got = convert(x);
        let want = polyfill::f64_to_f32(x);
        got.to_bits() == want.to_bits() || (got.is_nan() && want.is_nan())
    })
}

/// Pick the backend for a given probe outcome. The `force-polyfill` feature
/// pins the fallback regardless.
pub(crate) fn select(native_conforms: bool) -> Backend {
    if cfg!(feature = "force-polyfill") || !native_conforms {
        POLYFILL
    } else {
        NATIVE
    }
}

/// Resolve the backend once; called from the lazily-initialized binding.
pub(crate) fn resolve() -> Backend {
    let backend = select(conforms(native));
    debug!("single-precision rounding backend: {}", backend.name);
    backend
}
