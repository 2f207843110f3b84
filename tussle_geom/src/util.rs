// Copyright 2025 the Tussle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar helpers that only need `core`.

/// Clamp `v` into `[lo, hi]`. Unlike `f64::clamp` this never panics on NaN bounds.
#[inline]
pub(crate) fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    v.max(lo).min(hi)
}

/// 2×2 determinant `| a b ; c d |`.
#[inline]
pub(crate) fn det(a: f64, b: f64, c: f64, d: f64) -> f64 {
    a * d - b * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_into_range() {
        assert_eq!(clamp(5.0, 0.0, 2.0), 2.0);
        assert_eq!(clamp(-1.0, 0.0, 2.0), 0.0);
        assert_eq!(clamp(1.5, 0.0, 2.0), 1.5);
    }

    #[test]
    fn determinant() {
        assert_eq!(det(1.0, 2.0, 3.0, 4.0), -2.0);
        assert_eq!(det(2.0, 0.0, 0.0, 2.0), 4.0);
    }
}
