// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommonError, CommonErrorType, CommonResult};

/// Floored modulo. The result always has the sign of the divisor, so negative values
/// wrap to the correct positive residue, eg: `floor_mod(-1, 8) == 7`. This is what makes
/// wrap around work for negative cursor steps (Rust's `%` truncates toward zero).
///
/// ```
/// use plugin_commons::floor_mod;
/// assert_eq!(floor_mod(-1, 8).unwrap(), 7);
/// assert_eq!(floor_mod(17, 8).unwrap(), 1);
/// assert!(floor_mod(3, 0).is_err());
/// ```
///
/// # Errors
///
/// Returns [`CommonErrorType::InvalidState`] if `modulus` is zero.
pub fn floor_mod(value: isize, modulus: usize) -> CommonResult<usize> {
    if modulus == 0 {
        return CommonError::new_error_result(
            CommonErrorType::InvalidState,
            "Modulo by zero is undefined",
        );
    }

    Ok(match isize::try_from(modulus) {
        Ok(signed_modulus) => value.rem_euclid(signed_modulus).unsigned_abs(),
        // The modulus is bigger than any isize, so a single wrap is enough.
        Err(_) => {
            if value >= 0 {
                value.unsigned_abs()
            } else {
                modulus - value.unsigned_abs()
            }
        }
    })
}

/// Adds `offset` to `base` in the ring `[0, modulus)` without overflowing. Both
/// arguments are reduced first, so a stale `base` (one that was in range before the
/// backing sequence shrank) still lands in range.
///
/// # Errors
///
/// Returns [`CommonErrorType::InvalidState`] if `modulus` is zero.
pub fn add_mod(base: usize, offset: usize, modulus: usize) -> CommonResult<usize> {
    if modulus == 0 {
        return CommonError::new_error_result(
            CommonErrorType::InvalidState,
            "Modulo by zero is undefined",
        );
    }

    let base = base % modulus;
    let offset = offset % modulus;
    let room_until_wrap = modulus - base;
    Ok(if offset >= room_until_wrap {
        offset - room_until_wrap
    } else {
        base + offset
    })
}

#[must_use]
pub fn square_f64(value: f64) -> f64 { value * value }

#[must_use]
pub fn square_i64(value: i64) -> i64 { value.saturating_mul(value) }

/// Clamps `value` into `[min, max]`.
///
/// # Errors
///
/// Returns [`CommonErrorType::InvalidArguments`] if `min > max`.
pub fn clamp(min: i32, max: i32, value: i32) -> CommonResult<i32> {
    if min > max {
        return CommonError::new_error_result(
            CommonErrorType::InvalidArguments,
            &format!("The minimum ({min}) cannot be bigger than the maximum ({max})"),
        );
    }
    Ok(value.clamp(min, max))
}

/// Squared distance between two points in 2D space. Use this instead of
/// [`distance_2d`] when you only need to compare distances.
#[must_use]
pub fn distance_2d_squared(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    square_f64(x1 - x2) + square_f64(y1 - y2)
}

#[must_use]
pub fn distance_2d(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    distance_2d_squared(x1, y1, x2, y2).sqrt()
}

/// Format with at most two digits after the decimal point, dropping trailing zeros.
///
/// ```
/// use plugin_commons::format_decimal;
/// assert_eq!(format_decimal(3.14159), "3.14");
/// assert_eq!(format_decimal(2.5), "2.5");
/// assert_eq!(format_decimal(7.0), "7");
/// ```
#[must_use]
pub fn format_decimal(value: f64) -> String {
    let acc = format!("{value:.2}");
    if !acc.contains('.') {
        return acc;
    }
    acc.trim_end_matches('0').trim_end_matches('.').to_string()
}
