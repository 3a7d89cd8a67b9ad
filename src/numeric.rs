//! Pure numeric helpers behind the `fibonacci`, `prime`, `lcm` and `hcf`
//! operations. Nothing here does I/O or holds state.

use crate::{Error, Result};
use serde_json::Value;

pub const NEGATIVE_COUNT_MESSAGE: &str = "fibonacci input must be a non-negative integer";

/// Returns the first `n` Fibonacci numbers starting `0, 1, 1, 2, ...`.
///
/// Negative counts are rejected. Terms past `u64::MAX` are reported as
/// [`Error::NumericOverflow`] instead of wrapping, which caps `n` at 94.
pub fn fibonacci(n: i64) -> Result<Vec<u64>> {
    if n < 0 {
        return Err(Error::invalid_input(NEGATIVE_COUNT_MESSAGE));
    }

    let n = n as usize;
    let mut series: Vec<u64> = Vec::new();

    for i in 0..n {
        let term = match i {
            0 => 0,
            1 => 1,
            _ => series[i - 1].checked_add(series[i - 2]).ok_or_else(|| {
                Error::overflow(format!(
                    "fibonacci input {n} is too large; terms beyond the 94th overflow"
                ))
            })?,
        };
        series.push(term);
    }

    Ok(series)
}

/// Deterministic Miller-Rabin; these bases cover every 64-bit input.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

pub fn is_prime(x: i64) -> bool {
    if x <= 1 {
        return false;
    }

    let n = x as u64;
    for p in WITNESSES {
        if n % p == 0 {
            return n == p;
        }
    }

    let mut d = n - 1;
    let mut s = 0;
    while d % 2 == 0 {
        d /= 2;
        s += 1;
    }

    WITNESSES.iter().all(|&a| passes_round(n, d, s, a))
}

fn passes_round(n: u64, d: u64, s: u32, a: u64) -> bool {
    let mut x = pow_mod(a, d, n);
    if x == 1 || x == n - 1 {
        return true;
    }
    for _ in 1..s {
        x = mul_mod(x, x, n);
        if x == n - 1 {
            return true;
        }
    }
    false
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Interprets a JSON value as an integer. Floats count when they have no
/// fractional part and fit in `i64`.
pub fn as_integer(value: &Value) -> Option<i64> {
    if let Some(i) = value.as_i64() {
        return Some(i);
    }
    if value.is_u64() {
        return None;
    }

    let f = value.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Keeps the prime integers of `values`, in order. Non-integers are dropped.
pub fn filter_primes(values: &[Value]) -> Vec<i64> {
    values
        .iter()
        .filter_map(as_integer)
        .filter(|&x| is_prime(x))
        .collect()
}

/// Euclid on magnitudes, so `gcd(a, 0) == |a|`.
pub fn gcd(a: i64, b: i64) -> u64 {
    gcd_u64(a.unsigned_abs(), b.unsigned_abs())
}

fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

pub fn lcm(a: i64, b: i64) -> Result<u64> {
    lcm_u64(a.unsigned_abs(), b.unsigned_abs())
}

fn lcm_u64(a: u64, b: u64) -> Result<u64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }

    (a / gcd_u64(a, b))
        .checked_mul(b)
        .ok_or_else(|| Error::overflow(format!("lcm of {a} and {b} does not fit in 64 bits")))
}

/// Left fold of [`gcd`] over `values`. Callers guarantee a non-empty slice.
pub fn hcf_of(values: &[i64]) -> u64 {
    let mut iter = values.iter();
    let first = iter.next().map_or(0, |v| v.unsigned_abs());
    iter.fold(first, |acc, &v| gcd_u64(acc, v.unsigned_abs()))
}

/// Left fold of [`lcm`] over `values`. Callers guarantee a non-empty slice.
pub fn lcm_of(values: &[i64]) -> Result<u64> {
    let mut iter = values.iter();
    let first = iter.next().map_or(0, |v| v.unsigned_abs());
    iter.try_fold(first, |acc, &v| lcm_u64(acc, v.unsigned_abs()))
}
