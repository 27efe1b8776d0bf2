//! Human-facing identifiers.
//!
//! Tracking codes are `7CEPL` followed by five characters from `A-Z0-9`.
//! Quote references are `QR-` followed by the submission time in
//! milliseconds, base 36, upper case.

use chrono::{DateTime, Utc};
use rand::Rng;

pub const TRACKING_PREFIX: &str = "7CEPL";
pub const TRACKING_SUFFIX_LEN: usize = 5;
pub const TRACKING_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const QUOTE_REF_PREFIX: &str = "QR-";

/// Attempts at drawing a code not already in use before giving up and
/// returning the last draw.
pub const TRACKING_ATTEMPTS: usize = 16;

/// Draws a tracking code from `rng`
pub fn tracking_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut code = String::with_capacity(TRACKING_PREFIX.len() + TRACKING_SUFFIX_LEN);
    code.push_str(TRACKING_PREFIX);
    for _ in 0..TRACKING_SUFFIX_LEN {
        let idx = rng.gen_range(0..TRACKING_ALPHABET.len());
        code.push(TRACKING_ALPHABET[idx] as char);
    }
    code
}

/// Draws a tracking code that `in_use` does not report as taken.
///
/// The check only covers codes visible at draw time; a concurrent
/// creation can still take the same code.
pub fn unused_tracking_code<R, F>(rng: &mut R, in_use: F) -> String
where
    R: Rng + ?Sized,
    F: Fn(&str) -> bool,
{
    let mut code = tracking_code(rng);
    for _ in 1..TRACKING_ATTEMPTS {
        if !in_use(&code) {
            break;
        }
        code = tracking_code(rng);
    }
    code
}

/// Path ids are matched trimmed and upper-cased
pub fn normalize_tracking_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Quote reference for a submission made at `at`
pub fn quote_ref(at: DateTime<Utc>) -> String {
    let millis = at.timestamp_millis().max(0) as u64;
    format!("{}{}", QUOTE_REF_PREFIX, to_base36_upper(millis))
}

fn to_base36_upper(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
