//! Small randomness helper.
//!
//! In the browser this draws from `Math.random()`; on native targets (unit
//! tests) it falls back to the system clock so the `fortune` handler remains
//! testable without a JS runtime.

/// Pick a uniformly random index into a slice of length `len`.
///
/// Returns 0 when `len` is 0 or 1.
#[cfg(target_arch = "wasm32")]
pub fn random_index(len: usize) -> usize {
    if len < 2 {
        return 0;
    }
    (js_sys::Math::random() * len as f64) as usize % len
}

#[cfg(not(target_arch = "wasm32"))]
pub fn random_index(len: usize) -> usize {
    use std::time::{SystemTime, UNIX_EPOCH};

    if len < 2 {
        return 0;
    }
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    nanos as usize % len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_in_bounds() {
        for _ in 0..100 {
            assert!(random_index(6) < 6);
        }
    }

    #[test]
    fn test_degenerate_lengths() {
        assert_eq!(random_index(0), 0);
        assert_eq!(random_index(1), 0);
    }
}
