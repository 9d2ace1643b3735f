//! Benchmark profiles for the Stride containers.
//!
//! - [`filled_slice`]: a typed slice of `n` sequential `u64`s
//! - [`filled_bytes`]: the same values in a type-erased [`ByteSlice`]
//! - [`growth_profiles`]: the growth policies compared by `slice_ops`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use stride_core::{GrowthPolicy, SliceConfig};
use stride_slice::{ByteSlice, Slice};

/// Build a typed slice holding `0..n`, grown one append at a time.
pub fn filled_slice(n: u64) -> Slice<u64> {
    let mut s = Slice::new();
    for v in 0..n {
        s.append(v).expect("benchmark slice fits in memory");
    }
    s
}

/// Build a byte slice holding `0..n` as little-endian `u64` elements.
pub fn filled_bytes(n: u64) -> ByteSlice {
    let mut s = ByteSlice::new(std::mem::size_of::<u64>(), 0)
        .expect("u64 element size is non-zero");
    for v in 0..n {
        s.append(&v.to_le_bytes())
            .expect("benchmark slice fits in memory");
    }
    s
}

/// Named growth configurations, all starting from zero capacity.
pub fn growth_profiles() -> Vec<(&'static str, SliceConfig)> {
    vec![
        ("doubling", SliceConfig::new(0)),
        (
            "additive_64",
            SliceConfig::new(0).with_growth(GrowthPolicy::Additive { step: 64 }),
        ),
        (
            "additive_1024",
            SliceConfig::new(0).with_growth(GrowthPolicy::Additive { step: 1024 }),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_hold_expected_values() {
        let typed = filled_slice(100);
        let bytes = filled_bytes(100);
        assert_eq!(typed.len(), 100);
        assert_eq!(bytes.len(), 100);
        assert_eq!(typed.get(-1), Ok(&99));
        assert_eq!(bytes.get(-1).unwrap(), &99u64.to_le_bytes()[..]);
    }

    #[test]
    fn growth_profiles_validate() {
        for (name, config) in growth_profiles() {
            assert!(config.validate(8).is_ok(), "{name} should validate");
        }
    }
}
