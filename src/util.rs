const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// 64-bit FNV-1a over the UTF-8 bytes, so seeds match across builds and toolchains.
pub fn stable_seed(id: &str) -> u64 {
    id.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// SplitMix64 finaliser over `seed` mixed with a per-stream salt.
pub fn scramble(seed: u64, salt: u64) -> u64 {
    let mut z = seed ^ salt.wrapping_mul(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

pub fn unit_interval(bits: u64) -> f64 {
    (bits >> 11) as f64 / (1u64 << 53) as f64
}

pub fn split_values(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|value| !value.is_empty())
}

pub fn short_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }

    let mut label = text.chars().take(max_chars.saturating_sub(1)).collect::<String>();
    label.push('…');
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_seed_is_repeatable() {
        assert_eq!(stable_seed("artifact-7"), stable_seed("artifact-7"));
        assert_ne!(stable_seed("artifact-7"), stable_seed("artifact-8"));
    }

    #[test]
    fn stable_seed_uses_fixed_fnv1a_values() {
        assert_eq!(stable_seed(""), 0xcbf2_9ce4_8422_2325);
        assert_eq!(stable_seed("a"), 0xaf63_dc4c_8601_ec8c);
        assert_eq!(stable_seed("foobar"), 0x8594_4171_f739_67e8);
    }

    #[test]
    fn unit_interval_stays_in_range() {
        for bits in [0, 1, u64::MAX, u64::MAX / 2, scramble(42, 3)] {
            let value = unit_interval(bits);
            assert!((0.0..1.0).contains(&value), "{value} out of range");
        }
    }

    #[test]
    fn split_values_trims_and_drops_blanks() {
        let values = split_values(" 사각형, 원형 ,, ").collect::<Vec<_>>();
        assert_eq!(values, vec!["사각형", "원형"]);
    }

    #[test]
    fn short_label_keeps_short_text() {
        assert_eq!(short_label("청자", 8), "청자");
        assert_eq!(short_label("abcdefghij", 5), "abcd…");
    }
}
