//! Deterministic per-matchup perturbation.
//!
//! Same key, same noise, every run. Nothing here reads the clock or an RNG.

/// Key for a matchup: `"{home}_{away}_{week}"`, names verbatim.
pub fn matchup_key(home: &str, away: &str, week: u32) -> String {
    format!("{}_{}_{}", home, away, week)
}

/// Rolling hash over UTF-16 code units: `h = (h << 5) - h + c`, wrapped to a
/// signed 32-bit integer at every step.
pub fn rolling_hash(key: &str) -> i32 {
    key.encode_utf16().fold(0i32, |hash, c| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(c))
    })
}

/// Noise in `[0, 1)` with three decimal places: `(|hash| mod 1000) / 1000`.
pub fn noise(key: &str) -> f64 {
    // Widen first: |i32::MIN| does not fit in i32.
    let magnitude = i64::from(rolling_hash(key)).abs();
    (magnitude % 1000) as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matchup_key_format() {
        assert_eq!(matchup_key("Alabama", "Auburn", 1), "Alabama_Auburn_1");
        assert_eq!(matchup_key("Ohio State", "Michigan", 13), "Ohio State_Michigan_13");
    }

    #[test]
    fn test_hash_reference_values() {
        assert_eq!(rolling_hash(""), 0);
        assert_eq!(rolling_hash("a"), 97);
        assert_eq!(rolling_hash("Alabama_Auburn_1"), 838_565_387);
        assert_eq!(rolling_hash("UnknownTeamX_UnknownTeamY_1"), -1_990_743_758);
        assert_eq!(rolling_hash("Ohio State_Michigan_13"), 82_318_086);
    }

    #[test]
    fn test_noise_reference_values() {
        assert_eq!(noise("Alabama_Auburn_1"), 0.387);
        assert_eq!(noise("UnknownTeamX_UnknownTeamY_1"), 0.758);
        assert_eq!(noise("Georgia_Florida_9"), 0.334);
        assert_eq!(noise(""), 0.0);
    }

    #[test]
    fn test_noise_range() {
        for week in 0..200 {
            let n = noise(&matchup_key("Home", "Away", week));
            assert!((0.0..1.0).contains(&n), "got {n}");
        }
    }

    #[test]
    fn test_hash_wraps_on_long_keys() {
        let key = "x".repeat(10_000);
        // Must not panic on overflow and must be stable.
        assert_eq!(rolling_hash(&key), rolling_hash(&key));
    }

    #[test]
    fn test_non_ascii_uses_utf16_units() {
        // U+00E9 is one UTF-16 unit (233); hash of a single unit is the unit.
        assert_eq!(rolling_hash("é"), 233);
        // A surrogate pair contributes two units.
        let expected = 0xD83Ci32.wrapping_shl(5).wrapping_sub(0xD83C).wrapping_add(0xDFC8);
        assert_eq!(rolling_hash("🏈"), expected);
    }
}
