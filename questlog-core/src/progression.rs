//! Progression math: experience -> level -> rank.
//!
//! Pure functions, no state. Levels are 100 xp wide; ranks are ten bands
//! of ten levels each.

/// Level implied by a cumulative experience total. Always >= 1.
pub fn level_for(experience: u32) -> u32 {
    experience / 100 + 1
}

/// Experience still needed to reach the next level. Always in (0, 100].
pub fn experience_to_next(experience: u32) -> u32 {
    level_for(experience) * 100 - experience
}

/// Rank label for a level. The top band starts at level 90 exactly.
pub fn rank_for(level: u32) -> &'static str {
    if level < 10 {
        "F-Rank Hunter"
    } else if level < 20 {
        "E-Rank Hunter"
    } else if level < 30 {
        "D-Rank Hunter"
    } else if level < 40 {
        "C-Rank Hunter"
    } else if level < 50 {
        "B-Rank Hunter"
    } else if level < 60 {
        "A-Rank Hunter"
    } else if level < 70 {
        "S-Rank Hunter"
    } else if level < 80 {
        "SS-Rank Hunter"
    } else if level < 90 {
        "SSS-Rank Hunter"
    } else {
        "Monarch"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_formula() {
        assert_eq!(level_for(0), 1);
        assert_eq!(level_for(99), 1);
        assert_eq!(level_for(100), 2);
        assert_eq!(level_for(250), 3);
        assert_eq!(level_for(900), 10);
    }

    #[test]
    fn test_experience_to_next_bounds() {
        assert_eq!(experience_to_next(0), 100);
        assert_eq!(experience_to_next(99), 1);
        assert_eq!(experience_to_next(100), 100);
        for xp in [0u32, 1, 50, 99, 100, 101, 999, 1000, 12345] {
            let rem = experience_to_next(xp);
            assert!(rem >= 1 && rem <= 100, "xp={xp} rem={rem}");
            assert_eq!(rem, level_for(xp) * 100 - xp);
        }
    }

    #[test]
    fn test_rank_band_boundaries() {
        assert_eq!(rank_for(1), "F-Rank Hunter");
        assert_eq!(rank_for(9), "F-Rank Hunter");
        assert_eq!(rank_for(10), "E-Rank Hunter");
        assert_eq!(rank_for(29), "D-Rank Hunter");
        assert_eq!(rank_for(55), "A-Rank Hunter");
        assert_eq!(rank_for(89), "SSS-Rank Hunter");
        assert_eq!(rank_for(90), "Monarch");
        assert_eq!(rank_for(140), "Monarch");
    }
}
