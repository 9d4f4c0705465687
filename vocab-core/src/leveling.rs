//! Leaderboard level arithmetic.

/// XP span of one leaderboard level
pub const XP_PER_LEVEL: i64 = 1000;

/// `floor(xp / 1000) + 1`
pub fn level_for_xp(xp: i64) -> i32 {
    (xp / XP_PER_LEVEL + 1) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(999), 1);
        assert_eq!(level_for_xp(1000), 2);
        assert_eq!(level_for_xp(1001), 2);
        assert_eq!(level_for_xp(9999), 10);
    }
}
