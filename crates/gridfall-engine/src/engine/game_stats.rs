/// Score values for line clears, indexed by lines cleared at once.
const SCORE_TABLE: [u32; 5] = [0, 100, 300, 500, 800];

/// Score, lines and level for one session.
///
/// # Scoring
///
/// - Soft drop: 1 point per row
/// - Line clears: `SCORE_TABLE[min(n, 4)] * level`, so anything past four
///   simultaneous lines still pays the four-line bonus
/// - Level: `lines / 10 + 1`, recomputed after the clear is scored, so a
///   clear that levels you up is paid at the old level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    score: u32,
    lines: u32,
    level: u32,
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: 1,
        }
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn lines(&self) -> u32 {
        self.lines
    }

    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    pub(crate) const fn award_soft_drop(&mut self) {
        self.score += 1;
    }

    /// Records the lines removed by one lock and updates score and level.
    #[expect(clippy::cast_possible_truncation)]
    pub(crate) fn apply_line_clears(&mut self, cleared: usize) {
        if cleared == 0 {
            return;
        }
        self.lines += cleared as u32;
        self.score += SCORE_TABLE[cleared.min(4)] * self.level;
        self.level = self.lines / 10 + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_table_at_level_one() {
        for (cleared, expected) in [(1, 100), (2, 300), (3, 500), (4, 800)] {
            let mut stats = GameStats::new();
            stats.apply_line_clears(cleared);
            assert_eq!(stats.score(), expected, "{cleared} lines");
        }
    }

    #[test]
    fn test_score_multiplied_by_level() {
        let mut stats = GameStats::new();
        // 10 singles: reaches level 2 with 1000 points.
        for _ in 0..10 {
            stats.apply_line_clears(1);
        }
        assert_eq!(stats.level(), 2);
        assert_eq!(stats.score(), 1000);

        stats.apply_line_clears(4);
        assert_eq!(stats.score(), 1000 + 800 * 2);
    }

    #[test]
    fn test_levelling_clear_pays_old_level() {
        let mut stats = GameStats::new();
        for _ in 0..2 {
            stats.apply_line_clears(4);
        }
        assert_eq!(stats.lines(), 8);
        // The next tetris crosses 10 lines but is still paid at level 1.
        stats.apply_line_clears(4);
        assert_eq!(stats.lines(), 12);
        assert_eq!(stats.level(), 2);
        assert_eq!(stats.score(), 3 * 800);
    }

    #[test]
    fn test_more_than_four_lines_pay_the_tetris_bonus() {
        let mut stats = GameStats::new();
        stats.apply_line_clears(6);
        assert_eq!(stats.score(), 800);
        assert_eq!(stats.lines(), 6);
    }

    #[test]
    fn test_level_two_at_exactly_ten_lines() {
        let mut stats = GameStats::new();
        stats.apply_line_clears(4);
        stats.apply_line_clears(4);
        assert_eq!(stats.level(), 1);
        stats.apply_line_clears(2);
        assert_eq!(stats.lines(), 10);
        assert_eq!(stats.level(), 2);
    }

    #[test]
    fn test_soft_drop_awards_one_point() {
        let mut stats = GameStats::new();
        stats.award_soft_drop();
        stats.award_soft_drop();
        assert_eq!(stats.score(), 2);
    }

    #[test]
    fn test_zero_clears_change_nothing() {
        let mut stats = GameStats::new();
        stats.apply_line_clears(0);
        assert_eq!(stats, GameStats::new());
    }
}
