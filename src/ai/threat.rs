use std::sync::OnceLock;

/// Score of a completed five. Terminal evaluations add the remaining depth
/// on top so shallower wins rank above deeper ones.
pub const WIN_SCORE: i32 = 1_000_000;

pub const STRAIGHT_FOUR_SCORE: i32 = 50_000;
pub const FOUR_SCORE: i32 = 1_200;
pub const OPEN_THREE_SCORE: i32 = 1_000;
pub const BROKEN_THREE_SCORE: i32 = 500;
pub const HALF_THREE_SCORE: i32 = 400;
pub const OPEN_TWO_SCORE: i32 = 100;
pub const HALF_TWO_SCORE: i32 = 30;
pub const OPEN_ONE_SCORE: i32 = 10;
pub const HALF_ONE_SCORE: i32 = 2;

/// Pattern scores indexed by (run length, open ends). Built once at first
/// use and immutable afterwards, so it may be read from any thread without
/// locks.
pub struct ThreatTable {
    run_scores: [[i32; 3]; 6],
}

static TABLE: OnceLock<ThreatTable> = OnceLock::new();

impl ThreatTable {
    pub fn global() -> &'static ThreatTable {
        TABLE.get_or_init(ThreatTable::build)
    }

    fn build() -> Self {
        let mut run_scores = [[0i32; 3]; 6];

        run_scores[1] = [0, HALF_ONE_SCORE, OPEN_ONE_SCORE];
        run_scores[2] = [5, HALF_TWO_SCORE, OPEN_TWO_SCORE];
        run_scores[3] = [50, HALF_THREE_SCORE, OPEN_THREE_SCORE];
        // A flanked four still pins the opponent's replies, a half-open four
        // threatens to complete, a straight four is a forced win next turn.
        run_scores[4] = [250, FOUR_SCORE, STRAIGHT_FOUR_SCORE];
        run_scores[5] = [WIN_SCORE, WIN_SCORE, WIN_SCORE];

        Self { run_scores }
    }

    /// Score of a solid run of `length` own stones with `open_ends` empty
    /// flanks. Lengths are capped at five; callers exclude overlines before
    /// looking anything up.
    pub fn run_score(&self, length: usize, open_ends: usize) -> i32 {
        self.run_scores[length.min(5)][open_ends.min(2)]
    }
}
