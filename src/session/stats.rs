//! Player statistics across finished games

use super::game::GameSession;
use crate::core::{Difficulty, Language, MAX_GUESSES, PerLanguage};
use crate::puzzle::GameId;
use crate::scoring::GameStatus;
use serde::{Deserialize, Serialize};

/// Number of guess-distribution buckets: one per guess count, plus one for failures
pub const DISTRIBUTION_BUCKETS: usize = MAX_GUESSES + 1;

/// Outcome of one board in a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardResult {
    /// First solved on this 1-based guess
    Solved(usize),
    Failed,
}

/// Summary of a finished game, as stored for statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub won: bool,
    pub score: i64,
    pub difficulties: PerLanguage<Difficulty>,
    pub boards: PerLanguage<BoardResult>,
}

impl GameRecord {
    /// Record of a session, or `None` while it is still being played
    #[must_use]
    pub fn from_session(session: &GameSession) -> Option<Self> {
        if !session.status().is_over() {
            return None;
        }

        let puzzle = session.puzzle();
        Some(Self {
            id: puzzle.id.clone(),
            won: session.status() == GameStatus::Won,
            score: session.score(),
            difficulties: puzzle.difficulties,
            boards: session
                .solved_at()
                .map(|index| index.map_or(BoardResult::Failed, |i| BoardResult::Solved(i + 1))),
        })
    }
}

/// Statistics of one language at one difficulty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStats {
    pub boards_solved: u32,
    pub boards_failed: u32,
    /// Bucket `n - 1` counts boards first solved on guess `n`; the last bucket counts
    /// failures
    pub guess_distribution: [u32; DISTRIBUTION_BUCKETS],
}

impl Default for LanguageStats {
    fn default() -> Self {
        Self {
            boards_solved: 0,
            boards_failed: 0,
            guess_distribution: [0; DISTRIBUTION_BUCKETS],
        }
    }
}

impl LanguageStats {
    fn record(&mut self, board: BoardResult) {
        match board {
            BoardResult::Solved(guesses) => {
                self.boards_solved += 1;
                let bucket = guesses.clamp(1, MAX_GUESSES) - 1;
                self.guess_distribution[bucket] += 1;
            }
            BoardResult::Failed => {
                self.boards_failed += 1;
                self.guess_distribution[MAX_GUESSES] += 1;
            }
        }
    }
}

/// Aggregate statistics of one player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub games_played: u32,
    pub wins: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Rounded to the nearest whole percent
    pub win_percentage: u32,
    pub languages: PerLanguage<[LanguageStats; 3]>,
}

impl PlayerStats {
    /// Fold a finished game into the statistics
    ///
    /// # Examples
    /// ```
    /// use triword::core::{Difficulty, PerLanguage};
    /// use triword::puzzle::GameId;
    /// use triword::session::{BoardResult, GameRecord, PlayerStats};
    ///
    /// let record = GameRecord {
    ///     id: GameId::parse("0123456789abcdef0123456789abcdef").unwrap(),
    ///     won: true,
    ///     score: 1425,
    ///     difficulties: PerLanguage::new(Difficulty::Basic, Difficulty::Basic, Difficulty::Basic),
    ///     boards: PerLanguage::new(
    ///         BoardResult::Solved(1),
    ///         BoardResult::Solved(2),
    ///         BoardResult::Solved(3),
    ///     ),
    /// };
    ///
    /// let mut stats = PlayerStats::default();
    /// stats.record(&record);
    /// assert_eq!(stats.win_percentage, 100);
    /// assert_eq!(stats.current_streak, 1);
    /// ```
    pub fn record(&mut self, record: &GameRecord) {
        self.games_played += 1;
        if record.won {
            self.wins += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
        self.win_percentage = (f64::from(self.wins) * 100.0 / f64::from(self.games_played))
            .round() as u32;

        for (language, &board) in record.boards.iter() {
            self.language(language, record.difficulties[language])
                .record(board);
        }
    }

    /// Statistics of one language at one difficulty
    #[must_use]
    pub fn for_board(&self, language: Language, difficulty: Difficulty) -> &LanguageStats {
        &self.languages[language][difficulty as usize]
    }

    fn language(&mut self, language: Language, difficulty: Difficulty) -> &mut LanguageStats {
        &mut self.languages[language][difficulty as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(won: bool, boards: [BoardResult; 3], difficulty: Difficulty) -> GameRecord {
        let [en, es, fr] = boards;
        GameRecord {
            id: GameId::parse("00000000000000000000000000000000").unwrap(),
            won,
            score: 0,
            difficulties: PerLanguage::new(difficulty, difficulty, difficulty),
            boards: PerLanguage::new(en, es, fr),
        }
    }

    const WIN: [BoardResult; 3] = [
        BoardResult::Solved(1),
        BoardResult::Solved(2),
        BoardResult::Solved(3),
    ];

    const LOSS: [BoardResult; 3] = [
        BoardResult::Solved(10),
        BoardResult::Failed,
        BoardResult::Failed,
    ];

    #[test]
    fn streaks_and_percentage() {
        let mut stats = PlayerStats::default();
        stats.record(&record(true, WIN, Difficulty::Basic));
        stats.record(&record(true, WIN, Difficulty::Basic));
        stats.record(&record(false, LOSS, Difficulty::Basic));

        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.win_percentage, 67);

        stats.record(&record(true, WIN, Difficulty::Basic));
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn distribution_buckets_by_guess_index() {
        let mut stats = PlayerStats::default();
        stats.record(&record(true, WIN, Difficulty::Advanced));
        stats.record(&record(false, LOSS, Difficulty::Advanced));

        let en = stats.for_board(Language::En, Difficulty::Advanced);
        assert_eq!(en.boards_solved, 2);
        assert_eq!(en.guess_distribution[0], 1);
        // Solved on the tenth guess is its own bucket, not a failure
        assert_eq!(en.guess_distribution[9], 1);
        assert_eq!(en.guess_distribution[MAX_GUESSES], 0);

        let fr = stats.for_board(Language::Fr, Difficulty::Advanced);
        assert_eq!(fr.boards_solved, 1);
        assert_eq!(fr.boards_failed, 1);
        assert_eq!(fr.guess_distribution[2], 1);
        assert_eq!(fr.guess_distribution[MAX_GUESSES], 1);

        // Other difficulties untouched
        assert_eq!(
            stats.for_board(Language::En, Difficulty::Basic),
            &LanguageStats::default()
        );
    }

    #[test]
    fn unfinished_session_has_no_record() {
        use crate::puzzle::{GuessDictionary, Puzzle, SolutionSet, display_order};

        let puzzle = Puzzle {
            id: GameId::parse("00000000000000000000000000000000").unwrap(),
            solutions: SolutionSet::from_words("apple", "queso", "fruit").unwrap(),
            difficulties: PerLanguage::default(),
            display_order: display_order(0),
        };
        let dictionary = GuessDictionary::from_words(["apple", "queso", "fruit", "crane"]);
        let mut session = GameSession::new(puzzle, dictionary);

        session.submit("crane").unwrap();
        assert!(GameRecord::from_session(&session).is_none());

        for word in ["fruit", "apple", "queso"] {
            session.submit(word).unwrap();
        }
        let record = GameRecord::from_session(&session).unwrap();
        assert!(record.won);
        assert_eq!(record.score, session.score());
        assert_eq!(
            record.boards,
            PerLanguage::new(
                BoardResult::Solved(3),
                BoardResult::Solved(4),
                BoardResult::Solved(2)
            )
        );
    }

    #[test]
    fn stats_serialize_with_language_keys() {
        let stats = PlayerStats::default();
        let json = serde_json::to_value(&stats).unwrap();
        assert!(json["languages"]["es"].is_array());
        assert_eq!(json["games_played"], 0);
    }
}
