use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::Cell;
use triword::core::{Difficulty, Language, PerLanguage};
use triword::puzzle::{GameId, GuessDictionary, PuzzleError, WordPoolProvider, decode, decode_id};
use triword::session::{BoardResult, GameRecord, GameSession, PlayerStats};
use triword::wordlists::WordPools;

/// Provider that counts how often it is asked for words
struct CountingPools {
    inner: WordPools,
    lookups: Cell<usize>,
}

impl WordPoolProvider for CountingPools {
    fn tier_words(&self, language: Language, tier: Difficulty) -> &[String] {
        self.lookups.set(self.lookups.get() + 1);
        self.inner.tier_words(language, tier)
    }
}

#[test]
fn decoding_is_deterministic() {
    let pools = WordPools::embedded();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let id = GameId::generate(&mut rng, &PerLanguage::default());
        let first = decode_id(&id, &pools).unwrap();
        let second = decode(&id.as_str().to_uppercase(), &pools).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn malformed_identifiers_never_touch_the_pools() {
    let pools = CountingPools {
        inner: WordPools::embedded(),
        lookups: Cell::new(0),
    };

    for bad in [
        "",
        "0123456789abcdef",
        "0123456789abcdef0123456789abcdeg",
        "0123456789abcdef0123456789abcdef0",
        " 0123456789abcdef0123456789abcde",
    ] {
        let err = decode(bad, &pools).unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidGameId(_)), "{bad:?}: {err}");
    }
    assert_eq!(pools.lookups.get(), 0);

    decode("0123456789abcdef0123456789abcdef", &pools).unwrap();
    assert!(pools.lookups.get() > 0);
}

#[test]
fn generated_identifiers_decode_to_requested_tiers() {
    let pools = WordPools::embedded();
    let mut rng = StdRng::seed_from_u64(11);

    for en in Difficulty::ALL {
        for es in Difficulty::ALL {
            for fr in Difficulty::ALL {
                let tiers = PerLanguage::new(en, es, fr);
                let id = GameId::generate(&mut rng, &tiers);
                let puzzle = decode_id(&id, &pools).unwrap();
                assert_eq!(puzzle.difficulties, tiers, "{id}");

                let mut order = puzzle.display_order;
                order.sort_by_key(|l| l.index());
                assert_eq!(order, Language::ALL);
            }
        }
    }
}

#[test]
fn finished_session_feeds_player_stats() {
    let pools = WordPools::embedded();
    let puzzle = decode("0123456789abcdef0123456789abcdef", &pools).unwrap();
    let dictionary = GuessDictionary::for_difficulties(&pools, &puzzle.difficulties);
    let mut session = GameSession::new(puzzle, dictionary);

    let answers: Vec<String> = Language::ALL
        .iter()
        .map(|&language| session.solutions()[language].display().to_string())
        .collect();
    for answer in &answers {
        if !session.status().is_over() {
            session.submit(answer).unwrap();
        }
    }

    let record = GameRecord::from_session(&session).unwrap();
    assert!(record.won);
    assert!(matches!(record.boards[Language::En], BoardResult::Solved(1)));

    let mut stats = PlayerStats::default();
    stats.record(&record);
    assert_eq!(stats.games_played, 1);
    assert_eq!(stats.max_streak, 1);

    let en = stats.for_board(Language::En, record.difficulties[Language::En]);
    assert_eq!(en.boards_solved, 1);
    assert_eq!(en.guess_distribution[0], 1);
}
