//! Round-level behaviour of the memory game state.
//!
//! These tests drive `MemoryGame` the way the input layer does: start a
//! round, play moves, let lives run out, start again.

use memword::core::error::GameError;
use memword::games::memory::words::default_words;
use memword::games::memory::{Choice, MemoryGame, MoveOutcome, Phase, RoundSummary, Rules};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{HashMap, HashSet};

fn builtin_game(seed: u64) -> MemoryGame {
    MemoryGame::new(Rules::default(), default_words(), StdRng::seed_from_u64(seed))
}

fn small_game(words: &[&str]) -> MemoryGame {
    let rules = Rules {
        pool_size: words.len(),
        ..Rules::default()
    };
    let source = words.iter().map(|w| w.to_string()).collect();
    MemoryGame::new(rules, source, StdRng::seed_from_u64(1))
}

// =============================================================================
// Pool
// =============================================================================

#[test]
fn every_round_gets_twenty_distinct_builtin_words() {
    let source: HashSet<String> = default_words().into_iter().collect();
    let mut game = builtin_game(2024);

    for _ in 0..10 {
        game.init(true).unwrap();
        let pool = game.pool();
        assert_eq!(pool.len(), 20);
        let unique: HashSet<&String> = pool.iter().collect();
        assert_eq!(unique.len(), 20);
        assert!(pool.iter().all(|w| source.contains(w)));
    }
}

#[test]
fn random_words_come_from_the_pool_roughly_uniformly() {
    let mut game = builtin_game(77);
    game.init(true).unwrap();
    let pool: HashSet<String> = game.pool().iter().cloned().collect();

    let mut counts: HashMap<String, u32> = HashMap::new();
    for _ in 0..20_000 {
        let word = game.get_random_word().unwrap();
        assert!(pool.contains(&word), "{word} is not in the pool");
        *counts.entry(word).or_default() += 1;
    }

    // 1000 expected per word; the bounds are many standard deviations wide.
    assert_eq!(counts.len(), 20);
    for (word, count) in counts {
        assert!((700..1300).contains(&count), "{word} drawn {count} times");
    }
}

#[test]
fn random_words_are_lowercase() {
    let mut game = small_game(&["Cat", "DOG"]);
    game.init(true).unwrap();
    for _ in 0..20 {
        let word = game.get_random_word().unwrap();
        assert_eq!(word, word.to_lowercase());
    }
}

proptest! {
    #[test]
    fn pools_are_distinct_subsets_for_any_seed(seed in any::<u64>(), size in 2usize..=110) {
        let rules = Rules { pool_size: size, ..Rules::default() };
        let source = default_words();
        let mut game = MemoryGame::new(rules, source.clone(), StdRng::seed_from_u64(seed));
        game.init(true).unwrap();

        let pool = game.pool();
        prop_assert_eq!(pool.len(), size);
        let unique: HashSet<&String> = pool.iter().collect();
        prop_assert_eq!(unique.len(), size);
        prop_assert!(pool.iter().all(|w| source.contains(w)));
    }
}

// =============================================================================
// Used-word record, score and lives
// =============================================================================

#[test]
fn used_word_stays_duplicate_for_the_rest_of_the_round() {
    let mut game = builtin_game(3);
    game.init(true).unwrap();
    let word = game.current_word().unwrap().to_string();

    assert!(game.is_new_word(&word));
    game.add_used_word(&word).unwrap();

    for _ in 0..5 {
        assert!(game.is_duplicate_word(&word));
        assert!(!game.is_new_word(&word));
        game.increment_score_by_amount(1).unwrap();
    }
}

#[test]
fn score_counts_increments() {
    let mut game = builtin_game(4);
    game.init(true).unwrap();
    for k in 1..=15 {
        assert_eq!(game.increment_score_by_amount(1).unwrap(), k);
    }
    assert_eq!(game.score(), 15);
}

#[test]
fn three_lost_lives_reach_zero() {
    let mut game = builtin_game(5);
    game.init(true).unwrap();
    assert_eq!(game.reduce_lives_by_amount(1).unwrap(), 2);
    assert_eq!(game.reduce_lives_by_amount(1).unwrap(), 1);
    assert_eq!(game.reduce_lives_by_amount(1).unwrap(), 0);
}

#[test]
fn new_round_forgets_previous_round() {
    let mut game = builtin_game(6);
    game.init(true).unwrap();
    let word = game.current_word().unwrap().to_string();
    game.add_used_word(&word).unwrap();
    game.increment_score_by_amount(4).unwrap();
    game.reduce_lives_by_amount(2).unwrap();

    let summary = game.reset_game().unwrap();
    assert_eq!(summary.final_score, 4);
    assert_eq!(game.phase(), Phase::Ended);

    game.init(true).unwrap();
    assert_eq!(game.phase(), Phase::Active);
    assert_eq!(game.score(), 0);
    assert_eq!(game.lives(), 3);
    assert!(game.is_new_word(&word));
    assert_eq!(game.used_count(&word), 0);
}

#[test]
fn moves_after_round_end_need_a_new_start() {
    let mut game = small_game(&["cat", "dog"]);
    game.init(true).unwrap();
    game.reset_game().unwrap();
    assert_eq!(
        game.play(Choice::New),
        Err(GameError::InvalidState("no round in progress"))
    );
}

#[test]
fn ended_round_discards_pool_and_rejects_round_operations() {
    let mut game = small_game(&["cat", "dog"]);
    game.init(true).unwrap();
    game.reset_game().unwrap();

    assert_eq!(game.phase(), Phase::Ended);
    assert!(game.pool().is_empty());
    assert_eq!(game.current_word(), None);

    let ended = GameError::InvalidState("no round in progress");
    assert_eq!(game.get_random_word(), Err(ended.clone()));
    assert_eq!(game.next_word(), Err(ended.clone()));
    assert_eq!(game.add_used_word("cat"), Err(ended.clone()));
    assert_eq!(game.increment_score_by_amount(1), Err(ended.clone()));
    assert_eq!(game.reduce_lives_by_amount(1), Err(ended));
    assert!(game.present_word("cat").is_err());
    assert_eq!((game.score(), game.lives()), (0, 3));

    // A fresh start brings a new pool back.
    game.init(true).unwrap();
    assert_eq!(game.pool().len(), 2);
    assert!(game.get_random_word().is_ok());
}

#[test]
fn ended_round_before_reset_rejects_round_operations() {
    let mut game = small_game(&["cat", "dog"]);
    game.init(true).unwrap();
    game.reduce_lives_by_amount(2).unwrap();
    let word = game.current_word().unwrap().to_string();
    let choice = if game.is_new_word(&word) { Choice::Old } else { Choice::New };
    assert!(matches!(game.play(choice).unwrap(), MoveOutcome::RoundOver(_)));

    assert_eq!(
        game.get_random_word(),
        Err(GameError::InvalidState("no round in progress"))
    );
    assert!(game.increment_score_by_amount(1).is_err());
    assert_eq!(game.lives(), 0);
}

// =============================================================================
// Full round
// =============================================================================

#[test]
fn cat_dog_round_plays_out_to_reset() {
    let mut game = small_game(&["cat", "dog"]);
    game.init(true).unwrap();
    game.present_word("cat").unwrap();

    // "cat" is new and the player says new.
    let outcome = game.play(Choice::New).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::Continue {
            correct: true,
            next_word: "dog".to_string()
        }
    );
    assert_eq!((game.score(), game.lives()), (1, 3));

    // "dog" is new but the player says old.
    let outcome = game.play(Choice::Old).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::Continue {
            correct: false,
            next_word: "cat".to_string()
        }
    );
    assert_eq!((game.score(), game.lives()), (1, 2));

    // "cat" has been seen; calling it new is wrong.
    let outcome = game.play(Choice::New).unwrap();
    assert!(matches!(outcome, MoveOutcome::Continue { correct: false, .. }));
    assert_eq!(game.lives(), 1);

    // Same for "dog": last life gone.
    let outcome = game.play(Choice::New).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::RoundOver(RoundSummary {
            final_score: 1,
            words_seen: 2
        })
    );
    // The ended round keeps its numbers until the caller resets it.
    assert_eq!(game.phase(), Phase::Ended);
    assert_eq!((game.score(), game.lives()), (1, 0));
    assert_eq!(game.rounds_played(), 0);

    let summary = game.reset_game().unwrap();
    assert_eq!(summary.final_score, 1);
    assert_eq!((game.score(), game.lives()), (0, 3));
    assert_eq!(game.rounds_played(), 1);
    assert!(game.is_new_word("cat"));
}

#[test]
fn perfect_player_never_loses_a_life() {
    let mut game = builtin_game(8);
    game.init(true).unwrap();

    for _ in 0..200 {
        let word = game.current_word().unwrap().to_string();
        let choice = if game.is_new_word(&word) { Choice::New } else { Choice::Old };
        let outcome = game.play(choice).unwrap();
        assert!(matches!(outcome, MoveOutcome::Continue { correct: true, .. }));
    }
    assert_eq!(game.score(), 200);
    assert_eq!(game.lives(), 3);
}

#[test]
fn same_seed_plays_the_same_round() {
    let mut a = builtin_game(99);
    let mut b = builtin_game(99);
    a.init(true).unwrap();
    b.init(true).unwrap();
    assert_eq!(a.pool(), b.pool());

    // Includes the round ending and the errors after it.
    for _ in 0..30 {
        assert_eq!(a.play(Choice::New), b.play(Choice::New));
    }
}
