use scrabble_crossword::crossword::board::{Board, Tile};
use scrabble_crossword::crossword::constraint::{ConnectivityRule, PlacementValidator};
use scrabble_crossword::crossword::ranker::count_intersections;
use scrabble_crossword::crossword::{Dictionary, Position, RankingStrategy, Word};
use scrabble_crossword::{CrosswordGenerator, GeneratorConfig, Layout, SearchFailure};

fn config(size: usize, seed: u64) -> GeneratorConfig {
    GeneratorConfig {
        board_size: size,
        timeout_secs: 30.0,
        seed: Some(seed),
        ..GeneratorConfig::default()
    }
}

fn generate(words: &[&str], config: GeneratorConfig) -> (Layout, Dictionary) {
    let generator = CrosswordGenerator::new(words, config).unwrap();
    let layout = generator.generate().unwrap();
    let dictionary = Dictionary::new(words.iter().copied()).unwrap();
    (layout, dictionary)
}

/// Replays the placements in commit order and checks each one against the board as it
/// stood just before it was written
fn assert_commit_rules(layout: &Layout, dictionary: &Dictionary) {
    let mut board = Board::new(layout.board.size());
    for (i, p) in layout.board.placements().iter().enumerate() {
        let word = Word::new(&p.word);
        let validator = PlacementValidator::new(&board, dictionary);
        assert!(
            validator.can_place(&word, p.pos, p.dir),
            "placement {p} was not legal when committed"
        );
        let connectivity = ConnectivityRule::new(&board);
        assert!(
            connectivity.connects(&word, p.pos, p.dir, i),
            "placement {p} does not touch the earlier words"
        );
        board.try_place_word(&word, p.pos, p.dir).unwrap();
    }
    // Replaying reproduces the final board exactly
    assert_eq!(board, layout.board);
}

fn assert_no_overwrites(layout: &Layout) {
    for p in layout.board.placements() {
        for (pos, c) in p.cells() {
            assert_eq!(layout.board[pos], Tile::Letter(c), "{p} lost a letter at {pos}");
        }
    }
}

fn assert_ends_isolated(layout: &Layout) {
    let board = &layout.board;
    for p in board.placements() {
        if let Some(before) = p.pos.prev(p.dir) {
            assert!(!board.is_letter(before), "{p} is extended at its start");
        }
        assert!(
            !board.is_letter(p.pos.step_n(p.len(), p.dir)),
            "{p} is extended at its end"
        );
    }
}

/// Every maximal run of two or more letters, in both directions, is a dictionary word
fn assert_all_runs_are_words(board: &Board, dictionary: &Dictionary) {
    let size = board.size();
    let mut runs = Vec::new();
    for line in 0..size {
        let mut across = String::new();
        let mut down = String::new();
        for i in 0..=size {
            let a = if i < size { board.letter_at(Position::new(line, i)) } else { None };
            let d = if i < size { board.letter_at(Position::new(i, line)) } else { None };
            match a {
                Some(l) => across.push(l),
                None => runs.push(std::mem::take(&mut across)),
            }
            match d {
                Some(l) => down.push(l),
                None => runs.push(std::mem::take(&mut down)),
            }
        }
    }
    for run in runs.into_iter().filter(|r| r.chars().count() > 1) {
        assert!(dictionary.contains(&run), "{run} is on the board but not a word");
    }
}

#[test]
fn small_scenario_succeeds() {
    let words = ["CAT", "CAR", "ARC"];
    let (layout, dictionary) = generate(&words, config(10, 2024));

    let placements = layout.board.placements();
    assert_eq!(placements.len(), 3);

    let mut placed = placements.iter().map(|p| p.word.clone()).collect::<Vec<_>>();
    placed.sort();
    assert_eq!(placed, vec!["ARC", "CAR", "CAT"]);

    // At least one later word shares a letter with the words before it
    let mut board = Board::new(10);
    let mut shared = 0;
    for p in placements {
        let word = Word::new(&p.word);
        shared += count_intersections(&board, &word, p.pos, p.dir);
        board.place_word(&word, p.pos, p.dir);
    }
    assert!(shared >= 1);

    assert_commit_rules(&layout, &dictionary);
    assert_no_overwrites(&layout);
    assert_ends_isolated(&layout);
    assert_all_runs_are_words(&layout.board, &dictionary);
}

#[test]
fn larger_list_keeps_every_rule() {
    let words = ["CAT", "CAR", "ARC", "TAR", "RAT", "ART"];
    for seed in [1, 17, 99] {
        let (layout, dictionary) = generate(&words, config(12, seed));
        assert_eq!(layout.board.placements().len(), words.len());
        assert_commit_rules(&layout, &dictionary);
        assert_no_overwrites(&layout);
        assert_ends_isolated(&layout);
        assert_all_runs_are_words(&layout.board, &dictionary);
    }
}

#[test]
fn center_ranking_keeps_every_rule() {
    let words = ["CAT", "CAR", "ARC", "TAR"];
    let cfg = GeneratorConfig {
        ranking: RankingStrategy::IntersectionsThenCenter,
        ..config(11, 5)
    };
    let (layout, dictionary) = generate(&words, cfg);
    assert_eq!(layout.board.placements().len(), words.len());
    assert_commit_rules(&layout, &dictionary);
    assert_all_runs_are_words(&layout.board, &dictionary);
}

#[test]
fn same_inputs_same_layout() {
    let words = ["CAT", "CAR", "ARC", "TAR", "RAT"];
    let (first, _) = generate(&words, config(12, 31337));
    let (second, _) = generate(&words, config(12, 31337));
    assert_eq!(first.board, second.board);
    assert_eq!(first.board.placements(), second.board.placements());
}

#[test]
fn duplicate_words_are_placed_separately() {
    let words = ["CAT", "CAT", "ACT"];
    let (layout, dictionary) = generate(&words, config(10, 3));
    let cats = layout
        .board
        .placements()
        .iter()
        .filter(|p| p.word == "CAT")
        .count();
    assert_eq!(cats, 2);
    assert_commit_rules(&layout, &dictionary);
}

#[test]
fn zero_timeout_reports_timeout() {
    let cfg = GeneratorConfig {
        timeout_secs: 0.0,
        ..config(10, 1)
    };
    let generator = CrosswordGenerator::new(&["CAT", "CAR"], cfg).unwrap();
    assert!(matches!(generator.generate(), Err(SearchFailure::Timeout(_))));
}

#[test]
fn word_longer_than_board_fails() {
    let generator =
        CrosswordGenerator::new(&["AAAAAAAAAAAAAAAAAAAA"], config(10, 1)).unwrap();
    assert_eq!(generator.generate().unwrap_err(), SearchFailure::Exhausted);
}

#[test]
fn oversized_timeout_is_a_config_error() {
    let cfg = GeneratorConfig {
        timeout_secs: 1e20,
        ..config(10, 1)
    };
    assert!(CrosswordGenerator::new(&["CAT"], cfg).is_err());
}
