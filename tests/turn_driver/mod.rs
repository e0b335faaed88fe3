use std::collections::HashSet;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use adaptive_bot::ai::adaptive::{AdaptiveBot, AdaptiveSelector};
use adaptive_bot::ai::simple::RandomBot;
use adaptive_bot::ai::{Bot, MoveDecision};
use adaptive_bot::board::{BoardState, CellBoard, GridCell};
use adaptive_bot::error::{BoardError, SelectorError, SessionError};
use adaptive_bot::util::turn_driver::{play_session, run, BoxBot};

/// Always plays the first cell of the board, even once it has been opened.
#[derive(Debug)]
struct FirstCellBot;

impl<B: CellBoard> Bot<B> for FirstCellBot {
    fn select_move(&mut self, board: &B) -> Result<MoveDecision<B::Cell>, SelectorError> {
        Ok(MoveDecision::Act(board.all_cells()[0]))
    }
}

fn adaptive(bias_growth: f64, seed: u64) -> BoxBot<GridCell> {
    Box::new(AdaptiveBot::new(
        AdaptiveSelector::new(bias_growth).unwrap(),
        SmallRng::seed_from_u64(seed),
    ))
}

fn assert_distinct<C: Copy + Eq + std::hash::Hash + Debug>(cells: impl IntoIterator<Item = C>) {
    let mut seen = HashSet::new();
    for cell in cells {
        assert!(seen.insert(cell), "Cell {:?} opened twice", cell);
    }
}

#[test]
fn random_bot_clears_grid_one_cell_per_turn() {
    let start = BoardState::grid(3, 3);
    let mut bots: Vec<BoxBot<GridCell>> = vec![Box::new(RandomBot::new(SmallRng::seed_from_u64(0)))];

    let replay = play_session(&start, &mut bots, 100).unwrap();

    assert!(replay.finished);
    assert_eq!(replay.turns, 9);
    assert_eq!(replay.moves.len(), 9);
    assert_distinct(replay.moves.iter().map(|m| m.cell));
    assert!(replay.final_board().is_done());
    assert_eq!(replay.seats[0].acts, 9);
    assert_eq!(replay.seats[0].waits, 0);
    assert_eq!(replay.debug, vec!["RandomBot".to_owned()]);
}

#[test]
fn later_seats_see_cells_opened_earlier_in_the_turn() {
    let start = BoardState::grid(5, 5);
    let mut bots = vec![adaptive(1.0, 1), adaptive(1.0, 2), adaptive(1.0, 3)];

    let replay = play_session(&start, &mut bots, 100).unwrap();

    assert!(replay.finished);
    // three acts per turn, and the session stops on the 25th cell
    assert_eq!(replay.turns, 9);
    assert_eq!(replay.moves.len(), 25);
    assert_distinct(replay.moves.iter().map(|m| m.cell));
    for (i, record) in replay.moves.iter().enumerate() {
        assert_eq!(record.seat, i % 3);
        assert_eq!(record.turn as usize, i / 3);
    }
}

#[test]
fn adaptive_bot_never_waits_more_than_nineteen_turns() {
    let start = BoardState::grid(8, 8);
    let mut bots = vec![adaptive(0.05, 4)];

    let replay = play_session(&start, &mut bots, 10_000).unwrap();

    assert!(replay.finished);
    assert_eq!(replay.seats[0].acts, 64);
    assert!(replay.seats[0].longest_wait <= 19, "{:?}", replay.seats[0]);
    assert_eq!(replay.turns, replay.seats[0].acts + replay.seats[0].waits);
}

#[test]
fn turn_limit_stops_session() {
    let start = BoardState::grid(3, 3);
    let mut bots: Vec<BoxBot<GridCell>> = vec![Box::new(RandomBot::new(SmallRng::seed_from_u64(5)))];

    let replay = play_session(&start, &mut bots, 4).unwrap();
    assert!(!replay.finished);
    assert_eq!(replay.turns, 4);
    assert_eq!(replay.final_board().opened_count(), 4);

    let replay = play_session(&start, &mut bots, 0).unwrap();
    assert!(!replay.finished);
    assert_eq!(replay.turns, 0);
    assert!(replay.moves.is_empty());
}

#[test]
fn session_errors() {
    let start = BoardState::grid(2, 2);
    assert_eq!(
        play_session(&start, &mut Vec::<BoxBot<GridCell>>::new(), 10).unwrap_err(),
        SessionError::NoBots
    );

    let empty: BoardState<GridCell> = BoardState::new(vec![]).unwrap();
    let mut bots = vec![adaptive(0.05, 6)];
    assert_eq!(
        play_session(&empty, &mut bots, 10).unwrap_err(),
        SessionError::Selector(SelectorError::InvalidBoard)
    );

    let mut bots: Vec<BoxBot<GridCell>> = vec![Box::new(FirstCellBot)];
    assert_eq!(
        play_session(&start, &mut bots, 10).unwrap_err(),
        SessionError::Board(BoardError::AlreadyOpened(GridCell::new(0, 0)))
    );
}

#[test]
fn run_aggregates_sessions() {
    let completed = AtomicU32::new(0);
    let next_seed = AtomicU64::new(0);

    let result = run(
        || BoardState::grid(4, 4),
        || {
            let seed = next_seed.fetch_add(2, Ordering::SeqCst);
            vec![
                adaptive(0.05, seed),
                Box::new(RandomBot::new(SmallRng::seed_from_u64(seed + 1))) as BoxBot<_>,
            ]
        },
        16,
        1000,
        |_, replay| {
            assert!(replay.finished);
            completed.fetch_add(1, Ordering::SeqCst);
        },
    )
    .unwrap();

    assert_eq!(completed.load(Ordering::SeqCst), 16);
    assert_eq!(result.session_count, 16);
    assert_eq!(result.replays.len(), 16);
    assert_eq!(result.finished_fraction, 1.0);
    assert!(result.average_length > 0.0);

    // every session got its own seeds, so the games differ
    let distinct_games: HashSet<Vec<GridCell>> = result
        .replays
        .iter()
        .map(|r| r.moves.iter().map(|m| m.cell).collect())
        .collect();
    assert!(distinct_games.len() > 1, "All sessions played the same game");

    let expected_length = result.replays.iter().map(|r| r.turns as f32).sum::<f32>() / 16.0;
    assert!((result.average_length - expected_length).abs() < 1e-4);

    let total_moves: usize = result.replays.iter().map(|r| r.moves.len()).sum();
    assert_eq!(total_moves, 16 * 16);
    for seat in 0..2 {
        let acts: u32 = result.replays.iter().map(|r| r.seats[seat].acts).sum();
        assert!((result.act_share[seat] - acts as f32 / total_moves as f32).abs() < 1e-4);
    }

    let total_share: f32 = result.act_share.iter().sum();
    assert!((total_share - 1.0).abs() < 1e-4);
    // the random bot acts every turn, the adaptive one mostly waits
    assert!(result.act_share[1] > result.act_share[0], "{:?}", result);
    assert!(format!("{:?}", result).contains("RandomBot"));
}

#[test]
fn run_without_bots_fails() {
    let result = run(|| BoardState::grid(2, 2), Vec::new, 4, 10, |_, _| {});
    assert_eq!(result.unwrap_err(), SessionError::NoBots);
}
