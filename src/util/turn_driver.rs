//! Utilities to run bots on a shared board, one tick at a time, and report the results.
use std::fmt::Write;
use std::fmt::{Debug, Formatter};
use std::sync::Mutex;

use itertools::Itertools;
use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

use crate::ai::{Bot, MoveDecision};
use crate::board::{BoardState, Cell, CellBoard};
use crate::error::SessionError;

/// A bot that can take part in a session on a [BoardState] with cells of type `C`.
pub type BoxBot<C> = Box<dyn Bot<BoardState<C>>>;

/// Play a single session starting from `start`.
///
/// Every tick each bot, in seat order, is asked for a move on the current board.
/// An [MoveDecision::Act] is applied before the next bot moves, so later seats always see the updated board.
/// The session ends as soon as every cell is opened, or after `max_turns` ticks.
pub fn play_session<C: Cell>(
    start: &BoardState<C>,
    bots: &mut [BoxBot<C>],
    max_turns: u32,
) -> Result<Replay<C>, SessionError<C>> {
    if bots.is_empty() {
        return Err(SessionError::NoBots);
    }

    let mut board = start.clone();
    let mut seats = vec![SeatStats::default(); bots.len()];
    let mut moves = vec![];
    let mut turns = 0;

    'session: while turns < max_turns && !board.is_done() {
        for (seat, bot) in bots.iter_mut().enumerate() {
            let decision = bot.select_move(&board)?;
            seats[seat].record(decision);

            if let MoveDecision::Act(cell) = decision {
                board.open(cell)?;
                moves.push(MoveRecord { turn: turns, seat, cell });

                if board.is_done() {
                    turns += 1;
                    break 'session;
                }
            }
        }
        turns += 1;
    }

    let finished = board.is_done();
    if finished {
        log::debug!("Session finished after {} turns, {} moves", turns, moves.len());
    } else {
        log::warn!("Session hit the turn limit of {} with {}", max_turns, board);
    }

    Ok(Replay {
        start: start.clone(),
        moves,
        turns,
        finished,
        seats,
        debug: bots.iter().map(debug_to_string).collect_vec(),
    })
}

/// Run `sessions` independent sessions in parallel, each with a fresh board from `start` and fresh bots from `bots`.
///
/// `callback` is called after every finished session with the number of sessions completed so far.
pub fn run<C: Cell>(
    start: impl Fn() -> BoardState<C> + Sync,
    bots: impl Fn() -> Vec<BoxBot<C>> + Sync,
    sessions: u32,
    max_turns: u32,
    callback: impl Fn(u32, &Replay<C>) + Sync,
) -> Result<SessionsResult<C>, SessionError<C>> {
    let callback = &callback;

    // this instantiates the bots at least once so we catch errors before starting a bunch of threads
    let debug = bots().iter().map(debug_to_string).collect_vec();
    if debug.is_empty() {
        return Err(SessionError::NoBots);
    }

    let completed = Mutex::new(0);

    let replays: Vec<Replay<C>> = (0..sessions)
        .into_par_iter()
        .map(|_| {
            let replay = play_session(&start(), &mut bots(), max_turns)?;

            let mut completed = completed.lock().unwrap();
            *completed += 1;
            callback(*completed, &replay);

            Ok(replay)
        })
        .collect::<Result<_, SessionError<C>>>()?;

    let seat_count = debug.len();
    let total_acts = replays.iter().map(|r| r.moves.len()).sum::<usize>();
    let act_share = (0..seat_count)
        .map(|seat| {
            let acts = replays.iter().map(|r| r.seats[seat].acts).sum::<u32>();
            acts as f32 / total_acts.max(1) as f32
        })
        .collect_vec();

    Ok(SessionsResult {
        session_count: sessions,
        average_length: replays.iter().map(|r| r.turns as f32).sum::<f32>() / sessions.max(1) as f32,
        finished_fraction: replays.iter().filter(|r| r.finished).count() as f32 / sessions.max(1) as f32,
        act_share,
        debug,
        replays,
    })
}

/// A single cell opened during a session.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MoveRecord<C> {
    pub turn: u32,
    pub seat: usize,
    pub cell: C,
}

/// Per-seat counters for a single session.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct SeatStats {
    pub acts: u32,
    pub waits: u32,
    /// The longest run of consecutive waits.
    pub longest_wait: u32,
    current_wait: u32,
}

impl SeatStats {
    fn record<C>(&mut self, decision: MoveDecision<C>) {
        match decision {
            MoveDecision::Act(_) => {
                self.acts += 1;
                self.current_wait = 0;
            }
            MoveDecision::Wait => {
                self.waits += 1;
                self.current_wait += 1;
                self.longest_wait = self.longest_wait.max(self.current_wait);
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Replay<C: Cell> {
    pub start: BoardState<C>,
    pub moves: Vec<MoveRecord<C>>,

    /// The number of ticks played.
    pub turns: u32,
    /// Whether every cell got opened before the turn limit.
    pub finished: bool,

    pub seats: Vec<SeatStats>,
    pub debug: Vec<String>,
}

impl<C: Cell> Replay<C> {
    /// The board at the end of the session.
    pub fn final_board(&self) -> BoardState<C> {
        let mut board = self.start.clone();
        for record in &self.moves {
            // the driver only records cells it managed to open
            board.open(record.cell).unwrap();
        }
        board
    }
}

/// Structure returned by the function [`run`].
pub struct SessionsResult<C: Cell> {
    pub session_count: u32,
    pub replays: Vec<Replay<C>>,

    /// Average number of ticks per session.
    pub average_length: f32,
    pub finished_fraction: f32,

    /// For each seat, the fraction of all opened cells that were opened by that seat.
    pub act_share: Vec<f32>,

    pub debug: Vec<String>,
}

impl<C: Cell> Debug for SessionsResult<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SessionsResult {{")?;
        writeln!(
            f,
            "  {} sessions, average length {:.2}, finished {:.3}",
            self.session_count, self.average_length, self.finished_fraction
        )?;
        for (seat, (share, debug)) in self.act_share.iter().zip(&self.debug).enumerate() {
            writeln!(f, "  seat {}: share {:.3}  {}", seat, share, debug)?;
        }
        writeln!(f, "}}")?;

        Ok(())
    }
}

fn debug_to_string(d: &impl Debug) -> String {
    let mut s = String::new();
    write!(&mut s, "{:?}", d).unwrap();
    s
}
