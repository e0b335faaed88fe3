#![warn(missing_debug_implementations)]

//! A bot for turn-based games on a board of cells, that decides every turn whether to act or to wait.
//!
//! The core is the [AdaptiveSelector](crate::ai::adaptive::AdaptiveSelector): the longer a bot has been waiting,
//! the more likely it becomes to act, until acting is certain. When it acts it opens a uniformly random cell
//! that is not opened yet. The selector is a pure function of the board, the bot's
//! [BotMoveState](crate::ai::adaptive::BotMoveState) and an explicitly passed random source,
//! so it can be tested deterministically with a seeded `Rng`.
//!
//! # Features
//!
//! * Boards, see [board](crate::board):
//!     * [CellBoard](crate::board::CellBoard), the read-only view a bot gets on the board.
//!     * [BoardState](crate::board::BoardState), an owned board with an ordered list of cells and a set of opened cells.
//! * Bots implementing [Bot](crate::ai::Bot):
//!     * [AdaptiveBot](crate::ai::adaptive::AdaptiveBot), which wraps the selector together with its own state.
//!     * [RandomBot](crate::ai::simple::RandomBot), which acts every turn.
//! * A turn driver to run bots on a shared board, see [turn_driver](crate::util::turn_driver).
//! * Random board generation functions, see [board_gen](crate::util::board_gen).
//!
//! # Examples
//!
//! ## Decide a single turn
//!
//! ```
//! # use adaptive_bot::ai::adaptive::{AdaptiveSelector, BotMoveState, MoveDecision};
//! # use adaptive_bot::board::{BoardState, CellBoard};
//! # let mut rng = rand::thread_rng();
//! let board = BoardState::with_opened(vec!['a', 'b', 'c'], ['a']).unwrap();
//! let selector = AdaptiveSelector::default();
//!
//! let (decision, state) = selector.decide(&board, BotMoveState::default(), &mut rng).unwrap();
//! match decision {
//!     MoveDecision::Act(cell) => assert!(!board.is_opened(cell) && state.attempts_since_last_success == 0),
//!     MoveDecision::Wait => assert_eq!(state.attempts_since_last_success, 1),
//! }
//! ```
//!
//! ## Run a couple of sessions
//!
//! ```
//! # use adaptive_bot::ai::adaptive::{AdaptiveBot, AdaptiveSelector};
//! # use adaptive_bot::board::BoardState;
//! # use adaptive_bot::util::turn_driver::{run, BoxBot};
//! # use rand::thread_rng;
//! let result = run(
//!     || BoardState::grid(3, 3),
//!     || vec![Box::new(AdaptiveBot::new(AdaptiveSelector::default(), thread_rng())) as BoxBot<_>],
//!     4,
//!     1000,
//!     |_, _| {},
//! )
//! .unwrap();
//! println!("{:?}", result);
//! ```

pub mod board;
pub mod error;

pub mod ai;

pub mod util;
