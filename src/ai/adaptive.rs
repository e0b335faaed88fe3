//! A bot that waits most turns, but becomes more likely to act the longer it has been waiting.
//!
//! Each call to [AdaptiveSelector::decide] is one turn. The chance to act on that turn is
//! `min(1, bias_growth * (attempts + 1))`, where `attempts` is the number of turns waited since the last action.
//! Once the bot acts, it picks a uniformly random cell among the ones that are not opened yet.
use std::fmt::{Debug, Formatter};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::Bot;
use crate::board::{Cell, CellBoard};
use crate::error::{ConfigError, SelectorError};

/// The bias growth used by [AdaptiveSelector::default].
pub const DEFAULT_BIAS_GROWTH: f64 = 0.05;

/// The result of a single turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MoveDecision<C> {
    Wait,
    Act(C),
}

impl<C> MoveDecision<C> {
    pub fn cell(self) -> Option<C> {
        match self {
            MoveDecision::Wait => None,
            MoveDecision::Act(cell) => Some(cell),
        }
    }

    pub fn is_act(&self) -> bool {
        matches!(self, MoveDecision::Act(_))
    }
}

/// State a bot carries from one turn to the next.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BotMoveState {
    /// The number of consecutive turns on which the bot decided not to act.
    pub attempts_since_last_success: u32,
}

impl BotMoveState {
    pub fn new(attempts_since_last_success: u32) -> Self {
        BotMoveState {
            attempts_since_last_success,
        }
    }

    fn after_success(self) -> Self {
        BotMoveState::default()
    }

    fn after_failure(self) -> Self {
        BotMoveState {
            attempts_since_last_success: self.attempts_since_last_success.saturating_add(1),
        }
    }
}

/// The act-or-wait decision procedure. It holds no per-bot state, that is passed in and returned explicitly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AdaptiveSelector {
    bias_growth: f64,
}

impl Default for AdaptiveSelector {
    fn default() -> Self {
        AdaptiveSelector {
            bias_growth: DEFAULT_BIAS_GROWTH,
        }
    }
}

impl AdaptiveSelector {
    /// `bias_growth` is the increase in act probability per waited turn, it must be in `(0, 1]`.
    pub fn new(bias_growth: f64) -> Result<Self, ConfigError> {
        if bias_growth.is_finite() && bias_growth > 0.0 && bias_growth <= 1.0 {
            Ok(AdaptiveSelector { bias_growth })
        } else {
            Err(ConfigError::InvalidBiasGrowth(bias_growth))
        }
    }

    pub fn bias_growth(&self) -> f64 {
        self.bias_growth
    }

    /// The probability of acting after `attempts` turns of waiting, clamped to `1.0`.
    pub fn probability(&self, attempts: u32) -> f64 {
        (self.bias_growth * (attempts as f64 + 1.0)).min(1.0)
    }

    /// The smallest attempt count from which acting is certain,
    /// or `None` if the probability stays below `1.0` for every attempt count a [BotMoveState] can hold.
    pub fn attempts_until_certain(&self) -> Option<u32> {
        if self.probability(u32::MAX) < 1.0 {
            return None;
        }

        // the estimate can be off by one in either direction because of float rounding
        let mut attempts = (1.0 / self.bias_growth - 1.0).ceil().max(0.0) as u32;
        while self.probability(attempts) < 1.0 {
            attempts = attempts.checked_add(1)?;
        }
        while attempts > 0 && self.probability(attempts - 1) >= 1.0 {
            attempts -= 1;
        }
        Some(attempts)
    }

    /// Draw once from `rng` and return whether this turn is a success.
    pub fn roll(&self, attempts: u32, rng: &mut impl Rng) -> bool {
        let value: f64 = rng.gen();
        value <= self.probability(attempts)
    }

    /// Evaluate one turn for a bot with the given `state`, returning the decision and the state for the next turn.
    ///
    /// * If the board has no cells at all this is a caller error: [SelectorError::InvalidBoard].
    /// * If every cell is opened the result is [MoveDecision::Wait] and `state` is returned unchanged,
    ///     without drawing from `rng`.
    /// * Otherwise one roll decides between acting, which resets the state,
    ///     and waiting, which increments the attempt counter.
    pub fn decide<B: CellBoard>(
        &self,
        board: &B,
        state: BotMoveState,
        rng: &mut impl Rng,
    ) -> Result<(MoveDecision<B::Cell>, BotMoveState), SelectorError> {
        if board.all_cells().is_empty() {
            return Err(SelectorError::InvalidBoard);
        }

        let available = board.available_cells();
        if available.is_empty() {
            log::trace!("No available cells, waiting with {:?}", state);
            return Ok((MoveDecision::Wait, state));
        }

        let attempts = state.attempts_since_last_success;
        if self.roll(attempts, rng) {
            let cell = choose_cell(&available, rng);
            log::trace!("Acting on {:?} after {} attempts", cell, attempts);
            Ok((MoveDecision::Act(cell), state.after_success()))
        } else {
            Ok((MoveDecision::Wait, state.after_failure()))
        }
    }
}

fn choose_cell<C: Cell>(available: &[C], rng: &mut impl Rng) -> C {
    // SAFETY: unwrap is safe because the caller checked that `available` is not empty.
    *available.choose(rng).unwrap()
}

/// Bot that owns an [AdaptiveSelector] together with its own [BotMoveState] and random source.
pub struct AdaptiveBot<R: Rng> {
    selector: AdaptiveSelector,
    state: BotMoveState,
    rng: R,
}

impl<R: Rng> Debug for AdaptiveBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AdaptiveBot {{ bias_growth: {}, attempts: {} }}",
            self.selector.bias_growth, self.state.attempts_since_last_success
        )
    }
}

impl<R: Rng> AdaptiveBot<R> {
    pub fn new(selector: AdaptiveSelector, rng: R) -> Self {
        AdaptiveBot {
            selector,
            state: BotMoveState::default(),
            rng,
        }
    }

    pub fn selector(&self) -> &AdaptiveSelector {
        &self.selector
    }

    pub fn state(&self) -> BotMoveState {
        self.state
    }
}

impl<B: CellBoard, R: Rng> Bot<B> for AdaptiveBot<R> {
    fn select_move(&mut self, board: &B) -> Result<MoveDecision<B::Cell>, SelectorError> {
        let (decision, state) = self.selector.decide(board, self.state, &mut self.rng)?;
        self.state = state;
        Ok(decision)
    }
}
