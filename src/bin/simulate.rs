use rand::rngs::SmallRng;
use rand::SeedableRng;

use adaptive_bot::ai::adaptive::{AdaptiveBot, AdaptiveSelector};
use adaptive_bot::ai::simple::RandomBot;
use adaptive_bot::board::{BoardState, GridCell};
use adaptive_bot::error::{ConfigError, SessionError};
use adaptive_bot::util::turn_driver::{run, BoxBot};

const SESSIONS: u32 = 1000;
const MAX_TURNS: u32 = 10_000;

#[derive(Debug, thiserror::Error)]
enum SimulateError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Session(#[from] SessionError<GridCell>),
}

fn main() -> Result<(), SimulateError> {
    env_logger::init();

    let patient = AdaptiveSelector::default();
    let eager = AdaptiveSelector::new(0.25)?;

    let result = run(
        || BoardState::grid(9, 9),
        || {
            let bots: Vec<BoxBot<GridCell>> = vec![
                Box::new(AdaptiveBot::new(patient, SmallRng::from_entropy())),
                Box::new(AdaptiveBot::new(eager, SmallRng::from_entropy())),
                Box::new(RandomBot::new(SmallRng::from_entropy())),
            ];
            bots
        },
        SESSIONS,
        MAX_TURNS,
        |completed, replay| {
            if completed % 100 == 0 {
                log::info!("{}/{} sessions, last took {} turns", completed, SESSIONS, replay.turns);
            }
        },
    )?;

    println!("{:?}", result);
    Ok(())
}
