use tracing::info;

use augur_core::EngineConfig;
use augur_games::{DailySession, daily_levels};

pub fn run(level: Option<usize>, json: bool) -> Result<(), String> {
    let config = EngineConfig::daily();
    let count = daily_levels().len();

    let mut session = match level {
        Some(n) if n == 0 || n > count => {
            return Err(format!("level must be between 1 and {count}"));
        }
        Some(n) => DailySession::single(n - 1, config),
        None => DailySession::new(config),
    }
    .map_err(|e| format!("failed to start session: {e}"))?;

    info!(level = ?level, "starting daily puzzle");
    super::play(&mut session, json)
}
