use tracing::info;

use augur_core::EngineConfig;
use augur_games::RitualSession;

pub fn run(seed: u64, json: bool) -> Result<(), String> {
    let mut session = RitualSession::new(EngineConfig::ritual(), seed)
        .map_err(|e| format!("failed to start session: {e}"))?;

    info!(seed, "starting ritual of powers");
    super::play(&mut session, json)
}
