use tracing::info;

use augur_core::EngineConfig;
use augur_games::OracleSession;

pub fn run(seed: u64, name: Option<&str>, json: bool) -> Result<(), String> {
    let mut session = OracleSession::new(EngineConfig::oracle(), seed, name)
        .map_err(|e| format!("failed to start session: {e}"))?;

    info!(seed, seeker = session.seeker(), "starting oracle");
    super::play(&mut session, json)
}
