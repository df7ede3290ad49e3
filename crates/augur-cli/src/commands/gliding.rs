use tracing::info;

use augur_core::EngineConfig;
use augur_games::GlidingSession;

pub fn run(
    seed: u64,
    name: Option<&str>,
    max_turns: u32,
    max_exponent: u32,
    json: bool,
) -> Result<(), String> {
    let config = EngineConfig::gliding()
        .with_max_turns(max_turns)
        .with_max_exponent(max_exponent);

    let mut session = GlidingSession::new(config, seed)
        .map_err(|e| format!("failed to start session: {e}"))?
        .with_player(name);

    info!(seed, max_turns, max_exponent, "starting gliding powers");
    super::play(&mut session, json)
}
