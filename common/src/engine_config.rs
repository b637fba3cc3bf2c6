use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::games::SessionRng;
use crate::games::tictactoe::BotStrategy;

/// Engine settings shared by every game a process hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub bot_strategy: BotStrategy,
    /// Fixes the random strategy's choices; ignored by `perfect`.
    pub rng_seed: Option<u64>,
    pub log_prefix: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bot_strategy: BotStrategy::Perfect,
            rng_seed: None,
            log_prefix: None,
        }
    }
}

impl EngineConfig {
    pub fn session_rng(&self) -> SessionRng {
        SessionRng::from_seed_or_random(self.rng_seed)
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.log_prefix {
            if prefix.trim().is_empty() {
                return Err("log_prefix must not be blank".to_string());
            }
            if prefix.contains(['[', ']', '\n']) {
                return Err(format!(
                    "log_prefix '{}' must not contain brackets or newlines",
                    prefix
                ));
            }
        }
        Ok(())
    }
}
