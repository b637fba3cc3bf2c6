use common::EngineConfig;
use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "noughts_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub show_history_on_game_over: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            show_history_on_game_over: true,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.engine.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::ConfigSerializer;
    use common::games::tictactoe::BotStrategy;

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_nested_engine_section() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer
            .deserialize("engine:\n  bot_strategy: random\n  rng_seed: 3\n")
            .unwrap();
        assert_eq!(config.engine.bot_strategy, BotStrategy::Random);
        assert_eq!(config.engine.rng_seed, Some(3));
        assert!(config.show_history_on_game_over);
    }
}
