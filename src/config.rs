//! Runtime configuration read from the environment (after `.env` is loaded).

use poise::serenity_prelude as serenity;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

use crate::utils::database::DEFAULT_DB_PATH;

/// Command prefix used when `DEX_PREFIX` is unset.
pub const DEFAULT_PREFIX: &str = "dx.";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("DISCORD_TOKEN not found in environment or .env")]
    MissingToken,

    #[error("Invalid value for {0}: must not be blank")]
    Blank(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub database_path: PathBuf,
    pub prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, so tests don't touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("DISCORD_TOKEN")
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let database_path = lookup("DEX_DATABASE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        let prefix = match lookup("DEX_PREFIX") {
            Some(prefix) if prefix.trim().is_empty() => return Err(ConfigError::Blank("DEX_PREFIX")),
            Some(prefix) => prefix.trim().to_string(),
            None => DEFAULT_PREFIX.to_string(),
        };

        Ok(Self {
            token,
            database_path,
            prefix,
        })
    }

    /// Gateway intents needed for prefix commands and voice tracking.
    pub fn intents() -> serenity::GatewayIntents {
        serenity::GatewayIntents::non_privileged()
            | serenity::GatewayIntents::MESSAGE_CONTENT
            | serenity::GatewayIntents::GUILD_VOICE_STATES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use test_case::test_case;

    fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(|value| value.to_string())
    }

    #[test]
    fn defaults_apply_when_only_token_is_set() {
        let config = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "abc.def")])).unwrap();

        assert_eq!(
            config,
            Config {
                token: "abc.def".to_string(),
                database_path: PathBuf::from("voice_stats.db"),
                prefix: "dx.".to_string(),
            }
        );
    }

    #[test_case(&[] ; "unset")]
    #[test_case(&[("DISCORD_TOKEN", "")] ; "empty")]
    #[test_case(&[("DISCORD_TOKEN", "   ")] ; "whitespace")]
    fn missing_token_prevents_startup(vars: &[(&str, &str)]) {
        assert_matches!(Config::from_lookup(lookup_from(vars)), Err(ConfigError::MissingToken));
    }

    #[test]
    fn overrides_are_honoured() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "abc"),
            ("DEX_DATABASE", "/var/lib/dex/stats.db"),
            ("DEX_PREFIX", "!"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/var/lib/dex/stats.db"));
        assert_eq!(config.prefix, "!");
    }

    #[test]
    fn blank_prefix_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[("DISCORD_TOKEN", "abc"), ("DEX_PREFIX", " ")]));

        assert_eq!(result, Err(ConfigError::Blank("DEX_PREFIX")));
    }

    #[test]
    fn intents_cover_messages_and_voice() {
        let intents = Config::intents();

        assert!(intents.contains(serenity::GatewayIntents::MESSAGE_CONTENT));
        assert!(intents.contains(serenity::GatewayIntents::GUILD_VOICE_STATES));
    }
}
