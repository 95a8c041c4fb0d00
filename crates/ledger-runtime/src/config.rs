//! # Configuration
//!
//! Module parameters and runtime settings loaded from one TOML file.
//!
//! ## File Format
//!
//! ```toml
//! [sp]
//! min_deposit = 1000
//!
//! [storage]
//! max_segment_size = 16777216
//! ec_min_secondary_signatures = 4
//!
//! [challenge]
//! challenge_window = 100
//! slash_penalty_bps = 1000
//! attesters = ["0x00000000000000000000000000000000000000a7"]
//!
//! [governance]
//! authority = "0x00000000000000000000000000000000000000ee"
//!
//! [logging]          # optional
//! level = "info"
//! json = false
//! ```
//!
//! Every policy value is mandatory; the runtime has no built-in numbers for
//! bonds, thresholds or penalties.

use serde::Deserialize;
use shared_types::{
    Address, AddressError, Amount, ChallengeParams, Params, ParamsError, SpParams,
    StaticParamStore, StorageParams,
};
use std::env;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Env var overriding the configured log filter.
pub const LOG_LEVEL_ENV: &str = "LEDGER_LOG_LEVEL";
/// Env var forcing JSON log output (`1` or `true`).
pub const JSON_LOGS_ENV: &str = "LEDGER_JSON_LOGS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {error}")]
    Io { path: String, error: String },

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid governance authority: {0}")]
    Authority(#[from] AddressError),

    #[error("invalid challenge attester: {0}")]
    Attester(#[source] AddressError),

    #[error(transparent)]
    Params(#[from] ParamsError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    sp: SpSection,
    storage: StorageSection,
    challenge: ChallengeSection,
    governance: GovernanceSection,
    #[serde(default)]
    logging: LoggingSection,
}

#[derive(Debug, Deserialize)]
struct SpSection {
    // TOML integers are 64-bit.
    min_deposit: u64,
}

#[derive(Debug, Deserialize)]
struct StorageSection {
    max_segment_size: u64,
    ec_min_secondary_signatures: u32,
}

#[derive(Debug, Deserialize)]
struct ChallengeSection {
    challenge_window: u64,
    slash_penalty_bps: u32,
    attesters: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GovernanceSection {
    authority: String,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingSection {
    level: Option<String>,
    json: Option<bool>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// `EnvFilter` directive, e.g. `info` or `sl_04_challenge=debug`.
    pub log_level: String,
    pub json_logs: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl RuntimeConfig {
    /// Apply `LEDGER_LOG_LEVEL` and `LEDGER_JSON_LOGS` on top of `self`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(level) = env::var(LOG_LEVEL_ENV) {
            if !level.trim().is_empty() {
                self.log_level = level;
            }
        }
        if let Ok(json) = env::var(JSON_LOGS_ENV) {
            self.json_logs = matches!(json.trim(), "1" | "true");
        }
        self
    }
}

/// Validated parameters and runtime settings read from TOML.
#[derive(Debug, Clone)]
pub struct TomlParamsProvider {
    params: Params,
    runtime: RuntimeConfig,
}

impl TomlParamsProvider {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, does not parse, or holds
    /// out-of-range parameters.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let attesters = file
            .challenge
            .attesters
            .iter()
            .map(|a| Address::from_hex(a))
            .collect::<Result<Vec<_>, _>>()
            .map_err(ConfigError::Attester)?;

        let params = Params {
            sp: SpParams {
                min_deposit: Amount::from(file.sp.min_deposit),
            },
            storage: StorageParams {
                max_segment_size: file.storage.max_segment_size,
                ec_min_secondary_signatures: file.storage.ec_min_secondary_signatures,
            },
            challenge: ChallengeParams {
                challenge_window: file.challenge.challenge_window,
                slash_penalty_bps: file.challenge.slash_penalty_bps,
                attesters,
            },
            authority: Address::from_hex(&file.governance.authority)?,
        };
        params.validate()?;

        let defaults = RuntimeConfig::default();
        let runtime = RuntimeConfig {
            log_level: file.logging.level.unwrap_or(defaults.log_level),
            json_logs: file.logging.json.unwrap_or(defaults.json_logs),
        };

        Ok(Self { params, runtime })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn runtime(&self) -> &RuntimeConfig {
        &self.runtime
    }

    /// Parameter store seeded with the loaded values.
    pub fn param_store(&self) -> Result<StaticParamStore, ConfigError> {
        Ok(StaticParamStore::new(self.params.clone())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const VALID: &str = r#"
        [sp]
        min_deposit = 1000

        [storage]
        max_segment_size = 16777216
        ec_min_secondary_signatures = 4

        [challenge]
        challenge_window = 100
        slash_penalty_bps = 1000
        attesters = ["0x00000000000000000000000000000000000000a7"]

        [governance]
        authority = "0x00000000000000000000000000000000000000ee"
    "#;

    #[test]
    fn test_parse_valid_config() {
        let config = TomlParamsProvider::parse(VALID).unwrap();
        assert_eq!(config.params().sp.min_deposit, 1000);
        assert_eq!(config.params().storage.ec_min_secondary_signatures, 4);
        assert_eq!(config.params().challenge.slash_penalty_bps, 1000);
        assert_eq!(config.runtime(), &RuntimeConfig::default());
    }

    #[test]
    fn test_policy_values_are_mandatory() {
        let missing = VALID.replace("slash_penalty_bps = 1000", "");
        assert!(matches!(
            TomlParamsProvider::parse(&missing),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_out_of_range_params_rejected() {
        let bad = VALID.replace("slash_penalty_bps = 1000", "slash_penalty_bps = 20000");
        assert!(matches!(
            TomlParamsProvider::parse(&bad),
            Err(ConfigError::Params(_))
        ));

        let bad = VALID.replace("0x00000000000000000000000000000000000000ee", "gov");
        assert!(matches!(
            TomlParamsProvider::parse(&bad),
            Err(ConfigError::Authority(_))
        ));
    }

    #[test]
    fn test_attesters_are_parsed_and_required() {
        let config = TomlParamsProvider::parse(VALID).unwrap();
        assert_eq!(
            config.params().challenge.attesters,
            vec![Address::new([0xA7; 20])]
        );

        let bad = VALID.replace("0x00000000000000000000000000000000000000a7", "warden");
        assert!(matches!(
            TomlParamsProvider::parse(&bad),
            Err(ConfigError::Attester(_))
        ));

        let empty = VALID.replace(
            r#"attesters = ["0x00000000000000000000000000000000000000a7"]"#,
            "attesters = []",
        );
        assert!(matches!(
            TomlParamsProvider::parse(&empty),
            Err(ConfigError::Params(_))
        ));
    }

    #[test]
    fn test_logging_section() {
        let with_logging = format!("{VALID}\n[logging]\nlevel = \"debug\"\njson = true\n");
        let config = TomlParamsProvider::parse(&with_logging).unwrap();
        assert_eq!(
            config.runtime(),
            &RuntimeConfig {
                log_level: "debug".into(),
                json_logs: true
            }
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VALID.as_bytes()).unwrap();

        let config = TomlParamsProvider::load(file.path()).unwrap();
        assert_eq!(config.params().challenge.challenge_window, 100);
        assert!(config.param_store().is_ok());

        assert!(matches!(
            TomlParamsProvider::load("/nonexistent/ledger.toml"),
            Err(ConfigError::Io { .. })
        ));
    }
}
