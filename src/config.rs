use figment::{
    providers::{Env, Format, Json, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Relation name used to expand flag names (`<name>.connected`).
    pub endpoint_name: String,
    /// Whether a "relation data changed" event raises `<name>.available`.
    /// Older revisions of the interface left that event unhandled.
    pub announce_changes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint_name: "compute".into(),
            announce_changes: true,
        }
    }
}

impl Config {
    /// Config for a named endpoint with every other setting defaulted.
    pub fn named(endpoint_name: impl Into<String>) -> Self {
        Self {
            endpoint_name: endpoint_name.into(),
            ..Self::default()
        }
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("compute-requires.toml"))
            .merge(Json::file("compute-requires.json"))
            .merge(Env::prefixed("COMPUTE_REQUIRES_"))
    }

    pub fn load() -> Result<Self> {
        Ok(Self::figment().extract()?)
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let config = Config::load().expect("defaults load");
            assert_eq!(config, Config::default());
            assert!(config.announce_changes);
            Ok(())
        });
    }

    #[test]
    fn toml_then_env_layering() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "compute-requires.toml",
                r#"
                    endpoint_name = "cloud-compute"
                    announce_changes = false
                "#,
            )?;
            let config = Config::load().expect("toml loads");
            assert_eq!(config.endpoint_name, "cloud-compute");
            assert!(!config.announce_changes);

            jail.set_env("COMPUTE_REQUIRES_ANNOUNCE_CHANGES", "true");
            let config = Config::load().expect("env overrides toml");
            assert_eq!(config.endpoint_name, "cloud-compute");
            assert!(config.announce_changes);
            Ok(())
        });
    }

    #[test]
    fn json_source_is_read() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "compute-requires.json",
                r#"{ "endpoint_name": "nova-compute" }"#,
            )?;
            let config = Config::load().expect("json loads");
            assert_eq!(config, Config::named("nova-compute"));
            Ok(())
        });
    }

    #[test]
    fn bad_type_is_a_config_error() {
        Jail::expect_with(|jail| {
            jail.create_file("compute-requires.toml", r#"endpoint_name = ["a", "b"]"#)?;
            let err = Config::load().unwrap_err();
            assert!(matches!(err, crate::Error::Config(_)));
            Ok(())
        });
    }
}
