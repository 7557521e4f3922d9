//! Settings loading: defaults, then an optional TOML file, then environment.

use std::path::Path;

use config::{Config, ConfigError, Environment, File, Source};
use reporter::ToolSettings;

const DEFAULT_SETTINGS_FILE: &str = "paperless";
const ENV_PREFIX: &str = "PAPERLESS";

/// Loads [`ToolSettings`].
///
/// Sources, lowest precedence first: built-in defaults, the settings file
/// (`path`, or an optional `paperless.toml` in the working directory), and
/// the `PAPERLESS_URL` / `PAPERLESS_TOKEN` environment variables.
pub fn load_settings(path: Option<&Path>) -> Result<ToolSettings, ConfigError> {
    let environment = Environment::with_prefix(ENV_PREFIX).keep_prefix(true);
    match path {
        Some(path) => build_settings(File::from(path).required(true), environment),
        None => build_settings(
            File::with_name(DEFAULT_SETTINGS_FILE).required(false),
            environment,
        ),
    }
}

fn build_settings<S>(file: S, environment: Environment) -> Result<ToolSettings, ConfigError>
where
    S: Source + Send + Sync + 'static,
{
    let defaults = ToolSettings::default();
    Config::builder()
        .set_default("paperless_url", defaults.paperless_url)?
        .set_default("paperless_token", defaults.paperless_token)?
        .add_source(file)
        .add_source(environment)
        .build()?
        .try_deserialize()
}
