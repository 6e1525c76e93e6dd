use crate::cli::Cli;
use crate::config;

/// Load settings and apply command-line overrides.
pub fn load_settings(cli: &Cli) -> config::Settings {
    let mut settings = match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                tracing::warn!("invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not block a rebuild.
            tracing::warn!("failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    };
    cli.apply(&mut settings);
    settings
}
