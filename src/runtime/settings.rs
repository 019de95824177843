use crate::config;

/// Load settings, falling back to defaults on any failure.
///
/// Runs before logging is initialized, so problems go straight to stderr.
pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(err) = s.validate() {
                eprintln!("music-organizer: {err}, using defaults");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the app from starting.
            eprintln!("music-organizer: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
