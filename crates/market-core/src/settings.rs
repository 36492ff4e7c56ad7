use clap::{CommandFactory, Parser};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Name of the per-user directory under `$HOME`.
pub const APP_DIR: &str = ".luxe-market";

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// LuxeMarket storefront in your terminal
#[derive(Parser, Debug, Clone)]
#[command(
    name = "luxe-market",
    about = "LuxeMarket storefront in your terminal",
    version
)]
pub struct Settings {
    /// Page shown on startup
    #[arg(long, default_value = "home", value_parser = ["home", "shop", "gallery", "blog", "services", "pricing", "contact"])]
    pub page: String,

    /// Display theme
    #[arg(long, default_value = "auto", value_parser = ["light", "dark", "auto"])]
    pub theme: String,

    /// Load the catalog from a JSON file instead of the built-in sample data
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Simulated payment processing delay in milliseconds
    #[arg(long, default_value = "2000", value_parser = clap::value_parser!(u64).range(0..=60_000))]
    pub checkout_delay_ms: u64,

    /// Simulated contact form delivery delay in milliseconds
    #[arg(long, default_value = "1500", value_parser = clap::value_parser!(u64).range(0..=60_000))]
    pub contact_delay_ms: u64,

    /// How long the contact "sent" confirmation stays visible, in milliseconds
    #[arg(long, default_value = "3000", value_parser = clap::value_parser!(u64).range(0..=60_000))]
    pub contact_reset_ms: u64,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"])]
    pub log_level: String,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Clear saved configuration
    #[arg(long)]
    pub clear: bool,
}

// ── LastUsedParams ─────────────────────────────────────────────────────────────

/// Persisted last-used parameters saved to `~/.luxe-market/last_used.json`.
///
/// Only startup preferences live here. Cart contents and runtime theme
/// toggles are never written.
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct LastUsedParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl LastUsedParams {
    /// Return the default path to the persisted config file.
    pub fn config_path() -> PathBuf {
        Self::config_path_in(&dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
    }

    /// Return the config path rooted at `base_dir` (used for testing).
    pub fn config_path_in(base_dir: &std::path::Path) -> PathBuf {
        base_dir.join(APP_DIR).join("last_used.json")
    }

    /// Load persisted params from an explicit path.
    /// Returns `Default` when the file is absent or cannot be parsed.
    pub fn load_from(path: &std::path::Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Atomically write params to an explicit path, creating parent
    /// directories if needed.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, &json)?;
        std::fs::rename(&tmp, path)?;

        Ok(())
    }

    /// Delete the config file at an explicit path if it exists.
    pub fn clear_at(path: &std::path::Path) -> Result<(), std::io::Error> {
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

// ── Settings impl ──────────────────────────────────────────────────────────────

impl Settings {
    /// Parse CLI arguments, merge with last-used params where no explicit CLI
    /// value was provided, resolve `"auto"` values, and persist the result.
    pub fn load_with_last_used() -> Self {
        Self::load_with_last_used_impl(
            std::env::args_os().collect(),
            &LastUsedParams::config_path(),
        )
    }

    /// Full implementation; accepts args and an explicit config path so that
    /// tests can redirect to a temporary directory.
    pub fn load_with_last_used_impl(
        args: Vec<std::ffi::OsString>,
        config_path: &std::path::Path,
    ) -> Self {
        let matches = Settings::command().get_matches_from(args.clone());
        let mut settings = Settings::parse_from(args);

        if settings.clear {
            if let Err(e) = LastUsedParams::clear_at(config_path) {
                tracing::warn!(error = %e, "failed to clear saved configuration");
            }
            return Self::resolve_auto_values(settings);
        }

        let last = LastUsedParams::load_from(config_path);

        // CLI always wins over persisted values.
        if !is_arg_explicitly_set(&matches, "page") {
            if let Some(v) = last.page {
                settings.page = v;
            }
        }
        if !is_arg_explicitly_set(&matches, "theme") {
            if let Some(v) = last.theme {
                settings.theme = v;
            }
        }

        // Persist before resolving so "auto" stays "auto" on disk.
        let params = LastUsedParams::from(&settings);
        if let Err(e) = params.save_to(config_path) {
            tracing::warn!(error = %e, "failed to persist last-used settings");
        }

        Self::resolve_auto_values(settings)
    }

    /// Resolve `"auto"` sentinel values and apply the `--debug` flag.
    fn resolve_auto_values(mut settings: Settings) -> Settings {
        if settings.theme == "auto" {
            settings.theme = match detect_background() {
                BackgroundType::Light => "light".to_string(),
                BackgroundType::Dark | BackgroundType::Unknown => "dark".to_string(),
            };
        }

        if settings.debug {
            settings.log_level = "DEBUG".to_string();
        }

        settings
    }

    /// Whether the session should start with the dark palette.
    pub fn starts_dark(&self) -> bool {
        self.theme != "light"
    }

    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }

    pub fn contact_delay(&self) -> Duration {
        Duration::from_millis(self.contact_delay_ms)
    }

    pub fn contact_reset(&self) -> Duration {
        Duration::from_millis(self.contact_reset_ms)
    }
}

// ── Conversion ─────────────────────────────────────────────────────────────────

impl From<&Settings> for LastUsedParams {
    fn from(s: &Settings) -> Self {
        LastUsedParams {
            page: Some(s.page.clone()),
            theme: Some(s.theme.clone()),
        }
    }
}

// ── Terminal background detection ──────────────────────────────────────────────

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
pub fn detect_background() -> BackgroundType {
    match std::env::var("COLORFGBG") {
        Ok(val) => background_from_colorfgbg(&val),
        Err(_) => BackgroundType::Unknown,
    }
}

/// Parse a `"foreground;background"` value. Background 0–6 is dark, 7–15
/// light.
fn background_from_colorfgbg(val: &str) -> BackgroundType {
    match val.split(';').next_back().and_then(|bg| bg.parse::<u8>().ok()) {
        Some(bg) if bg <= 6 => BackgroundType::Dark,
        Some(_) => BackgroundType::Light,
        None => BackgroundType::Unknown,
    }
}

/// Returns `true` when `name` was supplied explicitly on the command line
/// (not via default value or environment variable).
fn is_arg_explicitly_set(matches: &clap::ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(clap::parser::ValueSource::CommandLine)
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tmp_config_path(tmp: &TempDir) -> PathBuf {
        LastUsedParams::config_path_in(tmp.path())
    }

    #[test]
    fn test_last_used_params_save_load() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp_config_path(&tmp);
        let params = LastUsedParams {
            page: Some("shop".to_string()),
            theme: Some("dark".to_string()),
        };
        params.save_to(&path).expect("save");

        let loaded = LastUsedParams::load_from(&path);
        assert_eq!(loaded.page.as_deref(), Some("shop"));
        assert_eq!(loaded.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn test_last_used_params_default_when_missing_or_corrupt() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp_config_path(&tmp);
        assert!(LastUsedParams::load_from(&path).page.is_none());

        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        assert!(LastUsedParams::load_from(&path).theme.is_none());
    }

    #[test]
    fn test_last_used_params_clear() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp_config_path(&tmp);
        LastUsedParams::default().save_to(&path).expect("save");
        assert!(path.exists());
        LastUsedParams::clear_at(&path).expect("clear");
        assert!(!path.exists());
        LastUsedParams::clear_at(&path).expect("clearing twice is fine");
    }

    #[test]
    fn test_settings_default_values() {
        let settings = Settings::parse_from(["luxe-market"]);
        assert_eq!(settings.page, "home");
        assert_eq!(settings.theme, "auto");
        assert!(settings.catalog.is_none());
        assert_eq!(settings.checkout_delay_ms, 2_000);
        assert_eq!(settings.contact_delay_ms, 1_500);
        assert_eq!(settings.contact_reset_ms, 3_000);
        assert_eq!(settings.log_level, "INFO");
        assert!(settings.log_file.is_none());
        assert!(!settings.debug);
        assert!(!settings.clear);
        assert_eq!(settings.checkout_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_settings_rejects_unknown_page() {
        assert!(Settings::try_parse_from(["luxe-market", "--page", "admin"]).is_err());
    }

    #[test]
    fn test_settings_rejects_out_of_range_delay() {
        assert!(
            Settings::try_parse_from(["luxe-market", "--checkout-delay-ms", "600000"]).is_err()
        );
    }

    #[test]
    fn test_settings_cli_values() {
        let settings = Settings::parse_from([
            "luxe-market",
            "--page",
            "pricing",
            "--theme",
            "light",
            "--contact-delay-ms",
            "10",
            "--log-file",
            "/tmp/market.log",
        ]);
        assert_eq!(settings.page, "pricing");
        assert!(!settings.starts_dark());
        assert_eq!(settings.contact_delay(), Duration::from_millis(10));
        assert_eq!(settings.log_file, Some(PathBuf::from("/tmp/market.log")));
    }

    #[test]
    fn test_load_with_last_used_merges_persisted_page() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);
        LastUsedParams {
            page: Some("blog".to_string()),
            theme: Some("light".to_string()),
        }
        .save_to(&config_path)
        .expect("save");

        let settings = Settings::load_with_last_used_impl(vec!["luxe-market".into()], &config_path);
        assert_eq!(settings.page, "blog");
        assert_eq!(settings.theme, "light");
    }

    #[test]
    fn test_load_with_last_used_cli_overrides_persisted() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);
        LastUsedParams {
            theme: Some("light".to_string()),
            ..Default::default()
        }
        .save_to(&config_path)
        .expect("save");

        let settings = Settings::load_with_last_used_impl(
            vec!["luxe-market".into(), "--theme".into(), "dark".into()],
            &config_path,
        );
        assert_eq!(settings.theme, "dark");
        assert!(settings.starts_dark());
    }

    #[test]
    fn test_load_with_last_used_clear_removes_file() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);
        LastUsedParams::default().save_to(&config_path).expect("save");

        Settings::load_with_last_used_impl(
            vec!["luxe-market".into(), "--clear".into()],
            &config_path,
        );
        assert!(!config_path.exists());
    }

    #[test]
    fn test_load_with_last_used_debug_overrides_log_level() {
        let tmp = TempDir::new().expect("tempdir");
        let settings = Settings::load_with_last_used_impl(
            vec!["luxe-market".into(), "--debug".into()],
            &tmp_config_path(&tmp),
        );
        assert_eq!(settings.log_level, "DEBUG");
    }

    #[test]
    fn test_load_with_last_used_persists_after_run() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);

        Settings::load_with_last_used_impl(
            vec!["luxe-market".into(), "--page".into(), "contact".into()],
            &config_path,
        );

        let loaded = LastUsedParams::load_from(&config_path);
        assert_eq!(loaded.page.as_deref(), Some("contact"));
        assert_eq!(loaded.theme.as_deref(), Some("auto"));
    }

    #[test]
    fn test_load_with_last_used_does_not_remember_catalog() {
        let tmp = TempDir::new().expect("tempdir");
        let config_path = tmp_config_path(&tmp);

        let first = Settings::load_with_last_used_impl(
            vec![
                "luxe-market".into(),
                "--catalog".into(),
                "/nonexistent/bad.json".into(),
            ],
            &config_path,
        );
        assert_eq!(first.catalog, Some(PathBuf::from("/nonexistent/bad.json")));

        let saved = std::fs::read_to_string(&config_path).expect("config written");
        assert!(!saved.contains("catalog"));

        let next = Settings::load_with_last_used_impl(vec!["luxe-market".into()], &config_path);
        assert!(next.catalog.is_none());
    }

    #[test]
    fn test_load_with_last_used_resolves_auto_theme() {
        let tmp = TempDir::new().expect("tempdir");
        let settings = Settings::load_with_last_used_impl(
            vec!["luxe-market".into()],
            &tmp_config_path(&tmp),
        );
        assert!(settings.theme == "light" || settings.theme == "dark");
    }

    #[test]
    fn test_background_from_colorfgbg() {
        assert_eq!(background_from_colorfgbg("15;0"), BackgroundType::Dark);
        assert_eq!(background_from_colorfgbg("0;15"), BackgroundType::Light);
        assert_eq!(background_from_colorfgbg("0;default;7"), BackgroundType::Light);
        assert_eq!(background_from_colorfgbg("garbage"), BackgroundType::Unknown);
    }
}
