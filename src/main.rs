#![allow(non_snake_case)]

mod app;
mod components;
mod content;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use phoenix_core::{SiteConfig, ThemeMode};
use tracing_subscriber::EnvFilter;

/// Settings resolved from the command line before launch.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub site: SiteConfig,
}

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Settings for this run (defaults if launched without `main`, e.g. in tests).
pub fn settings() -> Settings {
    SETTINGS.get().cloned().unwrap_or_else(|| Settings {
        data_dir: default_data_dir(),
        site: SiteConfig::default(),
    })
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("phoenix-site")
}

/// Phoenix Events & Productions - event planning site
#[derive(Parser, Debug)]
#[command(name = "phoenix-site")]
#[command(about = "Phoenix Events & Productions - desktop site")]
struct Args {
    /// Directory for saved preferences
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// WhatsApp number all enquiries are sent to
    #[arg(short, long)]
    whatsapp_phone: Option<String>,

    /// Theme used until the visitor picks one (light or dark)
    #[arg(short, long, value_parser = parse_theme)]
    theme: Option<ThemeMode>,
}

fn parse_theme(value: &str) -> Result<ThemeMode, String> {
    ThemeMode::parse(value).ok_or_else(|| format!("unknown theme '{}', expected light or dark", value))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let mut site = SiteConfig::default();
    if let Some(phone) = args.whatsapp_phone {
        // Validate early so a typo fails at launch, not on the first enquiry.
        phoenix_core::whatsapp_link(&phone, "")
            .with_context(|| format!("invalid --whatsapp-phone '{}'", phone))?;
        site = site.with_whatsapp_phone(phone);
    }
    if let Some(theme) = args.theme {
        site = site.with_default_theme(theme);
    }

    tracing::info!("Starting Phoenix Events with data dir: {:?}", data_dir);

    let _ = SETTINGS.set(Settings { data_dir, site });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Phoenix Events & Productions")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_flag_parses_both_modes() {
        assert_eq!(parse_theme("dark"), Ok(ThemeMode::Dark));
        assert_eq!(parse_theme("light"), Ok(ThemeMode::Light));
        assert!(parse_theme("sepia").is_err());
    }

    #[test]
    fn args_accept_overrides() {
        let args = Args::parse_from([
            "phoenix-site",
            "--data-dir",
            "/tmp/phoenix",
            "--whatsapp-phone",
            "+91 70667 63276",
            "--theme",
            "dark",
        ]);
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/phoenix")));
        assert_eq!(args.whatsapp_phone.as_deref(), Some("+91 70667 63276"));
        assert_eq!(args.theme, Some(ThemeMode::Dark));
    }
}
