//! Subcommand implementations. Each returns the text to print.

use std::path::Path;

use anyhow::{bail, Context, Result};
use filmcam_app::AppConfig;
use filmcam_film::{style_config_for, CameraStyle, FilmOverlay};
use filmcam_i18n::{negotiate_locale, SupportedLocale};
use filmcam_theme::{is_dark, resolve_palette, ThemeColorToken, ThemeMode};

fn parse_style(id: &str) -> Result<CameraStyle> {
    match CameraStyle::from_id(id) {
        Some(style) => Ok(style),
        None => {
            let known: Vec<&str> = CameraStyle::all().iter().map(|s| s.id()).collect();
            bail!("unknown camera style `{}` (expected one of: {})", id, known.join(", "))
        }
    }
}

fn parse_mode(id: &str) -> Result<ThemeMode> {
    match ThemeMode::from_id(id) {
        Some(mode) => Ok(mode),
        None => {
            let known: Vec<&str> = ThemeMode::all().iter().map(|m| m.id()).collect();
            bail!("unknown theme mode `{}` (expected one of: {})", id, known.join(", "))
        }
    }
}

pub fn palette(mode: &str, system_dark: bool, accent: &str, json: bool) -> Result<String> {
    let mode = parse_mode(mode)?;
    let colors = resolve_palette(mode, system_dark, accent);

    if json {
        return serde_json::to_string_pretty(&colors).context("Failed to serialize palette");
    }

    let scheme = if is_dark(mode, system_dark) { "dark" } else { "light" };
    let mut out = format!("# {} palette ({} mode)\n", scheme, mode.id());
    for &token in ThemeColorToken::all() {
        out.push_str(&format!("{:<20} {}\n", token.css_name(), colors.get(token).to_css()));
    }
    for (i, color) in colors.background_gradient.iter().enumerate() {
        out.push_str(&format!("{:<20} {}\n", format!("background-gradient-{i}"), color.to_css()));
    }
    Ok(out.trim_end().to_string())
}

pub fn style(id: &str, dark: bool, intensity: f32) -> Result<String> {
    let config = style_config_for(parse_style(id)?, dark, intensity);
    serde_json::to_string_pretty(&config).context("Failed to serialize style config")
}

pub fn overlay(
    id: &str,
    grain_enabled: bool,
    dark: bool,
    intensity: f32,
    seed: Option<u64>,
) -> Result<String> {
    let style = parse_style(id)?;
    let mut mount = match seed {
        Some(seed) => FilmOverlay::seeded(seed),
        None => FilmOverlay::new(),
    };
    let rendered = mount.render(style, grain_enabled, intensity, dark);
    serde_json::to_string_pretty(&rendered).context("Failed to serialize overlay")
}

pub fn locales(device: Option<&str>) -> String {
    let mut out = String::new();
    for locale in SupportedLocale::all() {
        out.push_str(&format!("{:<6} {}\n", locale.code(), locale.native_name()));
    }
    if let Some(device) = device {
        out.push_str(&format!("{} -> {}\n", device, negotiate_locale(device)));
    }
    out.trim_end().to_string()
}

pub fn config(dir: &Path) -> Result<String> {
    let config = AppConfig::load_from_dir(dir)
        .with_context(|| format!("Failed to load config from {}", dir.display()))?;
    Ok(config.to_toml()?)
}
