//! Palette resolution

use crate::accent::Accent;
use crate::palettes;
use crate::theme::{ColorScheme, ThemeMode};
use crate::tokens::ThemeColors;

/// Whether the dark palette is in effect
pub fn is_dark(mode: ThemeMode, system_is_dark: bool) -> bool {
    mode.effective_scheme(ColorScheme::from_is_dark(system_is_dark))
        .is_dark()
}

/// Resolve the active palette.
///
/// Picks the light or dark base palette from the effective scheme and
/// overrides `accent`/`accent_soft` with the preset named by `accent_id`.
/// Unknown ids use the first preset. Nothing is cached; call again whenever
/// an input changes.
pub fn resolve_palette(mode: ThemeMode, system_is_dark: bool, accent_id: &str) -> ThemeColors {
    let scheme = ColorScheme::from_is_dark(is_dark(mode, system_is_dark));
    let accent = Accent::resolve(accent_id);

    tracing::trace!(
        "resolve_palette: mode={:?} system_is_dark={} -> {:?}, accent={}",
        mode,
        system_is_dark,
        scheme,
        accent
    );

    ThemeColors {
        accent: accent.color(),
        accent_soft: accent.soft_color(),
        ..palettes::for_scheme(scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_darkness_table() {
        assert!(is_dark(ThemeMode::System, true));
        assert!(!is_dark(ThemeMode::System, false));
        assert!(is_dark(ThemeMode::Dark, false));
        assert!(!is_dark(ThemeMode::Light, true));
    }
}
