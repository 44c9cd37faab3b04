//! Application settings holder
//!
//! One [`AppContext`] is built at startup and passed by reference to every
//! screen. Reads are plain getters; each setter replaces one field, marks
//! the context dirty and tells subscribers what changed.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use filmcam_film::{
    clamp_density, compose_overlay, CameraStyle, FilmOverlay, OverlayLayer, RenderedOverlay,
};
use filmcam_i18n::Localizer;
use filmcam_theme::{is_dark, resolve_palette, ColorSchemeSource, ThemeColors, ThemeMode};
use rand::Rng;
use tracing::debug;

use crate::config::{AppConfig, OverlayConfig};
use crate::settings::{Settings, SettingsChange};

type Subscriber = Box<dyn FnMut(&SettingsChange)>;

/// Handle returned by [`AppContext::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct AppContext {
    settings: Settings,
    overlay: OverlayConfig,
    localizer: Arc<dyn Localizer>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    dirty: bool,
}

impl AppContext {
    /// Build the context and switch the localizer to the settings' language
    pub fn new(settings: Settings, localizer: Arc<dyn Localizer>) -> Self {
        localizer.set_locale(&settings.language);
        Self {
            settings,
            overlay: OverlayConfig::default(),
            localizer,
            subscribers: Vec::new(),
            next_subscription: 0,
            dirty: false,
        }
    }

    /// Build from a config file's startup values
    pub fn from_config(
        config: &AppConfig,
        device_locale: &str,
        localizer: Arc<dyn Localizer>,
    ) -> Self {
        let mut ctx = Self::new(config.initial_settings(device_locale), localizer);
        ctx.overlay = config.overlay.clone();
        ctx.overlay.grain_density = clamp_density(ctx.overlay.grain_density);
        ctx
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn overlay_config(&self) -> &OverlayConfig {
        &self.overlay
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.settings.theme_mode
    }

    pub fn accent_id(&self) -> &str {
        &self.settings.accent_id
    }

    pub fn auto_save(&self) -> bool {
        self.settings.auto_save
    }

    pub fn grain_enabled(&self) -> bool {
        self.settings.grain_enabled
    }

    pub fn camera_style(&self) -> CameraStyle {
        self.settings.camera_style
    }

    pub fn user_avatar(&self) -> Option<&Path> {
        self.settings.user_avatar.as_deref()
    }

    pub fn language(&self) -> &str {
        &self.settings.language
    }

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.update(SettingsChange::ThemeMode(mode));
    }

    /// Store an accent id. Unknown ids are kept; the palette falls back.
    pub fn set_accent_id(&mut self, id: impl Into<String>) {
        self.update(SettingsChange::AccentId(id.into()));
    }

    pub fn set_auto_save(&mut self, enabled: bool) {
        self.update(SettingsChange::AutoSave(enabled));
    }

    pub fn set_grain_enabled(&mut self, enabled: bool) {
        self.update(SettingsChange::GrainEnabled(enabled));
    }

    pub fn set_camera_style(&mut self, style: CameraStyle) {
        self.update(SettingsChange::CameraStyle(style));
    }

    pub fn set_user_avatar(&mut self, avatar: Option<PathBuf>) {
        self.update(SettingsChange::UserAvatar(avatar));
    }

    /// Store the language and switch the localizer to it.
    ///
    /// The localizer is shared, so it is switched even when the stored
    /// language is unchanged.
    pub fn set_language(&mut self, code: impl Into<String>) {
        self.update(SettingsChange::Language(code.into()));
        self.localizer.set_locale(&self.settings.language);
    }

    fn update(&mut self, change: SettingsChange) -> bool {
        if !change.apply(&mut self.settings) {
            return false;
        }
        debug!("AppContext: {} -> {:?}", change.field(), change);
        self.dirty = true;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&change);
        }
        true
    }

    /// Call `f` after every settings change
    pub fn subscribe(&mut self, f: impl FnMut(&SettingsChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Whether anything changed since the last [`AppContext::take_dirty`]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and clear the dirty flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn localizer(&self) -> &dyn Localizer {
        self.localizer.as_ref()
    }

    pub fn is_dark(&self, system_is_dark: bool) -> bool {
        is_dark(self.settings.theme_mode, system_is_dark)
    }

    /// Palette for the current settings and device scheme
    pub fn palette(&self, system_is_dark: bool) -> ThemeColors {
        resolve_palette(
            self.settings.theme_mode,
            system_is_dark,
            &self.settings.accent_id,
        )
    }

    /// Palette with the device scheme read from `source`
    pub fn palette_from(&self, source: &dyn ColorSchemeSource) -> ThemeColors {
        self.palette(source.system_scheme().is_dark())
    }

    /// Overlay layers for the selected style, bottom to top
    pub fn overlay_layers(&self, system_is_dark: bool) -> Vec<OverlayLayer> {
        let mut layers = compose_overlay(
            self.settings.camera_style,
            self.settings.grain_enabled,
            self.overlay.base_intensity,
            self.is_dark(system_is_dark),
        );
        for layer in &mut layers {
            if let OverlayLayer::Grain { spec } = layer {
                *spec = spec.with_density(self.overlay.grain_density);
            }
        }
        layers
    }

    /// Overlay with grain drawn from a mounted overlay's cache
    pub fn render_overlay<R: Rng>(
        &self,
        overlay: &mut FilmOverlay<R>,
        system_is_dark: bool,
    ) -> RenderedOverlay {
        overlay.render_layers(self.settings.camera_style, self.overlay_layers(system_is_dark))
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("settings", &self.settings)
            .field("overlay", &self.overlay)
            .field("subscribers", &self.subscribers.len())
            .field("dirty", &self.dirty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filmcam_film::MAX_DENSITY;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLocalizer {
        calls: Mutex<Vec<String>>,
    }

    impl Localizer for RecordingLocalizer {
        fn set_locale(&self, code: &str) {
            self.calls.lock().unwrap().push(code.to_string());
        }

        fn current_locale(&self) -> String {
            self.calls.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    #[test]
    fn setters_notify_and_mark_dirty() {
        let mut ctx = AppContext::new(Settings::default(), Arc::new(RecordingLocalizer::default()));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        ctx.subscribe(move |c| sink.borrow_mut().push(c.field()));

        ctx.set_accent_id("pink");
        ctx.set_camera_style(CameraStyle::Leica);
        ctx.set_camera_style(CameraStyle::Leica);

        assert_eq!(*seen.borrow(), vec!["accent_id", "camera_style"]);
        assert!(ctx.take_dirty());
        assert!(!ctx.is_dirty());
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut ctx = AppContext::new(Settings::default(), Arc::new(RecordingLocalizer::default()));
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        let id = ctx.subscribe(move |_| *c.borrow_mut() += 1);
        ctx.set_auto_save(true);
        assert!(ctx.unsubscribe(id));
        assert!(!ctx.unsubscribe(id));
        ctx.set_auto_save(false);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn language_goes_through_localizer() {
        let loc = Arc::new(RecordingLocalizer::default());
        let mut ctx = AppContext::new(Settings::default(), loc.clone());
        ctx.set_language("ja");
        assert_eq!(ctx.language(), "ja");
        assert_eq!(*loc.calls.lock().unwrap(), vec!["en", "ja"]);
    }

    #[test]
    fn reselecting_language_resyncs_shared_localizer() {
        let loc = Arc::new(RecordingLocalizer::default());
        let mut ctx = AppContext::new(Settings::default(), loc.clone());
        let changes = Rc::new(RefCell::new(0));
        let c = changes.clone();
        ctx.subscribe(move |_| *c.borrow_mut() += 1);

        loc.set_locale("ko");
        ctx.set_language("en");
        assert_eq!(loc.current_locale(), "en");
        assert_eq!(*changes.borrow(), 0);
        assert!(!ctx.is_dirty());
    }

    #[test]
    fn oversized_grain_density_is_clamped() {
        let cfg: AppConfig =
            toml::from_str("[overlay]\ngrain_density = 9223372036854775807\n").unwrap();
        let ctx = AppContext::from_config(&cfg, "en", Arc::new(RecordingLocalizer::default()));
        assert_eq!(ctx.overlay_config().grain_density, MAX_DENSITY);

        let rendered = ctx.render_overlay(&mut FilmOverlay::seeded(1), false);
        assert_eq!(rendered.grain.map(|g| g.dots.len()), Some(MAX_DENSITY));
    }

    #[test]
    fn grain_density_comes_from_config() {
        let mut cfg = AppConfig::default();
        cfg.overlay.grain_density = 12;
        let ctx = AppContext::from_config(&cfg, "en", Arc::new(RecordingLocalizer::default()));
        let density = ctx.overlay_layers(false).iter().find_map(|l| match l {
            OverlayLayer::Grain { spec } => Some(spec.density),
            _ => None,
        });
        assert_eq!(density, Some(12));

        let mut mount = FilmOverlay::seeded(3);
        let rendered = ctx.render_overlay(&mut mount, false);
        assert_eq!(rendered.grain.map(|g| g.dots.len()), Some(12));
    }
}
