//! Gallery session
//!
//! State behind the gallery tab: the photo library permission gate, the
//! newest-first page of photos, load errors and the photo open in preview.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::capture::{AssetId, MediaLibrary, MediaPermission};

/// Most photos loaded into the gallery at once
pub const MAX_ASSETS: usize = 100;

/// Delay of the second load after the tab becomes active. Photos saved a
/// moment ago may not be indexed on the first one.
pub const REFRESH_DELAY_MS: u64 = 1_000;

/// One photo in the library
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Asset {
    pub id: AssetId,
    pub uri: PathBuf,
    /// Creation time, milliseconds since the Unix epoch
    pub created_at_ms: i64,
}

/// A page of photos from [`MediaLibrary::photos`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetPage {
    pub assets: Vec<Asset>,
    /// Photos in the library, including those past the page
    pub total_count: usize,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GalleryError {
    #[error("photo library not available on this device")]
    NotSupported,

    #[error("failed to load photos: {0}")]
    LoadFailed(String),
}

impl GalleryError {
    /// Catalog key for the message shown in place of the grid
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::NotSupported => "space.notSupported",
            Self::LoadFailed(_) => "space.loadFailed",
        }
    }
}

/// What the gallery tab shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryScreen {
    /// Permission not known yet
    Preparing,
    /// Permission missing; show the grant prompt
    NeedsPermission,
    /// First load running with nothing to show
    Loading,
    /// No photos, or the last load failed
    Empty,
    Grid,
}

impl GalleryScreen {
    /// Catalog key of the screen's main message, if it has one
    pub fn message_key(self) -> Option<&'static str> {
        match self {
            Self::Preparing => Some("space.preparing"),
            Self::NeedsPermission => Some("space.permissionTitle"),
            Self::Empty => Some("space.empty"),
            Self::Loading | Self::Grid => None,
        }
    }
}

/// Card rotation for the photo at `index` in the grid, in degrees
pub fn tilt_degrees(index: usize) -> f32 {
    let base = if index % 3 == 0 {
        2.0
    } else if index % 2 == 0 {
        -2.0
    } else {
        1.0
    };
    if index % 5 == 0 {
        base * 1.5
    } else {
        base
    }
}

#[derive(Debug, Default)]
pub struct GallerySession {
    permission: Option<MediaPermission>,
    assets: Vec<Asset>,
    total_count: usize,
    loading: bool,
    load_error: Option<GalleryError>,
    selected: Option<usize>,
}

impl GallerySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn permission(&self) -> Option<MediaPermission> {
        self.permission
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Photo count for the header, which may exceed the loaded page
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&GalleryError> {
        self.load_error.as_ref()
    }

    pub fn screen(&self) -> GalleryScreen {
        match self.permission {
            None => GalleryScreen::Preparing,
            Some(p) if !p.is_granted() => GalleryScreen::NeedsPermission,
            Some(_) if !self.assets.is_empty() => GalleryScreen::Grid,
            Some(_) if self.loading => GalleryScreen::Loading,
            Some(_) => GalleryScreen::Empty,
        }
    }

    /// Catalog key for the empty grid: the load error, or `space.empty`
    pub fn empty_message_key(&self) -> &'static str {
        self.load_error
            .as_ref()
            .map_or("space.empty", GalleryError::message_key)
    }

    /// Read the current permission without prompting
    pub fn check_permission(&mut self, library: &dyn MediaLibrary) -> MediaPermission {
        let permission = library.permission();
        self.permission = Some(permission);
        permission
    }

    /// Prompt for access, then load when it was granted
    pub fn request_permission(
        &mut self,
        library: &mut dyn MediaLibrary,
    ) -> Result<bool, GalleryError> {
        let permission = library.request_permission();
        debug!("GallerySession: permission -> {:?}", permission);
        self.permission = Some(permission);
        self.load(library)
    }

    /// The tab came into view: refresh the permission and load.
    ///
    /// Callers should call [`GallerySession::load`] again after
    /// [`GallerySession::refresh_delay`].
    pub fn activate(&mut self, library: &mut dyn MediaLibrary) -> Result<bool, GalleryError> {
        self.check_permission(library);
        self.load(library)
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(REFRESH_DELAY_MS)
    }

    /// Load the newest photos. Returns `Ok(false)` without touching the
    /// library while permission is missing.
    ///
    /// On failure the previously loaded photos stay and the error is kept
    /// for [`GallerySession::empty_message_key`].
    pub fn load(&mut self, library: &mut dyn MediaLibrary) -> Result<bool, GalleryError> {
        if !self.permission.is_some_and(MediaPermission::is_granted) {
            return Ok(false);
        }
        self.loading = true;
        self.load_error = None;
        let result = Self::fetch(library);
        self.loading = false;

        match result {
            Ok(mut page) => {
                page.assets.sort_by(|a, b| b.created_at_ms.cmp(&a.created_at_ms));
                page.assets.truncate(MAX_ASSETS);
                debug!(
                    "GallerySession: loaded {} of {} photos",
                    page.assets.len(),
                    page.total_count
                );
                self.total_count = page.total_count.max(page.assets.len());
                self.assets = page.assets;
                self.selected = self.selected.filter(|&i| i < self.assets.len());
                Ok(true)
            }
            Err(err) => {
                warn!("GallerySession: {}", err);
                self.load_error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn fetch(library: &mut dyn MediaLibrary) -> Result<AssetPage, GalleryError> {
        if !library.is_available() {
            return Err(GalleryError::NotSupported);
        }
        library
            .photos(MAX_ASSETS)
            .map_err(|err| GalleryError::LoadFailed(err.to_string()))
    }

    /// Open the photo at `index` in the preview
    pub fn select(&mut self, index: usize) -> Option<&Asset> {
        let asset = self.assets.get(index)?;
        self.selected = Some(index);
        Some(asset)
    }

    pub fn selected(&self) -> Option<&Asset> {
        self.selected.and_then(|i| self.assets.get(i))
    }

    pub fn close_preview(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tilt_pattern() {
        let tilts: Vec<f32> = (0..7).map(tilt_degrees).collect();
        assert_eq!(tilts, vec![3.0, 1.0, -2.0, 2.0, -2.0, 1.5, 2.0]);
        assert_eq!(tilt_degrees(10), -3.0);
        assert_eq!(tilt_degrees(15), 3.0);
    }

    #[test]
    fn screen_before_permission_is_known() {
        let g = GallerySession::new();
        assert_eq!(g.screen(), GalleryScreen::Preparing);
        assert_eq!(g.screen().message_key(), Some("space.preparing"));
        assert_eq!(g.empty_message_key(), "space.empty");
    }

    #[test]
    fn error_keys() {
        assert_eq!(GalleryError::NotSupported.message_key(), "space.notSupported");
        assert_eq!(
            GalleryError::LoadFailed("io".into()).message_key(),
            "space.loadFailed"
        );
    }
}
