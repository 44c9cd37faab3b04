//! Capture session
//!
//! Drives the capture screen: taking a photo, keeping it pending for
//! review, and saving the styled result to the photo album. Camera
//! hardware, the media library and view snapshotting are platform
//! capabilities passed in as traits.

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

use filmcam_film::RenderedOverlay;
use thiserror::Error;
use tracing::debug;

use crate::config::CaptureConfig;
use crate::gallery::AssetPage;

/// Album saved photos are added to
pub const DEFAULT_ALBUM: &str = "RetroCam";

/// Delay between a capture and its automatic save
pub const AUTOSAVE_DELAY_MS: u64 = 320;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CameraFacing {
    #[default]
    Back,
    Front,
}

impl CameraFacing {
    pub fn toggle(self) -> Self {
        match self {
            Self::Back => Self::Front,
            Self::Front => Self::Back,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Back => "back",
            Self::Front => "front",
        }
    }
}

/// One step of the zoom button's cycle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomStep {
    pub label: &'static str,
    /// Normalized camera zoom, 0 is the widest lens
    pub value: f32,
}

pub const ZOOM_LADDER: [ZoomStep; 5] = [
    ZoomStep {
        label: "0.5x",
        value: 0.0,
    },
    ZoomStep {
        label: "0.75x",
        value: 0.1,
    },
    ZoomStep {
        label: "1x",
        value: 0.2,
    },
    ZoomStep {
        label: "2x",
        value: 0.5,
    },
    ZoomStep {
        label: "3x",
        value: 0.8,
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Error,
}

impl SaveStatus {
    /// Catalog key for the save button label
    pub fn label_key(self) -> &'static str {
        match self {
            Self::Saving => "camera.saving",
            Self::Saved => "camera.saved",
            Self::Idle | Self::Error => "camera.saveToAlbum",
        }
    }
}

impl Display for SaveStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Saving => "saving",
            Self::Saved => "saved",
            Self::Error => "error",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaPermission {
    Granted,
    Denied,
    Undetermined,
}

impl MediaPermission {
    pub fn is_granted(self) -> bool {
        self == Self::Granted
    }
}

/// Media library handle for a created asset
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssetId(pub String);

#[derive(Clone, Debug, Error, PartialEq)]
pub enum CaptureError {
    #[error("photo library permission denied")]
    PermissionDenied,

    #[error("camera capture failed: {0}")]
    CaptureFailed(String),

    #[error("snapshot failed: {0}")]
    SnapshotFailed(String),

    #[error("saving to the photo library failed: {0}")]
    SaveFailed(String),

    #[error("no photo to save")]
    NothingToSave,

    #[error("a save is already in progress")]
    AlreadySaving,
}

/// Camera hardware
pub trait Camera {
    fn take_picture(&mut self, facing: CameraFacing, zoom: f32) -> Result<PathBuf, CaptureError>;
}

/// Device photo library
pub trait MediaLibrary {
    fn permission(&self) -> MediaPermission;

    fn request_permission(&mut self) -> MediaPermission;

    fn create_asset(&mut self, file: &Path) -> Result<AssetId, CaptureError>;

    /// Add to the named album, creating it when it doesn't exist yet
    fn add_to_album(&mut self, album: &str, asset: &AssetId) -> Result<(), CaptureError>;

    /// Whether the device has a photo library at all
    fn is_available(&self) -> bool {
        true
    }

    /// Up to `limit` photos, newest first, plus the library's total count
    fn photos(&mut self, limit: usize) -> Result<AssetPage, CaptureError>;
}

/// Renders the photo with its overlay into a temporary image
pub trait Snapshotter {
    fn snapshot(&mut self, photo: &Path, overlay: &RenderedOverlay)
        -> Result<PathBuf, CaptureError>;

    /// Free a temporary image returned by [`Snapshotter::snapshot`]
    fn release(&mut self, snapshot: &Path);
}

/// State of the capture screen
#[derive(Debug)]
pub struct CaptureSession {
    facing: CameraFacing,
    zoom_index: usize,
    photo: Option<PathBuf>,
    status: SaveStatus,
    last_error: Option<CaptureError>,
    capturing: bool,
    album: String,
    autosave_delay: Duration,
}

impl Default for CaptureSession {
    fn default() -> Self {
        Self::new(DEFAULT_ALBUM)
    }
}

impl CaptureSession {
    pub fn new(album: impl Into<String>) -> Self {
        Self {
            facing: CameraFacing::default(),
            zoom_index: 0,
            photo: None,
            status: SaveStatus::Idle,
            last_error: None,
            capturing: false,
            album: album.into(),
            autosave_delay: Duration::from_millis(AUTOSAVE_DELAY_MS),
        }
    }

    /// Session using the album and autosave delay of a `[capture]` section
    pub fn from_config(config: &CaptureConfig) -> Self {
        let mut session = Self::new(config.album.clone());
        session.autosave_delay = Duration::from_millis(config.autosave_delay_ms);
        session
    }

    pub fn facing(&self) -> CameraFacing {
        self.facing
    }

    pub fn flip_camera(&mut self) -> CameraFacing {
        self.facing = self.facing.toggle();
        debug!("CaptureSession: facing -> {}", self.facing.id());
        self.facing
    }

    pub fn zoom(&self) -> ZoomStep {
        ZOOM_LADDER[self.zoom_index % ZOOM_LADDER.len()]
    }

    /// Advance to the next zoom step, wrapping after the last
    pub fn cycle_zoom(&mut self) -> ZoomStep {
        self.zoom_index = (self.zoom_index + 1) % ZOOM_LADDER.len();
        self.zoom()
    }

    pub fn photo(&self) -> Option<&Path> {
        self.photo.as_deref()
    }

    pub fn status(&self) -> SaveStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&CaptureError> {
        self.last_error.as_ref()
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    /// How long after a capture an automatic save should start
    pub fn autosave_delay(&self) -> Duration {
        self.autosave_delay
    }

    /// Mark a capture as started. Returns false when one is already running.
    pub fn begin_capture(&mut self) -> bool {
        if self.capturing {
            return false;
        }
        self.capturing = true;
        true
    }

    /// Finish a capture started with [`CaptureSession::begin_capture`]
    pub fn finish_capture(
        &mut self,
        result: Result<PathBuf, CaptureError>,
    ) -> Result<(), CaptureError> {
        self.capturing = false;
        let photo = result?;
        debug!("CaptureSession: captured {}", photo.display());
        self.photo = Some(photo);
        self.set_status(SaveStatus::Idle);
        self.last_error = None;
        Ok(())
    }

    /// Take a photo. Ignored (`Ok(false)`) while another capture runs.
    pub fn capture(&mut self, camera: &mut dyn Camera) -> Result<bool, CaptureError> {
        if !self.begin_capture() {
            return Ok(false);
        }
        let result = camera.take_picture(self.facing, self.zoom().value);
        self.finish_capture(result)?;
        Ok(true)
    }

    /// Discard the pending photo
    pub fn retake(&mut self) {
        self.photo = None;
        self.set_status(SaveStatus::Idle);
        self.last_error = None;
    }

    /// The capture screen went out of view
    pub fn deactivate(&mut self) {
        self.photo = None;
    }

    /// Whether the pending photo should be saved without asking
    pub fn should_autosave(&self, auto_save: bool) -> bool {
        self.photo.is_some() && auto_save && self.status == SaveStatus::Idle
    }

    /// Save the pending photo, with its overlay, to the album.
    ///
    /// Without a pending photo, or while a save runs, nothing changes and
    /// [`CaptureError::NothingToSave`] / [`CaptureError::AlreadySaving`] is
    /// returned. Other failures leave the status at [`SaveStatus::Error`].
    pub fn save(
        &mut self,
        overlay: &RenderedOverlay,
        library: &mut dyn MediaLibrary,
        snapshotter: &mut dyn Snapshotter,
    ) -> Result<AssetId, CaptureError> {
        let photo = self.begin_save()?;
        let result = self.save_inner(&photo, overlay, library, snapshotter);
        self.finish_save(result)
    }

    /// Mark a save as running and return the photo to save
    pub fn begin_save(&mut self) -> Result<PathBuf, CaptureError> {
        let Some(photo) = self.photo.clone() else {
            return Err(CaptureError::NothingToSave);
        };
        if self.status == SaveStatus::Saving {
            return Err(CaptureError::AlreadySaving);
        }
        self.set_status(SaveStatus::Saving);
        self.last_error = None;
        Ok(photo)
    }

    /// Finish a save started with [`CaptureSession::begin_save`]
    pub fn finish_save(
        &mut self,
        result: Result<AssetId, CaptureError>,
    ) -> Result<AssetId, CaptureError> {
        match result {
            Ok(asset) => {
                self.set_status(SaveStatus::Saved);
                Ok(asset)
            }
            Err(err) => {
                tracing::warn!("CaptureSession: save failed: {}", err);
                self.set_status(SaveStatus::Error);
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn save_inner(
        &self,
        photo: &Path,
        overlay: &RenderedOverlay,
        library: &mut dyn MediaLibrary,
        snapshotter: &mut dyn Snapshotter,
    ) -> Result<AssetId, CaptureError> {
        let mut permission = library.permission();
        if !permission.is_granted() {
            permission = library.request_permission();
        }
        if !permission.is_granted() {
            return Err(CaptureError::PermissionDenied);
        }

        let shot = snapshotter.snapshot(photo, overlay)?;
        let result = library
            .create_asset(&shot)
            .and_then(|asset| library.add_to_album(&self.album, &asset).map(|()| asset));
        snapshotter.release(&shot);
        result
    }

    fn set_status(&mut self, status: SaveStatus) {
        if self.status != status {
            debug!("CaptureSession: save status {} -> {}", self.status, status);
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zoom_cycles_through_ladder() {
        let mut s = CaptureSession::default();
        assert_eq!(s.zoom().label, "0.5x");
        let labels: Vec<&str> = (0..5).map(|_| s.cycle_zoom().label).collect();
        assert_eq!(labels, vec!["0.75x", "1x", "2x", "3x", "0.5x"]);
    }

    #[test]
    fn facing_toggles() {
        let mut s = CaptureSession::default();
        assert_eq!(s.flip_camera(), CameraFacing::Front);
        assert_eq!(s.flip_camera(), CameraFacing::Back);
    }

    #[test]
    fn capture_is_not_reentrant() {
        let mut s = CaptureSession::default();
        assert!(s.begin_capture());
        assert!(!s.begin_capture());
        s.finish_capture(Ok(PathBuf::from("a.jpg"))).unwrap();
        assert!(!s.is_capturing());
        assert_eq!(s.photo(), Some(Path::new("a.jpg")));
    }

    #[test]
    fn failed_capture_clears_flag() {
        let mut s = CaptureSession::default();
        s.begin_capture();
        let err = s
            .finish_capture(Err(CaptureError::CaptureFailed("busy".into())))
            .unwrap_err();
        assert_eq!(err, CaptureError::CaptureFailed("busy".into()));
        assert!(!s.is_capturing());
        assert_eq!(s.photo(), None);
    }

    #[test]
    fn config_sets_album_and_delay() {
        let s = CaptureSession::default();
        assert_eq!(s.album(), DEFAULT_ALBUM);
        assert_eq!(s.autosave_delay(), Duration::from_millis(320));

        let s = CaptureSession::from_config(&CaptureConfig {
            album: "Holiday".into(),
            autosave_delay_ms: 1_500,
        });
        assert_eq!(s.album(), "Holiday");
        assert_eq!(s.autosave_delay(), Duration::from_millis(1_500));
    }

    #[test]
    fn status_labels() {
        assert_eq!(SaveStatus::Saving.label_key(), "camera.saving");
        assert_eq!(SaveStatus::Error.label_key(), "camera.saveToAlbum");
    }
}
