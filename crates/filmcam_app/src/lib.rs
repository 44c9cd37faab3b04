//! filmcam application state
//!
//! - [`Settings`] and the [`AppContext`] that holds them for the session
//! - [`AppConfig`], the optional `filmcam.toml` startup file
//! - [`CaptureSession`], the capture and save flow behind the camera screen
//! - [`GallerySession`], the photo grid behind the gallery tab

pub mod capture;
pub mod config;
pub mod context;
pub mod gallery;
pub mod settings;

pub use capture::{
    AssetId, Camera, CameraFacing, CaptureError, CaptureSession, MediaLibrary, MediaPermission,
    SaveStatus, Snapshotter, ZoomStep, AUTOSAVE_DELAY_MS, DEFAULT_ALBUM, ZOOM_LADDER,
};
pub use config::{AppConfig, CaptureConfig, ConfigError, OverlayConfig, SettingsConfig, CONFIG_FILE};
pub use context::{AppContext, SubscriptionId};
pub use gallery::{
    tilt_degrees, Asset, AssetPage, GalleryError, GalleryScreen, GallerySession, MAX_ASSETS,
    REFRESH_DELAY_MS,
};
pub use settings::{Settings, SettingsChange};
