//! exhibit-kiosk - Exhibit information lookup and video upload service
//!
//! This crate provides free-text exhibit lookups and video upload/playback with:
//! - A fixed in-memory exhibit catalog with case-insensitive substring matching
//! - Extension-validated upload intake with a swappable asset store backend
//! - Verbatim re-serving of uploaded assets by filename
//! - REST API with multipart upload support

pub mod api;
pub mod config;
pub mod exhibits;
pub mod intake;
pub mod store;

use config::Config;
use exhibits::ExhibitCatalog;
use intake::UploadIntake;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub exhibits: ExhibitCatalog,
    pub intake: UploadIntake,
}
