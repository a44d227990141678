//! Shared handler state.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use trackside_core::import::IMPORT_FILE_NAME;
use trackside_core::upload::TRACK_UPLOAD_SUBDIR;
use trackside_db::DbPool;

use crate::auth::jwt::JwtConfig;
use crate::config::ServerConfig;

/// Available to every handler via `State<AppState>`. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(pool: DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }

    /// Token signing settings.
    pub fn jwt(&self) -> &JwtConfig {
        &self.config.jwt
    }

    /// Root of the uploaded-file tree served under `/uploads`.
    pub fn upload_root(&self) -> &Path {
        &self.config.upload_dir
    }

    /// Directory new track images are written to.
    pub fn track_upload_dir(&self) -> PathBuf {
        self.config.upload_dir.join(TRACK_UPLOAD_SUBDIR)
    }

    /// Location of the bulk track import file.
    pub fn import_file_path(&self) -> PathBuf {
        self.config.data_dir.join(IMPORT_FILE_NAME)
    }
}
