//! Shared, read-only application state.
//!
//! Built once in `main` and handed to every actix worker as `web::Data`. There
//! is no per-session state on the server: the prediction history lives in the
//! browser.

use std::path::Path;
use std::sync::Arc;

use common::requests::ModelInfo;
use log::{error, info};

use crate::predictor::{ArtifactModel, PricePredictor, UnavailablePredictor};

#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<dyn PricePredictor>,
    pub model_info: ModelInfo,
}

impl AppState {
    pub fn new(predictor: Arc<dyn PricePredictor>, model_info: ModelInfo) -> Self {
        Self {
            predictor,
            model_info,
        }
    }

    /// Loads the model artifact at `path`.
    ///
    /// A missing or invalid artifact does not stop the server; predictions then
    /// fail with the load error until the process is restarted with a good file.
    pub fn load(path: &Path) -> Self {
        let display_path = path.display().to_string();
        match ArtifactModel::load(path) {
            Ok(loaded) => {
                info!("Model loaded from {} (md5 {})", display_path, loaded.md5);
                Self::new(
                    Arc::new(loaded.model),
                    ModelInfo {
                        path: display_path,
                        md5: Some(loaded.md5),
                        loaded: true,
                        error: None,
                    },
                )
            }
            Err(e) => {
                error!("{}", e);
                Self::new(
                    Arc::new(UnavailablePredictor::new(e.clone())),
                    ModelInfo {
                        path: display_path,
                        md5: None,
                        loaded: false,
                        error: Some(e),
                    },
                )
            }
        }
    }
}
