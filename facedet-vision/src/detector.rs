use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use image::DynamicImage;
use log::warn;
use rustface::ImageData;
use thiserror::Error;

use crate::region::Region;

/// Minimum size of the sliding detection window, in pixels.
pub const MIN_WINDOW_SIZE: u32 = 20;
/// Cascade score below which candidate windows are discarded.
pub const SCORE_THRESHOLD: f64 = 2.0;
/// Shrink factor between image pyramid levels.
pub const PYRAMID_SCALE_FACTOR: f32 = 0.8;
/// Step of the sliding window, in pixels (x, y).
pub const SLIDE_WINDOW_STEP: (u32, u32) = (4, 4);

#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("cascade model not found: {0}")]
    ModelNotFound(String),
    #[error("failed to load cascade model {path}: {reason}")]
    ModelLoad { path: String, reason: String },
}

/// Cascade detector wrapping the SeetaFace engine.
///
/// Owns the loaded cascade model and the engine's internal scratch buffers,
/// which are reused across `detect` calls and released on drop.
pub struct Detector {
    inner: Box<dyn rustface::Detector>,
}

impl std::fmt::Debug for Detector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Detector").finish_non_exhaustive()
    }
}

impl Detector {
    /// Load a cascade model from disk and configure the detection parameters.
    pub fn open(model_path: &Path) -> Result<Self, DetectorError> {
        if !model_path.exists() {
            return Err(DetectorError::ModelNotFound(
                model_path.display().to_string(),
            ));
        }

        let load_err = |reason: String| DetectorError::ModelLoad {
            path: model_path.display().to_string(),
            reason,
        };

        let file = File::open(model_path).map_err(|e| load_err(e.to_string()))?;
        let model =
            rustface::read_model(BufReader::new(file)).map_err(|e| load_err(e.to_string()))?;

        let mut inner = rustface::create_detector_with_model(model);
        inner.set_min_face_size(MIN_WINDOW_SIZE);
        inner.set_score_thresh(SCORE_THRESHOLD);
        inner.set_pyramid_scale_factor(PYRAMID_SCALE_FACTOR);
        inner.set_slide_window_step(SLIDE_WINDOW_STEP.0, SLIDE_WINDOW_STEP.1);

        Ok(Self { inner })
    }

    /// Run the cascade over one image and return the detected regions.
    ///
    /// Regions are clamped to the image bounds; boxes left empty by the
    /// clamp are dropped with a warning.
    pub fn detect(&mut self, img: &DynamicImage) -> Vec<Region> {
        let gray = img.to_luma8();
        let (width, height) = gray.dimensions();

        let faces = self
            .inner
            .detect(&ImageData::new(gray.as_raw(), width, height));

        faces
            .iter()
            .filter_map(|face| {
                let bbox = face.bbox();
                let raw = Region {
                    x: bbox.x(),
                    y: bbox.y(),
                    width: bbox.width(),
                    height: bbox.height(),
                    score: face.score(),
                };
                let clamped = raw.clamp_to(width, height);
                if clamped.is_none() {
                    warn!("dropping degenerate detection at ({}, {})", raw.x, raw.y);
                }
                clamped
            })
            .collect()
    }
}
