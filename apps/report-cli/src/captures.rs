//! Page captures read from disk
//!
//! Lets the PDF path run without a browser: an external tool renders the
//! printable HTML and saves one PNG per page as `page-001.png`,
//! `page-002.png`, and so on.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use report_export::{PageRegion, RasterError, RasterImage, Rasterizer};
use tracing::debug;

pub struct DirectoryRasterizer {
    dir: PathBuf,
}

impl DirectoryRasterizer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, page_number: usize) -> PathBuf {
        self.dir.join(format!("page-{:03}.png", page_number))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait(?Send)]
impl Rasterizer for DirectoryRasterizer {
    async fn capture(&self, region: &PageRegion) -> Result<RasterImage, RasterError> {
        let path = self.path_for(region.page_number);
        debug!(path = %path.display(), "Reading page capture");
        let png = tokio::fs::read(&path)
            .await
            .map_err(|e| RasterError::new(format!("{}: {}", path.display(), e)))?;
        Ok(RasterImage::from_png(png))
    }
}
