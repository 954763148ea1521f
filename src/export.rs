//! Raster snapshot export.
//!
//! Encodes the live surface as PNG, optionally framed by the configured border,
//! and saves it under a timestamped filename.

use crate::config::BorderStyle;
use crate::draw::Surface;
use crate::error::DrawError;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for snapshot saving.
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    /// Directory to save snapshots to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    /// Image format extension.
    pub format: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            save_directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("~"))
                .join("Scratchpad"),
            filename_template: "drawing_%Y-%m-%d_%H%M%S".to_string(),
            format: "png".to_string(),
        }
    }
}

/// Generate a filename based on the template and current time.
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the save directory exists, creating it if necessary.
///
/// Returns the canonicalized path to the directory.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, DrawError> {
    if !directory.exists() {
        log::info!("Creating snapshot directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Encodes `surface` as PNG, drawing `border` as an outline around it.
///
/// The outline sits outside the drawing area, so the image grows by twice the
/// border width in each dimension.
pub fn snapshot_png(surface: &Surface, border: Option<&BorderStyle>) -> Result<Vec<u8>, DrawError> {
    let Some(border) = border.filter(|b| b.width > 0.0) else {
        return surface.to_png_bytes();
    };

    let inset = border.width.ceil() as i32;
    let framed = Surface::with_background(
        surface.width() + inset * 2,
        surface.height() + inset * 2,
        border.color,
        None,
    )?;

    let ctx = framed.context()?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_surface(surface.image(), inset as f64, inset as f64)?;
    ctx.rectangle(
        inset as f64,
        inset as f64,
        surface.width() as f64,
        surface.height() as f64,
    );
    ctx.fill()?;
    drop(ctx);

    framed.to_png_bytes()
}

/// Save image data to a file.
///
/// Returns the path of the saved file.
pub fn save_snapshot(image_data: &[u8], config: &SnapshotConfig) -> Result<PathBuf, DrawError> {
    let directory = ensure_directory_exists(&config.save_directory)?;

    let filename = generate_filename(&config.filename_template, &config.format);
    let file_path = directory.join(&filename);

    log::info!(
        "Saving snapshot to: {} ({} bytes)",
        file_path.display(),
        image_data.len()
    );

    fs::write(&file_path, image_data)?;

    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    // Set permissions to user read/write only
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&file_path, Permissions::from_mode(0o600))?;
    }

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
