//! Render numeric tables as HTML heatmaps.
//!
//! Values are placed on a two-color scale, from a light blue to a soft red, and every
//! cell of the resulting HTML table gets that color as its background.
//!
//! ```
//! use table_heatmap::{render_heatmap, Table};
//! let table = Table::new(vec!["x".into()], vec![vec![0.0], vec![1.0]]).unwrap();
//! let html = render_heatmap(&table, "minmax", false).unwrap().to_html();
//! assert!(html.contains("background-color: rgb(179, 235, 242)"));
//! ```

use anyhow::{Context, Result};
use log::*;
use std::path::{Path, PathBuf};
mod error;
pub mod heatmap;
pub mod palettes;
pub mod styler;
pub mod table;

pub use error::Error;
pub use heatmap::{heatmap_table, render_heatmap, COOL_GRAY_HEX};
pub use palettes::{minmax_color_scale, normalize_value, normalized_color_scale, ColorScaler, Scaler};
pub use styler::Styler;
pub use table::{open_file, Summary, Table};

/// Settings for turning one CSV file into an HTML heatmap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub scaler: Scaler,
    pub reverse: bool,
    /// First CSV column holds row labels
    pub has_index: bool,
    pub precision: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            scaler: Scaler::default(),
            reverse: false,
            has_index: false,
            precision: 6,
        }
    }
}

/// Where the heatmap for `path` is written: same directory, `.html` instead of
/// `.csv` or `.csv.gz`.
pub fn output_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let path = match path.extension() {
        Some(ext) if ext == "gz" => path.with_extension(""),
        _ => path.to_path_buf(),
    };
    path.with_extension("html")
}

pub fn render_file<P: AsRef<Path>>(path: P, config: &RenderConfig) -> Result<String> {
    let path = path.as_ref();
    let table = Table::from_path(path, config.has_index)
        .with_context(|| format!("Could not read table from {}", path.display()))?;
    let (rows, columns) = table.shape();
    info!("Loaded {} rows, {} columns", rows, columns);
    if table.is_empty() {
        warn!("{} has no values, the heatmap will be empty", path.display());
    }
    let title = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(heatmap_table(&table, config.scaler, config.reverse)
        .precision(config.precision)
        .to_document(&title))
}

/// Render the CSV file at `path` and save it next to it. Returns the written path.
pub fn run<P: AsRef<Path>>(path: P, config: &RenderConfig) -> Result<PathBuf> {
    let path = path.as_ref();
    info!("Loading: {}", path.display());
    let html = render_file(path, config)?;
    let dest = output_path(path);
    info!("Saving {}", dest.display());
    std::fs::write(&dest, html).with_context(|| format!("Could not write {}", dest.display()))?;
    Ok(dest)
}
