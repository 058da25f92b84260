//! Document export seam.
//!
//! Turning a rendered chart into a PDF or image is delegated to an injected
//! capability rather than a bundled rendering stack. Whatever goes wrong
//! inside that capability surfaces as a single `ExportFailed` signal.

use crate::error::{AnalyzerError, Result};

/// Knobs forwarded to the rendering capability.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Raster scale factor; 2.0 doubles the output resolution.
    pub scale: f64,
    /// Background color painted behind the surface.
    pub background: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            background: "#ffffff".to_string(),
        }
    }
}

/// Converts a renderable surface (an SVG document) into an encoded byte
/// buffer. Implemented outside this crate by whatever rendering pipeline the
/// host application ships.
pub trait SurfaceRenderer {
    fn render_surface(
        &self,
        surface: &str,
        options: &ExportOptions,
    ) -> std::result::Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Drives the injected capability and collapses its failure modes into
/// [`AnalyzerError::ExportFailed`].
pub fn export_surface<R: SurfaceRenderer>(
    renderer: &R,
    surface: &str,
    options: &ExportOptions,
) -> Result<Vec<u8>> {
    renderer
        .render_surface(surface, options)
        .map_err(|e| AnalyzerError::ExportFailed(e.to_string()))
}

/// Download name for an exported report: non-alphanumerics become
/// underscores and the whole name is lowercased.
pub fn report_file_name(company_name: &str) -> String {
    let safe: String = company_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("financial_report_{}.pdf", safe)
}
