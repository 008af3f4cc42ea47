//! QR symbol rendering for QRfoundry payloads.
//!
//! The payload crate decides WHAT string goes into a symbol; this crate
//! turns that string into something viewable. Rendering is delegated to
//! the mature `qrcode` crate, either as UTF-8 half-block characters for
//! the terminal or as a grayscale PNG via the `image` crate.
//!
//! # Example
//!
//! ```
//! use qrfoundry_payload::ErrorCorrection;
//! use qrfoundry_render::render_unicode;
//!
//! let symbol = render_unicode("tel:+15551234567", ErrorCorrection::High, false)
//!     .expect("payload fits a QR symbol");
//! assert!(!symbol.is_empty());
//! ```

use std::path::Path;

use image::Luma;
use qrcode::render::unicode;
use qrcode::{EcLevel, QrCode};
use qrfoundry_payload::{ContentKind, ErrorCorrection};

/// Pixel edge length of one QR module in exported PNG images.
pub const MODULE_PIXELS: u32 = 8;

/// Rendering failures.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The payload does not fit a QR symbol at the requested redundancy.
    #[error("QR encoding failed: {0}")]
    Qr(#[from] qrcode::types::QrError),
    /// Encoding or writing the image file failed.
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}

fn ec_level(level: ErrorCorrection) -> EcLevel {
    match level {
        ErrorCorrection::Low => EcLevel::L,
        ErrorCorrection::Medium => EcLevel::M,
        ErrorCorrection::Quartile => EcLevel::Q,
        ErrorCorrection::High => EcLevel::H,
    }
}

/// Render a payload as UTF-8 half-block characters for terminal display.
///
/// `inverted` swaps module colors; terminals with dark backgrounds need
/// the swap for the symbol to keep its dark-on-light contrast.
pub fn render_unicode(
    payload: &str,
    level: ErrorCorrection,
    inverted: bool,
) -> Result<String, RenderError> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), ec_level(level))?;

    let mut renderer = code.render::<unicode::Dense1x2>();
    renderer.quiet_zone(true);
    if inverted {
        renderer
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark);
    }
    Ok(renderer.build())
}

/// Render a payload to a grayscale PNG at `path`.
///
/// Modules are [`MODULE_PIXELS`] pixels wide and the quiet zone is
/// included, so the exported file scans without further framing.
pub fn render_png(payload: &str, level: ErrorCorrection, path: &Path) -> Result<(), RenderError> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), ec_level(level))?;
    let image = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .quiet_zone(true)
        .build();

    log::debug!(
        "writing {}x{} px symbol to {}",
        image.width(),
        image.height(),
        path.display()
    );
    image.save(path)?;
    Ok(())
}

/// File name for an exported symbol: `<prefix>-<kind>-<unix-millis>.png`.
///
/// Matches the download naming of the original web surface, so files
/// produced here sort next to ones users saved there.
pub fn download_filename(prefix: &str, kind: ContentKind, unix_millis: i64) -> String {
    format!("{prefix}-{kind}-{unix_millis}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_unicode_produces_block_lines() {
        let symbol = render_unicode("https://example.com", ErrorCorrection::High, false)
            .expect("short payload fits");
        assert!(symbol.lines().count() > 10, "symbol spans multiple rows");
        assert!(symbol.contains('█'), "symbol uses block characters");
    }

    #[test]
    fn test_render_unicode_inverted_differs() {
        let normal = render_unicode("tel:+15551234567", ErrorCorrection::High, false)
            .expect("short payload fits");
        let inverted = render_unicode("tel:+15551234567", ErrorCorrection::High, true)
            .expect("short payload fits");
        assert_ne!(normal, inverted);
    }

    #[test]
    fn test_oversized_payload_is_an_error_not_a_panic() {
        let oversized = "a".repeat(8000);
        let result = render_unicode(&oversized, ErrorCorrection::High, false);
        assert!(matches!(result, Err(RenderError::Qr(_))));
    }

    #[test]
    fn test_render_png_writes_a_file() {
        let dir = tempfile::tempdir().expect("temp dir is creatable");
        let path = dir.path().join("symbol.png");

        render_png("WIFI:T:WPA;S:home;P:pw;H:false;;", ErrorCorrection::High, &path)
            .expect("payload fits and path is writable");

        let metadata = std::fs::metadata(&path).expect("file exists");
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_download_filename_pattern() {
        assert_eq!(
            download_filename("qrfoundry", ContentKind::Wifi, 1_700_000_000_000),
            "qrfoundry-wifi-1700000000000.png"
        );
        assert_eq!(
            download_filename("qrfoundry", ContentKind::VCard, 42),
            "qrfoundry-vcard-42.png"
        );
    }
}
