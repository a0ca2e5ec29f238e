//! Executes the drawing plan against a canvas and writes the result.

use std::fs;
use std::path::Path;

use image::RgbImage;
use log::{debug, info};

use crate::canvas::Canvas;
use crate::error::RenderError;

use super::layout::{build_draw_plan, DrawOp};
use super::profile::IconProfile;

/// Renders the app icon from an [`IconProfile`].
///
/// Rendering is fully deterministic: the same profile always produces
/// byte-identical output.
pub struct IconRenderer {
    profile: IconProfile,
}

impl IconRenderer {
    /// Creates a renderer for the given profile.
    pub fn new(profile: IconProfile) -> Self {
        Self { profile }
    }

    /// Creates a renderer with the default profile at the given size.
    pub fn with_size(size: u32) -> Self {
        Self::new(IconProfile::default().with_size(size))
    }

    /// The profile this renderer draws from.
    pub fn profile(&self) -> &IconProfile {
        &self.profile
    }

    /// Renders the icon to a flattened RGB image.
    pub fn render(&self) -> RgbImage {
        let plan = build_draw_plan(&self.profile);
        debug!(
            "executing {} drawing operations at size {}",
            plan.len(),
            self.profile.size
        );

        let mut canvas = Canvas::new(self.profile.size);
        for op in &plan {
            match op {
                DrawOp::VerticalGradient { top, bottom } => {
                    canvas.fill_vertical_gradient(*top, *bottom)
                }
                DrawOp::FilledCircle { cx, cy, radius, color } => {
                    canvas.fill_circle(*cx, *cy, *radius, *color)
                }
                DrawOp::FilledRect { x, y, width, height, color } => {
                    canvas.fill_rect(*x, *y, *width, *height, *color)
                }
                DrawOp::FilledPolygon { points, color } => {
                    canvas.fill_polygon(points, *color)
                }
                DrawOp::SoftHighlight { cx, cy, radius, color, alpha } => {
                    canvas.blend_circle(*cx, *cy, *radius, *color, *alpha)
                }
            }
        }
        canvas.into_rgb()
    }

    /// Renders the icon and encodes it as a PNG at `path`.
    ///
    /// Parent directories are created as needed; an existing file is
    /// overwritten without confirmation. Encode or write failures propagate
    /// and leave no cleanup behind.
    pub fn render_to_file(&self, path: &Path) -> Result<(), RenderError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| RenderError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
        }

        self.render().save(path)?;
        info!(
            "wrote {size}x{size} icon to {}",
            path.display(),
            size = self.profile.size
        );
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::profile::ColorRgb;

    #[test]
    fn renders_requested_dimensions() {
        let icon = IconRenderer::with_size(64).render();
        assert_eq!(icon.width(), 64);
        assert_eq!(icon.height(), 64);
    }

    #[test]
    fn rendering_is_deterministic() {
        let first = IconRenderer::with_size(64).render();
        let second = IconRenderer::with_size(64).render();
        assert_eq!(
            first.as_raw(),
            second.as_raw(),
            "Same size must produce byte-identical output"
        );
    }

    #[test]
    fn probe_pixels_match_the_layout() {
        let icon = IconRenderer::with_size(1024).render();

        // Top-left corner: gradient top endpoint.
        assert_eq!(icon.get_pixel(0, 0).0, [76, 175, 80]);

        // Between apple lobes: apple red.
        assert_eq!(icon.get_pixel(512, 532).0, [220, 53, 69]);

        // Inside the plate but above the apple: plate white.
        assert_eq!(icon.get_pixel(512, 140).0, [255, 255, 255]);

        // Indent center: cut back to plate white.
        assert_eq!(icon.get_pixel(512, 411).0, [255, 255, 255]);

        // Stem interior: brown.
        assert_eq!(icon.get_pixel(510, 350).0, [101, 67, 33]);
    }

    #[test]
    fn shine_lightens_the_left_lobe() {
        let icon = IconRenderer::with_size(1024).render();

        let shine_center = icon.get_pixel(392, 475).0;
        let plain_apple = icon.get_pixel(434, 532).0;

        assert_eq!(plain_apple, [220, 53, 69]);
        assert!(
            shine_center[1] > plain_apple[1] && shine_center[2] > plain_apple[2],
            "Highlight should pull the apple color toward white, got {shine_center:?}"
        );
        assert!(shine_center[1] < 255, "Highlight is translucent, not solid");
    }

    #[test]
    fn profile_colors_flow_through() {
        let mut profile = IconProfile::default().with_size(128);
        profile.apple = ColorRgb::new(0, 0, 255);

        let icon = IconRenderer::new(profile).render();
        // Apple center scales to (64, 66) at size 128.
        assert_eq!(icon.get_pixel(64, 66).0, [0, 0, 255]);
    }

    #[test]
    fn render_to_file_creates_parents_and_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets/AppIcon.appiconset/icon_64.png");

        IconRenderer::with_size(64).render_to_file(&path).unwrap();

        assert!(path.exists());
        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.width(), 64);
        assert_eq!(decoded.height(), 64);
    }

    #[test]
    fn render_to_file_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        std::fs::write(&path, b"not a png").unwrap();

        IconRenderer::with_size(32).render_to_file(&path).unwrap();
        assert!(image::open(&path).is_ok());
    }
}
