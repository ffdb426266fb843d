//! SVG renderer implementation.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use kurbo::{Affine, BezPath};
use peniko::Color;
use starview_core::style::{Paint, SerializableColor};

use crate::renderer::{PathRenderer, RenderContext, RenderError, RenderResult, Renderer};

/// Renders star rows to a standalone SVG document.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    /// `<path>` elements of the current document.
    body: String,
    /// The finished document from the last `build_scene`.
    document: String,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document produced by the last render pass.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Render a context and return the document.
    pub fn render_to_string(&mut self, ctx: &RenderContext) -> RenderResult<String> {
        self.build_scene(ctx)?;
        Ok(self.document.clone())
    }

    /// Write the last document to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        if self.document.is_empty() {
            return Err(RenderError::RenderFailed("Nothing rendered yet".to_string()));
        }
        fs::write(path, &self.document)
            .map_err(|e| RenderError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }
}

/// `#RRGGBB` plus a separate opacity in `[0, 1]`.
fn svg_color(color: SerializableColor) -> (String, f64) {
    (
        format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b),
        f64::from(color.a) / 255.0,
    )
}

impl PathRenderer for SvgRenderer {
    fn render_path(&mut self, path: &BezPath, paint: &Paint, transform: Affine) {
        let (color, opacity) = svg_color(paint.color);
        let (fill, fill_opacity) = if paint.style.fills() {
            (color.as_str(), opacity)
        } else {
            ("none", 1.0)
        };

        let _ = write!(self.body, r#"<path d="{}" fill="{}""#, path.to_svg(), fill);
        if fill_opacity < 1.0 {
            let _ = write!(self.body, r#" fill-opacity="{:.3}""#, fill_opacity);
        }
        if paint.style.strokes() {
            let scale = transform.as_coeffs()[0].abs();
            let _ = write!(
                self.body,
                r#" stroke="{}" stroke-width="{}" stroke-linejoin="miter""#,
                color,
                paint.stroke_width * scale
            );
            if opacity < 1.0 {
                let _ = write!(self.body, r#" stroke-opacity="{:.3}""#, opacity);
            }
        }
        self.body.push_str("/>");
    }
}

impl Renderer for SvgRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        ctx.validate()?;
        self.body.clear();
        self.render_plan(ctx.plan, ctx.transform());

        let size = ctx.output_size();
        let mut document = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = size.width,
            h = size.height
        );
        if let Some(background) = ctx.background_color {
            let (color, opacity) = svg_color(SerializableColor::from(background));
            let _ = write!(
                document,
                r#"<rect width="100%" height="100%" fill="{}" fill-opacity="{:.3}"/>"#,
                color, opacity
            );
        }
        document.push_str(&self.body);
        document.push_str("</svg>");

        log::debug!(
            "Rendered {} stars to SVG ({} bytes)",
            ctx.plan.len(),
            document.len()
        );
        self.document = document;
        Ok(())
    }
}

/// Convert a peniko color into the form used in SVG attributes.
pub fn color_attribute(color: Color) -> String {
    svg_color(color.into()).0
}
