// Plotters canvas styled from the render-option table

use crate::options::OptionTable;
use anyhow::{Context, Result};
use image::ImageEncoder;
use plotters::prelude::*;
use std::ops::Range;

/// Rendering surface whose geometry and draw styles come from an option
/// table.
///
/// Styles are resolved once at construction; later table changes do not
/// affect an existing canvas.
#[derive(Debug)]
pub struct Canvas {
    buffer: Vec<u8>,
    width: u32,
    height: u32,
    x_range: Range<f64>,
    y_range: Range<f64>,
    title: Option<String>,
    x_desc: Option<String>,
    y_desc: Option<String>,
    font_family: String,
    title_size: i32,
    label_size: i32,
    line_width: u32,
    axis_width: u32,
    grid_alpha: f64,
    background: RGBColor,
    initialized: bool,
}

impl Canvas {
    /// Create a canvas sized from `figure.figsize` × `figure.dpi`, with
    /// axis ranges covering the given data.
    pub fn new(
        options: &OptionTable,
        title: Option<String>,
        all_x: &[f64],
        all_y: &[f64],
    ) -> Result<Self> {
        if all_x.is_empty() || all_y.is_empty() {
            anyhow::bail!("Cannot create canvas with no data points");
        }

        let [fig_width, fig_height] = options.pair("figure.figsize").unwrap_or([6.4, 4.8]);
        let dpi = options.num("figure.dpi").unwrap_or(100.0);
        let width = (fig_width * dpi).round().max(1.0) as u32;
        let height = (fig_height * dpi).round().max(1.0) as u32;

        let buffer = vec![0u8; (width * height * 3) as usize];

        Ok(Canvas {
            buffer,
            width,
            height,
            x_range: padded_range(all_x),
            y_range: padded_range(all_y),
            title,
            x_desc: None,
            y_desc: None,
            font_family: options.text("font.family").unwrap_or("sans-serif").to_string(),
            title_size: options.num("axes.titlesize").unwrap_or(12.0).round() as i32,
            label_size: options.num("axes.labelsize").unwrap_or(10.0).round() as i32,
            line_width: options.num("lines.linewidth").unwrap_or(1.5).round().max(1.0) as u32,
            axis_width: options.num("axes.linewidth").unwrap_or(0.8).round().max(1.0) as u32,
            grid_alpha: options.num("grid.alpha").unwrap_or(1.0),
            background: face_color(options.text("figure.facecolor").unwrap_or("white")),
            initialized: false,
        })
    }

    /// Pixel dimensions of the output image.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Describe the axes; drawn alongside the tick labels.
    pub fn label_axes(&mut self, x_desc: &str, y_desc: &str) {
        self.x_desc = Some(x_desc.to_string());
        self.y_desc = Some(y_desc.to_string());
    }

    /// Draw a connected line through the data.
    pub fn add_line_layer(&mut self, x_data: &[f64], y_data: &[f64]) -> Result<()> {
        if x_data.len() != y_data.len() {
            anyhow::bail!(
                "X and Y data must have the same length (x: {}, y: {})",
                x_data.len(),
                y_data.len()
            );
        }

        let root = BitMapBackend::with_buffer(&mut self.buffer, (self.width, self.height))
            .into_drawing_area();

        if !self.initialized {
            root.fill(&self.background).context("Failed to fill background")?;
            self.initialized = true;
        }

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .caption(
                self.title.as_deref().unwrap_or(""),
                (self.font_family.as_str(), self.title_size),
            )
            .x_label_area_size(self.label_size * 3)
            .y_label_area_size(self.label_size * 4)
            .build_cartesian_2d(self.x_range.clone(), self.y_range.clone())
            .context("Failed to build chart")?;

        let mut mesh = chart.configure_mesh();
        mesh.label_style((self.font_family.as_str(), self.label_size))
            .axis_style(BLACK.stroke_width(self.axis_width))
            .bold_line_style(BLACK.mix(self.grid_alpha))
            .light_line_style(BLACK.mix(self.grid_alpha * 0.5));
        if let Some(desc) = &self.x_desc {
            mesh.x_desc(desc.as_str());
        }
        if let Some(desc) = &self.y_desc {
            mesh.y_desc(desc.as_str());
        }
        mesh.draw().context("Failed to draw mesh")?;

        let points: Vec<(f64, f64)> =
            x_data.iter().copied().zip(y_data.iter().copied()).collect();

        chart
            .draw_series(LineSeries::new(points, BLUE.stroke_width(self.line_width)))
            .context("Failed to draw line series")?;

        root.present().context("Failed to present drawing")?;

        Ok(())
    }

    /// Draw a filled circle at each data point.
    pub fn add_point_layer(&mut self, x_data: &[f64], y_data: &[f64]) -> Result<()> {
        if x_data.len() != y_data.len() {
            anyhow::bail!(
                "X and Y data must have the same length (x: {}, y: {})",
                x_data.len(),
                y_data.len()
            );
        }

        let root = BitMapBackend::with_buffer(&mut self.buffer, (self.width, self.height))
            .into_drawing_area();

        if !self.initialized {
            root.fill(&self.background).context("Failed to fill background")?;
            self.initialized = true;
        }

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .caption(
                self.title.as_deref().unwrap_or(""),
                (self.font_family.as_str(), self.title_size),
            )
            .x_label_area_size(self.label_size * 3)
            .y_label_area_size(self.label_size * 4)
            .build_cartesian_2d(self.x_range.clone(), self.y_range.clone())
            .context("Failed to build chart")?;

        let mut mesh = chart.configure_mesh();
        mesh.label_style((self.font_family.as_str(), self.label_size))
            .axis_style(BLACK.stroke_width(self.axis_width))
            .bold_line_style(BLACK.mix(self.grid_alpha))
            .light_line_style(BLACK.mix(self.grid_alpha * 0.5));
        if let Some(desc) = &self.x_desc {
            mesh.x_desc(desc.as_str());
        }
        if let Some(desc) = &self.y_desc {
            mesh.y_desc(desc.as_str());
        }
        mesh.draw().context("Failed to draw mesh")?;

        let points: Vec<(f64, f64)> =
            x_data.iter().copied().zip(y_data.iter().copied()).collect();
        let size = (self.line_width as i32 + 2).max(3);

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), size, BLUE.filled())),
            )
            .context("Failed to draw point series")?;

        root.present().context("Failed to present drawing")?;

        Ok(())
    }

    /// Finalize and encode the canvas as PNG.
    pub fn render(self) -> Result<Vec<u8>> {
        let mut png_bytes = Vec::new();
        {
            let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
            encoder
                .write_image(
                    &self.buffer,
                    self.width,
                    self.height,
                    image::ColorType::Rgb8,
                )
                .context("Failed to encode PNG")?;
        }

        Ok(png_bytes)
    }
}

/// Data range padded by 5%, widened when degenerate.
fn padded_range(data: &[f64]) -> Range<f64> {
    let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        (min - 1.0)..(max + 1.0)
    } else {
        let padding = (max - min) * 0.05;
        (min - padding)..(max + padding)
    }
}

/// Resolve a facecolor option to a concrete color.
///
/// The RGB backend has no alpha channel, so "none" renders as white.
fn face_color(name: &str) -> RGBColor {
    match name {
        "black" => BLACK,
        "red" => RED,
        "green" => GREEN,
        "blue" => BLUE,
        "yellow" => YELLOW,
        "gray" | "grey" => RGBColor(128, 128, 128),
        _ => WHITE, // "white", "none", anything unrecognized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Overrides;
    use crate::style::StyleContext;

    fn png_dimensions(bytes: &[u8]) -> (u32, u32) {
        // IHDR width/height live at fixed offsets after the signature.
        let width = u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]);
        let height = u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]);
        (width, height)
    }

    #[test]
    fn test_canvas_size_follows_figsize_and_dpi() {
        let mut ctx = StyleContext::new();
        ctx.apply_style("presentation", &Overrides::new()).unwrap();
        let canvas = Canvas::new(ctx.options(), None, &[1.0, 2.0], &[10.0, 20.0]).unwrap();
        // presentation: 10 x 5.625 inches at 100 dpi
        assert_eq!(canvas.dimensions(), (1000, 563));
    }

    #[test]
    fn test_canvas_rejects_empty_data() {
        let ctx = StyleContext::new();
        let result = Canvas::new(ctx.options(), None, &[], &[]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("no data points"));
    }

    #[test]
    fn test_line_layer_length_mismatch() {
        let ctx = StyleContext::new();
        let mut canvas = Canvas::new(ctx.options(), None, &[1.0, 2.0], &[10.0, 20.0]).unwrap();
        let result = canvas.add_line_layer(&[1.0, 2.0], &[10.0]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("same length"));
    }

    #[test]
    fn test_render_produces_png() {
        let mut ctx = StyleContext::new();
        ctx.set_figsize(4.0, 3.0);
        let mut canvas = Canvas::new(
            ctx.options(),
            Some("test".to_string()),
            &[1.0, 2.0, 3.0],
            &[10.0, 5.0, 20.0],
        )
        .unwrap();
        canvas
            .add_line_layer(&[1.0, 2.0, 3.0], &[10.0, 5.0, 20.0])
            .unwrap();
        let png = canvas.render().unwrap();

        assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
        assert_eq!(png_dimensions(&png), (400, 300));
    }

    #[test]
    fn test_axis_labels_render() {
        let ctx = StyleContext::new();
        let mut canvas = Canvas::new(ctx.options(), None, &[1.0, 2.0], &[1.0, 4.0]).unwrap();
        canvas.label_axes("time", "temp");
        canvas.add_line_layer(&[1.0, 2.0], &[1.0, 4.0]).unwrap();
        assert!(canvas.render().is_ok());
    }

    #[test]
    fn test_point_layer_renders() {
        let ctx = StyleContext::new();
        let mut canvas = Canvas::new(ctx.options(), None, &[1.0, 2.0], &[1.0, 4.0]).unwrap();
        canvas.add_point_layer(&[1.0, 2.0], &[1.0, 4.0]).unwrap();
        assert!(canvas.render().is_ok());
    }

    #[test]
    fn test_padded_range_degenerate() {
        let range = padded_range(&[5.0, 5.0]);
        assert_eq!(range, 4.0..6.0);
    }

    #[test]
    fn test_padded_range_spread() {
        let range = padded_range(&[0.0, 10.0]);
        assert_eq!(range, -0.5..10.5);
    }

    #[test]
    fn test_face_color_fallback() {
        assert_eq!(face_color("none"), WHITE);
        assert_eq!(face_color("black"), BLACK);
        assert_eq!(face_color("anything"), WHITE);
    }
}
