//! StarView demo driver.
//!
//! Builds a controller from an optional JSON config, lays it out, replays
//! pointer taps, and renders the result to SVG.

use std::path::PathBuf;

use kurbo::Point;
use starview_core::{
    ConfigError, MeasureSpec, Padding, PointerEvent, RatingController, StarViewConfig,
};
use starview_render::{RenderContext, RenderError, SvgRenderer};
use thiserror::Error;

/// Demo errors.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Usage: {0}")]
    Usage(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

pub const USAGE: &str = "starview-demo [--config FILE] [--width W] [--height H] \
[--padding P] [--tap X]... [--output FILE] [--summary]";

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub config: Option<PathBuf>,
    /// Exact width; wraps the content when absent.
    pub width: Option<f64>,
    /// Exact height; wraps the content when absent.
    pub height: Option<f64>,
    pub padding: f64,
    /// Pointer x-positions replayed in order.
    pub taps: Vec<f64>,
    pub output: Option<PathBuf>,
    /// Print a JSON summary instead of the SVG.
    pub summary: bool,
}

impl Options {
    /// Parse arguments (without the program name).
    pub fn parse<I, S>(args: I) -> Result<Self, DemoError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            let mut value = |name: &str| {
                args.next()
                    .ok_or_else(|| DemoError::Usage(format!("{} needs a value", name)))
            };
            match arg.as_str() {
                "--config" => options.config = Some(PathBuf::from(value("--config")?)),
                "--output" => options.output = Some(PathBuf::from(value("--output")?)),
                "--width" => options.width = Some(parse_number("--width", &value("--width")?)?),
                "--height" => options.height = Some(parse_number("--height", &value("--height")?)?),
                "--padding" => options.padding = parse_number("--padding", &value("--padding")?)?,
                "--tap" => options.taps.push(parse_number("--tap", &value("--tap")?)?),
                "--summary" => options.summary = true,
                other => return Err(DemoError::Usage(format!("unknown argument {}", other))),
            }
        }
        Ok(options)
    }
}

fn parse_number(name: &str, value: &str) -> Result<f64, DemoError> {
    value
        .parse()
        .map_err(|_| DemoError::Usage(format!("{} expects a number, got {}", name, value)))
}

/// Result of one demo run.
#[derive(Debug)]
pub struct DemoOutput {
    pub controller: RatingController,
    pub svg: String,
}

impl DemoOutput {
    /// Rating and layout details as JSON.
    pub fn summary(&self) -> String {
        let state = self.controller.state();
        let size = self.controller.measured_size();
        serde_json::json!({
            "rating": self.controller.rating(),
            "rawRating": state.raw_rating(),
            "intRating": self.controller.int_rating(),
            "starCount": state.star_count(),
            "starSize": state.star_size(),
            "width": size.width,
            "height": size.height,
            "slots": self
                .controller
                .render()
                .kinds()
                .iter()
                .map(|kind| format!("{:?}", kind))
                .collect::<Vec<_>>(),
        })
        .to_string()
    }
}

/// Run the demo with parsed options.
pub fn run(options: &Options) -> Result<DemoOutput, DemoError> {
    let config = match &options.config {
        Some(path) => StarViewConfig::from_file(path)?,
        None => StarViewConfig::default(),
    };
    let mut controller = RatingController::from_config(&config);

    let spec = |value: Option<f64>| value.map_or(MeasureSpec::Unspecified, MeasureSpec::Exactly);
    let size = controller.measure(
        spec(options.width),
        spec(options.height),
        Padding::uniform(options.padding),
    );
    log::info!(
        "Measured {}x{} with star size {:.2}",
        size.width,
        size.height,
        controller.state().star_size()
    );

    for &x in &options.taps {
        let event = PointerEvent::Down {
            position: Point::new(x, size.height / 2.0),
        };
        let outcome = controller.handle_pointer_event(&event);
        log::info!("Tap at {} -> {:?}", x, outcome);
    }

    let plan = controller.render();
    let mut renderer = SvgRenderer::new();
    let svg = renderer.render_to_string(&RenderContext::new(&plan, size))?;
    if let Some(path) = &options.output {
        renderer.save(path)?;
        log::info!("Wrote {}", path.display());
    }
    controller.take_redraw();

    Ok(DemoOutput { controller, svg })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_options() {
        let options = Options::parse([
            "--width", "500", "--height", "80", "--tap", "150", "--tap", "320", "--summary",
        ])
        .unwrap();
        assert_eq!(options.width, Some(500.0));
        assert_eq!(options.height, Some(80.0));
        assert_eq!(options.taps, vec![150.0, 320.0]);
        assert!(options.summary);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Options::parse(["--width"]),
            Err(DemoError::Usage(_))
        ));
        assert!(matches!(
            Options::parse(["--tap", "abc"]),
            Err(DemoError::Usage(_))
        ));
        assert!(matches!(
            Options::parse(["--bogus"]),
            Err(DemoError::Usage(_))
        ));
    }

    #[test]
    fn test_run_defaults() {
        let output = run(&Options::default()).unwrap();
        assert_eq!(output.svg.matches("<path").count(), 5);
        assert_eq!(output.controller.int_rating(), 0);
    }

    #[test]
    fn test_run_with_config_and_taps() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"starCount": 5, "interactive": true, "halfEnabled": true, "rating": 1}}"#
        )
        .unwrap();
        let options = Options {
            config: Some(file.path().to_path_buf()),
            width: Some(500.0),
            height: Some(80.0),
            taps: vec![260.0],
            ..Default::default()
        };
        let output = run(&options).unwrap();
        // Half star width 50: x = 260 lands in the sixth half.
        assert!((output.controller.state().raw_rating() - 3.0).abs() < f64::EPSILON);
        let summary: serde_json::Value = serde_json::from_str(&output.summary()).unwrap();
        assert_eq!(summary["intRating"], 3);
        assert_eq!(summary["slots"].as_array().map(Vec::len), Some(5));
    }

    #[test]
    fn test_run_missing_config() {
        let options = Options {
            config: Some(PathBuf::from("/nonexistent/starview.json")),
            ..Default::default()
        };
        assert!(matches!(run(&options), Err(DemoError::Config(_))));
    }
}
