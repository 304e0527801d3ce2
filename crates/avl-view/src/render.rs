//! Frame rendering for the terminal.

use avl_forest::print::print_grid;

use crate::config::OutputFormat;
use crate::error::ViewError;
use crate::playback::{Action, Frame};

/// Header line followed by the grid, one level per line.
pub fn render_text(frame: &Frame) -> String {
    let header = match &frame.action {
        Action::Built { inserted } => format!("step {}: inserted {inserted} keys", frame.step),
        Action::Deleted { key } => format!("step {}: deleted {key}", frame.step),
    };
    let body = if frame.grid.is_empty() {
        "(empty)".to_string()
    } else {
        print_grid(&frame.grid)
    };
    format!(
        "{header} (size={}, height={})\n{body}\n",
        frame.size, frame.height
    )
}

/// The frame as a single JSON line.
pub fn render_json(frame: &Frame) -> Result<String, ViewError> {
    let mut line = serde_json::to_string(frame)?;
    line.push('\n');
    Ok(line)
}

pub fn render(frame: &Frame, format: OutputFormat) -> Result<String, ViewError> {
    match format {
        OutputFormat::Text => Ok(render_text(frame)),
        OutputFormat::Json => render_json(frame),
    }
}
