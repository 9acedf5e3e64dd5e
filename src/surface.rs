//! Drawing surfaces the interpreter can render into.
//!
//! The interpreter never talks to a backend directly. It hands every step to
//! a [`DrawingSurface`] as a [`DrawEvent`] and finishes with a single
//! [`DrawingSurface::fit_viewport`] call. Two surfaces ship with the crate:
//! [`EventRecorder`] keeps the raw events, [`SvgSurface`] writes an SVG document.

use crate::bounds::Bounds;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// One forward step of the turtle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawEvent {
    pub start: DVec2,
    pub end: DVec2,
    /// `false` for pen-up moves (`M`, `N`).
    pub visible: bool,
}

/// A backend that receives turtle output.
pub trait DrawingSurface {
    /// Receives one step. Pen-up moves arrive with `visible == false`; a step
    /// whose `start` differs from the previous `end` follows a state restore.
    fn draw(&mut self, event: DrawEvent);

    /// Called once after the last step with the square viewport to display.
    fn fit_viewport(&mut self, viewport: Bounds);

    /// Releases the surface. Called exactly once per render, on every exit path.
    fn close(&mut self) {}
}

/// Records events verbatim.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    pub events: Vec<DrawEvent>,
    pub viewport: Option<Bounds>,
    pub closed: bool,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

}

impl DrawingSurface for EventRecorder {
    fn draw(&mut self, event: DrawEvent) {
        self.events.push(event);
    }

    fn fit_viewport(&mut self, viewport: Bounds) {
        self.viewport = Some(viewport);
    }

    fn close(&mut self) {
        self.closed = true;
    }
}

/// Presentation settings for [`SvgSurface`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SvgStyle {
    /// Output canvas size in pixels (square).
    pub canvas_size: u32,
    pub stroke: String,
    /// Stroke width in pixels, independent of the figure's scale.
    pub stroke_width: f64,
    /// Padding around the viewport, as a fraction of its side.
    pub margin: f64,
    pub background: Option<String>,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            canvas_size: 900,
            stroke: "blue".to_string(),
            stroke_width: 1.0,
            margin: 0.02,
            background: Some("white".to_string()),
        }
    }
}

/// Collects pen-down runs as polylines and serializes them to SVG.
///
/// World coordinates are y-up; SVG is y-down, so every point is mirrored
/// through the x axis on the way out.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    style: SvgStyle,
    polylines: Vec<Vec<DVec2>>,
    current: Vec<DVec2>,
    viewport: Option<Bounds>,
}

impl SvgSurface {
    pub fn new(style: SvgStyle) -> Self {
        Self {
            style,
            polylines: Vec::new(),
            current: Vec::new(),
            viewport: None,
        }
    }

    /// Number of polylines emitted so far, including the one in progress.
    pub fn polyline_count(&self) -> usize {
        self.polylines.len() + usize::from(self.current.len() > 1)
    }

    fn flush(&mut self) {
        let run = std::mem::take(&mut self.current);
        if run.len() > 1 {
            self.polylines.push(run);
        }
    }

    /// Renders the collected geometry as a standalone SVG document.
    pub fn finish(mut self) -> String {
        self.flush();
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_document(&mut out);
        out
    }

    fn write_document(&self, out: &mut impl std::fmt::Write) -> std::fmt::Result {
        let viewport = self.viewport.unwrap_or_else(|| {
            let mut bounds = Bounds::default();
            for p in self.polylines.iter().flatten() {
                bounds.include(*p);
            }
            bounds.square_viewport()
        });
        // A single point or an empty drawing still needs a non-zero viewBox.
        let side = viewport.width().max(viewport.height()).max(f64::EPSILON);
        let pad = side * self.style.margin;
        let (x, y) = (viewport.min.x - pad, -viewport.max.y - pad);
        let extent = side + 2.0 * pad;

        let size = self.style.canvas_size;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="{x:.4} {y:.4} {extent:.4} {extent:.4}">"#
        )?;
        if let Some(bg) = &self.style.background {
            writeln!(
                out,
                r#"  <rect x="{x:.4}" y="{y:.4}" width="{extent:.4}" height="{extent:.4}" fill="{bg}"/>"#
            )?;
        }
        writeln!(
            out,
            r#"  <g fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round" vector-effect="non-scaling-stroke">"#,
            self.style.stroke, self.style.stroke_width
        )?;
        for line in &self.polylines {
            out.write_str(r#"    <polyline vector-effect="non-scaling-stroke" points=""#)?;
            for (i, p) in line.iter().enumerate() {
                if i > 0 {
                    out.write_char(' ')?;
                }
                write!(out, "{:.4},{:.4}", p.x, 0.0 - p.y)?;
            }
            out.write_str("\"/>\n")?;
        }
        out.write_str("  </g>\n</svg>\n")
    }
}

impl Default for SvgSurface {
    fn default() -> Self {
        Self::new(SvgStyle::default())
    }
}

impl DrawingSurface for SvgSurface {
    fn draw(&mut self, event: DrawEvent) {
        if !event.visible {
            self.flush();
            return;
        }
        if self.current.last() != Some(&event.start) {
            self.flush();
            self.current.push(event.start);
        }
        self.current.push(event.end);
    }

    fn fit_viewport(&mut self, viewport: Bounds) {
        self.viewport = Some(viewport);
    }

    fn close(&mut self) {
        self.flush();
    }
}
