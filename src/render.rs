//! SVG drawings of a point cloud and its hull.
use std::fmt::Write;

use crate::data::{Hull, Point, PointCloud};

const SIZE: f64 = 512.;
const MARGIN: f64 = 16.;

/// Draw every point of `cloud` and the closed outline of `hull`.
///
/// The drawing is scaled to fit a square canvas with the y-axis pointing
/// up. Hull vertices are drawn on top of the cloud.
///
/// # Examples
///
/// ```rust
/// # use hullcloud::data::PointCloud;
/// # use hullcloud::render::render_svg;
/// let cloud: PointCloud = vec![(0., 0.), (4., 0.), (0., 4.), (1., 1.)].into_iter().collect();
/// let svg = render_svg(&cloud, &cloud.graham_scan(), "Graham Scan");
/// assert!(svg.starts_with("<svg"));
/// assert_eq!(svg.matches("<circle").count(), 4 + 3);
/// ```
pub fn render_svg(cloud: &PointCloud<f64>, hull: &Hull<f64>, title: &str) -> String {
  let frame = Frame::new(cloud.iter().chain(hull.iter()));
  let mut svg = String::new();
  // Writing to a String cannot fail.
  let _ = write_svg(&mut svg, &frame, cloud, hull, title);
  svg
}

fn write_svg(
  out: &mut String,
  frame: &Frame,
  cloud: &PointCloud<f64>,
  hull: &Hull<f64>,
  title: &str,
) -> std::fmt::Result {
  let side = SIZE + 2. * MARGIN;
  writeln!(
    out,
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {side} {side}" width="{side}" height="{side}">"#,
    side = side
  )?;
  writeln!(out, "  <title>{}</title>", escape(title))?;
  writeln!(
    out,
    r#"  <rect width="{side}" height="{side}" fill="white"/>"#,
    side = side
  )?;

  if hull.len() >= 2 {
    let outline: Vec<String> = hull
      .closed()
      .map(|pt| {
        let (x, y) = frame.project(pt);
        format!("{:.3},{:.3}", x, y)
      })
      .collect();
    writeln!(
      out,
      r#"  <polyline points="{}" fill="none" stroke="crimson" stroke-width="1.5"/>"#,
      outline.join(" ")
    )?;
  }

  writeln!(out, r#"  <g fill="steelblue">"#)?;
  for pt in cloud {
    let (x, y) = frame.project(pt);
    writeln!(out, r#"    <circle cx="{:.3}" cy="{:.3}" r="2"/>"#, x, y)?;
  }
  writeln!(out, "  </g>")?;

  writeln!(out, r#"  <g fill="crimson">"#)?;
  for pt in hull {
    let (x, y) = frame.project(pt);
    writeln!(out, r#"    <circle cx="{:.3}" cy="{:.3}" r="3"/>"#, x, y)?;
  }
  writeln!(out, "  </g>")?;
  writeln!(out, "</svg>")
}

// Maps cloud coordinates onto the canvas, keeping the aspect ratio.
struct Frame {
  min: [f64; 2],
  center: [f64; 2],
  scale: f64,
}

impl Frame {
  fn new<'a>(pts: impl Iterator<Item = &'a Point<f64>>) -> Frame {
    let mut min = [f64::INFINITY; 2];
    let mut max = [f64::NEG_INFINITY; 2];
    for pt in pts.filter(|pt| pt.is_finite()) {
      for axis in 0..2 {
        min[axis] = min[axis].min(pt[axis]);
        max[axis] = max[axis].max(pt[axis]);
      }
    }
    if min[0] > max[0] {
      min = [0.; 2];
      max = [0.; 2];
    }
    let extent = (max[0] - min[0]).max(max[1] - min[1]);
    let scale = if extent > 0. { SIZE / extent } else { 1. };
    Frame {
      min,
      center: [(max[0] - min[0]) / 2., (max[1] - min[1]) / 2.],
      scale,
    }
  }

  // Canvas coordinates. The shorter axis is centered.
  fn project(&self, pt: &Point<f64>) -> (f64, f64) {
    let half = SIZE / 2.;
    let x = MARGIN + half + (pt.x_coord() - self.min[0] - self.center[0]) * self.scale;
    let y = MARGIN + half - (pt.y_coord() - self.min[1] - self.center[1]) * self.scale;
    (x, y)
  }
}

fn escape(text: &str) -> String {
  text
    .replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
}
