//! Reading and writing point files.
//!
//! A point file holds one point per line as two whitespace-separated numbers.
//! An optional `X Y` header line and blank lines are ignored:
//!
//! ```text
//! X Y
//! 0.5 1.25
//! -3 4e-2
//! ```
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::data::Point;
use crate::Error;

const HEADER: &str = "X Y";

/// Parse points from a reader.
///
/// # Errors
/// Fails on the first malformed line. Line numbers in the error start at 1.
///
/// # Examples
///
/// ```rust
/// # use hullcloud::io::read_points;
/// # use hullcloud::data::Point;
/// let text = "X Y\n0 0\n\n1.5 -2\n";
/// let pts = read_points(text.as_bytes()).unwrap();
/// assert_eq!(pts, vec![Point::new([0., 0.]), Point::new([1.5, -2.])]);
/// ```
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point<f64>>, Error> {
  let mut pts = Vec::new();
  for (index, line) in reader.lines().enumerate() {
    let line = line?;
    let text = line.trim();
    if text.is_empty() || text == HEADER {
      continue;
    }
    pts.push(parse_point(text, index + 1)?);
  }
  Ok(pts)
}

/// Open `path` and parse its points with [`read_points`].
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point<f64>>, Error> {
  let file = File::open(path)?;
  read_points(BufReader::new(file))
}

/// Write points in the format accepted by [`read_points`], header included.
pub fn write_points<W: Write>(mut writer: W, pts: &[Point<f64>]) -> Result<(), Error> {
  writeln!(writer, "{}", HEADER)?;
  for pt in pts {
    writeln!(writer, "{} {}", pt.x_coord(), pt.y_coord())?;
  }
  writer.flush()?;
  Ok(())
}

fn parse_point(text: &str, line: usize) -> Result<Point<f64>, Error> {
  let mut fields = text.split_whitespace();
  let mut coord = || -> Result<f64, Error> {
    let field = fields.next().ok_or(Error::MissingCoordinate { line })?;
    let value: f64 = field.parse().map_err(|_| Error::InvalidNumber { line })?;
    if !value.is_finite() {
      return Err(Error::NonFinite { line });
    }
    Ok(value)
  };
  let x = coord()?;
  let y = coord()?;
  if fields.next().is_some() {
    return Err(Error::ExtraCoordinate { line });
  }
  Ok(Point::new([x, y]))
}
