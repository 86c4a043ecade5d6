//! Point files: a decimal count line followed by one `"x y"` line per point.
//!
//! ```text
//! 3
//! 12.5 880.25
//! 40000 3.0
//! 7 7
//! ```
//!
//! Points are returned in file order. Blank lines after the last point are
//! ignored; any other surplus or shortfall against the header is a load error.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::PairError;
use crate::point::Point;

/// Largest preallocation taken on the header's word; the count check runs after reading.
const MAX_PREALLOC: usize = 1 << 16;

/// Read a point set from any buffered reader.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point>, PairError> {
    let mut lines = reader.lines().enumerate();

    let (header_no, header) = loop {
        match lines.next() {
            None => return Err(PairError::load("input is empty")),
            Some((i, line)) => {
                let line = line.map_err(|e| PairError::load(format!("line {}: {e}", i + 1)))?;
                if !line.trim().is_empty() {
                    break (i + 1, line);
                }
            }
        }
    };
    let expected: usize = header.trim().parse().map_err(|e| {
        PairError::load(format!(
            "line {header_no}: point count {:?} is not a non-negative integer: {e}",
            header.trim()
        ))
    })?;

    let mut points = Vec::with_capacity(expected.min(MAX_PREALLOC));
    let mut trailing_blank = false;
    for (i, line) in lines {
        let line_no = i + 1;
        let line = line.map_err(|e| PairError::load(format!("line {line_no}: {e}")))?;
        if line.trim().is_empty() {
            trailing_blank = true;
            continue;
        }
        if trailing_blank || points.len() == expected {
            return Err(PairError::load(format!(
                "header declares {expected} points but line {line_no} holds more data"
            )));
        }
        points.push(line.parse::<Point>().map_err(|e| e.at_line(line_no))?);
    }
    if points.len() != expected {
        return Err(PairError::load(format!(
            "header declares {expected} points, found {}",
            points.len()
        )));
    }
    Ok(points)
}

/// Load a point file from disk.
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, PairError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PairError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_points(BufReader::new(file))
}

/// Write `points` in the point-file format.
///
/// Coordinates use the shortest decimal that parses back to the same `f64`.
pub fn write_points<W: Write>(mut writer: W, points: &[Point]) -> std::io::Result<()> {
    writeln!(writer, "{}", points.len())?;
    for p in points {
        writeln!(writer, "{p}")?;
    }
    writer.flush()
}

/// Write a point file to disk, creating or truncating it.
pub fn save_points<P: AsRef<Path>>(path: P, points: &[Point]) -> Result<(), PairError> {
    let path = path.as_ref();
    let io_err = |source| PairError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    write_points(BufWriter::new(file), points).map_err(io_err)
}
