//! Text sinks for finished carvings
//!
//! `CarveSink::present` cannot fail, so each sink keeps the first write
//! error and hands it back from `finish`.

use std::io::{self, Write};

use pc_core::{CarveSink, Carving, Point};

/// Grid rows, top first, with the start marked `S` and the end `E`.
pub fn ascii_rows(carving: &Carving) -> Vec<String> {
    let height = carving.grid.height();
    let mut rows: Vec<Vec<char>> = carving
        .grid
        .rows()
        .into_iter()
        .map(|row| row.chars().collect())
        .collect();

    for (p, mark) in [(carving.start, 'S'), (carving.end, 'E')] {
        if let Some(ch) = row_slot(&mut rows, height, p) {
            *ch = mark;
        }
    }
    rows.into_iter().map(|row| row.into_iter().collect()).collect()
}

fn row_slot(rows: &mut [Vec<char>], height: usize, p: Point) -> Option<&mut char> {
    let y = usize::try_from(p.y).ok()?;
    let x = usize::try_from(p.x).ok()?;
    let row = height.checked_sub(y + 1)?;
    rows.get_mut(row)?.get_mut(x)
}

/// One-line description of a carving
pub fn summary(carving: &Carving) -> String {
    format!(
        "{}x{}: start {} {}, end {} {}, {} steps, {} joints, attempt {}",
        carving.grid.width(),
        carving.grid.height(),
        carving.start,
        carving.start_direction,
        carving.end,
        carving.end_direction,
        carving.route.len(),
        carving.joint_count(),
        carving.attempts
    )
}

/// Writes a summary line followed by the marked grid.
#[derive(Debug)]
pub struct AsciiSink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> AsciiSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    fn write_carving(&mut self, carving: &Carving) -> io::Result<()> {
        writeln!(self.out, "{}", summary(carving))?;
        for row in ascii_rows(carving) {
            writeln!(self.out, "{row}")?;
        }
        self.out.flush()
    }

    /// The writer back, or the first error a write hit
    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }
}

impl<W: Write> CarveSink for AsciiSink<W> {
    fn present(&mut self, carving: &Carving) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write_carving(carving) {
            self.error = Some(e);
        }
    }
}

/// Writes each carving as pretty-printed JSON.
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    fn write_carving(&mut self, carving: &Carving) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, carving)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }
}

impl<W: Write> CarveSink for JsonSink<W> {
    fn present(&mut self, carving: &Carving) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write_carving(carving) {
            self.error = Some(e);
        }
    }
}
