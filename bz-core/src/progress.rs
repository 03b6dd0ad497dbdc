//! Progress tracking and the textual progress gauge.

use std::io::{self, Write};
use std::num::NonZeroUsize;

/// Width of the gauge drawn by [`Gauge::stdout`].
pub const DEFAULT_GAUGE_WIDTH: NonZeroUsize = match NonZeroUsize::new(50) {
    Some(width) => width,
    None => panic!("gauge width must be non-zero"),
};

/// Receives percentage updates from a running pipeline.
///
/// The pipeline calls [`on_progress`](Self::on_progress) only when the
/// percentage changes, plus once with 100 when the operation completes.
pub trait ProgressObserver {
    /// A new percentage, `0..=100`.
    fn on_progress(&mut self, percent: u8);
}

/// An observer that ignores every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _percent: u8) {}
}

/// Converts processed byte counts into a discrete percentage.
#[derive(Debug, Clone)]
pub struct Progress {
    total: u64,
    processed: u64,
    last: Option<u8>,
}

impl Progress {
    /// Starts tracking against `total` expected bytes.
    pub fn new(total: u64) -> Self {
        Self {
            total,
            processed: 0,
            last: None,
        }
    }

    /// Adds `bytes` to the processed count.
    ///
    /// # Returns
    ///
    /// `Some(percent)` when the percentage differs from the last one returned,
    /// `None` otherwise.
    pub fn advance(&mut self, bytes: u64) -> Option<u8> {
        self.processed = self.processed.saturating_add(bytes);
        let percent = self.percent();
        if self.last == Some(percent) {
            return None;
        }
        self.last = Some(percent);
        Some(percent)
    }

    /// `floor(processed * 100 / total)`, clamped to 100.
    ///
    /// A zero total counts as complete. The clamp matters for decompression,
    /// where decompressed bytes are measured against the compressed size.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        let percent = u128::from(self.processed) * 100 / u128::from(self.total);
        u8::try_from(percent.min(100)).unwrap_or(100)
    }

    /// Bytes processed so far.
    pub fn processed(&self) -> u64 {
        self.processed
    }
}

/// Renders a bracketed gauge of `width` cells followed by the percentage.
///
/// Cell `i` is filled when `i <= percent * width / 100`. The leading carriage
/// return makes consecutive renders overwrite each other.
pub fn render_gauge(percent: u8, width: NonZeroUsize) -> String {
    let width = width.get();
    let pos = usize::from(percent) * width / 100;

    let mut line = String::with_capacity(width + 10);
    line.push_str("\r[");
    for i in 0..width {
        line.push(if i <= pos { '#' } else { '-' });
    }
    line.push_str(&format!("] {percent}% "));
    line
}

/// Draws the gauge on a terminal-like stream, redrawing in place.
///
/// Drawing is best effort: write errors are ignored so a closed or
/// redirected stream never fails the operation.
pub struct Gauge<W: Write> {
    out: W,
    width: NonZeroUsize,
    drawn: bool,
}

impl Gauge<io::Stdout> {
    /// A gauge of [`DEFAULT_GAUGE_WIDTH`] cells on standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout(), DEFAULT_GAUGE_WIDTH)
    }
}

impl<W: Write> Gauge<W> {
    /// A gauge of `width` cells drawn on `out`.
    pub fn new(out: W, width: NonZeroUsize) -> Self {
        Self {
            out,
            width,
            drawn: false,
        }
    }

    /// Ends the gauge line if anything was drawn.
    pub fn finish(&mut self) {
        if self.drawn {
            let _ = self.out.write_all(b"\n");
            let _ = self.out.flush();
            self.drawn = false;
        }
    }

    /// Consumes the gauge and returns the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressObserver for Gauge<W> {
    fn on_progress(&mut self, percent: u8) {
        let line = render_gauge(percent, self.width);
        let _ = self.out.write_all(line.as_bytes());
        let _ = self.out.flush();
        self.drawn = true;
    }
}
