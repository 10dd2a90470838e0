//! Tracing setup: human-readable console output plus a plain log file

use anyhow::{Context, Result};
use indicatif::MultiProgress;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber.
///
/// Console lines go to stdout without timestamps and are printed with the
/// progress bars in `bars` suspended; the log file gets timestamp, level and
/// message for every event. `RUST_LOG` overrides the default `info` filter.
pub fn init(log_file: &Path, bars: MultiProgress) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Could not open log file: {}", log_file.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(ConsoleWriter::new(bars, io::stdout))
                .with_target(false)
                .without_time(),
        )
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_target(false)
                .with_ansi(false),
        )
        .try_init()
        .context("Could not install log subscriber")?;

    Ok(())
}

/// Console writer that clears the progress bars while a log line is printed
pub struct ConsoleWriter<F> {
    bars: MultiProgress,
    out: F,
}

impl<F, W> ConsoleWriter<F>
where
    F: Fn() -> W,
    W: Write,
{
    pub fn new(bars: MultiProgress, out: F) -> Self {
        Self { bars, out }
    }
}

impl<'a, F, W> MakeWriter<'a> for ConsoleWriter<F>
where
    F: Fn() -> W + 'a,
    W: Write,
{
    type Writer = ConsoleLine<'a, W>;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine {
            bars: &self.bars,
            out: (self.out)(),
        }
    }
}

/// Writer for one formatted event; the fmt layer hands over each event in a
/// single `write_all`
pub struct ConsoleLine<'a, W> {
    bars: &'a MultiProgress,
    out: W,
}

impl<W: Write> Write for ConsoleLine<'_, W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let out = &mut self.out;
        self.bars.suspend(|| out.write(data))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
