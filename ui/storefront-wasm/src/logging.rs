//! `tracing` output for the browser console.
//!
//! A fmt subscriber formats each event; the writer hands the finished line to
//! `console.error` / `console.warn` / `console.debug` / `console.log` by level.

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

/// Decodes a buffered event, dropping the trailing newline fmt appends.
fn finished_line(buf: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(buf);
    let line = text.trim_end_matches(['\n', '\r']);
    if line.is_empty() {
        None
    } else {
        Some(line.to_owned())
    }
}

fn emit(level: Level, line: String) {
    match level {
        Level::ERROR => gloo_console::error!(line),
        Level::WARN => gloo_console::warn!(line),
        Level::DEBUG | Level::TRACE => gloo_console::debug!(line),
        _ => gloo_console::log!(line),
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(line) = finished_line(&self.buf) {
            emit(self.level, line);
        }
        self.buf.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Install the console subscriber. A second call is a no-op.
pub fn init(max_level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(max_level)
        .without_time()
        .try_init();
}
