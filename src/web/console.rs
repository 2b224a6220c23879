use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

pub(super) fn init() {
  let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
  tracing_subscriber::fmt()
    .with_writer(Console)
    .with_max_level(level)
    .with_ansi(false)
    .without_time()
    .init();
}

/// Sends each formatted event to the console method matching its level.
struct Console;

struct ConsoleWriter {
  level: Level,
  buf: Vec<u8>,
}

impl<'a> MakeWriter<'a> for Console {
  type Writer = ConsoleWriter;

  fn make_writer(&'a self) -> ConsoleWriter {
    ConsoleWriter { level: Level::INFO, buf: Vec::new() }
  }

  fn make_writer_for(&'a self, meta: &Metadata<'_>) -> ConsoleWriter {
    ConsoleWriter { level: *meta.level(), buf: Vec::new() }
  }
}

impl io::Write for ConsoleWriter {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.buf.extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

impl ConsoleWriter {
  /// Buffered event text, or `None` when there is nothing to print.
  fn line(&self) -> Option<String> {
    let line = String::from_utf8_lossy(&self.buf);
    let line = line.trim_end();
    (!line.is_empty()).then(|| line.to_owned())
  }
}

impl Drop for ConsoleWriter {
  fn drop(&mut self) {
    if let Some(line) = self.line() {
      ConsoleMethod::from(self.level).call(&JsValue::from_str(&line));
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConsoleMethod {
  Error,
  Warn,
  Info,
  Debug,
}

impl From<Level> for ConsoleMethod {
  fn from(level: Level) -> Self {
    match level {
      Level::ERROR => Self::Error,
      Level::WARN => Self::Warn,
      Level::INFO => Self::Info,
      _ => Self::Debug,
    }
  }
}

impl ConsoleMethod {
  fn call(self, line: &JsValue) {
    match self {
      Self::Error => console::error_1(line),
      Self::Warn => console::warn_1(line),
      Self::Info => console::info_1(line),
      Self::Debug => console::debug_1(line),
    }
  }
}
