//! Browser console logging
//!
//! `tracing` events are formatted by a fmt layer and each finished line is
//! forwarded to the `console` method matching its level.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};
use wasm_bindgen::JsValue;
use web_sys::console;

/// `console` method an event is written with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Log,
}

impl ConsoleMethod {
    fn for_level(level: Level) -> Self {
        match level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::INFO => ConsoleMethod::Info,
            _ => ConsoleMethod::Log,
        }
    }
}

/// Hands out one [`ConsoleWriter`] per event
pub struct ConsoleMakeWriter;

/// Buffers a formatted event and emits it on flush/drop
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn emit(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        {
            let text = String::from_utf8_lossy(&self.buffer);
            let line = JsValue::from_str(text.trim_end());
            match ConsoleMethod::for_level(self.level) {
                ConsoleMethod::Error => console::error_1(&line),
                ConsoleMethod::Warn => console::warn_1(&line),
                ConsoleMethod::Info => console::info_1(&line),
                ConsoleMethod::Log => console::log_1(&line),
            }
        }
        self.buffer.clear();
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buffer: Vec::new(),
        }
    }
}

/// Initialize logging to the browser console.
///
/// Timestamps are left to the devtools (the wasm target has no system clock)
/// and ANSI colors are off. Default level is INFO with DEBUG for our crates.
pub fn init_logging() {
    let console_layer = fmt::layer()
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_level(true);

    let env_filter = EnvFilter::new("info,arcade_core=debug,arcade_frontend=debug");

    if let Err(e) = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
    {
        console::warn_1(&format!("Logging already initialized: {}", e).into());
    }
}
