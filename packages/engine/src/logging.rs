//! Log sink for the engine's `tracing` events.
//!
//! In the browser each formatted event goes to the devtools console at the
//! matching level. Native hosts get the plain `fmt` subscriber on stderr.

use tracing::Level;

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging() {
    init_with_level(Level::INFO);
}

pub fn init_with_level(level: Level) {
    #[cfg(target_arch = "wasm32")]
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(browser::ConsoleMakeWriter)
        .with_ansi(false)
        .without_time()
        .try_init();

    #[cfg(not(target_arch = "wasm32"))]
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .try_init();

    if installed.is_ok() {
        tracing::debug!(%level, "logging initialized");
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::io;

    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;
    use web_sys::console;

    pub(super) struct ConsoleMakeWriter;

    /// Buffers one formatted event and emits it on drop.
    pub(super) struct ConsoleWriter {
        level: Level,
        buf: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
            self.buf.extend_from_slice(bytes);
            Ok(bytes.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let text = String::from_utf8_lossy(&self.buf);
            let text = text.trim_end();
            if text.is_empty() {
                return;
            }
            let msg = JsValue::from_str(text);
            if self.level == Level::ERROR {
                console::error_1(&msg);
            } else if self.level == Level::WARN {
                console::warn_1(&msg);
            } else if self.level == Level::INFO {
                console::info_1(&msg);
            } else {
                console::debug_1(&msg);
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter { level: Level::INFO, buf: Vec::new() }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter { level: *meta.level(), buf: Vec::new() }
        }
    }
}
