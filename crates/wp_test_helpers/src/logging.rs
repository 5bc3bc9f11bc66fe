//! Log setup and capture for tests

use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{fmt::MakeWriter, EnvFilter};

/// Install a process-wide test subscriber at `level` (`RUST_LOG` wins)
///
/// Later calls in the same test binary are no-ops.
pub fn init_test_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

/// Errors only
pub fn suppress_logs() {
    init_test_logging("error");
}

/// Run `f` under a thread-local subscriber and return what it logged
///
/// Output is plain text without timestamps or colour, e.g.
/// `INFO mcp: Handling MCP request method=ping`.
///
/// ```rust
/// use wp_test_helpers::logging::capture_logs;
///
/// let logs = capture_logs("info", || tracing::info!(section = "Abstract", "lookup"));
/// assert!(logs.contains("lookup"));
/// ```
pub fn capture_logs(level: &str, f: impl FnOnce()) -> String {
    let buffer = CaptureBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(buffer.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    buffer.contents()
}

#[derive(Clone, Default)]
struct CaptureBuffer(Arc<Mutex<Vec<u8>>>);

impl CaptureBuffer {
    fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut inner) = self.0.lock() {
            inner.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureBuffer {
    type Writer = CaptureBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_respects_level() {
        let logs = capture_logs("warn", || {
            tracing::info!("hidden");
            tracing::warn!(term = "Epilogue", "Section missing");
        });
        assert!(!logs.contains("hidden"));
        assert!(logs.contains("WARN"));
        assert!(logs.contains("Section missing"));
        assert!(logs.contains("Epilogue"));
    }
}
