//! Stderr sink for log output that holds lines back while the TUI owns the
//! terminal.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use tracing_subscriber::fmt::MakeWriter;

static BUFFER: Mutex<Option<Vec<String>>> = Mutex::new(None);

fn buffer() -> MutexGuard<'static, Option<Vec<String>>> {
    BUFFER.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Activate buffering. While active, log output is stored instead of
/// printed to stderr.
pub fn activate() {
    *buffer() = Some(Vec::new());
}

/// Deactivate buffering and return all collected output.
pub fn drain() -> Vec<String> {
    buffer().take().unwrap_or_default()
}

/// Print everything collected while buffering was active.
pub fn flush_to_stderr() {
    let mut stderr = io::stderr().lock();
    for chunk in drain() {
        let _ = stderr.write_all(chunk.as_bytes());
    }
}

/// Write a chunk of output. If buffering is active the chunk is stored;
/// otherwise it goes straight to stderr.
pub fn write_chunk(chunk: &[u8]) -> io::Result<()> {
    let mut guard = buffer();
    if let Some(buf) = guard.as_mut() {
        buf.push(String::from_utf8_lossy(chunk).into_owned());
        Ok(())
    } else {
        drop(guard);
        io::stderr().write_all(chunk)
    }
}

/// `MakeWriter` for the tracing subscriber that routes through the buffer
#[derive(Debug, Clone, Copy, Default)]
pub struct BufferedStderr;

impl<'a> MakeWriter<'a> for BufferedStderr {
    type Writer = BufferedStderr;

    fn make_writer(&'a self) -> Self::Writer {
        *self
    }
}

impl Write for BufferedStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        write_chunk(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}
