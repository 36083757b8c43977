use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Layout of the timestamp in front of every console line, e.g. `2016/01/02 15:04:05`.
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Destination for fully formatted log lines.
///
/// Implementations own whatever metadata they add (timestamps) and their own
/// thread-safety; the logger hands over one complete line per call.
pub trait LineWriter {
    fn write_line(&self, line: &str);
}

/// Writes timestamped lines to standard error.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stderr;

/// Writes timestamped lines to standard output.
#[derive(Clone, Copy, Debug, Default)]
pub struct Stdout;

/// Writes `line` behind a local timestamp in a single `write_all`.
fn write_stamped<W: Write + ?Sized>(out: &mut W, line: &str) -> io::Result<()> {
    let stamped = format!(
        "{} {}\n", chrono::Local::now().format(TIMESTAMP_FORMAT), line
    );
    out.write_all(stamped.as_bytes())
}

impl LineWriter for Stderr {
    fn write_line(&self, line: &str) {
        // Nowhere left to report a failing stderr.
        let _ = write_stamped(&mut io::stderr().lock(), line);
    }
}

impl LineWriter for Stdout {
    fn write_line(&self, line: &str) {
        let mut out = io::stdout().lock();
        let _ = write_stamped(&mut out, line).and_then(|_| out.flush());
    }
}

impl<W: Write> LineWriter for Mutex<W> {
    fn write_line(&self, line: &str) {
        let mut out = self.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = write_stamped(&mut *out, line);
    }
}

impl<T: LineWriter + ?Sized> LineWriter for &T {
    #[inline]
    fn write_line(&self, line: &str) {
        (**self).write_line(line)
    }
}

impl<T: LineWriter + ?Sized> LineWriter for Arc<T> {
    #[inline]
    fn write_line(&self, line: &str) {
        (**self).write_line(line)
    }
}
