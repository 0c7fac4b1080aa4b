use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use tracing_subscriber::{fmt::MakeWriter, EnvFilter};

/// Log output held in memory while the board owns the screen, written out
/// once the terminal is restored.
#[derive(Clone, Default)]
pub struct DeferredLog {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl DeferredLog {
    pub fn flush_to(&self, out: &mut impl Write) -> io::Result<()> {
        let mut buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        out.write_all(&buffer)?;
        buffer.clear();
        out.flush()
    }
}

impl Write for DeferredLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for DeferredLog {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Install the global subscriber. `RUST_LOG` picks the level, `warn` by default.
pub fn init() -> DeferredLog {
    let log = DeferredLog::default();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log.clone())
        .with_target(false)
        .init();
    log
}
