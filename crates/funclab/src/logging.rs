use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE: &str = "funclab.log";

/// Size past which the log is trimmed (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Tail kept when trimming (1 MB)
const KEEP_SIZE: u64 = 1024 * 1024;

const TRIM_MARKER: &[u8] = b"--- earlier entries removed ---\n";

/// Cut the log down to its most recent `keep` bytes once it exceeds `limit`.
/// The kept tail starts at a line boundary.
fn trim_log_to(log_path: &Path, limit: u64, keep: u64) -> io::Result<bool> {
    let len = match fs::metadata(log_path) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= limit {
        return Ok(false);
    }

    let mut tail = Vec::new();
    {
        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(len.saturating_sub(keep)))?;
        file.read_to_end(&mut tail)?;
    }

    let line_start = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |i| i + 1);

    let mut file = File::create(log_path)?;
    file.write_all(TRIM_MARKER)?;
    file.write_all(&tail[line_start..])?;
    Ok(true)
}

fn trim_log(log_path: &Path) -> io::Result<bool> {
    trim_log_to(log_path, MAX_LOG_SIZE, KEEP_SIZE)
}

/// Log file shared by every writer the subscriber asks for.
#[derive(Clone)]
struct SharedFile(Arc<Mutex<File>>);

impl SharedFile {
    fn new(file: File) -> Self {
        Self(Arc::new(Mutex::new(file)))
    }
}

impl Write for SharedFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFile {
    type Writer = SharedFile;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Send `tracing` output to `{data_dir}/funclab.log`.
///
/// The file is trimmed to its last 1 MB whenever it grows past 5 MB.
/// `RUST_LOG` takes precedence over `level`.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join(LOG_FILE);

    if let Err(e) = trim_log(&log_path) {
        eprintln!("Warning: could not trim {}: {e}", log_path.display());
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(SharedFile::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::debug!(log_path = %log_path.display(), "Logging initialized");
    Ok(())
}

fn default_filter(level: &str) -> String {
    format!("funclab={level},funclab_core=warn")
}
