//! File logging for sweep runs.
//!
//! Every run appends to one file in the data directory. The viewer owns the
//! terminal, so nothing is logged to stdout or stderr.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "stellar_sweep.log";

/// An append-only log file that is cut back to its newest lines when it
/// grows past a size limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    path: PathBuf,
    /// Size above which the file is trimmed at startup
    pub max_bytes: u64,
    /// Newest bytes kept by a trim, rounded down to whole lines
    pub keep_bytes: u64,
}

impl LogFile {
    /// `{data_dir}/stellar_sweep.log`, trimmed to 1 MB once past 5 MB
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::with_limits(data_dir.join(LOG_FILE_NAME), 5 * 1024 * 1024, 1024 * 1024)
    }

    pub fn with_limits(path: impl Into<PathBuf>, max_bytes: u64, keep_bytes: u64) -> Self {
        Self {
            path: path.into(),
            max_bytes,
            keep_bytes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cut the file down to its newest whole lines if it is over the limit.
    ///
    /// Returns the number of bytes dropped; zero when the file is missing or
    /// small enough.
    pub fn trim(&self) -> io::Result<u64> {
        let mut file = match OpenOptions::new().read(true).write(true).open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e),
        };

        let len = file.metadata()?.len();
        if len <= self.max_bytes {
            return Ok(0);
        }

        let tail_start = len.saturating_sub(self.keep_bytes);
        let mut tail = Vec::with_capacity(self.keep_bytes as usize);
        file.seek(SeekFrom::Start(tail_start))?;
        file.read_to_end(&mut tail)?;

        // Start at a line boundary unless the cut already falls on one
        let starts_mid_line = tail_start > 0 && !previous_byte_is_newline(&mut file, tail_start)?;
        let kept = if starts_mid_line {
            match tail.iter().position(|&b| b == b'\n') {
                Some(newline) => &tail[newline + 1..],
                None => &[][..],
            }
        } else {
            &tail[..]
        };
        let dropped = len - kept.len() as u64;

        file.set_len(0)?;
        file.seek(SeekFrom::Start(0))?;
        writeln!(file, "--- {dropped} bytes of older entries removed ---")?;
        file.write_all(kept)?;
        Ok(dropped)
    }

    /// Trim, then open for appending, creating the file and its directory.
    pub fn open(&self) -> io::Result<File> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        self.trim()?;
        OpenOptions::new().create(true).append(true).open(&self.path)
    }
}

fn previous_byte_is_newline(file: &mut File, offset: u64) -> io::Result<bool> {
    let mut byte = [0u8; 1];
    file.seek(SeekFrom::Start(offset - 1))?;
    file.read_exact(&mut byte)?;
    Ok(byte[0] == b'\n')
}

/// Install the global subscriber, writing to `{data_dir}/stellar_sweep.log`.
///
/// `RUST_LOG` takes precedence over `level`, which applies to both crates.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<PathBuf> {
    let log_file = LogFile::in_dir(data_dir);
    let file = log_file.open()?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("stellar_sweep={level},stellar_sweep_core={level}"))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(path = %log_file.path().display(), "logging initialized");
    Ok(log_file.path().to_path_buf())
}
