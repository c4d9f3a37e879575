//! Daily rotating log file writer with date-based retention.
//!
//! Log lines go to `<dir>/<prefix>-YYYY-MM-DD.log`, one file per UTC day. When
//! the day changes the next file is opened and files older than the retention
//! window are removed.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use chrono::{DateTime, Days, NaiveDate, Utc};
use tracing_subscriber::fmt::MakeWriter;

/// Thread-safe daily rotating file writer.
///
/// Cloning is cheap and every clone writes through the same file handle, which
/// lets the writer be handed to `tracing_subscriber` as a `MakeWriter`.
///
/// # Rotation Strategy
///
/// 1. Compare the UTC date of each write with the date of the open file
/// 2. On a new date, open (append) `<prefix>-<date>.log`
/// 3. Delete `<prefix>-<date>.log` files dated before `today - retention_days`
#[derive(Clone)]
pub struct RollingFileWriter {
    inner: Arc<Inner>,
}

struct Inner {
    directory: PathBuf,
    prefix: String,
    retention_days: u32,
    active: Mutex<Option<ActiveFile>>,
}

struct ActiveFile {
    date: NaiveDate,
    file: File,
    pruned: bool,
}

impl RollingFileWriter {
    /// Creates the log directory and a writer over it.
    ///
    /// No file is opened until the first write.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be created.
    pub fn new(
        directory: impl Into<PathBuf>,
        prefix: impl Into<String>,
        retention_days: u32,
    ) -> io::Result<Self> {
        let directory = directory.into();
        fs::create_dir_all(&directory)?;

        Ok(Self {
            inner: Arc::new(Inner {
                directory,
                prefix: prefix.into(),
                retention_days,
                active: Mutex::new(None),
            }),
        })
    }

    /// Path of the file that receives writes made on `date`.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.inner
            .directory
            .join(format!("{}-{}.log", self.inner.prefix, date.format("%Y-%m-%d")))
    }

    /// Writes `buf` to the file for the date of `now`, rotating first if needed.
    pub fn write_at(&self, now: DateTime<Utc>, buf: &[u8]) -> io::Result<()> {
        let date = now.date_naive();

        let mut active = self
            .inner
            .active
            .lock()
            .map_err(|e| io::Error::other(format!("Mutex poisoned: {e}")))?;

        if active.as_ref().map_or(true, |current| current.date != date) {
            *active = None;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.path_for(date))?;
            *active = Some(ActiveFile {
                date,
                file,
                pruned: false,
            });
        }

        let current = active
            .as_mut()
            .ok_or_else(|| io::Error::other("No file available"))?;

        // Retried until a sweep completes. `tracing` would re-enter this writer.
        if !current.pruned {
            match self.prune(date) {
                Ok(()) => current.pruned = true,
                Err(e) => eprintln!(
                    "Failed to prune log files in {}: {e}",
                    self.inner.directory.display()
                ),
            }
        }

        current.file.write_all(buf)?;
        current.file.flush()
    }

    /// Removes files dated before the retention window.
    ///
    /// Files that do not match `<prefix>-YYYY-MM-DD.log` are left alone, and a
    /// file that cannot be removed does not stop the sweep.
    fn prune(&self, today: NaiveDate) -> io::Result<()> {
        let Some(cutoff) = today.checked_sub_days(Days::new(u64::from(self.inner.retention_days)))
        else {
            return Ok(());
        };

        for entry in fs::read_dir(&self.inner.directory)?.filter_map(Result::ok) {
            let path = entry.path();
            if let Some(date) = self.file_date(&path) {
                if date < cutoff {
                    let _ = fs::remove_file(&path);
                }
            }
        }

        Ok(())
    }

    fn file_date(&self, path: &Path) -> Option<NaiveDate> {
        let name = path.file_name()?.to_str()?;
        let date = name
            .strip_prefix(self.inner.prefix.as_str())?
            .strip_prefix('-')?
            .strip_suffix(".log")?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
    }
}

impl Write for RollingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_at(Utc::now(), buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RollingFileWriter {
    type Writer = RollingFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl std::fmt::Debug for RollingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RollingFileWriter")
            .field("directory", &self.inner.directory)
            .field("prefix", &self.inner.prefix)
            .field("retention_days", &self.inner.retention_days)
            .finish_non_exhaustive()
    }
}
