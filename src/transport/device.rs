//! # Device File Transport
//!
//! Writes jobs to a printer exposed as a file: a USB line printer
//! (`/dev/usb/lp0`), a serial or Bluetooth RFCOMM port (`/dev/ttyUSB0`,
//! `/dev/rfcomm0`), or a plain file for spooling and testing.
//!
//! ## TTY Configuration
//!
//! When the destination is a terminal device it is switched to raw mode so
//! binary data is transmitted without modification:
//!
//! - **No input processing**: Disable IGNBRK, BRKINT, PARMRK, ISTRIP, etc.
//! - **No output processing**: Disable OPOST (no LF to CR/LF translation)
//! - **8-bit characters**: CS8 (8 data bits, no parity)
//! - **No echo, non-canonical mode**
//!
//! ## Destinations
//!
//! [`DeviceDelivery`] maps printer identifiers to paths. Without a device
//! directory the identifier *is* the path. With one, identifiers are bare
//! names inside that directory.

use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{debug, info, instrument};

use super::Delivery;
use crate::error::TicketeraError;

/// # Device Printer Transport
///
/// An open, writable printer device.
///
/// ## Example
///
/// ```no_run
/// use ticketera::protocol::commands;
/// use ticketera::transport::DeviceTransport;
///
/// let mut transport = DeviceTransport::open("/dev/usb/lp0")?;
/// transport.write_all(&commands::init())?;
///
/// # Ok::<(), ticketera::error::TicketeraError>(())
/// ```
pub struct DeviceTransport {
    file: File,
    path: PathBuf,
}

impl DeviceTransport {
    /// Open a device for writing.
    ///
    /// Regular files are created if missing but never truncated; use
    /// [`DeviceTransport::open_spool`] for files that should hold exactly one
    /// job.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The device or its parent directory doesn't exist
    /// - Permission denied (may need the `lp` or `dialout` group)
    /// - TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P) -> Result<Self, TicketeraError> {
        Self::open_with(device.as_ref(), false)
    }

    /// Open a device for writing, truncating regular files first.
    pub fn open_spool<P: AsRef<Path>>(device: P) -> Result<Self, TicketeraError> {
        Self::open_with(device.as_ref(), true)
    }

    fn open_with(path: &Path, truncate: bool) -> Result<Self, TicketeraError> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(truncate)
            .open(path)
            .map_err(|e| {
                TicketeraError::Delivery(format!("Failed to open {}: {}", path.display(), e))
            })?;

        if is_tty(file.as_raw_fd()) {
            configure_tty_raw(file.as_raw_fd())?;
        }

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Write the whole buffer and flush it.
    ///
    /// A short write surfaces as an error (`WriteZero`), never as silent
    /// truncation.
    pub fn write_all(&mut self, data: &[u8]) -> Result<(), TicketeraError> {
        self.file.write_all(data).map_err(|e| {
            TicketeraError::Delivery(format!("Write to {} failed: {}", self.path.display(), e))
        })?;

        self.file.flush().map_err(|e| {
            TicketeraError::Delivery(format!("Flush of {} failed: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}

fn is_tty(fd: i32) -> bool {
    unsafe { libc::isatty(fd) == 1 }
}

/// Configure a file descriptor for raw TTY mode.
///
/// Note: IXON/IXOFF/IXANY disable XON/XOFF software flow control, since 0x11
/// and 0x13 can appear in command parameters.
fn configure_tty_raw(fd: i32) -> Result<(), TicketeraError> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(TicketeraError::Delivery(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    termios.c_oflag &= !libc::OPOST;

    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(TicketeraError::Delivery(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

// ============================================================================
// DELIVERY
// ============================================================================

/// Delivers jobs to device files named by printer identifiers.
///
/// Holds one lock per destination; a job is written while holding its
/// destination's lock, so concurrent jobs to the same printer are serialized
/// and jobs to different printers proceed in parallel. Destinations are
/// keyed by their canonical path, so aliases (`..`, symlinks) share a lock.
/// Entries are dropped once no job holds them.
///
/// Files inside a device directory are spools and are truncated before each
/// job. Verbatim paths are only opened for writing.
#[derive(Debug, Default)]
pub struct DeviceDelivery {
    device_dir: Option<PathBuf>,
    locks: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl DeviceDelivery {
    /// Deliver to paths given verbatim by the printer identifier.
    ///
    /// Any writable path is accepted, so this is meant for local tools (the
    /// `print` subcommand), not for network-facing servers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver to bare device names inside `dir`.
    pub fn with_device_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            device_dir: Some(dir.into()),
            locks: Mutex::default(),
        }
    }

    pub fn device_dir(&self) -> Option<&Path> {
        self.device_dir.as_deref()
    }

    /// Map a printer identifier to a device path.
    pub fn resolve(&self, printer: &str) -> Result<PathBuf, TicketeraError> {
        if printer.is_empty() {
            return Err(TicketeraError::InvalidRequest(
                "printer identifier is empty".to_string(),
            ));
        }

        let Some(dir) = &self.device_dir else {
            return Ok(PathBuf::from(printer));
        };

        let mut components = Path::new(printer).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if name == printer => Ok(dir.join(name)),
            _ => Err(TicketeraError::InvalidRequest(format!(
                "printer {:?} must be a device name inside {}",
                printer,
                dir.display()
            ))),
        }
    }

    fn acquire(&self, key: &Path) -> Result<Arc<Mutex<()>>, TicketeraError> {
        let mut locks = self
            .locks
            .lock()
            .map_err(|_| TicketeraError::Delivery("device lock table poisoned".to_string()))?;
        Ok(locks.entry(key.to_path_buf()).or_default().clone())
    }

    fn release(&self, key: &Path, lock: Arc<Mutex<()>>) {
        if let Ok(mut locks) = self.locks.lock() {
            // One reference in the table plus ours: nobody else is waiting.
            if Arc::strong_count(&lock) == 2 {
                locks.remove(key);
            }
        }
    }

    fn write_job(&self, path: &Path, job: &[u8]) -> Result<(), TicketeraError> {
        debug!(path = %path.display(), "opening device");
        let mut transport = if self.device_dir.is_some() {
            DeviceTransport::open_spool(path)?
        } else {
            DeviceTransport::open(path)?
        };
        transport.write_all(job)
    }
}

/// Canonical form of a destination, used as its lock key.
///
/// Falls back to canonicalizing the parent when the file doesn't exist yet,
/// and to the path as given when neither exists.
fn lock_key(path: &Path) -> PathBuf {
    if let Ok(canonical) = fs::canonicalize(path) {
        return canonical;
    }
    match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let parent = if parent.as_os_str().is_empty() {
                Path::new(".")
            } else {
                parent
            };
            fs::canonicalize(parent)
                .map(|p| p.join(name))
                .unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

impl Delivery for DeviceDelivery {
    #[instrument(skip(self, job), fields(job_len = job.len()))]
    fn deliver(&self, printer: &str, job: &[u8]) -> Result<(), TicketeraError> {
        let path = self.resolve(printer)?;
        let key = lock_key(&path);
        let lock = self.acquire(&key)?;

        let result = match lock.lock() {
            Ok(_guard) => self.write_job(&path, job),
            Err(_) => Err(TicketeraError::Delivery(format!(
                "lock for {} poisoned",
                key.display()
            ))),
        };
        self.release(&key, lock);
        result?;

        info!(path = %path.display(), bytes = job.len(), "job delivered");
        Ok(())
    }
}
