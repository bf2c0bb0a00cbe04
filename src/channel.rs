//! Ingestion channel lifecycle
//!
//! The ingestion channel is a named, byte-oriented inter-process conduit (a
//! FIFO on unix). The monitor creates it if absent and opens the reading end;
//! sensor emitters open the writing end. Opening either end of a FIFO blocks
//! until the peer arrives, which is the intended startup handshake.
//!
//! Everything here also works against a regular file, which is how the
//! integration tests drive the pipeline without inter-process setup.

#![allow(unsafe_code)] // mkfifo has no std wrapper

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use crate::errors::MonitorError;

/// Create the named channel if it does not exist yet
pub fn ensure_fifo(path: &Path) -> Result<(), MonitorError> {
    if path.exists() {
        log::info!("ingestion channel {} already exists", path.display());
        return Ok(());
    }

    create_fifo(path).map_err(|source| MonitorError::ChannelCreate {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("created ingestion channel {}", path.display());
    Ok(())
}

#[cfg(unix)]
fn create_fifo(path: &Path) -> io::Result<()> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains NUL byte"))?;

    // Mode 0666, further restricted by the process umask.
    let rc = unsafe { libc::mkfifo(c_path.as_ptr(), 0o666) };
    if rc == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
fn create_fifo(_path: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "named channels require a unix platform",
    ))
}

/// Open the reading end of the channel
pub fn open_reader(path: &Path) -> Result<File, MonitorError> {
    File::open(path).map_err(|source| MonitorError::ChannelOpen {
        path: path.display().to_string(),
        source,
    })
}

/// Open the writing end of the channel
pub fn open_writer(path: &Path) -> Result<File, MonitorError> {
    OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|source| MonitorError::ChannelOpen {
            path: path.display().to_string(),
            source,
        })
}
