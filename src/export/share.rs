// Share collaborators for exported files.
// The default hands the file to the OS handler; `NoShare` only leaves it on disk.

use std::path::Path;

use tracing::info;

use crate::config::ShareMode;
use crate::error::{Result, ShiftError};

/// Presents an exported file to the operator.
pub trait Share {
    fn share(&self, path: &Path) -> Result<()>;
}

/// Opens the file with the system default application.
#[derive(Debug, Default)]
pub struct OpenShare;

impl Share for OpenShare {
    fn share(&self, path: &Path) -> Result<()> {
        open::that(path).map_err(|e| ShiftError::Share {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        info!(path = %path.display(), "Opened export");
        Ok(())
    }
}

/// Leaves the written file alone.
#[derive(Debug, Default)]
pub struct NoShare;

impl Share for NoShare {
    fn share(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

/// Build the share collaborator for a configured mode.
pub fn for_mode(mode: ShareMode) -> Box<dyn Share> {
    match mode {
        ShareMode::Open => Box::new(OpenShare),
        ShareMode::None => Box::new(NoShare),
    }
}
