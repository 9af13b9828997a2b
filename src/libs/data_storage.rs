use std::env::consts::OS;
use std::env::var;
use std::io;
use std::path::{Path, PathBuf};
use std::fs;

pub const APP_DIR: &str = ".sloneek";

/// Per-user directory holding the profiles file (`~/.sloneek`).
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStorage {
    pub fn new() -> Self {
        let home = match OS {
            "windows" => var("USERPROFILE").or_else(|_| var("HOME")).unwrap_or_else(|_| ".".into()),
            _ => var("HOME").unwrap_or_else(|_| ".".into()),
        };
        Self {
            base_path: Path::new(&home).join(APP_DIR),
        }
    }

    pub fn get_path(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }

    /// Like [`DataStorage::get_path`] but creates the directory first.
    pub fn ensure_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.get_path(file_name))
    }
}
