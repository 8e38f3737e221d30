//! Size-based file rotation

use std::fs;
use std::path::{Path, PathBuf};

use jiff::Timestamp;

use crate::logger::config::RotationConfig;
use crate::logger::error::LoggerError;

/// Renames full log files aside and prunes the oldest ones.
pub struct RotationManager {
    config: RotationConfig,
}

impl RotationManager {
    pub fn new(config: RotationConfig) -> Self {
        Self { config }
    }

    pub fn should_rotate(&self, current_file_size: u64) -> bool {
        current_file_size >= self.config.max_size
    }

    /// Moves `current_path` to a timestamped name, then removes the oldest
    /// rotated files beyond the configured count.
    pub fn rotate(&mut self, current_path: &Path) -> Result<(), LoggerError> {
        if current_path.exists() {
            let rotated_path = rotated_path(current_path);
            fs::rename(current_path, &rotated_path).map_err(|e| {
                LoggerError::rotation(format!(
                    "Failed to rename {} to {}: {}",
                    current_path.display(),
                    rotated_path.display(),
                    e
                ))
            })?;
        }

        self.cleanup_old_files(current_path)
    }

    /// Keeps at most `max_files - 1` rotated files next to the active one.
    fn cleanup_old_files(&self, base_path: &Path) -> Result<(), LoggerError> {
        let mut rotated = rotated_files(base_path)?;

        // Oldest first, names break ties within one mtime tick
        rotated.sort_by(|a, b| {
            let a_time = fs::metadata(a).and_then(|m| m.modified()).ok();
            let b_time = fs::metadata(b).and_then(|m| m.modified()).ok();
            a_time.cmp(&b_time).then_with(|| a.cmp(b))
        });

        let excess = (rotated.len() + 1).saturating_sub(self.config.max_files);
        for oldest in rotated.iter().take(excess) {
            fs::remove_file(oldest)?;
        }

        Ok(())
    }
}

/// `app.log` becomes `app.<unix millis>.log`, with a counter on collision.
fn rotated_path(base_path: &Path) -> PathBuf {
    let stem = base_path.file_stem().unwrap_or_default().to_string_lossy();
    let ext = base_path.extension().map(|e| e.to_string_lossy());
    let millis = Timestamp::now().as_millisecond();

    let name = |suffix: String| match &ext {
        Some(ext) => format!("{}.{}.{}", stem, suffix, ext),
        None => format!("{}.{}", stem, suffix),
    };

    let mut candidate = base_path.with_file_name(name(millis.to_string()));
    let mut n = 1;
    while candidate.exists() {
        candidate = base_path.with_file_name(name(format!("{}-{}", millis, n)));
        n += 1;
    }
    candidate
}

/// Rotated siblings of `base_path`: same directory, name starting with `<stem>.`.
fn rotated_files(base_path: &Path) -> Result<Vec<PathBuf>, LoggerError> {
    let parent = match base_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let prefix = format!(
        "{}.",
        base_path.file_stem().unwrap_or_default().to_string_lossy()
    );
    let active = base_path.file_name();

    Ok(fs::read_dir(parent)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            let file_name = entry.file_name();
            Some(file_name.as_os_str()) != active
                && file_name.to_string_lossy().starts_with(&prefix)
        })
        .map(|entry| entry.path())
        .collect())
}
