use crate::error;
use std::path::{Path, PathBuf};
use strum_macros::Display;
use tokio::{fs::File, io::AsyncWriteExt};

/// Category of a mission log record.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "UPPERCASE")]
pub enum LogKind {
    Init,
    Command,
    Status,
    Warning,
    Error,
}

/// Durable, timestamped record of one console session.
///
/// The file is truncated when the log is created. Failing writes are reported
/// on the console and otherwise ignored, the simulation never stops because
/// of its log.
#[derive(Debug)]
pub struct MissionLog {
    path: PathBuf,
    file: Option<File>,
}

impl MissionLog {
    const TIMESTAMP_FORMAT: &'static str = "%Y-%m-%d %H:%M:%S%.3f";

    pub async fn create(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file = match File::create(&path).await {
            Ok(file) => Some(file),
            Err(e) => {
                error!("Could not open mission log {}: {e}", path.display());
                None
            }
        };
        Self { path, file }
    }

    pub fn path(&self) -> &Path { &self.path }

    pub fn is_open(&self) -> bool { self.file.is_some() }

    pub async fn record(&mut self, kind: LogKind, message: &str) {
        let Some(file) = self.file.as_mut() else { return };
        let line = Self::format_line(kind, message);
        let written = match file.write_all(line.as_bytes()).await {
            Ok(()) => file.flush().await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            error!("Could not write to mission log {}: {e}", self.path.display());
        }
    }

    fn format_line(kind: LogKind, message: &str) -> String {
        let timestamp = chrono::Utc::now().format(Self::TIMESTAMP_FORMAT);
        format!("[{timestamp}] [{kind}] {message}\n")
    }
}
