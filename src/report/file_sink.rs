use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use super::record::Record;
use super::sink::ReportSink;
use crate::shared::WatchError;

/// Writes each report to `<base>/<room name>/<user id> - <display name>.txt`.
///
/// Directories are created as needed; an existing file for the same
/// participant is overwritten. Writes are small and synchronous.
pub struct FileReportSink {
    base_dir: PathBuf,
}

impl FileReportSink {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn record_path(&self, record: &Record) -> PathBuf {
        self.base_dir
            .join(&record.room_name)
            .join(format!("{} - {}.txt", record.user_id, record.display_name))
    }
}

#[async_trait]
impl ReportSink for FileReportSink {
    async fn deliver(&self, record: &Record) -> Result<(), WatchError> {
        let path = self.record_path(record);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &record.body)?;

        debug!(path = %path.display(), "Report written to file");
        Ok(())
    }

    fn sink_name(&self) -> &'static str {
        "FileReportSink"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::Participant;

    fn record_for(room: &str, user_id: &str, name: &str, body: &str) -> Record {
        let mut record = Record::build(room, &Participant::new(user_id, name), "Hat");
        record.body = body.to_string();
        record
    }

    #[tokio::test]
    async fn test_deliver_writes_file_under_room_dir() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileReportSink::new(dir.path());
        let record = record_for("Lobby 1", "U1", "Alice", "report text");

        sink.deliver(&record).await.unwrap();

        let path = dir.path().join("Lobby 1").join("U1 - Alice.txt");
        assert_eq!(fs::read_to_string(path).unwrap(), "report text");
    }

    #[tokio::test]
    async fn test_deliver_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = FileReportSink::new(dir.path());

        sink.deliver(&record_for("Lobby 1", "U1", "Alice", "first"))
            .await
            .unwrap();
        sink.deliver(&record_for("Lobby 1", "U1", "Alice", "second"))
            .await
            .unwrap();

        let path = dir.path().join("Lobby 1").join("U1 - Alice.txt");
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }

    #[tokio::test]
    async fn test_deliver_fails_on_unwritable_base() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the base directory should be
        let blocker = dir.path().join("base");
        fs::write(&blocker, "not a directory").unwrap();

        let sink = FileReportSink::new(&blocker);
        let record = record_for("Lobby 1", "U1", "Alice", "report text");

        assert!(sink.deliver(&record).await.is_err());
    }
}
