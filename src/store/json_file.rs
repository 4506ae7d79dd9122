use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use super::{decode, encode, MessageStore};
use crate::error::Result;
use crate::models::message::Message;
use crate::utils::time;

/// Keeps the collection as one pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(format!(".{}.tmp", Uuid::new_v4().simple()));
        PathBuf::from(name)
    }
}

#[async_trait]
impl MessageStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Message>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => decode(&bytes, time::now()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, messages: &[Message]) -> Result<()> {
        let bytes = encode(messages)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write beside the target and rename over it so a crash mid-write
        // leaves the previous collection intact.
        let tmp = self.temp_path();
        if let Err(e) = tokio::fs::write(&tmp, &bytes).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        tracing::debug!(path = %self.path.display(), count = messages.len(), "messages saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample(id: u64) -> Message {
        Message {
            id,
            name: "Alice".into(),
            email: "alice@example.com".into(),
            phone: String::new(),
            subject: "Hi".into(),
            message: "Hello".into(),
            created_at: Utc::now(),
            read: false,
        }
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("messages.json"));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips_and_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("messages.json"));

        let written = vec![sample(1), sample(2)];
        store.save(&written).await.unwrap();
        assert_eq!(store.load().await.unwrap(), written);

        let entries: Vec<_> = std::fs::read_dir(dir.path().join("nested"))
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![OsString::from("messages.json")]);
    }

    #[tokio::test]
    async fn reads_legacy_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.json");
        std::fs::write(
            &path,
            r#"[{"id": 1, "name": "Old", "email": "o@example.com", "phone": "",
                "subject": "s", "message": "m",
                "submission_date": "2023-05-01T08:00:00.000001", "is_read": true}]"#,
        )
        .unwrap();

        let loaded = JsonFileStore::new(&path).load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].read);
    }
}
