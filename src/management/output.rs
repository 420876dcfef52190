use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::{
    error::{ExtractError, Res},
    types::AssembledRecord,
};

/// Stores assembled records as JSON Lines, one file per country and date:
/// `<root>/featured/YYYYMMDD/ISO-YYYYMMDD.jsonl`.
pub struct RecordFileManager {
    root: PathBuf,
}

impl RecordFileManager {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn featured_dir(&self, date: NaiveDate) -> PathBuf {
        self.root
            .join("featured")
            .join(date.format("%Y%m%d").to_string())
    }

    pub fn file_path(&self, iso: &str, date: NaiveDate) -> PathBuf {
        self.featured_dir(date).join(format!(
            "{iso}-{date}.jsonl",
            iso = iso,
            date = date.format("%Y%m%d")
        ))
    }

    /// Whether records for `iso` on `date` have been stored already.
    pub async fn exists(&self, iso: &str, date: NaiveDate) -> bool {
        async_fs::metadata(self.file_path(iso, date))
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }

    /// Writes the records and returns the file path. The file only appears
    /// once it is complete.
    pub async fn persist(
        &self,
        iso: &str,
        date: NaiveDate,
        records: &[AssembledRecord],
    ) -> Res<PathBuf> {
        let path = self.file_path(iso, date);
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let mut content = String::new();
        for record in records {
            let line = serde_json::to_string(record).map_err(std::io::Error::other)?;
            content.push_str(&line);
            content.push('\n');
        }

        let partial = path.with_extension("jsonl.partial");
        async_fs::write(&partial, content).await?;
        async_fs::rename(&partial, &path).await?;
        Ok(path)
    }

    /// Reads a stored file back as JSON values, one per line.
    pub async fn load(&self, iso: &str, date: NaiveDate) -> Res<Vec<serde_json::Value>> {
        let content = async_fs::read_to_string(self.file_path(iso, date)).await?;
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line).map_err(|e| ExtractError::Output(std::io::Error::other(e)))
            })
            .collect()
    }
}
