//! CSV Lead Log
//!
//! One row per lead: `email,item_id,submitted_at`. The header is written
//! when the file is new or empty. Each row goes out in a single append
//! write so concurrent writers never interleave inside a line.

use crate::domain::entities::LeadRecord;
use crate::domain::repository::LeadLog;
use crate::error::LeadResult;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

const HEADER: [&str; 3] = ["email", "item_id", "submitted_at"];

/// Append-only CSV file
#[derive(Debug, Clone)]
pub struct CsvLeadLog {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl CsvLeadLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeadLog for CsvLeadLog {
    async fn append(&self, lead: &LeadRecord) -> LeadResult<()> {
        // Header check and row write must not race with another append
        let _guard = self.write_lock.lock().await;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        let with_header = file.metadata().await?.len() == 0;
        let bytes = encode_rows(lead, with_header)?;

        file.write_all(&bytes).await?;
        file.flush().await?;

        tracing::debug!(path = %self.path.display(), "Lead appended");
        Ok(())
    }
}

fn encode_rows(lead: &LeadRecord, with_header: bool) -> LeadResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    if with_header {
        writer.write_record(HEADER)?;
    }
    writer.write_record([
        lead.email.as_str(),
        lead.item_id_text().as_str(),
        lead.submitted_at_rfc3339().as_str(),
    ])?;

    writer
        .into_inner()
        .map_err(|e| e.into_error().into())
}
