use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Print-layout record; the default template for a form key renders label
/// data for that stock variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintTemplate {
    pub id: i64,
    pub name: String,
    pub form_key: String,
    #[serde(default)]
    pub is_default: bool,
}

/// Backend-tracked status of an in-flight print job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintJobStatus {
    Queued,
    Printing,
    Done,
    Failed,
}

/// Print-job submission payload: template + arbitrary label data.
#[derive(Debug, Clone, Serialize)]
pub struct PrintRequest {
    pub template_id: i64,
    pub data: Value,
    pub copies: u32,
}

/// Submission/status response for a print job.
#[derive(Debug, Clone, Deserialize)]
pub struct PrintJobTicket {
    pub job_id: String,
    pub status: PrintJobStatus,
}

/// Default-printer availability, polled for the page status bar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PrinterStatus {
    #[serde(default)]
    pub printer_name: Option<String>,
    #[serde(default)]
    pub online: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_status_wire_tags() {
        assert_eq!(
            serde_json::from_str::<PrintJobStatus>("\"queued\"").unwrap(),
            PrintJobStatus::Queued
        );
        assert_eq!(
            serde_json::to_string(&PrintJobStatus::Done).unwrap(),
            "\"done\""
        );
    }
}
