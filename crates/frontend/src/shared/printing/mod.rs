//! Print-service client: label templates, print jobs and printer status.

pub mod poll;
pub mod status_bar;

use contracts::shared::printing::{
    PrintJobStatus, PrintJobTicket, PrintRequest, PrintTemplate, PrinterStatus,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetches the default print template for a form key. A 404 means no
/// default is configured; that is a normal answer, not an error.
pub async fn fetch_default_template(form_key: &str) -> Result<Option<PrintTemplate>, String> {
    let url = api_url(&format!("/api/print-templates/default/{}", form_key));
    match Request::get(&url).send().await {
        Ok(response) if response.ok() => response
            .json::<PrintTemplate>()
            .await
            .map(Some)
            .map_err(|e| format!("Parse error: {}", e)),
        Ok(response) if response.status() == 404 => Ok(None),
        Ok(response) => Err(format!("HTTP {}", response.status())),
        Err(e) => Err(format!("Network error: {}", e)),
    }
}

pub async fn submit_print_job(request: &PrintRequest) -> Result<PrintJobTicket, String> {
    let url = api_url("/api/print-jobs");
    let req = Request::post(&url)
        .json(request)
        .map_err(|e| format!("Request error: {}", e))?;
    match req.send().await {
        Ok(response) if response.ok() => response
            .json::<PrintJobTicket>()
            .await
            .map_err(|e| format!("Parse error: {}", e)),
        Ok(response) => Err(format!("HTTP {}", response.status())),
        Err(e) => Err(format!("Network error: {}", e)),
    }
}

pub async fn fetch_job_status(job_id: &str) -> Result<PrintJobStatus, String> {
    let url = api_url(&format!("/api/print-jobs/{}", job_id));
    match Request::get(&url).send().await {
        Ok(response) if response.ok() => response
            .json::<PrintJobTicket>()
            .await
            .map(|ticket| ticket.status)
            .map_err(|e| format!("Parse error: {}", e)),
        Ok(response) => Err(format!("HTTP {}", response.status())),
        Err(e) => Err(format!("Network error: {}", e)),
    }
}

pub async fn fetch_printer_status() -> Result<PrinterStatus, String> {
    let url = api_url("/api/printers/default/status");
    match Request::get(&url).send().await {
        Ok(response) if response.ok() => response
            .json::<PrinterStatus>()
            .await
            .map_err(|e| format!("Parse error: {}", e)),
        Ok(response) => Err(format!("HTTP {}", response.status())),
        Err(e) => Err(format!("Network error: {}", e)),
    }
}
