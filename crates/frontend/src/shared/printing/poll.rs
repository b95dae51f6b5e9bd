//! Print-job polling policy.
//!
//! The widget submits a job, then polls its status once a second until a
//! terminal verdict. The decision of what each poll result means is kept
//! here as a pure reducer so the termination rules are testable without a
//! browser.

use contracts::shared::printing::{PrintJobStatus, PrintTemplate};

/// Poll interval between status checks.
pub const POLL_INTERVAL_MS: u32 = 1_000;

/// Attempt budget: polling stops after 30 checks (~30 s) even if the
/// backend never reaches a terminal status.
pub const MAX_POLL_ATTEMPTS: u32 = 30;

/// How long a terminal badge (`Done` / `Failed`) stays visible before the
/// row returns to idle.
pub const DONE_DWELL_MS: u32 = 3_000;

/// Printer/live-connection status poll for the page status bar.
pub const PRINTER_POLL_INTERVAL_MS: u32 = 5_000;

/// Per-row print lifecycle shown next to the row's actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPrintState {
    Idle,
    Printing,
    Done,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollVerdict {
    KeepPolling,
    Finished,
    Failed,
}

/// Per-row print bookkeeping held by the editor. `job_seq` identifies the
/// submission that owns the badge, so a stale dwell timer never clears a
/// newer job's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintSlot {
    pub job_seq: u64,
    pub state: RowPrintState,
}

impl PrintSlot {
    pub fn owned_by(&self, job_seq: u64) -> bool {
        self.job_seq == job_seq
    }
}

/// Checks the print preconditions before any network call: the row must
/// be persisted and a default template for the variant must exist.
pub fn print_precondition(
    template: Option<&PrintTemplate>,
    row_id: Option<i64>,
    form_key: &str,
) -> Result<(), String> {
    if row_id.is_none() {
        return Err("Save the row before printing".to_string());
    }
    if template.is_none() {
        return Err(format!(
            "No default print template configured ({})",
            form_key
        ));
    }
    Ok(())
}

/// Decides what to do after one status check.
///
/// `status` is `None` when the poll request itself errored; that counts
/// as a failure so the user sees a distinct "print failed" state instead
/// of a silent reset. `attempts_used` counts completed checks including
/// this one.
pub fn poll_verdict(status: Option<PrintJobStatus>, attempts_used: u32) -> PollVerdict {
    match status {
        Some(PrintJobStatus::Done) => PollVerdict::Finished,
        Some(PrintJobStatus::Failed) | None => PollVerdict::Failed,
        Some(PrintJobStatus::Queued) | Some(PrintJobStatus::Printing) => {
            if attempts_used >= MAX_POLL_ATTEMPTS {
                PollVerdict::Failed
            } else {
                PollVerdict::KeepPolling
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_done_finishes() {
        assert_eq!(
            poll_verdict(Some(PrintJobStatus::Done), 1),
            PollVerdict::Finished
        );
    }

    #[test]
    fn test_failed_status_and_transport_error_fail() {
        assert_eq!(
            poll_verdict(Some(PrintJobStatus::Failed), 1),
            PollVerdict::Failed
        );
        assert_eq!(poll_verdict(None, 1), PollVerdict::Failed);
    }

    #[test]
    fn test_pending_keeps_polling_until_budget() {
        for attempt in 1..MAX_POLL_ATTEMPTS {
            assert_eq!(
                poll_verdict(Some(PrintJobStatus::Queued), attempt),
                PollVerdict::KeepPolling
            );
        }
        // A job that never terminates stops at the attempt budget.
        assert_eq!(
            poll_verdict(Some(PrintJobStatus::Printing), MAX_POLL_ATTEMPTS),
            PollVerdict::Failed
        );
    }

    fn template() -> PrintTemplate {
        PrintTemplate {
            id: 4,
            name: "Roll label".into(),
            form_key: "stock_roll_stk".into(),
            is_default: true,
        }
    }

    #[test]
    fn test_precondition_rejects_unsaved_row() {
        let tpl = template();
        let result = print_precondition(Some(&tpl), None, "stock_roll_stk");
        assert_eq!(result, Err("Save the row before printing".to_string()));
    }

    #[test]
    fn test_precondition_rejects_missing_template() {
        let result = print_precondition(None, Some(501), "stock_roll_stk");
        let message = result.unwrap_err();
        assert!(message.contains("stock_roll_stk"), "{}", message);
    }

    #[test]
    fn test_precondition_passes_with_template_and_id() {
        let tpl = template();
        assert_eq!(
            print_precondition(Some(&tpl), Some(501), "stock_roll_stk"),
            Ok(())
        );
    }

    #[test]
    fn test_dwell_clear_is_owned_by_job_not_state() {
        // Two jobs for the same row can reach the same terminal state; the
        // first job's dwell timer must not clear the second job's badge.
        let current = PrintSlot {
            job_seq: 2,
            state: RowPrintState::Done,
        };
        assert!(!current.owned_by(1));
        assert!(current.owned_by(2));
    }
}
