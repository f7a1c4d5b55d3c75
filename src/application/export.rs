//! Export meeting use case

use std::fmt;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::domain::meeting::{format_meeting, DateDisplay, MeetingRecord, RemoteTargetConfig};
use crate::domain::notion::{BatchPlan, OverflowPolicy};

use super::ports::{BlockConverter, ConversionError, PageWriteError, PageWriter, TransportError};

/// Render a failure cause, substituting a placeholder for empty messages
fn cause_message(cause: &dyn fmt::Display) -> String {
    let message = cause.to_string();
    if message.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        message
    }
}

/// The single failure kind of an export.
///
/// Every variant renders as `Failed to export meeting to Notion: <cause>`
/// while keeping the structured cause.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Failed to export meeting to Notion: {}", cause_message(.0))]
    Conversion(#[from] ConversionError),

    #[error("Failed to export meeting to Notion: {}", cause_message(.0))]
    Transport(#[from] TransportError),

    #[error("Failed to export meeting to Notion: Notion API error: {}", cause_message(.message))]
    RemoteApi { status: u16, message: String },

    #[error("Failed to export meeting to Notion: {}", cause_message(.0))]
    Unknown(String),
}

impl From<PageWriteError> for ExportError {
    fn from(err: PageWriteError) -> Self {
        match err {
            PageWriteError::Transport(e) => Self::Transport(e),
            PageWriteError::Api { status, message } => Self::RemoteApi { status, message },
            PageWriteError::Encode(message) => Self::Unknown(message),
        }
    }
}

/// Options for the export use case
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// How dates and transcript times are rendered
    pub display: DateDisplay,
    /// What happens to blocks beyond the per-request limit
    pub overflow: OverflowPolicy,
}

/// Output from the export use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutput {
    /// Constructed page URL; not checked for reachability
    pub page_url: String,
    pub blocks_sent: usize,
    pub blocks_dropped: usize,
    pub requests: usize,
}

/// Formats a meeting, converts it to blocks, and appends them to a page
pub struct ExportMeetingUseCase<C, W>
where
    C: BlockConverter,
    W: PageWriter,
{
    converter: C,
    writer: W,
    options: ExportOptions,
}

impl<C, W> ExportMeetingUseCase<C, W>
where
    C: BlockConverter,
    W: PageWriter,
{
    /// Create a new use case instance
    pub fn new(converter: C, writer: W, options: ExportOptions) -> Self {
        Self {
            converter,
            writer,
            options,
        }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Render the meeting as Markdown
    pub fn markdown(&self, meeting: &MeetingRecord) -> String {
        format_meeting(meeting, &self.options.display)
    }

    /// Format and convert the meeting, then split the blocks into requests
    pub fn plan(&self, meeting: &MeetingRecord) -> Result<BatchPlan, ExportError> {
        let markdown = self.markdown(meeting);
        let blocks = self.converter.convert(&markdown)?;
        let converted = blocks.len();

        let plan = BatchPlan::new(blocks, self.options.overflow);
        if plan.dropped() > 0 {
            warn!(
                converted,
                dropped = plan.dropped(),
                "More than 100 blocks; content beyond the first 100 is not exported"
            );
        }

        Ok(plan)
    }

    /// Execute the export workflow
    pub async fn execute(
        &self,
        meeting: &MeetingRecord,
        target: &RemoteTargetConfig,
    ) -> Result<ExportOutput, ExportError> {
        match self.run(meeting, target).await {
            Ok(output) => Ok(output),
            Err(e) => {
                error!(meeting_id = %meeting.id, error = %e, "Export failed");
                Err(e)
            }
        }
    }

    async fn run(
        &self,
        meeting: &MeetingRecord,
        target: &RemoteTargetConfig,
    ) -> Result<ExportOutput, ExportError> {
        let plan = self.plan(meeting)?;
        let requests = plan.batches().len();

        info!(
            page_id = target.page_id(),
            blocks = plan.total_blocks(),
            requests,
            "Updating in Notion"
        );

        let mut sent = 0;
        for (index, batch) in plan.batches().iter().enumerate() {
            debug!(batch = index + 1, of = requests, size = batch.len(), "Appending blocks");

            if let Err(e) = self.writer.append_blocks(target, batch).await {
                if sent > 0 {
                    warn!(appended = sent, "Export stopped after a partial append");
                }
                return Err(e.into());
            }
            sent += batch.len();
        }

        Ok(ExportOutput {
            page_url: self.writer.page_url(target),
            blocks_sent: sent,
            blocks_dropped: plan.dropped(),
            requests,
        })
    }
}
