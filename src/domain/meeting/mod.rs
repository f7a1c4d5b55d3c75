//! Meeting domain module

mod display;
mod markdown;
mod record;

pub use display::{
    validate_pattern, DateDisplay, DisplayZone, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT,
};
pub use markdown::format_meeting;
pub use record::{
    MeetingRecord, RemoteTargetConfig, Summary, SummaryBlock, SummarySection, TranscriptLine,
};
