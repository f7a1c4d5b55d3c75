//! Meeting to Markdown formatter

use std::fmt::Write;

use super::display::DateDisplay;
use super::record::MeetingRecord;

/// Render a meeting as Markdown.
///
/// Layout: title heading, date and id metadata, then an optional
/// `## Summary` section and an optional `## Transcript` section. A missing
/// summary or an empty transcript omits the section heading entirely.
pub fn format_meeting(meeting: &MeetingRecord, display: &DateDisplay) -> String {
    let mut markdown = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(markdown, "# {}\n", meeting.title);
    let _ = writeln!(markdown, "**Date:** {}", display.format_date(&meeting.date));
    let _ = writeln!(markdown, "**Meeting ID:** {}\n", meeting.id);

    if let Some(summary) = &meeting.summary {
        markdown.push_str("## Summary\n\n");

        for section in summary.values() {
            let _ = writeln!(markdown, "### {}\n", section.title);
            for block in &section.blocks {
                let _ = writeln!(markdown, "- {}", block.content);
            }
            markdown.push('\n');
        }
    }

    if !meeting.transcripts.is_empty() {
        markdown.push_str("## Transcript\n\n");

        for line in &meeting.transcripts {
            let _ = writeln!(
                markdown,
                "**[{}]** {}\n",
                display.format_time(&line.timestamp),
                line.text
            );
        }
    }

    markdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::meeting::{DisplayZone, Summary, SummarySection, TranscriptLine};
    use chrono::{DateTime, Utc};

    fn standup() -> MeetingRecord {
        let date: DateTime<Utc> = "2024-01-01T10:00:00Z".parse().unwrap();
        MeetingRecord::new("m1", "Standup", date)
    }

    #[test]
    fn bare_meeting_has_only_title_and_metadata() {
        let markdown = format_meeting(&standup(), &DateDisplay::utc());

        assert_eq!(
            markdown,
            "# Standup\n\n**Date:** 1/1/2024\n**Meeting ID:** m1\n\n"
        );
        let non_empty: Vec<&str> = markdown.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(non_empty.len(), 3);
        assert!(!markdown.contains("## Summary"));
        assert!(!markdown.contains("## Transcript"));
    }

    #[test]
    fn single_transcript_line() {
        let meeting = standup()
            .with_transcripts(vec![TranscriptLine::new("hello", "2024-01-01T10:05:00Z")]);

        let markdown = format_meeting(&meeting, &DateDisplay::utc());

        assert!(markdown.ends_with("## Transcript\n\n**[10:05:00 AM]** hello\n\n"));
    }

    #[test]
    fn invalid_patterns_do_not_break_formatting() {
        let meeting = standup()
            .with_transcripts(vec![TranscriptLine::new("hello", "2024-01-01T10:05:00Z")]);
        let display = DateDisplay::new(DisplayZone::Utc, "%Q", "%H:%M");

        let markdown = format_meeting(&meeting, &display);

        assert!(markdown.contains("**Date:** 1/1/2024\n"));
        assert!(markdown.contains("**[10:05]** hello"));
    }

    #[test]
    fn transcript_entries_keep_input_order() {
        let meeting = standup().with_transcripts(vec![
            TranscriptLine::new("first", "2024-01-01T10:01:00Z"),
            TranscriptLine::new("second", "2024-01-01T10:00:00Z"),
            TranscriptLine::new("third", "2024-01-01T10:02:00Z"),
        ]);

        let markdown = format_meeting(&meeting, &DateDisplay::utc());
        let entries: Vec<&str> = markdown
            .lines()
            .filter(|l| l.starts_with("**["))
            .collect();

        assert_eq!(entries.len(), 3);
        assert!(entries[0].ends_with("first"));
        assert!(entries[1].ends_with("second"));
        assert!(entries[2].ends_with("third"));
    }

    #[test]
    fn summary_sections_render_headings_and_bullets() {
        let mut summary = Summary::new();
        summary.insert(
            "key_points".to_string(),
            SummarySection::new("Key Points", ["Adopt Rust", "Drop the cron job"]),
        );
        summary.insert(
            "action_items".to_string(),
            SummarySection::new("Action Items", ["Alice writes the RFC"]),
        );
        let meeting = standup().with_summary(summary);

        let markdown = format_meeting(&meeting, &DateDisplay::utc());

        let expected = "## Summary\n\n\
            ### Key Points\n\n\
            - Adopt Rust\n\
            - Drop the cron job\n\n\
            ### Action Items\n\n\
            - Alice writes the RFC\n\n";
        assert!(markdown.ends_with(expected), "got: {markdown}");
        assert_eq!(markdown.lines().filter(|l| l.starts_with("### ")).count(), 2);
        assert_eq!(markdown.lines().filter(|l| l.starts_with("- ")).count(), 3);
    }

    #[test]
    fn empty_summary_still_emits_heading() {
        let meeting = standup().with_summary(Summary::new());
        let markdown = format_meeting(&meeting, &DateDisplay::utc());

        assert!(markdown.contains("## Summary"));
    }

    #[test]
    fn summary_precedes_transcript() {
        let mut summary = Summary::new();
        summary.insert("notes".to_string(), SummarySection::new("Notes", ["ok"]));
        let meeting = standup()
            .with_summary(summary)
            .with_transcripts(vec![TranscriptLine::new("hi", "2024-01-01T10:00:00Z")]);

        let markdown = format_meeting(&meeting, &DateDisplay::utc());
        let summary_at = markdown.find("## Summary").unwrap();
        let transcript_at = markdown.find("## Transcript").unwrap();

        assert!(summary_at < transcript_at);
    }

    #[test]
    fn formatting_is_deterministic() {
        let meeting = standup()
            .with_transcripts(vec![TranscriptLine::new("hello", "2024-01-01T10:05:00Z")]);
        let display = DateDisplay::utc();

        assert_eq!(
            format_meeting(&meeting, &display),
            format_meeting(&meeting, &display)
        );
    }
}
