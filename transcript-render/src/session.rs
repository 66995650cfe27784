use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use transcript_core::Word;

/// Computed timing for one segment folded into an entry, kept for
/// traceability when the timing trace is enabled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SegmentTiming {
    pub segment_id: u32,
    /// Whole-second silence gap computed for this segment.
    pub preceding_silence: i64,
    /// Segment start on the session timeline, in milliseconds.
    pub session_time_ms: i64,
    /// Segment start on the session timeline, in whole seconds.
    pub session_time: i64,
    /// Parent transcript's window start, in milliseconds.
    pub transcript_start_timestamp: i64,
    /// Parent transcript's window end, in milliseconds.
    pub transcript_end_timestamp: i64,
    /// Segment offsets relative to the transcript window, in seconds.
    pub segment_start: f32,
    pub segment_end: f32,
}

/// One contiguous block of speech by a single speaker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RenderedTranscriptEntry {
    pub speaker_label: String,
    pub is_assistant: bool,
    /// Gap since the previous speech ended, in whole seconds.
    pub preceding_silence: i64,
    /// Elapsed whole seconds from the session anchor to this entry's start.
    pub session_time: i64,
    /// Absolute start time of the entry.
    pub time: DateTime<Utc>,
    pub text: String,
    pub words: Vec<Word>,
    /// One record per contributing segment; empty when the trace is
    /// disabled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timings: Vec<SegmentTiming>,
}

impl RenderedTranscriptEntry {
    /// Grouping key for the merge decision. Both components are constant
    /// today; a diarizer upstream changes the key values, not the merge
    /// shape.
    pub fn speaker_key(&self) -> (&str, bool) {
        (self.speaker_label.as_str(), self.is_assistant)
    }
}

/// The fully rendered session view.
///
/// `participants`, `related`, `statistics`, `summary` and `headline` are
/// placeholders here; a summarization collaborator fills them in further
/// downstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderedTranscriptSession {
    pub participants: Vec<String>,
    pub related: String,
    pub statistics: String,
    pub summary: String,
    pub headline: String,
    /// Session start, from the document's anchor.
    pub date: DateTime<Utc>,
    pub entries: Vec<RenderedTranscriptEntry>,
}
