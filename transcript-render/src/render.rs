use chrono::{DateTime, Utc};
use tracing::{debug, trace};
use transcript_core::TranscriptDocument;

use crate::config::RenderConfig;
use crate::session::{RenderedTranscriptEntry, RenderedTranscriptSession, SegmentTiming};

/// No assistant-originated speech reaches this path yet; every rendered
/// entry carries the same flag.
const IS_ASSISTANT: bool = false;

/// Merges a transcript document into a speaker-grouped, time-aligned
/// session view.
///
/// The transform is total: empty `transcriptions` or `segments` lists
/// contribute no entries, absent segment text is the empty string, and no
/// input produces an error. All intermediate arithmetic runs in integer
/// milliseconds; whole seconds appear only in the final `session_time` and
/// `preceding_silence` fields.
#[derive(Debug, Clone, Default)]
pub struct SessionRenderer {
    config: RenderConfig,
}

impl SessionRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn render(&self, document: &TranscriptDocument) -> RenderedTranscriptSession {
        let anchor_ms = document.started_at.saturating_mul(1_000);
        let merge_gap_ms = self.config.merge_gap_ms();
        let speaker_key = (self.config.speaker_label.as_str(), IS_ASSISTANT);

        let mut session = RenderedTranscriptSession {
            participants: vec![self.config.speaker_label.clone()],
            related: String::new(),
            statistics: String::new(),
            summary: String::new(),
            headline: String::new(),
            date: timestamp_ms(anchor_ms),
            entries: Vec::new(),
        };

        let mut last_end_ms: Option<i64> = None;
        for transcript in &document.transcriptions {
            let transcript_end_ms = transcript.end_timestamp;
            let transcript_start_ms = transcript_end_ms - seconds_to_ms(transcript.duration);

            for segment in &transcript.segments {
                let session_time_ms = transcript_start_ms + seconds_to_ms(segment.start as f64);
                let session_time = session_time_ms.div_euclid(1_000);
                let (gap_ms, preceding_silence) = match last_end_ms {
                    Some(end_ms) => (
                        session_time_ms - end_ms,
                        session_time - end_ms.div_euclid(1_000),
                    ),
                    // First speech of the session: the silence is everything
                    // since the anchor.
                    None => (session_time_ms, session_time),
                };

                let timing = SegmentTiming {
                    segment_id: segment.id,
                    preceding_silence,
                    session_time_ms,
                    session_time,
                    transcript_start_timestamp: transcript_start_ms,
                    transcript_end_timestamp: transcript_end_ms,
                    segment_start: segment.start,
                    segment_end: segment.end,
                };

                match session.entries.last_mut() {
                    Some(entry) if entry.speaker_key() == speaker_key && gap_ms < merge_gap_ms => {
                        trace!(segment = segment.id, gap_ms, "merging segment into open entry");
                        entry.text.push_str(&segment.text);
                        entry.words.extend(segment.words.iter().cloned());
                        if self.config.keep_timings {
                            entry.timings.push(timing);
                        }
                    }
                    _ => {
                        debug!(
                            segment = segment.id,
                            session_time, preceding_silence, "opening new entry"
                        );
                        session.entries.push(RenderedTranscriptEntry {
                            speaker_label: self.config.speaker_label.clone(),
                            is_assistant: IS_ASSISTANT,
                            preceding_silence,
                            session_time,
                            time: timestamp_ms(anchor_ms + session_time_ms),
                            text: segment.text.clone(),
                            words: segment.words.clone(),
                            timings: if self.config.keep_timings {
                                vec![timing]
                            } else {
                                Vec::new()
                            },
                        });
                    }
                }

                last_end_ms = Some(transcript_start_ms + seconds_to_ms(segment.end as f64));
            }

            // Silence across a transcript boundary is measured against the
            // window end, not the last recognized word inside it.
            last_end_ms = Some(transcript_end_ms);
        }

        session
    }
}

fn seconds_to_ms(seconds: f64) -> i64 {
    (seconds * 1_000.0).round() as i64
}

fn timestamp_ms(ms: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(ms).unwrap_or_default()
}
