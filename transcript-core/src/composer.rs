use std::time::{SystemTime, UNIX_EPOCH};

use crate::document::{Transcript, TranscriptDocument};

/// Accumulates finalized transcripts into [`TranscriptDocument`] snapshots
/// between recognition passes.
///
/// The composer owns the running state (the ordered transcript history and
/// the flattened text); each call to [`compose`](Self::compose) returns a
/// self-contained snapshot suitable for handing to the session renderer or
/// to any other downstream consumer.
#[derive(Debug)]
pub struct DocumentComposer {
    finished_text: String,
    transcriptions: Vec<Transcript>,
    started_at: i64,
}

impl DocumentComposer {
    /// Create a composer anchored at the current wall-clock time.
    pub fn new() -> Self {
        let started_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs() as i64)
            .unwrap_or(0);
        Self::with_started_at(started_at)
    }

    /// Create a composer with a pinned session anchor, in seconds since the
    /// Unix epoch.
    pub fn with_started_at(started_at: i64) -> Self {
        Self {
            finished_text: String::new(),
            transcriptions: Vec::new(),
            started_at,
        }
    }

    pub fn started_at(&self) -> i64 {
        self.started_at
    }

    /// Fold a finalized transcript into the running document and return the
    /// updated snapshot.
    pub fn compose(&mut self, transcript: Transcript) -> TranscriptDocument {
        let new_text = transcript.joined_text();
        if !new_text.is_empty() {
            if !self.finished_text.is_empty() {
                self.finished_text.push(' ');
            }
            self.finished_text.push_str(&new_text);
        }
        self.transcriptions.push(transcript);

        TranscriptDocument {
            transcriptions: self.transcriptions.clone(),
            transcribed_text: self.finished_text.clone(),
            current_transcription: String::new(),
            new_text,
            started_at: self.started_at,
        }
    }
}

impl Default for DocumentComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TranscriptSegment;

    fn transcript(end_timestamp: i64, texts: &[&str]) -> Transcript {
        Transcript {
            language: "en".into(),
            language_prob: 0.95,
            end_timestamp,
            duration: 5.0,
            segments: texts
                .iter()
                .enumerate()
                .map(|(index, text)| TranscriptSegment {
                    id: index as u32,
                    seek: 0,
                    start: index as f32,
                    end: index as f32 + 1.0,
                    text: (*text).into(),
                    temperature: 0.0,
                    avg_logprob: -0.2,
                    compression_ratio: 1.2,
                    no_speech_prob: 0.01,
                    words: Vec::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn compose_accumulates_running_text() {
        let mut composer = DocumentComposer::with_started_at(1_700_000_000);

        let first = composer.compose(transcript(5_000, &[" good", " morning."]));
        assert_eq!(first.new_text, "good morning.");
        assert_eq!(first.transcribed_text, "good morning.");
        assert_eq!(first.transcriptions.len(), 1);
        assert_eq!(first.started_at, 1_700_000_000);

        let second = composer.compose(transcript(10_000, &[" all", " quiet."]));
        assert_eq!(second.new_text, "all quiet.");
        assert_eq!(second.transcribed_text, "good morning. all quiet.");
        assert_eq!(second.transcriptions.len(), 2);
    }

    #[test]
    fn silent_transcript_leaves_text_untouched() {
        let mut composer = DocumentComposer::with_started_at(0);
        composer.compose(transcript(5_000, &[" hello."]));
        let snapshot = composer.compose(transcript(10_000, &[]));
        assert_eq!(snapshot.new_text, "");
        assert_eq!(snapshot.transcribed_text, "hello.");
        assert_eq!(snapshot.transcriptions.len(), 2);
    }
}
