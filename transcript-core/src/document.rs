use serde::{Deserialize, Serialize};

use crate::errors::DocumentError;

/// Word-level alignment within a recognized segment. Offsets are seconds
/// relative to the parent transcript's audio window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Word {
    pub start: f32,
    pub end: f32,
    pub word: String,
    #[serde(rename = "prob")]
    pub probability: f32,
}

/// One recognized utterance chunk within a transcription pass.
///
/// The decoder diagnostics (`temperature`, `avg_logprob`, `compression_ratio`,
/// `no_speech_prob`) are carried through unchanged; nothing downstream
/// interprets them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TranscriptSegment {
    pub id: u32,
    /// Decoder seek offset, in 10 ms frames.
    pub seek: u32,
    /// Start offset in seconds, relative to the transcript's window.
    pub start: f32,
    /// End offset in seconds, relative to the transcript's window.
    pub end: f32,
    #[serde(default)]
    pub text: String,
    pub temperature: f32,
    pub avg_logprob: f32,
    pub compression_ratio: f32,
    pub no_speech_prob: f32,
    #[serde(default)]
    pub words: Vec<Word>,
}

impl TranscriptSegment {
    /// Segment text with the decoder's padding whitespace removed.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }
}

/// Result of a single recognition pass over one audio window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transcript {
    pub language: String,
    pub language_prob: f32,
    /// End of this transcript's audio window on the session timeline, in
    /// milliseconds from session start.
    #[serde(rename = "endTimestamp")]
    pub end_timestamp: i64,
    /// Length of the audio window, in seconds.
    pub duration: f64,
    #[serde(default)]
    pub segments: Vec<TranscriptSegment>,
}

impl Transcript {
    /// Space-joined plain text of the transcript's segments. Empty segments
    /// contribute nothing.
    pub fn joined_text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            let text = segment.trimmed_text();
            if text.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(text);
        }
        out
    }
}

/// The full ordered recognition history for a session, as produced by the
/// document composer between recognition passes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TranscriptDocument {
    #[serde(default)]
    pub transcriptions: Vec<Transcript>,
    #[serde(rename = "transcribedText", default)]
    pub transcribed_text: String,
    #[serde(rename = "currentTranscription", default)]
    pub current_transcription: String,
    #[serde(rename = "newText", default)]
    pub new_text: String,
    /// Session anchor, in seconds since the Unix epoch.
    #[serde(rename = "startedAt", default)]
    pub started_at: i64,
}

impl TranscriptDocument {
    pub fn from_json_str(raw: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json_string(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }
}
