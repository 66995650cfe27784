use std::env;
use std::time::Duration;

/// Renderer configuration derived from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Segments whose silence gap is strictly below this merge into the
    /// open entry.
    pub merge_gap: Duration,
    /// Whether each entry retains its per-segment timing trace. The trace
    /// grows with every merged segment, so long-running sessions turn it
    /// off.
    pub keep_timings: bool,
    /// Placeholder speaker label until diarization exists upstream.
    pub speaker_label: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            merge_gap: Duration::from_millis(1_000),
            keep_timings: true,
            speaker_label: "Unknown".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let merge_gap = env::var("RENDER_MERGE_GAP_MS")
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|value| *value > 0)
            .map(Duration::from_millis)
            .unwrap_or(defaults.merge_gap);
        let keep_timings = env::var("RENDER_KEEP_TIMINGS")
            .ok()
            .and_then(|value| parse_bool(value.trim()))
            .unwrap_or(defaults.keep_timings);
        let speaker_label = env::var("RENDER_SPEAKER_LABEL")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.speaker_label);
        Self {
            merge_gap,
            keep_timings,
            speaker_label,
        }
    }

    /// Merge gap in integer milliseconds, the unit the renderer computes in.
    pub fn merge_gap_ms(&self) -> i64 {
        self.merge_gap.as_millis().min(i64::MAX as u128) as i64
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
