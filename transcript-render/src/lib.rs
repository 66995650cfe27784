pub mod config;
pub mod render;
pub mod session;

pub use config::RenderConfig;
pub use render::SessionRenderer;
pub use session::{RenderedTranscriptEntry, RenderedTranscriptSession, SegmentTiming};
