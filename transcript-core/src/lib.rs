pub mod composer;
pub mod document;
pub mod errors;

pub use composer::DocumentComposer;
pub use document::{Transcript, TranscriptDocument, TranscriptSegment, Word};
pub use errors::DocumentError;
