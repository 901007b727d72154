//! Speech adapters for the bistro ordering flow.
//!
//! [`VoicePrompt`] implements the core `SpeechPromptPort` over a
//! [`SynthesisBackend`]; [`ListeningSession`] implements `ListeningPort` over
//! a [`RecognitionBackend`]. The terminal backends in [`backend`] stand in for
//! platform speech engines.

#![deny(unused_crate_dependencies)]

pub mod backend;
pub mod error;
pub mod listening;
pub mod prompt;
pub mod select;

// Re-export key types for convenience
pub use backend::{
    RecognitionBackend, RecognitionConfig, RecognitionResult, RecognizerEvent, SynthesisBackend,
    Utterance, VoiceDescriptor, VoiceGender,
};
pub use backend::console::ConsoleSynthesizer;
pub use backend::typed::{TypedFeed, TypedRecognizer};
pub use error::VoiceError;
pub use listening::{ListeningSession, TranscriptAccumulator};
pub use prompt::{SpeechParams, VoicePrompt};
pub use select::select_voice;
