//! Language emitters
//!
//! An emitter renders a `GeneratedFile` into source text for one language.
//! Emitters do no validation of their own: everything they receive has
//! already passed through the generator.

pub mod escaping;
pub mod objc;
pub mod swift;

pub use objc::ObjcEmitter;
pub use swift::SwiftEmitter;

use crate::models::{GeneratedFile, Language};

/// Renders generated constants for one target language
pub trait Emitter {
    /// Language this emitter produces
    fn language(&self) -> Language;

    /// File name of the generated artifact
    fn file_name(&self) -> &'static str;

    /// Render the full file content
    fn render(&self, file: &GeneratedFile) -> String;
}

/// Get all available emitters
pub fn all_emitters() -> Vec<Box<dyn Emitter>> {
    vec![Box::new(ObjcEmitter), Box::new(SwiftEmitter)]
}

/// Get the emitter for a specific language
pub fn get_emitter(language: Language) -> Box<dyn Emitter> {
    match language {
        Language::Objc => Box::new(ObjcEmitter),
        Language::Swift => Box::new(SwiftEmitter),
    }
}
