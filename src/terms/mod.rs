//! Legal-term recognition: a cascade of matchers of decreasing precision.

pub mod engine;
pub mod fallback;
pub mod fuzzy;
pub mod lexicon;
pub mod matchers;
pub mod normalize;
pub mod result;

pub use engine::{Recognizer, RecognizerOptions};
pub use fallback::{ClauseClassifier, NoClassifier};
pub use lexicon::Lexicon;
pub use result::{MatchMethod, RecognizedTerm, Stage, TermMatch, TermMatches};
