//! Language detection

pub mod detect;

pub use detect::LanguageDetector;
