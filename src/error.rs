//! # Error Types
//!
//! This module defines the error type shared by the adapters around the chord engine.
//!
//! The engine itself never fails: an unparseable token is `None`, an unknown voicing
//! identifier falls back to closed voicing. Errors only appear once the engine is
//! wired to files, configuration, or strict user input.
//!
//! ## Error Types
//! - `UnknownVoicing` - Strict voicing lookup from CLI flags or settings
//! - `Storage` / `ChordSetFormat` - Reading or writing the chord-set file
//! - `Import` / `InvalidChordSet` / `ChordSetNotFound` - Chord-set management
//! - `Config` - Invalid YAML settings
//! - `Playback` - Playback options out of range
//! - `Render` - WAV rendering failures
//!
//! ## Usage
//! ```rust
//! use hypersyn::{HypersynError, Voicing};
//!
//! match "drop9".parse::<Voicing>() {
//!     Ok(voicing) => println!("using {}", voicing.label()),
//!     Err(HypersynError::UnknownVoicing(id)) => eprintln!("no voicing called {}", id),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HypersynError {
    /// Voicing identifier that is not one of the eleven known voicings.
    ///
    /// # Example
    /// ```
    /// # use hypersyn::HypersynError;
    /// let err = HypersynError::UnknownVoicing("drop9".to_string());
    /// assert_eq!(err.to_string(), "Unknown voicing: drop9");
    /// ```
    #[error("Unknown voicing: {0}")]
    UnknownVoicing(String),

    /// I/O failure while reading or writing a chord-set or settings file.
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Chord-set file contents could not be encoded or decoded as JSON.
    #[error("Chord set format error: {0}")]
    ChordSetFormat(#[from] serde_json::Error),

    /// Imported data is not a list of chord sets.
    ///
    /// # Example
    /// ```
    /// # use hypersyn::HypersynError;
    /// let err = HypersynError::Import("expected an array".to_string());
    /// assert_eq!(err.to_string(), "Failed to import chord sets: expected an array");
    /// ```
    #[error("Failed to import chord sets: {0}")]
    Import(String),

    /// A chord set that cannot be saved, e.g. an empty name.
    #[error("Invalid chord set: {0}")]
    InvalidChordSet(String),

    /// No chord set at the requested index.
    ///
    /// # Example
    /// ```
    /// # use hypersyn::HypersynError;
    /// let err = HypersynError::ChordSetNotFound(3);
    /// assert_eq!(err.to_string(), "Chord set not found at index 3");
    /// ```
    #[error("Chord set not found at index {0}")]
    ChordSetNotFound(usize),

    /// Settings file is not valid YAML or has invalid values.
    #[error("Invalid settings: {0}")]
    Config(String),

    /// Playback options out of range, from settings, flags or bindings.
    ///
    /// # Example
    /// ```
    /// # use hypersyn::HypersynError;
    /// let err = HypersynError::Playback("volume must be between 0 and 1, got 2".to_string());
    /// assert_eq!(err.to_string(), "Invalid playback options: volume must be between 0 and 1, got 2");
    /// ```
    #[error("Invalid playback options: {0}")]
    Playback(String),

    /// WAV file could not be written.
    #[error("Render error: {0}")]
    Render(#[from] hound::Error),
}
