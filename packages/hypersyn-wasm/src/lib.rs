use wasm_bindgen::prelude::*;
use serde::Serialize;

use hypersyn::playback::PlaybackOptions;
use hypersyn::Voicing;

#[derive(Serialize)]
struct BindingError {
    message: String,
}

fn to_js_error(message: String) -> JsValue {
    let json = serde_json::to_string(&BindingError {
        message: message.clone(),
    })
    .unwrap_or(message);
    JsValue::from_str(&json)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| to_js_error(e.to_string()))
}

/// Parse one chord name. Returns the chord as JSON, or `"null"` if it doesn't parse.
#[wasm_bindgen]
pub fn parse_chord_name(chord_name: &str) -> Result<String, JsValue> {
    to_json(&hypersyn::parse_chord_name(chord_name))
}

/// Convert a progression with a voicing id; unknown ids mean closed voicing.
#[wasm_bindgen]
pub fn convert_chords(input: &str, voicing: &str) -> Result<String, JsValue> {
    to_json(&hypersyn::convert_chords_with_id(input, voicing))
}

/// Apply a voicing id to raw intervals.
#[wasm_bindgen]
pub fn apply_voicing(intervals: Vec<i32>, voicing: &str) -> Vec<i32> {
    hypersyn::apply_voicing(&intervals, Voicing::from_id(voicing))
}

/// Voicing options (`[{value, label}]`) that apply to the given intervals, as JSON.
#[wasm_bindgen]
pub fn get_valid_voicings(intervals: Vec<i32>) -> Result<String, JsValue> {
    to_json(&hypersyn::valid_voicings(&intervals))
}

/// Two-digit hex of a semitone reduced into one octave.
#[wasm_bindgen]
pub fn semitone_to_hex(semitone: i32) -> String {
    hypersyn::semitone_to_hex(semitone)
}

/// MIDI root (C4 octave) for a root spelling; unknown spellings give middle C.
#[wasm_bindgen]
pub fn get_midi_root(root: &str) -> i32 {
    hypersyn::NoteName::from_spelling(root)
        .map(|note| note.midi_root())
        .unwrap_or(60)
}

/// Playback plan for a progression, as JSON, so the page can drive its own synth.
#[wasm_bindgen]
pub fn generate_playback_data(
    input: &str,
    voicing: &str,
    chord_duration: Option<f64>,
    volume: Option<f64>,
) -> Result<String, JsValue> {
    let mut options = PlaybackOptions::default();
    if let Some(duration) = chord_duration {
        options.chord_duration = duration;
    }
    if let Some(volume) = volume {
        options.volume = volume.clamp(0.0, 1.0);
    }
    options.validate().map_err(|e| to_js_error(e.to_string()))?;
    let data = hypersyn::playback::generate_playback_data(input, Voicing::from_id(voicing), &options);
    to_json(&data)
}
