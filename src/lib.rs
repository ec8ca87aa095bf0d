//! stavelib: ABC-subset notation parser and procedural staff renderer.
//!
//! A notation line such as `CDEF|GABc` becomes a [`Score`] of notes, rests
//! and bar lines, which the renderer draws on a five-line treble stave
//! with a recording cursor and turns into SVG.
//!
//! # Example
//! ```no_run
//! use stavelib::{parse_line, render_score_to_svg, StaveConfig};
//!
//! let config = StaveConfig::default();
//! let score = parse_line("CDEF|GABc", 70.0, 30.0, 10).unwrap();
//! println!("Notes: {}", score.note_count());
//! let svg = render_score_to_svg(&score, &config);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod pitch;
pub mod renderer;

use std::path::Path;

use tracing::debug;

pub use config::StaveConfig;
pub use error::StaveError;
pub use model::*;
pub use parser::{is_header, parse_line, parse_with_config, strip_comment, tokenize, Token};
pub use pitch::{pitch_offset, PitchTable};
pub use renderer::cursor::{DrawCommand, Point, Pose, Surface, Trace};
pub use renderer::{
    render_score, render_score_to_svg, render_scores_to_svg, render_stave, render_staves,
};

/// Parse one notation line and render it as a full stave.
/// Returns `None` for header lines.
pub fn render_line_to_svg(line: &str, config: &StaveConfig) -> Option<String> {
    parse_with_config(line, config).map(|score| render_score_to_svg(&score, config))
}

/// Parse every notation line of `text`.
/// `%` comments are cut off first; header lines and lines left blank are
/// skipped.
pub fn parse_notation(text: &str, config: &StaveConfig) -> Vec<Score> {
    text.lines()
        .map(|line| strip_comment(line).trim_end())
        .filter(|line| !line.trim_start().is_empty())
        .filter_map(|line| parse_with_config(line, config))
        .collect()
}

/// Render multi-line notation text, one stave per notation line.
pub fn render_notation_to_svg(text: &str, config: &StaveConfig) -> String {
    let scores = parse_notation(text, config);
    debug!(staves = scores.len(), "rendering notation");
    render_scores_to_svg(&scores, config)
}

/// Read a notation file and render it to SVG.
pub fn render_file_to_svg<P: AsRef<Path>>(
    path: P,
    config: &StaveConfig,
) -> Result<String, StaveError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| StaveError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(render_notation_to_svg(&text, config))
}

/// Convert a parsed score to a JSON string.
/// Useful for passing data across FFI boundaries.
pub fn score_to_json(score: &Score) -> Result<String, StaveError> {
    serde_json::to_string_pretty(score).map_err(StaveError::Json)
}

// ═══════════════════════════════════════════════════════════════════════
// C FFI for embedding hosts (static library / cdylib)
// ═══════════════════════════════════════════════════════════════════════

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Render notation text and return SVG as a C string.
/// The caller must free the returned string with `stavelib_free_string`.
///
/// `x_spacing` sets the horizontal advance per event. Pass 0.0 to use the
/// default.
///
/// # Safety
/// `text` must be a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn stavelib_render_notation(
    text: *const c_char,
    x_spacing: f64,
) -> *mut c_char {
    if text.is_null() {
        return std::ptr::null_mut();
    }
    let c_str = unsafe { CStr::from_ptr(text) };
    let text = match c_str.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    let mut config = StaveConfig::default();
    if x_spacing > 0.0 {
        config.x_spacing = x_spacing;
    }

    let svg = render_notation_to_svg(text, &config);
    match CString::new(svg) {
        Ok(s) => s.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Render notation text with a JSON [`StaveConfig`] and return SVG as a C
/// string. The caller must free the returned string with
/// `stavelib_free_string`.
///
/// A null `config_json` uses the default layout. Malformed config JSON
/// returns null.
///
/// # Safety
/// `text` must be a valid null-terminated UTF-8 C string. `config_json`
/// must be null or a valid null-terminated UTF-8 C string.
#[no_mangle]
pub unsafe extern "C" fn stavelib_render_notation_with_config(
    text: *const c_char,
    config_json: *const c_char,
) -> *mut c_char {
    if text.is_null() {
        return std::ptr::null_mut();
    }
    let text = match unsafe { CStr::from_ptr(text) }.to_str() {
        Ok(s) => s,
        Err(_) => return std::ptr::null_mut(),
    };

    let config = if config_json.is_null() {
        StaveConfig::default()
    } else {
        let parsed = unsafe { CStr::from_ptr(config_json) }
            .to_str()
            .ok()
            .map(StaveConfig::from_json);
        match parsed {
            Some(Ok(config)) => config,
            _ => return std::ptr::null_mut(),
        }
    };

    let svg = render_notation_to_svg(text, &config);
    match CString::new(svg) {
        Ok(s) => s.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a string previously returned by stavelib functions.
///
/// # Safety
/// `ptr` must be a string previously returned by a stavelib function, or null.
#[no_mangle]
pub unsafe extern "C" fn stavelib_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        unsafe {
            let _ = CString::from_raw(ptr);
        }
    }
}
