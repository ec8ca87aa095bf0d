//! Rendering tests: render sample files to SVG.

use stavelib::{
    parse_line, render_file_to_svg, render_stave, DrawCommand, StaveConfig, StaveError,
};
use std::path::PathBuf;

fn samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples")
}

fn output_dir() -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_output");
    std::fs::create_dir_all(&dir).ok();
    dir
}

fn render_sample(name: &str, out_name: &str) -> String {
    let path = samples_dir().join(name);
    let svg = render_file_to_svg(&path, &StaveConfig::default())
        .unwrap_or_else(|e| panic!("Failed to render {name}: {e}"));

    // Write to file for visual inspection
    let out = output_dir().join(out_name);
    std::fs::write(&out, &svg).expect("Failed to write SVG");
    println!("✓ Rendered {out_name} ({} bytes)", svg.len());
    println!("  Output: {}", out.display());
    svg
}

#[test]
fn render_twinkle_svg() {
    let svg = render_sample("twinkle.abc", "twinkle.svg");

    assert!(svg.starts_with("<svg"), "Output should be SVG");
    assert!(svg.contains("</svg>"), "SVG should be closed");
    assert!(svg.contains("<line"), "SVG should contain staff lines");
    assert!(svg.contains("<path"), "SVG should contain filled noteheads");
    assert!(svg.contains("<circle"), "SVG should contain the clef dot");
}

#[test]
fn render_range_svg() {
    let svg = render_sample("range.abc", "range.svg");
    assert!(svg.starts_with("<svg"));
}

#[test]
fn render_accidentals_svg() {
    let svg = render_sample("accidentals.abc", "accidentals.svg");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("<rect"), "SVG should contain a background");
}

#[test]
fn two_staves_are_taller_than_one() {
    let config = StaveConfig::default();
    let one = stavelib::render_notation_to_svg("CDEF", &config);
    let two = stavelib::render_notation_to_svg("CDEF\nCDEF", &config);

    let height = |svg: &str| -> f64 {
        let start = svg.find("height=\"").expect("height attribute") + 8;
        let end = svg[start..].find('"').expect("closing quote") + start;
        svg[start..end].parse().expect("numeric height")
    };
    let diff = height(&two) - height(&one);
    assert!((diff - config.stave_spacing).abs() < 0.11, "diff = {diff}");
}

#[test]
fn wide_spacing_stretches_the_line() {
    let narrow = StaveConfig::default();
    let wide = StaveConfig {
        x_spacing: 60.0,
        ..StaveConfig::default()
    };
    let line = "CDEFGABc|cBAGFEDC";
    let last_x = |config: &StaveConfig| {
        let score = parse_line(line, config.x_start, config.x_spacing, config.y_spacing).unwrap();
        score.iter().last().map(|e| e.x()).unwrap()
    };
    assert!(last_x(&wide) > last_x(&narrow));
}

#[test]
fn ledger_notes_reach_beyond_the_staff() {
    let config = StaveConfig::default();
    let score = parse_line("C,b'", config.x_start, config.x_spacing, config.y_spacing).unwrap();
    let trace = render_stave(&score, &config);

    let ys = trace.commands.iter().filter_map(|c| match c {
        DrawCommand::Line { from, .. } => Some(from.y),
        _ => None,
    });
    let (lo, hi) = ys.fold((f64::MAX, f64::MIN), |(lo, hi), y| (lo.min(y), hi.max(y)));
    assert!(lo <= -120.0, "lowest stroke at {lo}");
    assert!(hi >= 140.0, "highest stroke at {hi}");
}

#[test]
fn missing_sample_is_an_io_error() {
    let err = render_file_to_svg(samples_dir().join("missing.abc"), &StaveConfig::default())
        .unwrap_err();
    assert!(matches!(err, StaveError::Io { .. }));
}
