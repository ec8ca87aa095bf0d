//! SVG builder: accumulates SVG elements and produces the final string.
//!
//! Acts as a [`Surface`]: drawing commands arrive in y-up world
//! coordinates and are flipped into SVG's y-down user space.

use super::constants::*;
use super::cursor::{Bounds, DrawCommand, Point, Surface};

// ═══════════════════════════════════════════════════════════════════════
// SvgBuilder
// ═══════════════════════════════════════════════════════════════════════

pub(super) struct SvgBuilder {
    elements: Vec<String>,
    width: f64,
    height: f64,
    /// World x that maps to SVG x = 0
    left: f64,
    /// World y that maps to SVG y = 0
    top: f64,
}

impl SvgBuilder {
    /// Builder sized to `bounds` plus `margin` on every side.
    pub(super) fn framing(bounds: &Bounds, margin: f64) -> Self {
        Self {
            elements: Vec::new(),
            width: bounds.width() + 2.0 * margin,
            height: bounds.height() + 2.0 * margin,
            left: bounds.min.x - margin,
            top: bounds.max.y + margin,
        }
    }

    pub(super) fn build(self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {:.1} {:.1}" width="{:.1}" height="{:.1}">"#,
            self.width, self.height, self.width, self.height
        );
        svg.push('\n');
        for el in &self.elements {
            svg.push_str("  ");
            svg.push_str(el);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }

    fn map(&self, p: Point) -> (f64, f64) {
        (p.x - self.left, self.top - p.y)
    }

    pub(super) fn background(&mut self) {
        self.elements.push(format!(
            r#"<rect x="0" y="0" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            self.width, self.height, BACKGROUND_COLOR
        ));
    }

    pub(super) fn line(&mut self, from: Point, to: Point, width: f64) {
        let (x1, y1) = self.map(from);
        let (x2, y2) = self.map(to);
        self.elements.push(format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{:.2}" stroke-linecap="round"/>"#,
            x1, y1, x2, y2, INK_COLOR, width
        ));
    }

    pub(super) fn circle(&mut self, center: Point, r: f64) {
        let (cx, cy) = self.map(center);
        self.elements.push(format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            cx, cy, r, INK_COLOR
        ));
    }

    pub(super) fn polygon(&mut self, points: &[Point]) {
        let mut d = String::with_capacity(points.len() * 16);
        for (i, p) in points.iter().enumerate() {
            let (x, y) = self.map(*p);
            d.push_str(&format!("{}{:.2},{:.2}", if i == 0 { "M" } else { " L" }, x, y));
        }
        d.push_str(" Z");
        self.elements.push(format!(
            r#"<path d="{}" fill="{}" stroke="none"/>"#,
            d, INK_COLOR
        ));
    }
}

impl Surface for SvgBuilder {
    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Line { from, to, width } => self.line(*from, *to, *width),
            DrawCommand::Dot { at, diameter } => self.circle(*at, diameter / 2.0),
            DrawCommand::Fill { points } => self.polygon(points),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Empty SVG fallback
// ═══════════════════════════════════════════════════════════════════════

pub(super) fn empty_svg(message: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 400 100\">\
         <text x=\"200\" y=\"50\" text-anchor=\"middle\" font-size=\"14\" fill=\"gray\">{}</text>\
         </svg>",
        message
    )
}
