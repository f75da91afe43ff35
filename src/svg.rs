//! Minimal SVG backend so the figures can be produced without a plotting
//! toolkit. Draws a dark pitch outline on construction and appends one
//! element per primitive; `finish` wraps everything into a document.

use std::fmt::Write as _;

use crate::event::Location;
use crate::pitch::PitchSpec;
use crate::plot::BACKGROUND_COLOR;
use crate::render::PitchRenderer;

const PITCH_LINE_COLOR: &str = "grey";
/// Pixels per pitch unit.
const SCALE: f64 = 8.0;
const MARGIN: f64 = 24.0;

pub struct SvgRenderer {
    pitch: PitchSpec,
    body: String,
}

impl SvgRenderer {
    pub fn new(pitch: PitchSpec) -> Self {
        let mut r = Self {
            pitch,
            body: String::new(),
        };
        r.draw_pitch();
        r
    }

    pub fn finish(self) -> String {
        let w = self.pitch.length * SCALE + 2.0 * MARGIN;
        let h = self.pitch.width * SCALE + 2.0 * MARGIN;
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" \
             viewBox=\"0 0 {w:.0} {h:.0}\">\n\
             <rect width=\"100%\" height=\"100%\" fill=\"{BACKGROUND_COLOR}\"/>\n\
             {}</svg>\n",
            self.body
        )
    }

    fn px(&self, loc: Location) -> (f64, f64) {
        (loc.x * SCALE + MARGIN, loc.y * SCALE + MARGIN)
    }

    fn draw_pitch(&mut self) {
        let len = self.pitch.length;
        let wid = self.pitch.width;
        let (x0, y0) = self.px(Location::new(0.0, 0.0));
        let (x1, y1) = self.px(Location::new(len, wid));
        let _ = writeln!(
            self.body,
            "<rect x=\"{x0:.1}\" y=\"{y0:.1}\" width=\"{:.1}\" height=\"{:.1}\" \
             fill=\"none\" stroke=\"{PITCH_LINE_COLOR}\" stroke-width=\"2\"/>",
            x1 - x0,
            y1 - y0
        );
        // Halfway line and center circle.
        let (mx, _) = self.px(Location::new(len / 2.0, 0.0));
        let _ = writeln!(
            self.body,
            "<line x1=\"{mx:.1}\" y1=\"{y0:.1}\" x2=\"{mx:.1}\" y2=\"{y1:.1}\" \
             stroke=\"{PITCH_LINE_COLOR}\" stroke-width=\"2\"/>"
        );
        let (cx, cy) = self.px(Location::new(len / 2.0, wid / 2.0));
        let _ = writeln!(
            self.body,
            "<circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"{:.1}\" fill=\"none\" \
             stroke=\"{PITCH_LINE_COLOR}\" stroke-width=\"2\"/>",
            10.0 * SCALE
        );
    }
}

impl PitchRenderer for SvgRenderer {
    fn circle(&mut self, center: Location, radius: f64, color: &str, alpha: f64) {
        let (cx, cy) = self.px(center);
        let _ = writeln!(
            self.body,
            "<circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"{:.1}\" fill=\"{color}\" \
             fill-opacity=\"{alpha}\"/>",
            radius * SCALE
        );
    }

    fn text(&mut self, at: Location, text: &str, size: f64, color: &str) {
        let (x, y) = self.px(at);
        let _ = writeln!(
            self.body,
            "<text x=\"{x:.1}\" y=\"{y:.1}\" font-size=\"{:.1}\" fill=\"{color}\">{}</text>",
            size * 1.5,
            escape(text)
        );
    }

    fn arrow(
        &mut self,
        start: Location,
        end: Location,
        color: &str,
        width: f64,
        head_width: f64,
        head_length: f64,
    ) {
        let (x1, y1) = self.px(start);
        let (x2, y2) = self.px(end);
        let _ = writeln!(
            self.body,
            "<line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" \
             stroke=\"{color}\" stroke-width=\"{width:.1}\"/>"
        );
        // Triangular head pointing along the shaft.
        let (dx, dy) = (x2 - x1, y2 - y1);
        let len = (dx * dx + dy * dy).sqrt();
        if len < f64::EPSILON {
            return;
        }
        let (ux, uy) = (dx / len, dy / len);
        let (px, py) = (-uy, ux);
        let bx = x2 - ux * head_length;
        let by = y2 - uy * head_length;
        let half = head_width / 2.0;
        let _ = writeln!(
            self.body,
            "<polygon points=\"{x2:.1},{y2:.1} {:.1},{:.1} {:.1},{:.1}\" fill=\"{color}\"/>",
            bx + px * half,
            by + py * half,
            bx - px * half,
            by - py * half
        );
    }

    fn line(&mut self, start: Location, end: Location, width: f64, color: &str, alpha: f64) {
        let (x1, y1) = self.px(start);
        let (x2, y2) = self.px(end);
        let _ = writeln!(
            self.body,
            "<line x1=\"{x1:.1}\" y1=\"{y1:.1}\" x2=\"{x2:.1}\" y2=\"{y2:.1}\" \
             stroke=\"{color}\" stroke-width=\"{width:.1}\" stroke-opacity=\"{alpha}\"/>"
        );
    }

    fn scatter(&mut self, points: &[Location], sizes: &[f64], color: &str, alpha: f64) {
        for (point, size) in points.iter().zip(sizes) {
            let (cx, cy) = self.px(*point);
            // Area-style size to radius, matching the matplotlib convention.
            let radius = (size / std::f64::consts::PI).sqrt();
            let _ = writeln!(
                self.body,
                "<circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"{radius:.1}\" fill=\"{color}\" \
                 fill-opacity=\"{alpha}\" stroke=\"white\" stroke-width=\"1\"/>"
            );
        }
    }

    fn annotate(&mut self, at: Location, text: &str, size: f64, color: &str) {
        let (x, y) = self.px(at);
        let _ = writeln!(
            self.body,
            "<text x=\"{x:.1}\" y=\"{y:.1}\" font-size=\"{:.1}\" fill=\"{color}\" \
             font-weight=\"bold\" text-anchor=\"middle\" dominant-baseline=\"middle\">{}</text>",
            size * 1.5,
            escape(text)
        );
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_produces_a_document_with_pitch_outline() {
        let svg = SvgRenderer::new(PitchSpec::default()).finish();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        // Outline, halfway line, center circle on the background.
        assert!(svg.contains(BACKGROUND_COLOR));
        assert!(svg.matches("<line").count() >= 1);
    }

    #[test]
    fn escapes_text_payloads() {
        let mut r = SvgRenderer::new(PitchSpec::default());
        r.text(Location::new(1.0, 1.0), "A & B", 8.0, "white");
        assert!(r.finish().contains("A &amp; B"));
    }
}
