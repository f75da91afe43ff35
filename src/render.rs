use crate::event::Location;

/// Drawing surface consumed by the plot functions. Implementations decide
/// canvas lifecycle and styling details; the trait only carries the
/// primitives the figures need.
///
/// `size` values follow the matplotlib scatter convention (marker area, not
/// radius); backends convert as they see fit.
pub trait PitchRenderer {
    fn circle(&mut self, center: Location, radius: f64, color: &str, alpha: f64);

    /// Plain label placed near a point of interest.
    fn text(&mut self, at: Location, text: &str, size: f64, color: &str);

    fn arrow(
        &mut self,
        start: Location,
        end: Location,
        color: &str,
        width: f64,
        head_width: f64,
        head_length: f64,
    );

    fn line(&mut self, start: Location, end: Location, width: f64, color: &str, alpha: f64);

    /// Markers at `points`, one area-style size per point.
    fn scatter(&mut self, points: &[Location], sizes: &[f64], color: &str, alpha: f64);

    /// Bold annotation centered on a point, used for player names on the
    /// pass network.
    fn annotate(&mut self, at: Location, text: &str, size: f64, color: &str);
}
