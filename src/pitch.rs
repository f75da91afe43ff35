use crate::event::Location;

/// Pitch dimensions used as the coordinate space. StatsBomb logs use
/// 120x80; the origin is the attacking team's own goal line, left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchSpec {
    pub length: f64,
    pub width: f64,
}

impl Default for PitchSpec {
    fn default() -> Self {
        Self {
            length: 120.0,
            width: 80.0,
        }
    }
}

impl PitchSpec {
    /// Reflect a point through the pitch center, so a second team's events
    /// render toward the opposite end of a shared diagram.
    pub fn mirror(&self, loc: Location) -> Location {
        Location::new(self.length - loc.x, self.width - loc.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_reflects_through_center() {
        let pitch = PitchSpec::default();
        let m = pitch.mirror(Location::new(100.0, 30.0));
        assert_eq!(m, Location::new(20.0, 50.0));
        // Mirroring twice is the identity.
        assert_eq!(pitch.mirror(m), Location::new(100.0, 30.0));
    }
}
