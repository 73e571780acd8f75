/// Per-frame angle accumulator.
///
/// Advances by a fixed number of degrees every call and wraps into `[0, 360)`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Spin {
    step_deg: f32,
    angle_deg: f32,
}

impl Spin {
    pub fn new(step_deg: f32) -> Self {
        Self {
            step_deg,
            angle_deg: 0.0,
        }
    }

    #[inline]
    pub fn is_still(&self) -> bool {
        self.step_deg == 0.0
    }

    #[inline]
    pub fn degrees(&self) -> f32 {
        self.angle_deg
    }

    /// Advances one step and returns the new angle in radians.
    pub fn advance(&mut self) -> f32 {
        self.angle_deg = (self.angle_deg + self.step_deg).rem_euclid(360.0);
        self.angle_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_full_turn() {
        let mut s = Spin::new(1.0);
        for _ in 0..360 {
            s.advance();
        }
        assert_eq!(s.degrees(), 0.0);
        s.advance();
        assert_eq!(s.degrees(), 1.0);
    }

    #[test]
    fn negative_step_stays_in_range() {
        let mut s = Spin::new(-90.0);
        s.advance();
        assert_eq!(s.degrees(), 270.0);
    }

    #[test]
    fn zero_step_is_still() {
        let mut s = Spin::new(0.0);
        assert!(s.is_still());
        assert_eq!(s.advance(), 0.0);
    }
}
