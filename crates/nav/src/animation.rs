use glam::Vec3;

/// Linear position animation driven by a normalized progress counter.
///
/// Progress advances by elapsed seconds, so one animation takes one second.
/// Once progress reaches 1 the animation is finished and [`advance`] returns
/// nothing until [`retarget`] starts a new one.
///
/// [`advance`]: PositionAnimation::advance
/// [`retarget`]: PositionAnimation::retarget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionAnimation {
    start: Vec3,
    target: Vec3,
    progress: f32,
}

impl PositionAnimation {
    /// A finished animation resting at `position`.
    pub fn settled(position: Vec3) -> Self {
        Self {
            start: position,
            target: position,
            progress: 1.0,
        }
    }

    /// Start animating from `start` to `target`.
    pub fn retarget(&mut self, start: Vec3, target: Vec3) {
        self.start = start;
        self.target = target;
        self.progress = 0.0;
    }

    /// Advance by `dt` seconds and return the interpolated position, or
    /// `None` if already finished. The final step lands exactly on the target.
    pub fn advance(&mut self, dt: f32) -> Option<Vec3> {
        if self.is_finished() {
            return None;
        }
        self.progress = (self.progress + dt.max(0.0)).min(1.0);
        if self.is_finished() {
            Some(self.target)
        } else {
            Some(self.start.lerp(self.target, self.progress))
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_does_not_move() {
        let mut a = PositionAnimation::settled(Vec3::ONE);
        assert!(a.is_finished());
        assert_eq!(a.advance(0.5), None);
    }

    #[test]
    fn interpolates_then_lands_exactly() {
        let mut a = PositionAnimation::settled(Vec3::ZERO);
        let target = Vec3::new(0.3, 0.0, -7.1);
        a.retarget(Vec3::ZERO, target);

        let mid = a.advance(0.25).unwrap();
        assert!((mid - target * 0.25).length() < 1e-5);
        assert!(!a.is_finished());

        // Overshoot clamps to the end
        assert_eq!(a.advance(5.0), Some(target));
        assert!(a.is_finished());
        assert_eq!(a.progress(), 1.0);
        assert_eq!(a.advance(0.1), None);
    }

    #[test]
    fn many_small_steps_reach_target() {
        let mut a = PositionAnimation::settled(Vec3::ZERO);
        let target = Vec3::new(10.0, 0.0, 0.0);
        a.retarget(Vec3::ZERO, target);
        let mut last = Vec3::ZERO;
        while let Some(p) = a.advance(1.0 / 60.0) {
            assert!(p.x >= last.x);
            last = p;
        }
        assert_eq!(last, target);
    }

    #[test]
    fn negative_dt_is_ignored() {
        let mut a = PositionAnimation::settled(Vec3::ZERO);
        a.retarget(Vec3::ZERO, Vec3::X);
        assert_eq!(a.advance(-1.0), Some(Vec3::ZERO));
        assert_eq!(a.progress(), 0.0);
    }
}
