use crate::{config::VehicleConfig, control::SteerDirection};

#[derive(Debug, Clone)]
pub struct SteerController {
    steer_angle: f64,
    max_steer_angle: f64,
    steer_rate: f64,
}

impl SteerController {
    pub fn from_config(config: &VehicleConfig) -> Self {
        Self::new(config.max_steer_angle, config.steer_rate)
    }

    pub fn new(max_steer_angle: f64, steer_rate: f64) -> Self {
        Self {
            steer_angle: 0.0,
            max_steer_angle,
            steer_rate,
        }
    }

    /// Turns the wheel by one step. Past the lock the angle snaps to the lock
    /// on the side of `direction`, not on the side of the accumulated angle.
    pub fn apply(&mut self, direction: SteerDirection) {
        if direction == SteerDirection::None {
            return;
        }

        let Self {
            max_steer_angle,
            steer_rate,
            ..
        } = *self;
        let sign = direction.sign();
        let steer_angle = self.steer_angle + sign * steer_rate;

        self.steer_angle = if steer_angle.abs() > max_steer_angle {
            tracing::trace!(steer_angle, max_steer_angle, "steer angle clamped");
            sign * max_steer_angle
        } else {
            steer_angle
        };
    }

    pub fn steer_angle(&self) -> f64 {
        self.steer_angle
    }

    pub fn max_steer_angle(&self) -> f64 {
        self.max_steer_angle
    }

    pub fn steer_rate(&self) -> f64 {
        self.steer_rate
    }

    pub fn steer_ratio(&self) -> f64 {
        self.steer_angle / self.max_steer_angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SteerDirection::{Left, None, Right};

    #[test]
    fn steps_by_rate() {
        let mut steer = SteerController::new(30.0, 0.5);
        assert_eq!(steer.steer_rate(), 0.5);
        steer.apply(Right);
        steer.apply(Right);
        assert_eq!(steer.steer_angle(), 1.0);
        steer.apply(Left);
        assert_eq!(steer.steer_angle(), 0.5);
    }

    #[test]
    fn clamps_to_lock_without_overshoot() {
        let mut steer = SteerController::new(30.0, 0.1);
        for _ in 0..400 {
            steer.apply(Right);
        }
        assert_eq!(steer.steer_angle(), steer.max_steer_angle());
        assert_eq!(steer.steer_ratio(), 1.0);

        for _ in 0..1000 {
            steer.apply(Left);
        }
        assert_eq!(steer.steer_angle(), -30.0);
    }

    #[test]
    fn snap_follows_last_input() {
        // A step larger than the whole range crosses from one lock to the other.
        let mut steer = SteerController::new(1.0, 5.0);
        steer.apply(Right);
        assert_eq!(steer.steer_angle(), 1.0);
        steer.apply(Left);
        assert_eq!(steer.steer_angle(), -1.0);
    }

    #[test]
    fn none_keeps_angle_at_lock() {
        let mut steer = SteerController::new(30.0, 7.0);
        for _ in 0..10 {
            steer.apply(Left);
        }
        assert_eq!(steer.steer_angle(), -30.0);
        steer.apply(None);
        assert_eq!(steer.steer_angle(), -30.0);
    }
}
