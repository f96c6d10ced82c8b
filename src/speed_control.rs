use crate::config::VehicleConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    Stationary,
    Forward,
    Reverse,
}

impl Motion {
    pub fn from_speed(speed: f64) -> Self {
        if speed > 0.0 {
            Self::Forward
        } else if speed < 0.0 {
            Self::Reverse
        } else {
            Self::Stationary
        }
    }
}

/// Signed speed along the chassis axis, driven by throttle and brake calls.
#[derive(Debug, Clone)]
pub struct SpeedController {
    speed: f64,
    max_speed: f64,
    max_reverse_speed: f64,
    acceleration: f64,
    brake_strength: f64,
}

impl SpeedController {
    pub fn from_config(config: &VehicleConfig) -> Self {
        let VehicleConfig {
            max_speed,
            acceleration,
            brake_strength,
            ..
        } = *config;

        Self {
            speed: 0.0,
            max_speed,
            max_reverse_speed: config.max_reverse_speed(),
            acceleration,
            brake_strength,
        }
    }

    /// While reversing, throttle takes off speed at the brake rate.
    pub fn throttle(&mut self) {
        let Self {
            speed,
            max_speed,
            acceleration,
            brake_strength,
            ..
        } = *self;

        let delta = if speed >= 0.0 {
            acceleration
        } else {
            brake_strength
        };
        let next = speed + delta;

        self.speed = if next > max_speed {
            tracing::trace!(speed = next, max_speed, "forward speed clamped");
            max_speed
        } else {
            next
        };
    }

    /// Brakes while moving forward; held at a standstill or in reverse it
    /// drives backwards at the acceleration rate.
    pub fn brake(&mut self) {
        let Self {
            speed,
            max_reverse_speed,
            acceleration,
            brake_strength,
            ..
        } = *self;

        let delta = if speed > 0.0 {
            brake_strength
        } else {
            acceleration
        };
        let next = speed - delta;

        self.speed = if next < -max_reverse_speed {
            tracing::trace!(speed = next, max_reverse_speed, "reverse speed clamped");
            -max_reverse_speed
        } else {
            next
        };
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn motion(&self) -> Motion {
        Motion::from_speed(self.speed)
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn max_reverse_speed(&self) -> f64 {
        self.max_reverse_speed
    }

    #[cfg(test)]
    pub(crate) fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }
}
