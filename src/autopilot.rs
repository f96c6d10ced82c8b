//! A driver that holds a target speed and heading using only the discrete
//! controls a human has: accelerate, brake, steer left and steer right.

use crate::{
    config::VehicleConfig, control::ControlInput, error::Result, pid::PidInit,
    pose::VehiclePose,
};
use pid::Pid;

/// Heading error, in degrees, at which the autopilot asks for full lock.
const FULL_LOCK_ERROR_DEGREES: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub speed: f64,
    /// Degrees.
    pub heading: f64,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            speed: 0.0,
            heading: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AutopilotInit {
    pub speed_pid: PidInit,
    pub heading_pid: PidInit,
    /// Speed loop outputs within `±deadband` press neither pedal.
    pub deadband: f64,
}

impl AutopilotInit {
    pub fn from_config(config: &VehicleConfig) -> Self {
        let speed_pid = PidInit::proportional(0.05, 1.0);
        let largest_step = config.acceleration.max(config.brake_strength);

        Self {
            speed_pid,
            heading_pid: PidInit::proportional(1.0 / FULL_LOCK_ERROR_DEGREES, 1.0),
            deadband: speed_pid.kp * largest_step,
        }
    }

    pub fn build(&self, config: &VehicleConfig) -> Result<Autopilot> {
        let Self {
            ref speed_pid,
            ref heading_pid,
            deadband,
        } = *self;

        config.validate()?;

        Ok(Autopilot {
            speed_pid: speed_pid.build(0.0),
            heading_pid: heading_pid.build(0.0),
            deadband,
            target: Target::default(),
            max_speed: config.max_speed,
            max_reverse_speed: config.max_reverse_speed(),
            max_steer_angle: config.max_steer_angle,
            steer_rate: config.steer_rate,
        })
    }
}

#[derive(Debug)]
pub struct Autopilot {
    speed_pid: Pid<f64>,
    heading_pid: Pid<f64>,
    deadband: f64,
    target: Target,
    max_speed: f64,
    max_reverse_speed: f64,
    max_steer_angle: f64,
    steer_rate: f64,
}

impl Autopilot {
    pub fn target(&self) -> Target {
        self.target
    }

    pub fn set_target(&mut self, target: Target) {
        let speed = target.speed.clamp(-self.max_reverse_speed, self.max_speed);
        self.target = Target { speed, ..target };
    }

    pub fn step(&mut self, pose: &VehiclePose) -> ControlInput {
        let Self {
            speed_pid,
            heading_pid,
            deadband,
            target,
            max_steer_angle,
            steer_rate,
            ..
        } = self;

        speed_pid.setpoint = target.speed;
        let pedal = speed_pid.next_control_output(pose.speed).output;

        // The loop drives the wrapped error to zero, so feed it the negated error.
        let error = heading_error(target.heading, pose.heading);
        let steer = heading_pid.next_control_output(-error).output;
        let desired_steer = if pose.speed < 0.0 {
            -steer * *max_steer_angle
        } else {
            steer * *max_steer_angle
        };
        let steer_delta = desired_steer - pose.steer_angle;
        let half_step = *steer_rate / 2.0;

        ControlInput {
            accelerate: pedal > *deadband,
            brake: pedal < -*deadband,
            steer_left: steer_delta < -half_step,
            steer_right: steer_delta > half_step,
        }
    }
}

/// Signed difference `target - current`, wrapped into `(-180, 180]` degrees.
pub fn heading_error(target: f64, current: f64) -> f64 {
    let wrapped = (target - current).rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Error, vehicle::Vehicle};
    use glam::DVec2;

    fn pose(heading: f64, speed: f64, steer_angle: f64) -> VehiclePose {
        VehiclePose {
            center: DVec2::ZERO,
            front_axle: DVec2::X,
            rear_axle: -DVec2::X,
            heading,
            steer_angle,
            speed,
            width: 50.0,
            length: 128.0,
        }
    }

    fn autopilot(target: Target) -> Autopilot {
        let config = VehicleConfig::default();
        let mut autopilot = AutopilotInit::from_config(&config).build(&config).unwrap();
        autopilot.set_target(target);
        autopilot
    }

    #[test]
    fn rejects_invalid_config() {
        let invalid = [
            VehicleConfig {
                max_speed: -1.0,
                ..Default::default()
            },
            VehicleConfig {
                max_speed: f64::NAN,
                ..Default::default()
            },
            VehicleConfig {
                steer_rate: 0.0,
                ..Default::default()
            },
        ];

        for config in invalid {
            let result = AutopilotInit::from_config(&config).build(&config);
            assert!(matches!(result, Err(Error::InvalidConfiguration { .. })));
        }
    }

    #[test]
    fn wraps_heading_error() {
        assert_eq!(heading_error(10.0, 350.0), 20.0);
        assert_eq!(heading_error(350.0, 10.0), -20.0);
        assert_eq!(heading_error(180.0, 0.0), 180.0);
        assert_eq!(heading_error(720.0 + 45.0, 0.0), 45.0);
    }

    #[test]
    fn clamps_target_speed() {
        let mut autopilot = autopilot(Target::default());
        autopilot.set_target(Target {
            speed: 1e6,
            heading: 0.0,
        });
        assert_eq!(autopilot.target().speed, 300.0);
        autopilot.set_target(Target {
            speed: -1e6,
            heading: 0.0,
        });
        assert_eq!(autopilot.target().speed, -150.0);
    }

    #[test]
    fn presses_pedals_toward_target_speed() {
        let mut autopilot = autopilot(Target {
            speed: 50.0,
            heading: 0.0,
        });
        let input = autopilot.step(&pose(0.0, 0.0, 0.0));
        assert!(input.accelerate && !input.brake);

        let input = autopilot.step(&pose(0.0, 80.0, 0.0));
        assert!(input.brake && !input.accelerate);

        let input = autopilot.step(&pose(0.0, 50.0, 0.0));
        assert!(!input.brake && !input.accelerate);
    }

    #[test]
    fn steers_toward_target_heading() {
        let mut autopilot = autopilot(Target {
            speed: 0.0,
            heading: 90.0,
        });
        let input = autopilot.step(&pose(0.0, 10.0, 0.0));
        assert!(input.steer_right && !input.steer_left);

        // Reversing turns the other way.
        let input = autopilot.step(&pose(0.0, -10.0, 0.0));
        assert!(input.steer_left && !input.steer_right);

        let mut autopilot = autopilot_with_heading(-90.0);
        let input = autopilot.step(&pose(0.0, 10.0, 0.0));
        assert!(input.steer_left && !input.steer_right);

        let input = autopilot.step(&pose(-90.0, 10.0, 0.0));
        assert!(!input.steer_left && !input.steer_right);
    }

    fn autopilot_with_heading(heading: f64) -> Autopilot {
        autopilot(Target {
            speed: 0.0,
            heading,
        })
    }

    #[test]
    fn reaches_target_speed() {
        let config = VehicleConfig::default();
        let mut vehicle = Vehicle::new(DVec2::new(800.0, 450.0), 0.0, config).unwrap();
        let mut autopilot = AutopilotInit::from_config(&config).build(&config).unwrap();
        autopilot.set_target(Target {
            speed: 50.0,
            heading: 0.0,
        });

        for _ in 0..600 {
            let input = autopilot.step(&vehicle.pose());
            vehicle.apply_input(&input);
            vehicle.advance(1.0 / 60.0);
        }

        assert!((vehicle.speed() - 50.0).abs() <= 0.5, "{}", vehicle.speed());
        assert!(vehicle.heading().abs() < 1e-9);
    }

    #[test]
    fn turns_toward_target_heading() {
        let config = VehicleConfig::default();
        let mut vehicle = Vehicle::new(DVec2::ZERO, 0.0, config).unwrap();
        let mut autopilot = AutopilotInit::from_config(&config).build(&config).unwrap();
        autopilot.set_target(Target {
            speed: 50.0,
            heading: 90.0,
        });

        for _ in 0..600 {
            let input = autopilot.step(&vehicle.pose());
            vehicle.apply_input(&input);
            vehicle.advance(1.0 / 60.0);
        }

        assert!(vehicle.heading() > 10.0, "{}", vehicle.heading());
        assert!(vehicle.heading() < 170.0, "{}", vehicle.heading());
    }
}
