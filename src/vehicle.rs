use crate::{
    config::{finite, VehicleConfig},
    control::{ControlInput, SteerDirection},
    error::Result,
    kinematics::Axles,
    pose::VehiclePose,
    speed_control::{Motion, SpeedController},
    steer_control::SteerController,
};
use glam::DVec2;

#[derive(Debug, Clone)]
pub struct VehicleInit {
    pub center: DVec2,
    /// Degrees.
    pub heading: f64,
    pub config: VehicleConfig,
}

impl VehicleInit {
    pub fn build(&self) -> Result<Vehicle> {
        let Self {
            center,
            heading,
            ref config,
        } = *self;

        config.validate()?;
        finite("center.x", center.x)?;
        finite("center.y", center.y)?;
        finite("heading", heading)?;

        tracing::debug!(?center, heading, ?config, "vehicle created");

        Ok(Vehicle {
            config: *config,
            axles: Axles::around(center, heading, config.wheel_base),
            heading,
            speed_controller: SpeedController::from_config(config),
            steer_controller: SteerController::from_config(config),
        })
    }
}

/// Front-steered, rear-driven vehicle integrated with a kinematic bicycle model.
///
/// Control calls (`apply_*`) change speed and steering; `advance` integrates
/// them into the pose. Call the controls first and `advance` once per frame.
#[derive(Debug, Clone)]
pub struct Vehicle {
    config: VehicleConfig,
    axles: Axles,
    heading: f64,
    speed_controller: SpeedController,
    steer_controller: SteerController,
}

impl Vehicle {
    pub fn new(center: DVec2, heading: f64, config: VehicleConfig) -> Result<Self> {
        VehicleInit {
            center,
            heading,
            config,
        }
        .build()
    }

    pub fn apply_throttle(&mut self) {
        self.speed_controller.throttle();
    }

    pub fn apply_brake(&mut self) {
        self.speed_controller.brake();
    }

    pub fn apply_steer(&mut self, direction: SteerDirection) {
        self.steer_controller.apply(direction);
    }

    /// Translates held controls into at most one call of each mutator.
    pub fn apply_input(&mut self, input: &ControlInput) {
        if input.accelerate {
            self.apply_throttle();
        }
        if input.brake {
            self.apply_brake();
        }
        for direction in input.steer_directions() {
            self.apply_steer(direction);
        }
    }

    /// Integrates the current speed and steering over `dt` seconds.
    ///
    /// A zero `dt` leaves the pose untouched. Negative or non-finite values
    /// are dropped.
    pub fn advance(&mut self, dt: f64) {
        if !dt.is_finite() || dt < 0.0 {
            tracing::warn!(dt, "ignoring invalid frame delta");
            return;
        }
        if dt == 0.0 {
            return;
        }

        let speed = self.speed_controller.speed();
        let steer_angle = self.steer_controller.steer_angle();
        self.heading = self.axles.advance(
            self.heading,
            steer_angle,
            speed,
            self.config.wheel_base,
            dt,
        );

        tracing::trace!(dt, speed, steer_angle, heading = self.heading, "advanced");
    }

    pub fn pose(&self) -> VehiclePose {
        VehiclePose {
            center: self.center(),
            front_axle: self.axles.front,
            rear_axle: self.axles.rear,
            heading: self.heading,
            steer_angle: self.steer_angle(),
            speed: self.speed(),
            width: self.config.width,
            length: self.config.length,
        }
    }

    pub fn center(&self) -> DVec2 {
        self.axles.center()
    }

    pub fn front_axle(&self) -> DVec2 {
        self.axles.front
    }

    pub fn rear_axle(&self) -> DVec2 {
        self.axles.rear
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn steer_angle(&self) -> f64 {
        self.steer_controller.steer_angle()
    }

    /// Steering as a fraction of the lock, in `[-1, 1]`.
    pub fn steer_ratio(&self) -> f64 {
        self.steer_controller.steer_ratio()
    }

    pub fn speed(&self) -> f64 {
        self.speed_controller.speed()
    }

    pub fn motion(&self) -> Motion {
        self.speed_controller.motion()
    }

    pub fn config(&self) -> &VehicleConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn set_speed(&mut self, speed: f64) {
        self.speed_controller.set_speed(speed);
    }
}
