use crate::kinematics::heading_vector;
use glam::DVec2;

/// Snapshot of the vehicle handed to renderers once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehiclePose {
    pub center: DVec2,
    pub front_axle: DVec2,
    pub rear_axle: DVec2,
    /// Chassis heading in degrees, unbounded.
    pub heading: f64,
    /// Front wheel angle relative to the chassis, in degrees.
    pub steer_angle: f64,
    pub speed: f64,
    /// Chassis size, carried along so the body can be drawn from the pose alone.
    pub width: f64,
    pub length: f64,
}

impl VehiclePose {
    pub fn heading_vector(&self) -> DVec2 {
        heading_vector(self.heading)
    }

    /// Absolute direction of the front wheels in degrees.
    pub fn front_wheel_heading(&self) -> f64 {
        self.heading + self.steer_angle
    }

    /// Chassis rectangle around `center`: both front corners, then both rear
    /// corners, in winding order.
    pub fn body_corners(&self) -> [DVec2; 4] {
        let forward = self.heading_vector() * (self.length / 2.0);
        let side = self.heading_vector().perp() * (self.width / 2.0);
        let center = self.center;

        [
            center + forward + side,
            center + forward - side,
            center - forward - side,
            center - forward + side,
        ]
    }
}
