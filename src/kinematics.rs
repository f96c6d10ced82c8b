use glam::DVec2;

/// Unit vector for an angle in degrees.
pub fn heading_vector(degrees: f64) -> DVec2 {
    let radians = degrees.to_radians();
    DVec2::new(radians.cos(), radians.sin())
}

/// Axle midpoints of a two-wheel (bicycle) model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axles {
    pub front: DVec2,
    pub rear: DVec2,
}

impl Axles {
    /// Places both axles half a wheel base from `center` along `heading`.
    pub fn around(center: DVec2, heading: f64, wheel_base: f64) -> Self {
        let half = heading_vector(heading) * (wheel_base / 2.0);
        Self {
            front: center + half,
            rear: center - half,
        }
    }

    pub fn center(&self) -> DVec2 {
        (self.front + self.rear) * 0.5
    }

    /// Moves the axles by `speed * dt` and returns the new heading.
    ///
    /// The front axle travels along `heading + steer_angle`, the rear along
    /// `heading`. The yaw update `steer_angle * dt * speed / wheel_base` is a
    /// small-angle approximation that works directly in degrees.
    pub fn advance(
        &mut self,
        heading: f64,
        steer_angle: f64,
        speed: f64,
        wheel_base: f64,
        dt: f64,
    ) -> f64 {
        let distance = speed * dt;
        self.front += heading_vector(heading + steer_angle) * distance;
        self.rear += heading_vector(heading) * distance;

        heading + (steer_angle * dt * speed) / wheel_base
    }
}
