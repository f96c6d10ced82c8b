use crate::{
    config::SessionConfig,
    constants::FPS_WINDOW_SECS,
    control::FrameInput,
    error::Result,
    pose::VehiclePose,
    vehicle::{Vehicle, VehicleInit},
};

/// Frames-per-second counter fed with frame deltas.
#[derive(Debug, Clone, Default)]
pub struct FrameCounter {
    frames: u32,
    elapsed: f64,
    fps: u32,
}

impl FrameCounter {
    /// Counts one frame. Returns the new FPS value whenever a full window
    /// has elapsed.
    pub fn tick(&mut self, dt: f64) -> Option<u32> {
        self.frames = self.frames.saturating_add(1);
        self.elapsed += dt;

        if self.elapsed >= FPS_WINDOW_SECS {
            self.fps = self.frames;
            self.frames = 0;
            self.elapsed = 0.0;
            Some(self.fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// Owns one vehicle and runs it frame by frame.
#[derive(Debug, Clone)]
pub struct Session {
    vehicle: Vehicle,
    counter: FrameCounter,
    frame: u64,
}

impl Session {
    pub fn new(vehicle: Vehicle) -> Self {
        Self {
            vehicle,
            counter: FrameCounter::default(),
            frame: 0,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Result<Self> {
        let vehicle = VehicleInit {
            center: config.start.center(),
            heading: config.start.heading,
            config: config.vehicle,
        }
        .build()?;
        Ok(Self::new(vehicle))
    }

    /// Applies the frame's controls, advances once and returns the pose to draw.
    pub fn frame(&mut self, input: &FrameInput) -> VehiclePose {
        let FrameInput { dt, ref controls } = *input;

        self.vehicle.apply_input(controls);
        self.vehicle.advance(dt);
        self.frame += 1;

        if let Some(fps) = self.counter.tick(dt.max(0.0)) {
            tracing::debug!(fps, frame = self.frame, "frame rate");
        }

        self.vehicle.pose()
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn fps(&self) -> u32 {
        self.counter.fps()
    }

    /// Frames run so far.
    pub fn frames(&self) -> u64 {
        self.frame
    }
}
