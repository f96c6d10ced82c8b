/// Which way the driver turns the wheel for one control tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SteerDirection {
    Left,
    None,
    Right,
}

impl SteerDirection {
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::None => 0.0,
            Self::Right => 1.0,
        }
    }

    /// Maps `-1`, `0`, `+1`; any other value is treated by its sign.
    pub fn from_sign(sign: i32) -> Self {
        match sign.signum() {
            -1 => Self::Left,
            1 => Self::Right,
            _ => Self::None,
        }
    }
}

impl Default for SteerDirection {
    fn default() -> Self {
        Self::None
    }
}

/// Held controls for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlInput {
    pub accelerate: bool,
    pub brake: bool,
    pub steer_left: bool,
    pub steer_right: bool,
}

impl ControlInput {
    pub fn idle() -> Self {
        Self {
            accelerate: false,
            brake: false,
            steer_left: false,
            steer_right: false,
        }
    }

    /// Steer calls in the order they are applied.
    pub fn steer_directions(&self) -> impl Iterator<Item = SteerDirection> {
        let left = self.steer_left.then_some(SteerDirection::Left);
        let right = self.steer_right.then_some(SteerDirection::Right);
        left.into_iter().chain(right)
    }
}

impl Default for ControlInput {
    fn default() -> Self {
        Self::idle()
    }
}

/// Everything the owning session feeds the model for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInput {
    /// Elapsed wall-clock seconds since the previous frame.
    pub dt: f64,
    pub controls: ControlInput,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            dt: 0.0,
            controls: ControlInput::idle(),
        }
    }
}
