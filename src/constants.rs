pub const DEFAULT_WHEEL_BASE: f64 = 83.0;
pub const DEFAULT_MAX_SPEED: f64 = 300.0;
pub const DEFAULT_ACCELERATION: f64 = 0.2;
pub const DEFAULT_BRAKE_STRENGTH: f64 = 0.4;
pub const DEFAULT_MAX_STEER_ANGLE: f64 = 30.0;
pub const DEFAULT_STEER_RATE: f64 = 0.1;
pub const DEFAULT_WIDTH: f64 = 50.0;
pub const DEFAULT_LENGTH: f64 = 128.0;

/// Reverse top speed as a fraction of the forward top speed.
pub const REVERSE_SPEED_RATIO: f64 = 0.5;

pub const DEFAULT_START_X: f64 = 800.0;
pub const DEFAULT_START_Y: f64 = 450.0;
pub const DEFAULT_START_HEADING: f64 = 0.0;

/// Accumulated frame time after which the frame counter publishes a new FPS value.
pub const FPS_WINDOW_SECS: f64 = 1.0;
