pub mod autopilot;
pub mod config;
pub mod constants;
pub mod control;
pub mod error;
pub mod kinematics;
pub mod pid;
pub mod pose;
pub mod session;
pub mod speed_control;
pub mod steer_control;
pub mod vehicle;

pub use autopilot::{Autopilot, AutopilotInit, Target};
pub use config::{SessionConfig, StartPose, VehicleConfig};
pub use control::{ControlInput, FrameInput, SteerDirection};
pub use error::{Error, Result};
pub use pose::VehiclePose;
pub use session::{FrameCounter, Session};
pub use speed_control::Motion;
pub use vehicle::{Vehicle, VehicleInit};
