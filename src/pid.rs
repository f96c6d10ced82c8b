use pid::Pid;

/// Gains for a single PID loop. Only the total output is limited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidInit {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
    pub output_limit: f64,
}

impl PidInit {
    pub fn proportional(kp: f64, output_limit: f64) -> Self {
        Self {
            kp,
            ki: 0.0,
            kd: 0.0,
            output_limit,
        }
    }

    pub fn build(&self, setpoint: f64) -> Pid<f64> {
        let Self {
            kp,
            ki,
            kd,
            output_limit,
        } = *self;
        Pid::new(
            kp,
            ki,
            kd,
            f64::MAX,
            f64::MAX,
            f64::MAX,
            output_limit,
            setpoint,
        )
    }
}
