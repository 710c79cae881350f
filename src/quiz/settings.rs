use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Settings {
    pub warmup_steps: u32,
    pub warmup_step_duration: Duration,
    pub time_limit: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            warmup_steps: 3,
            warmup_step_duration: Duration::from_secs(1),
            time_limit: Duration::from_secs(30),
        }
    }
}
