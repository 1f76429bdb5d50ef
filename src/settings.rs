use crate::config::GeneratorConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub events: usize,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn new(events: usize, seed: Option<u64>) -> Self {
        Self { events, seed }
    }
}

impl From<&GeneratorConfig> for Settings {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            events: config.events,
            seed: config.seed,
        }
    }
}
