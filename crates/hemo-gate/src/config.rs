use serde::{Deserialize, Serialize};

/// Configuration for the transfer gate pipelines.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GateConfig {
    /// Smallest unit count any transfer may move.
    pub min_units: u32,
    /// Largest unit count a single donation may add.
    pub donation_max_units: u32,
    /// Largest unit count a single request may draw.
    pub request_max_units: u32,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            min_units: 1,
            donation_max_units: 5,
            request_max_units: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits() {
        let config = GateConfig::default();
        assert_eq!(config.min_units, 1);
        assert_eq!(config.donation_max_units, 5);
        assert_eq!(config.request_max_units, 10);
    }

    #[test]
    fn serde_roundtrip() {
        let config = GateConfig {
            min_units: 2,
            donation_max_units: 4,
            request_max_units: 8,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: GateConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.donation_max_units, 4);
        assert_eq!(back.request_max_units, 8);
    }
}
