//! Registry policy configuration.

/// Fixed policy values for constraint handling and route metrics.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Minutes charged for the final leg into the destination,
    /// regardless of the stored per-station value. Also used when a
    /// train is marked as having no middle stations.
    pub final_leg_mins: u32,

    /// Multiplier applied to a train's speed under the climate-change
    /// constraint.
    pub climate_speed_factor: f64,
}

impl RegistryConfig {
    /// Create a configuration with the given parameters.
    pub fn new(final_leg_mins: u32, climate_speed_factor: f64) -> Self {
        Self {
            final_leg_mins,
            climate_speed_factor,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            final_leg_mins: 120,        // 2 hours
            climate_speed_factor: 0.8,  // 20% reduction
        }
    }
}
