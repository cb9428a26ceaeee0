//! Capacity policy configuration for dynamic arrays.
//!
//! [`DynamicArrayConfig`] carries the three policy knobs of a
//! [`DynamicArray`](crate::containers::DynamicArray): the capacity floor, the
//! minimum load factor that triggers shrinking, and how aggressively bulk
//! removals shrink.

use super::{parse_env_var, Config, ValidationError};
use crate::containers::ShrinkStrategy;
use crate::error::{DynArrayError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Capacity policy for a dynamic array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicArrayConfig {
    /// Slot count allocated at construction; capacity never shrinks below it
    pub minimum_capacity: usize,

    /// Shrink once fewer than `floor(minimum_load_factor * capacity)` slots
    /// are occupied (exclusive range 0.0-1.0)
    pub minimum_load_factor: f64,

    /// Shrink behavior after removing elements by value
    pub shrink_strategy: ShrinkStrategy,
}

impl Default for DynamicArrayConfig {
    fn default() -> Self {
        Self {
            minimum_capacity: 4,
            minimum_load_factor: 0.25,
            shrink_strategy: ShrinkStrategy::default(),
        }
    }
}

impl Config for DynamicArrayConfig {
    fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        // Doubling from zero never makes room
        if self.minimum_capacity == 0 {
            errors.push(ValidationError::new(
                "minimum_capacity",
                &self.minimum_capacity.to_string(),
                "minimum capacity must be greater than 0"
            ).with_suggestion("typical values: 4-64"));
        }

        if !(self.minimum_load_factor > 0.0 && self.minimum_load_factor < 1.0) {
            errors.push(ValidationError::new(
                "minimum_load_factor",
                &self.minimum_load_factor.to_string(),
                "minimum load factor must be strictly between 0.0 and 1.0"
            ).with_suggestion("typical values: 0.125-0.25"));
        }

        if !errors.is_empty() {
            let message = format!(
                "Dynamic array configuration validation failed: {}",
                errors.into_iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; ")
            );
            log::warn!("{}", message);
            return Err(DynArrayError::configuration(message));
        }

        Ok(())
    }

    fn from_env_with_prefix(prefix: &str) -> Result<Self> {
        let mut config = Self::default();

        config.minimum_capacity = parse_env_var(&format!("{}ARRAY_MINIMUM_CAPACITY", prefix), config.minimum_capacity);
        config.minimum_load_factor = parse_env_var(&format!("{}ARRAY_MINIMUM_LOAD_FACTOR", prefix), config.minimum_load_factor);

        // An unknown strategy name is an error rather than a silent fallback
        if let Ok(value) = env::var(format!("{}ARRAY_SHRINK_STRATEGY", prefix)) {
            config.shrink_strategy = value.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    fn performance_preset() -> Self {
        Self {
            minimum_capacity: 64,
            minimum_load_factor: 0.125,
            shrink_strategy: ShrinkStrategy::Fixpoint,
        }
    }

    fn memory_preset() -> Self {
        Self {
            minimum_capacity: 1,
            minimum_load_factor: 0.4,
            shrink_strategy: ShrinkStrategy::Fixpoint,
        }
    }

    fn realtime_preset() -> Self {
        // At most two halvings per bulk removal
        Self {
            minimum_capacity: 256,
            minimum_load_factor: 0.0625,
            shrink_strategy: ShrinkStrategy::SingleExtraHalving,
        }
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serde_json::to_string_pretty(self)
            .map_err(|e| DynArrayError::configuration(format!("Failed to serialize dynamic array config: {}", e)))?;

        std::fs::write(path, serialized)?;

        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| DynArrayError::configuration(format!("Failed to parse dynamic array config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }
}

impl DynamicArrayConfig {
    /// Create a new dynamic array configuration builder.
    pub fn builder() -> DynamicArrayConfigBuilder {
        DynamicArrayConfigBuilder::new()
    }

    /// Shorthand for a validated configuration with the default shrink strategy.
    pub fn new(minimum_capacity: usize, minimum_load_factor: f64) -> Result<Self> {
        Self::builder()
            .minimum_capacity(minimum_capacity)
            .minimum_load_factor(minimum_load_factor)
            .build()
    }
}

/// Builder for [`DynamicArrayConfig`].
#[derive(Debug, Clone, Default)]
pub struct DynamicArrayConfigBuilder {
    config: DynamicArrayConfig,
}

impl DynamicArrayConfigBuilder {
    /// Create a builder seeded with the default configuration.
    pub fn new() -> Self {
        Self {
            config: DynamicArrayConfig::default(),
        }
    }

    /// Set the minimum capacity.
    pub fn minimum_capacity(mut self, capacity: usize) -> Self {
        self.config.minimum_capacity = capacity;
        self
    }

    /// Set the minimum load factor.
    pub fn minimum_load_factor(mut self, factor: f64) -> Self {
        self.config.minimum_load_factor = factor;
        self
    }

    /// Set the bulk removal shrink strategy.
    pub fn shrink_strategy(mut self, strategy: ShrinkStrategy) -> Self {
        self.config.shrink_strategy = strategy;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<DynamicArrayConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
