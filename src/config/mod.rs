//! Configuration APIs for dynarray
//!
//! Every tunable knob of a [`DynamicArray`](crate::containers::DynamicArray)
//! lives in [`DynamicArrayConfig`]. Configurations implement the [`Config`]
//! trait, which provides validation, environment initialization, presets and
//! JSON persistence.
//!
//! # Builder Pattern
//!
//! ```rust
//! use dynarray::config::DynamicArrayConfig;
//! use dynarray::containers::ShrinkStrategy;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DynamicArrayConfig::builder()
//!     .minimum_capacity(16)
//!     .minimum_load_factor(0.2)
//!     .shrink_strategy(ShrinkStrategy::SingleExtraHalving)
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Presets
//!
//! ```rust
//! use dynarray::config::{Config, DynamicArrayConfig};
//!
//! let fast = DynamicArrayConfig::performance_preset();
//! let lean = DynamicArrayConfig::memory_preset();
//! let steady = DynamicArrayConfig::realtime_preset();
//! ```
//!
//! # Environment Initialization
//!
//! ```rust
//! use dynarray::config::{Config, DynamicArrayConfig};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads DYNARRAY_ARRAY_MINIMUM_CAPACITY and friends
//! let config = DynamicArrayConfig::from_env()?;
//!
//! // Reads MYAPP_ARRAY_MINIMUM_CAPACITY and friends
//! let config = DynamicArrayConfig::from_env_with_prefix("MYAPP_")?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use std::env;
use std::fmt;
use std::path::Path;

pub mod dynamic_array;


pub use dynamic_array::{DynamicArrayConfig, DynamicArrayConfigBuilder};

/// Common configuration trait providing validation, environment initialization,
/// and preset management functionality.
pub trait Config: Clone + fmt::Debug {
    /// Validate the configuration for correctness and consistency.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the configuration is valid, `Err` with details if invalid.
    fn validate(&self) -> Result<()>;

    /// Initialize configuration from environment variables.
    ///
    /// Environment variables use the format `DYNARRAY_{COMPONENT}_{FIELD}`.
    /// For example, `DYNARRAY_ARRAY_MINIMUM_CAPACITY=32` sets the minimum
    /// capacity of the array configuration.
    fn from_env() -> Result<Self>
    where
        Self: Default,
    {
        Self::from_env_with_prefix("DYNARRAY_")
    }

    /// Initialize configuration from environment variables with a custom prefix.
    fn from_env_with_prefix(prefix: &str) -> Result<Self>
    where
        Self: Default;

    /// Preset favoring fewer reallocations over memory footprint.
    fn performance_preset() -> Self;

    /// Preset favoring a small memory footprint.
    fn memory_preset() -> Self;

    /// Preset favoring bounded, predictable work per operation.
    fn realtime_preset() -> Self;

    /// Balanced preset; the default configuration.
    fn balanced_preset() -> Self
    where
        Self: Default,
    {
        Self::default()
    }

    /// Save configuration to a file as pretty-printed JSON.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Load and validate a configuration from a JSON file.
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>;
}

/// Configuration validation error details.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// The invalid value
    pub value: String,
    /// Description of why the value is invalid
    pub reason: String,
    /// Suggested valid values or ranges
    pub suggestion: Option<String>,
}

impl ValidationError {
    /// Create a new validation error.
    ///
    /// # Arguments
    ///
    /// * `field` - The field name that failed validation
    /// * `value` - The invalid value
    /// * `reason` - Description of why the value is invalid
    pub fn new(field: &str, value: &str, reason: &str) -> Self {
        Self {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
            suggestion: None,
        }
    }

    /// Add a suggestion for valid values.
    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid configuration for field '{}': value '{}' is invalid ({})",
               self.field, self.value, self.reason)?;

        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". Suggested values: {}", suggestion)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Parse an environment variable, falling back to `default` when it is unset
/// or does not parse.
pub fn parse_env_var<T>(var_name: &str, default: T) -> T
where
    T: std::str::FromStr + Clone,
{
    env::var(var_name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
