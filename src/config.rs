//! Declarative distribution configuration.
//!
//! A [`DistributionConfig`] names a family and its parameters, can be read
//! from JSON, and builds a boxed [`Distribution`]. Omitted fields take the
//! family defaults (`Normal(0, 1)`, `Uniform(0, 1)`, unseeded).
//!
//! ```
//! use u_probability::{Distribution, DistributionConfig};
//! let cfg = DistributionConfig::from_json(r#"{"family": "uniform", "high": 4.0, "seed": 7}"#).unwrap();
//! let dist = cfg.build().unwrap();
//! assert_eq!(dist.name(), "Uniform");
//! assert_eq!(dist.mean(), 2.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::distribution::Distribution;
use crate::distributions::{Normal, Uniform};
use crate::error::{DistributionError, Result};

fn one() -> f64 {
    1.0
}

/// A distribution family with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum DistributionConfig {
    Normal {
        #[serde(default)]
        loc: f64,
        #[serde(default = "one")]
        scale: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
    Uniform {
        #[serde(default)]
        low: f64,
        #[serde(default = "one")]
        high: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
}

impl DistributionConfig {
    /// Parses a configuration from JSON.
    ///
    /// # Errors
    /// [`DistributionError::Config`] on malformed JSON or an unknown family.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| DistributionError::Config(e.to_string()))
    }

    /// Serialises the configuration to JSON.
    ///
    /// # Errors
    /// [`DistributionError::Config`] if serialisation fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| DistributionError::Config(e.to_string()))
    }

    /// Validates the parameters and constructs the distribution.
    ///
    /// # Errors
    /// [`DistributionError::InvalidParameters`] from the family constructor.
    pub fn build(&self) -> Result<Box<dyn Distribution>> {
        match *self {
            DistributionConfig::Normal { loc, scale, seed } => {
                let normal = Normal::new(loc, scale)?;
                Ok(Box::new(match seed {
                    Some(seed) => normal.with_seed(seed),
                    None => normal,
                }))
            }
            DistributionConfig::Uniform { low, high, seed } => {
                let uniform = Uniform::new(low, high)?;
                Ok(Box::new(match seed {
                    Some(seed) => uniform.with_seed(seed),
                    None => uniform,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = DistributionConfig::from_json(r#"{"family": "normal"}"#).unwrap();
        assert_eq!(
            cfg,
            DistributionConfig::Normal {
                loc: 0.0,
                scale: 1.0,
                seed: None
            }
        );
        let cfg = DistributionConfig::from_json(r#"{"family": "uniform"}"#).unwrap();
        assert_eq!(
            cfg,
            DistributionConfig::Uniform {
                low: 0.0,
                high: 1.0,
                seed: None
            }
        );
    }

    #[test]
    fn test_build_seeded_matches_direct() {
        let cfg = DistributionConfig::Normal {
            loc: 2.0,
            scale: 0.5,
            seed: Some(42),
        };
        let built = cfg.build().unwrap();
        let direct = Normal::new(2.0, 0.5).unwrap().with_seed(42);
        assert_eq!(built.sample(&[16]), direct.sample(&[16]));
        assert_eq!(built.seed(), Some(42));
        assert_eq!(built.describe(), "Normal(loc=2, scale=0.5)");
    }

    #[test]
    fn test_build_rejects_invalid_parameters() {
        let cfg = DistributionConfig::from_json(r#"{"family": "uniform", "low": 3.0, "high": 1.0}"#)
            .unwrap();
        assert!(matches!(
            cfg.build(),
            Err(DistributionError::InvalidParameters(_))
        ));
        let cfg = DistributionConfig::Normal {
            loc: 0.0,
            scale: -1.0,
            seed: None,
        };
        assert!(cfg.build().is_err());
    }

    #[test]
    fn test_unknown_family() {
        let err = DistributionConfig::from_json(r#"{"family": "cauchy"}"#).unwrap_err();
        assert!(matches!(err, DistributionError::Config(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let cfg = DistributionConfig::Uniform {
            low: -1.0,
            high: 2.5,
            seed: Some(3),
        };
        let json = cfg.to_json().unwrap();
        assert!(json.contains(r#""family":"uniform""#));
        assert_eq!(DistributionConfig::from_json(&json).unwrap(), cfg);
    }
}
