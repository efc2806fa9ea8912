use std::path::Path;

use serde::Deserialize;

use crate::arith::{Arith, DivZeroPolicy, OverflowPolicy};
use crate::error::{FixtureError, Result};

/// Operands of the demo driver, same as the fixture's `main`
pub const DEFAULT_X: i32 = 10;
pub const DEFAULT_Y: i32 = 5;

/// Contents of the TOML config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FixtureConfig {
    #[serde(default)]
    pub demo: DemoSection,
    #[serde(default)]
    pub policy: PolicySection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct DemoSection {
    #[serde(default = "default_x")]
    pub x: i32,
    #[serde(default = "default_y")]
    pub y: i32,
}

impl Default for DemoSection {
    fn default() -> Self {
        Self {
            x: DEFAULT_X,
            y: DEFAULT_Y,
        }
    }
}

fn default_x() -> i32 {
    DEFAULT_X
}

fn default_y() -> i32 {
    DEFAULT_Y
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PolicySection {
    #[serde(default)]
    pub overflow: OverflowPolicy,
    #[serde(default)]
    pub division_by_zero: DivZeroPolicy,
}

impl FixtureConfig {
    /// Parse config from a TOML string. `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let config = toml::from_str::<Self>(content).map_err(|source| FixtureError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        log::trace!("parsed config: {config:#?}");
        Ok(config)
    }

    /// Read and parse the config file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("loading config from '{}'", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| FixtureError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Load `path` if given, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::debug!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// The evaluator described by the `[policy]` section
    pub fn arith(&self) -> Arith {
        Arith::new(self.policy.overflow, self.policy.division_by_zero)
    }
}
