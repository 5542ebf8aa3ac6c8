use serde::Deserialize;
use statsprobe_core::error::{Result, StatsError};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    pub version: u32,

    #[serde(default)]
    pub display: DisplaySection,

    #[serde(default)]
    pub dump: DumpSection,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            version: 1,
            display: DisplaySection::default(),
            dump: DumpSection::default(),
        }
    }
}

impl RegistryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(StatsError::UnsupportedVersion(self.version));
        }
        self.display.validate()?;
        Ok(())
    }
}

/// How handles render themselves through `Display`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DisplaySection {
    /// Samples shown before a stat's display is truncated.
    #[serde(default = "default_stat_preview")]
    pub stat_preview: usize,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            stat_preview: default_stat_preview(),
        }
    }
}

impl DisplaySection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=1024).contains(&self.stat_preview) {
            return Err(StatsError::InvalidConfig(
                "display.stat_preview must be between 1 and 1024".into(),
            ));
        }
        Ok(())
    }
}

/// Defaults for `print`.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DumpSection {
    #[serde(default)]
    pub include_headers: bool,

    #[serde(default = "default_sorted")]
    pub sorted: bool,
}

impl Default for DumpSection {
    fn default() -> Self {
        Self {
            include_headers: false,
            sorted: default_sorted(),
        }
    }
}

fn default_stat_preview() -> usize {
    3
}
fn default_sorted() -> bool {
    true
}
