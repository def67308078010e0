use serde::Deserialize;
use custrack_core::error::{Result, TrackerError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrackerConfig {
    pub version: u32,

    /// JSON array of form submissions recorded at startup.
    #[serde(default)]
    pub seed_file: Option<String>,

    #[serde(default)]
    pub report: ReportSection,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            seed_file: None,
            report: ReportSection::default(),
        }
    }
}

impl TrackerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TrackerError::UnsupportedVersion);
        }
        if matches!(self.seed_file.as_deref(), Some(p) if p.trim().is_empty()) {
            return Err(TrackerError::InvalidConfig("seed_file must not be blank".into()));
        }

        self.report.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSection {
    #[serde(default)]
    pub format: ReportFormat,

    #[serde(default = "default_precision")]
    pub precision: usize,

    #[serde(default = "default_true")]
    pub show_ledger: bool,

    #[serde(default = "default_true")]
    pub show_demographics: bool,

    #[serde(default = "default_true")]
    pub show_charts: bool,

    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            precision: default_precision(),
            show_ledger: true,
            show_demographics: true,
            show_charts: true,
            bar_width: default_bar_width(),
        }
    }
}

impl ReportSection {
    pub fn validate(&self) -> Result<()> {
        if self.precision > 6 {
            return Err(TrackerError::InvalidConfig(
                "report.precision must be between 0 and 6".into(),
            ));
        }
        if !(1..=200).contains(&self.bar_width) {
            return Err(TrackerError::InvalidConfig(
                "report.bar_width must be between 1 and 200".into(),
            ));
        }
        Ok(())
    }
}

fn default_precision() -> usize {
    2
}
fn default_true() -> bool {
    true
}
fn default_bar_width() -> usize {
    40
}
