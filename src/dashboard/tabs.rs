//! Dashboard tabs

use std::fmt;
use std::str::FromStr;

use crate::utils::errors::CheckinError;

/// Dashboard panel, each with its own refresh behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    CsvUpload,
    Checkin,
    Stats,
}

impl Tab {
    /// Tabs in display order
    pub const ALL: [Tab; 3] = [Tab::CsvUpload, Tab::Checkin, Tab::Stats];

    /// Panel identifier (`csv-upload`, `checkin`, `stats`)
    pub fn name(&self) -> &'static str {
        match self {
            Tab::CsvUpload => "csv-upload",
            Tab::Checkin => "checkin",
            Tab::Stats => "stats",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            Tab::CsvUpload => "📤 CSV Upload",
            Tab::Checkin => "✅ Check-in",
            Tab::Stats => "📊 Statistics",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tab {
    type Err = CheckinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.name() == s.trim())
            .ok_or_else(|| CheckinError::InvalidInput(format!(
                "Unknown tab: {}. Valid tabs: csv-upload, checkin, stats",
                s
            )))
    }
}
