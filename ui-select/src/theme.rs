use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

/// Visual themes shipped with ui-select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Bootstrap,
    Select2,
    Selectize,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Bootstrap, Theme::Select2, Theme::Selectize];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bootstrap => "bootstrap",
            Self::Select2 => "select2",
            Self::Selectize => "selectize",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownTheme(s.to_string()))
    }
}
