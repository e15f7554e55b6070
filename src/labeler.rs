//! Keyword rule labeling names as Commercial or Retail

use crate::config::LabelerConfig;
use std::fmt;
use tracing::debug;

/// Customer category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    /// Also the default for missing names
    #[default]
    Commercial,
    Retail,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Commercial => "Commercial",
            Label::Retail => "Retail",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trim a raw cell, treating blank text as missing
pub fn clean_name(name: Option<&str>) -> Option<&str> {
    name.map(str::trim).filter(|n| !n.is_empty())
}

/// Substring keyword rule.
///
/// Matching is on raw substrings of the upper-cased name, so `CO` also fires
/// inside words such as `COOPER`.
#[derive(Debug, Clone)]
pub struct NameLabeler {
    keywords: Vec<String>,
}

impl NameLabeler {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Self {
        Self {
            keywords: keywords
                .iter()
                .map(|k| k.as_ref().trim().to_uppercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    pub fn from_config(config: &LabelerConfig) -> Self {
        Self::new(&config.keywords)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Label a single name; missing or blank names default to Commercial
    pub fn label(&self, name: Option<&str>) -> Label {
        let Some(name) = clean_name(name) else {
            debug!("Received an empty or missing name, defaulting to Commercial");
            return Label::Commercial;
        };

        let upper = name.to_uppercase();
        if self.keywords.iter().any(|k| upper.contains(k.as_str())) {
            Label::Commercial
        } else {
            Label::Retail
        }
    }
}

impl Default for NameLabeler {
    fn default() -> Self {
        Self::from_config(&LabelerConfig::default())
    }
}
