use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use super::category::Category;
use crate::error::CoreError;

/// Serum β2-microglobulin band (mg/L).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub enum B2mBand {
    #[serde(rename = "below_3_5")]
    Below3_5,
    #[serde(rename = "from_3_5_to_5_5")]
    From3_5To5_5,
    #[serde(rename = "at_least_5_5")]
    AtLeast5_5,
}

impl Category for B2mBand {
    const FIELD: &'static str = "b2m";

    fn all() -> &'static [Self] {
        &[Self::Below3_5, Self::From3_5To5_5, Self::AtLeast5_5]
    }

    fn code(self) -> &'static str {
        match self {
            Self::Below3_5 => "below_3_5",
            Self::From3_5To5_5 => "from_3_5_to_5_5",
            Self::AtLeast5_5 => "at_least_5_5",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Below3_5 => "< 3.5 mg/L",
            Self::From3_5To5_5 => "3.5 - 5.5 mg/L",
            Self::AtLeast5_5 => "≥ 5.5 mg/L",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Below3_5 => &["<3.5"],
            Self::From3_5To5_5 => &["3.5-5.5", "3.5–5.5"],
            Self::AtLeast5_5 => &["≥5.5", ">=5.5"],
        }
    }
}

/// Serum albumin band (g/dL).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub enum AlbuminBand {
    #[serde(rename = "at_least_3_5")]
    AtLeast3_5,
    #[serde(rename = "below_3_5")]
    Below3_5,
}

impl Category for AlbuminBand {
    const FIELD: &'static str = "albumin";

    fn all() -> &'static [Self] {
        &[Self::AtLeast3_5, Self::Below3_5]
    }

    fn code(self) -> &'static str {
        match self {
            Self::AtLeast3_5 => "at_least_3_5",
            Self::Below3_5 => "below_3_5",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::AtLeast3_5 => "≥ 3.5 g/dL",
            Self::Below3_5 => "< 3.5 g/dL",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::AtLeast3_5 => &["≥3.5", ">=3.5"],
            Self::Below3_5 => &["<3.5"],
        }
    }
}

/// Serum lactate dehydrogenase band (U/L).
///
/// Only normal vs. not-normal matters for scoring; the two elevated bands
/// are kept apart so the UI can echo back what was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub enum LdhBand {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "elevated")]
    Elevated,
    #[serde(rename = "significantly_elevated")]
    SignificantlyElevated,
}

impl LdhBand {
    pub fn is_elevated(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

impl Category for LdhBand {
    const FIELD: &'static str = "ldh";

    fn all() -> &'static [Self] {
        &[Self::Normal, Self::Elevated, Self::SignificantlyElevated]
    }

    fn code(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Elevated => "elevated",
            Self::SignificantlyElevated => "significantly_elevated",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal (< 240 U/L)",
            Self::Elevated => "Elevated (240 - 300 U/L)",
            Self::SignificantlyElevated => "Significantly Elevated (> 300 U/L)",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::SignificantlyElevated => &["significantly elevated"],
            _ => &[],
        }
    }
}

macro_rules! category_conversions {
    ($($ty:ty),+ $(,)?) => {$(
        impl FromStr for $ty {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_category(s)
            }
        }

        // Accepts codes and display labels alike.
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::parse_category(&raw).map_err(serde::de::Error::custom)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    )+};
}

category_conversions!(B2mBand, AlbuminBand, LdhBand);

/// High-risk chromosomal abnormalities detected by FISH.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CytogeneticFlags {
    #[serde(default)]
    pub del17p: bool,
    #[serde(default)]
    pub t414: bool,
    #[serde(default)]
    pub gain1q: bool,
}

/// The five clinical observations the R2-ISS score is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalInputs {
    pub b2m: B2mBand,
    pub albumin: AlbuminBand,
    pub ldh: LdhBand,
    #[serde(flatten)]
    pub cytogenetics: CytogeneticFlags,
}
