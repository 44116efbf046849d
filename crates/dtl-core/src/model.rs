use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationKind {
    UnknownColor,
    RgbColor,
    HardcodedFont,
    HardcodedShadow,
    HardcodedRadius,
    UnknownColorInStyle,
    MissingStylesheet,
    MissingFont,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::UnknownColor => "UNKNOWN_COLOR",
            ViolationKind::RgbColor => "RGB_COLOR",
            ViolationKind::HardcodedFont => "HARDCODED_FONT",
            ViolationKind::HardcodedShadow => "HARDCODED_SHADOW",
            ViolationKind::HardcodedRadius => "HARDCODED_RADIUS",
            ViolationKind::UnknownColorInStyle => "UNKNOWN_COLOR_IN_STYLE",
            ViolationKind::MissingStylesheet => "MISSING_STYLESHEET",
            ViolationKind::MissingFont => "MISSING_FONT",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
