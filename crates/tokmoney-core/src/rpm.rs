use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Revenue per mille: earnings per 1000 eligible views.
///
/// Always positive and finite. Serializes as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rpm(f64);

impl Rpm {
    /// Validates an externally supplied rate.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRpm`] for zero, negative, or non-finite values.
    pub fn new(value: f64) -> Result<Self, CoreError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidRpm { value })
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Rpm {
    fn default() -> Self {
        RpmPreset::Medium.rpm()
    }
}

impl TryFrom<f64> for Rpm {
    type Error = CoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rpm> for f64 {
    fn from(rpm: Rpm) -> Self {
        rpm.0
    }
}

impl From<RpmPreset> for Rpm {
    fn from(preset: RpmPreset) -> Self {
        preset.rpm()
    }
}

impl FromStr for Rpm {
    type Err = CoreError;

    /// Accepts a preset name (`"low"`) or a number, with `.` or `,` as the
    /// decimal separator (`"0,45"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(preset) = s.parse::<RpmPreset>() {
            return Ok(preset.rpm());
        }
        let value = s
            .trim()
            .replacen(',', ".", 1)
            .parse::<f64>()
            .map_err(|_| CoreError::InvalidPresetName(s.to_string()))?;
        Self::new(value)
    }
}

impl std::fmt::Display for Rpm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}€", self.0)
    }
}

/// The three positions of the RPM slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RpmPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl RpmPreset {
    /// Slider order, left to right.
    pub const ALL: [RpmPreset; 3] = [RpmPreset::Low, RpmPreset::Medium, RpmPreset::High];

    #[must_use]
    pub fn rpm(self) -> Rpm {
        match self {
            RpmPreset::Low => Rpm(0.20),
            RpmPreset::Medium => Rpm(0.45),
            RpmPreset::High => Rpm(0.70),
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            RpmPreset::Low => 0,
            RpmPreset::Medium => 1,
            RpmPreset::High => 2,
        }
    }

    /// Maps a slider position to its preset.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPresetIndex`] for positions past the last preset.
    pub fn from_index(index: usize) -> Result<Self, CoreError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(CoreError::InvalidPresetIndex(index))
    }
}

impl FromStr for RpmPreset {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RpmPreset::Low),
            "medium" => Ok(RpmPreset::Medium),
            "high" => Ok(RpmPreset::High),
            _ => Err(CoreError::InvalidPresetName(s.to_string())),
        }
    }
}

impl std::fmt::Display for RpmPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RpmPreset::Low => write!(f, "low"),
            RpmPreset::Medium => write!(f, "medium"),
            RpmPreset::High => write!(f, "high"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_medium_preset() {
        assert_eq!(Rpm::default().value(), 0.45);
    }

    #[test]
    fn preset_values() {
        assert_eq!(RpmPreset::Low.rpm().value(), 0.20);
        assert_eq!(RpmPreset::Medium.rpm().value(), 0.45);
        assert_eq!(RpmPreset::High.rpm().value(), 0.70);
    }

    #[test]
    fn slider_positions_map_one_to_one() {
        for (i, preset) in RpmPreset::ALL.iter().enumerate() {
            assert_eq!(RpmPreset::from_index(i).unwrap(), *preset);
            assert_eq!(preset.index(), i);
        }
    }

    #[test]
    fn slider_position_out_of_range_fails() {
        assert!(matches!(
            RpmPreset::from_index(3),
            Err(CoreError::InvalidPresetIndex(3))
        ));
    }

    #[test]
    fn custom_positive_rate_accepted() {
        assert_eq!(Rpm::new(1.25).unwrap().value(), 1.25);
    }

    #[test]
    fn zero_negative_and_nan_rejected() {
        assert!(Rpm::new(0.0).is_err());
        assert!(Rpm::new(-0.45).is_err());
        assert!(Rpm::new(f64::NAN).is_err());
        assert!(Rpm::new(f64::INFINITY).is_err());
    }

    #[test]
    fn parses_preset_name_and_number() {
        assert_eq!("high".parse::<Rpm>().unwrap().value(), 0.70);
        assert_eq!("0.33".parse::<Rpm>().unwrap().value(), 0.33);
        assert_eq!("0,2".parse::<Rpm>().unwrap().value(), 0.2);
    }

    #[test]
    fn parse_garbage_fails() {
        assert!("fast".parse::<Rpm>().is_err());
        assert!("-1".parse::<Rpm>().is_err());
    }

    #[test]
    fn serde_rejects_non_positive_rate() {
        let err = serde_json::from_str::<Rpm>("0").unwrap_err();
        assert!(err.to_string().contains("invalid RPM"));
    }

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(RpmPreset::Low.rpm().to_string(), "0.20€");
    }
}
