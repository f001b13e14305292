use derive_more::derive::{Display, Error};
use serde::Deserialize;

use crate::core::unit::Watt;

/// Raised at the input boundary only. The consumption calculations accept any
/// number and never validate.
#[derive(Debug, Clone, PartialEq, Display, Error)]
pub enum ValidationError {
    #[display("Field {field} is required")]
    MissingName { field: &'static str },

    #[display("Power must be greater than 0, got {power}")]
    PowerTooLow { power: f64 },

    #[display("Usage must be between 0 and 24 hours, got {hours}")]
    UsageOutOfRange { hours: f64 },

    #[display("Field {field} must be a finite number")]
    NotANumber { field: &'static str },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingName { field } => *field,
            ValidationError::PowerTooLow { .. } => "power",
            ValidationError::UsageOutOfRange { .. } => "dailyUsageHours",
            ValidationError::NotANumber { field } => *field,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceDraft {
    pub name: String,
    pub power: f64,
    pub daily_usage_hours: f64,
}

/// Appliance input after validation: trimmed name, power of at least 1 W and
/// usage within a day.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidAppliance {
    pub name: String,
    pub power: Watt,
    pub daily_usage_hours: f64,
}

impl ApplianceDraft {
    pub fn validate(self) -> Result<ValidAppliance, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName { field: "name" });
        }

        if !self.power.is_finite() {
            return Err(ValidationError::NotANumber { field: "power" });
        }
        if self.power < 1.0 {
            return Err(ValidationError::PowerTooLow { power: self.power });
        }

        if !self.daily_usage_hours.is_finite() {
            return Err(ValidationError::NotANumber {
                field: "dailyUsageHours",
            });
        }
        if !(0.0..=24.0).contains(&self.daily_usage_hours) {
            return Err(ValidationError::UsageOutOfRange {
                hours: self.daily_usage_hours,
            });
        }

        Ok(ValidAppliance {
            name: name.to_owned(),
            power: Watt(self.power),
            daily_usage_hours: self.daily_usage_hours,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoomDraft {
    pub name: String,
}

impl RoomDraft {
    pub fn validate(self) -> Result<String, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName { field: "name" });
        }

        Ok(name.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, power: f64, hours: f64) -> ApplianceDraft {
        ApplianceDraft {
            name: name.to_owned(),
            power,
            daily_usage_hours: hours,
        }
    }

    #[test]
    fn accepts_valid_appliance() {
        let valid = draft("  Chuveiro ", 5500.0, 0.5).validate().unwrap();

        assert_eq!(valid.name, "Chuveiro");
        assert_eq!(valid.power, Watt(5500.0));
        assert_eq!(valid.daily_usage_hours, 0.5);
    }

    #[test]
    fn accepts_usage_bounds() {
        assert!(draft("Roteador", 10.0, 24.0).validate().is_ok());
        assert!(draft("Ferro", 1000.0, 0.0).validate().is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let err = draft("   ", 100.0, 1.0).validate().unwrap_err();

        assert_eq!(err, ValidationError::MissingName { field: "name" });
    }

    #[test]
    fn rejects_power_below_one_watt() {
        let err = draft("Lâmpada", 0.5, 1.0).validate().unwrap_err();

        assert_eq!(err.field(), "power");
    }

    #[test]
    fn rejects_usage_above_a_day() {
        let err = draft("Geladeira", 100.0, 24.5).validate().unwrap_err();

        assert_eq!(err, ValidationError::UsageOutOfRange { hours: 24.5 });
        assert_eq!(err.field(), "dailyUsageHours");
    }

    #[test]
    fn rejects_negative_usage() {
        assert!(draft("Geladeira", 100.0, -1.0).validate().is_err());
    }

    #[test]
    fn rejects_nan() {
        let err = draft("TV", f64::NAN, 1.0).validate().unwrap_err();

        assert_eq!(err, ValidationError::NotANumber { field: "power" });
    }

    #[test]
    fn rejects_blank_room_name() {
        assert!(RoomDraft { name: "".to_owned() }.validate().is_err());
        assert_eq!(
            RoomDraft {
                name: " Quarto ".to_owned()
            }
            .validate()
            .unwrap(),
            "Quarto"
        );
    }
}
