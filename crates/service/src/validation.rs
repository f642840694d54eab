//! Pure business-rule validators. No IO, no storage knowledge; every rule
//! reports the violated constraint through `ServiceError::Validation`.

use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::errors::ServiceError;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Batch code format: non-blank, 3 to 50 characters.
pub fn batch_code(code: &str) -> Result<(), ServiceError> {
    if code.trim().is_empty() {
        return Err(ServiceError::Validation("batch code cannot be empty".into()));
    }
    // character count, not byte length; codes may carry accented letters
    let length = code.chars().count();
    if length < 3 {
        return Err(ServiceError::Validation("batch code must be at least 3 characters".into()));
    }
    if length > 50 {
        return Err(ServiceError::Validation("batch code cannot exceed 50 characters".into()));
    }
    Ok(())
}

/// Harvest date window: not in the future, not older than one year.
pub fn harvest_date(date: NaiveDate) -> Result<(), ServiceError> {
    let today = today();
    if date > today {
        return Err(ServiceError::Validation("harvest date cannot be in the future".into()));
    }
    if (today - date).num_days() > 365 {
        return Err(ServiceError::Validation(
            "harvest date cannot be more than one year in the past".into(),
        ));
    }
    Ok(())
}

/// String form of [`harvest_date`]: parses `YYYY-MM-DD`, then applies the
/// same window check. Returns the parsed date on success.
pub fn harvest_date_str(raw: &str) -> Result<NaiveDate, ServiceError> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ServiceError::Validation("invalid date format, use YYYY-MM-DD".into()))?;
    harvest_date(date)?;
    Ok(date)
}

/// Quality-control outcome must match one of the accepted states exactly.
pub fn quality_control(value: &str) -> Result<(), ServiceError> {
    let states = models::transformation::QUALITY_CONTROL_STATES;
    if !states.contains(&value) {
        return Err(ServiceError::Validation(format!(
            "quality control must be one of: {}",
            states.join(", ")
        )));
    }
    Ok(())
}

/// Outcome of a successful temperature check. The advisory is set when the
/// value is legal but outside the optimal cold-chain sub-range; it is a
/// success-path annotation, not a failure.
#[derive(Debug, Clone)]
pub struct TemperatureCheck {
    pub degrees: Decimal,
    pub advisory: Option<String>,
}

/// Transport temperature: numeric, within [-20, 50] °C. Values outside the
/// optimal [0, 15] °C band succeed with a `WARNING:`-marked advisory.
pub fn temperature(raw: &str) -> Result<TemperatureCheck, ServiceError> {
    let degrees = Decimal::from_str(raw.trim())
        .map_err(|_| ServiceError::Validation("temperature must be a valid number".into()))?;
    if degrees < Decimal::from(-20) || degrees > Decimal::from(50) {
        return Err(ServiceError::Validation("temperature must be between -20°C and 50°C".into()));
    }
    let advisory = if degrees < Decimal::ZERO || degrees > Decimal::from(15) {
        Some("WARNING: temperature outside the optimal range (0-15°C)".to_string())
    } else {
        None
    };
    Ok(TemperatureCheck { degrees, advisory })
}

/// Strictly increasing calendar dates: harvest < washing < packaging <
/// delivery. The first violated pair, in that order, names the failure.
pub fn date_sequence(
    harvest: NaiveDate,
    washing: NaiveDate,
    packaging: NaiveDate,
    delivery: NaiveDate,
) -> Result<(), ServiceError> {
    if harvest >= washing {
        return Err(ServiceError::Validation("washing date must be after the harvest date".into()));
    }
    if washing >= packaging {
        return Err(ServiceError::Validation("packaging date must be after the washing date".into()));
    }
    if packaging >= delivery {
        return Err(ServiceError::Validation("delivery date must be after the packaging date".into()));
    }
    Ok(())
}

/// Delivery must happen strictly after the transport started.
pub fn delivery_after_start(
    started_at: DateTime<Utc>,
    delivered_at: DateTime<Utc>,
) -> Result<(), ServiceError> {
    if started_at >= delivered_at {
        return Err(ServiceError::Validation(
            "delivery date must be after the transport start date".into(),
        ));
    }
    Ok(())
}
