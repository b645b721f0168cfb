use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::form_urlencoded;

pub const DEFAULT_SOURCE: &str = "BOM";
pub const DEFAULT_DESTINATION: &str = "DEL";
pub const DEFAULT_THEME: &str = "Luxury";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    #[default]
    Tourist,
    Business,
}

impl TripType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripType::Tourist => "tourist",
            TripType::Business => "business",
        }
    }
}

/// Blocking validation failures surfaced to the user on submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingDates,
    ReturnNotAfterDeparture,
    SameSourceAndDestination,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingDates => {
                write!(f, "Please select both departure and return dates")
            }
            FormError::ReturnNotAfterDeparture => {
                write!(f, "Return date must be after departure date")
            }
            FormError::SameSourceAndDestination => {
                write!(f, "Source and destination cannot be the same")
            }
        }
    }
}

impl std::error::Error for FormError {}

/// Editable state for the six query fields. Finalizing it produces a
/// [`TripQuery`]; until then the dates may be unset or inconsistent.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TripQueryForm {
    pub source: String,
    pub destination: String,
    pub theme: String,
    pub depart_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    #[serde(default)]
    pub trip_type: TripType,
}

impl Default for TripQueryForm {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            destination: DEFAULT_DESTINATION.to_string(),
            theme: DEFAULT_THEME.to_string(),
            depart_date: None,
            return_date: None,
            trip_type: TripType::Tourist,
        }
    }
}

impl TripQueryForm {
    /// Set the departure date. An unset or no-longer-valid return date is
    /// pulled forward to the day after departure.
    pub fn set_depart_date(&mut self, date: NaiveDate) {
        self.depart_date = Some(date);
        let min_return = date.succ_opt().unwrap_or(date);
        match self.return_date {
            Some(current) if current >= min_return => {}
            _ => self.return_date = Some(min_return),
        }
    }

    pub fn set_return_date(&mut self, date: NaiveDate) {
        self.return_date = Some(date);
    }

    /// Exchange source and destination.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.destination);
    }

    /// Restore all fields to their fixed defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Trip length in calendar days, minimum 1, or `None` while either
    /// date is unset.
    pub fn trip_days(&self) -> Option<u32> {
        match (self.depart_date, self.return_date) {
            (Some(depart), Some(ret)) => Some((ret - depart).num_days().max(1) as u32),
            _ => None,
        }
    }

    /// Validate and finalize the form. Violations are checked in order and
    /// the first one is returned as the blocking message.
    pub fn finalize(&self) -> Result<TripQuery, FormError> {
        let (depart, ret) = match (self.depart_date, self.return_date) {
            (Some(depart), Some(ret)) => (depart, ret),
            _ => return Err(FormError::MissingDates),
        };
        if ret <= depart {
            return Err(FormError::ReturnNotAfterDeparture);
        }
        if self.source == self.destination {
            return Err(FormError::SameSourceAndDestination);
        }

        Ok(TripQuery {
            source: self.source.clone(),
            destination: self.destination.clone(),
            theme: self.theme.clone(),
            depart_date: depart,
            return_date: ret,
            num_days: (ret - depart).num_days().max(1) as u32,
            trip_type: self.trip_type,
        })
    }
}

/// A finalized trip query. Exists between form submission and its encoding
/// into the results-view query string.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TripQuery {
    pub source: String,
    pub destination: String,
    pub theme: String,
    pub depart_date: NaiveDate,
    pub return_date: NaiveDate,
    pub num_days: u32,
    pub trip_type: TripType,
}

impl TripQuery {
    /// Encode the query as the flat string-keyed parameter set the results
    /// view is entered with.
    pub fn query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("source", &self.source)
            .append_pair("destination", &self.destination)
            .append_pair("theme", &self.theme)
            .append_pair("depart_date", &self.depart_date.to_string())
            .append_pair("return_date", &self.return_date.to_string())
            .append_pair("num_days", &self.num_days.to_string())
            .append_pair("trip_type", self.trip_type.as_str())
            .finish()
    }

    pub fn results_path(&self) -> String {
        format!("/results?{}", self.query_string())
    }
}

/// The flat payload forwarded to the planning service. Every field is
/// optional: the results view reconstructs it entirely from its query
/// string and forwards whatever was present.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PlanRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depart_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_type: Option<String>,
}
