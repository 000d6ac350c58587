//! Search request type.

use chrono::NaiveDate;

use super::DomainError;

/// A validated route search.
///
/// Built once per search from form input and never modified afterwards.
/// City names are free text; they are only trimmed and checked for
/// emptiness, never matched against a gazetteer.
///
/// # Examples
///
/// ```
/// use route_server::domain::SearchRequest;
///
/// let req = SearchRequest::parse("Mangalore", "Ayodhya", "2025-11-01", 450.0).unwrap();
/// assert_eq!(req.destination_city(), "Ayodhya");
///
/// // Blank cities and malformed dates are rejected
/// assert!(SearchRequest::parse("  ", "Ayodhya", "2025-11-01", 450.0).is_err());
/// assert!(SearchRequest::parse("Mangalore", "Ayodhya", "01/11/2025", 450.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    origin_city: String,
    destination_city: String,
    date: NaiveDate,
    max_ground_km: f64,
    max_ground_minutes: Option<u32>,
}

impl SearchRequest {
    /// Create a new search request.
    ///
    /// `max_ground_km` is passed through unchecked; zero and negative
    /// values are the upstream's concern.
    pub fn new(
        origin_city: &str,
        destination_city: &str,
        date: NaiveDate,
        max_ground_km: f64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            origin_city: non_empty_city(origin_city, "origin")?,
            destination_city: non_empty_city(destination_city, "destination")?,
            date,
            max_ground_km,
            max_ground_minutes: None,
        })
    }

    /// Create a search request, parsing the date from `YYYY-MM-DD`.
    pub fn parse(
        origin_city: &str,
        destination_city: &str,
        date: &str,
        max_ground_km: f64,
    ) -> Result<Self, DomainError> {
        let parsed = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| DomainError::InvalidDate(date.to_string()))?;
        Self::new(origin_city, destination_city, parsed, max_ground_km)
    }

    /// Also bound the ground transfer by driving time.
    pub fn with_max_ground_minutes(mut self, minutes: u32) -> Self {
        self.max_ground_minutes = Some(minutes);
        self
    }

    pub fn origin_city(&self) -> &str {
        &self.origin_city
    }

    pub fn destination_city(&self) -> &str {
        &self.destination_city
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn max_ground_km(&self) -> f64 {
        self.max_ground_km
    }

    pub fn max_ground_minutes(&self) -> Option<u32> {
        self.max_ground_minutes
    }
}

fn non_empty_city(value: &str, which: &'static str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyCity(which));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_request() {
        let req = SearchRequest::parse(" Mangalore ", "Ayodhya", "2025-11-01", 450.0).unwrap();

        assert_eq!(req.origin_city(), "Mangalore");
        assert_eq!(req.destination_city(), "Ayodhya");
        assert_eq!(req.date(), NaiveDate::from_ymd_opt(2025, 11, 1).unwrap());
        assert_eq!(req.max_ground_km(), 450.0);
        assert_eq!(req.max_ground_minutes(), None);
    }

    #[test]
    fn reject_blank_cities() {
        assert_eq!(
            SearchRequest::parse("", "Ayodhya", "2025-11-01", 450.0),
            Err(DomainError::EmptyCity("origin"))
        );
        assert_eq!(
            SearchRequest::parse("Mangalore", " \t", "2025-11-01", 450.0),
            Err(DomainError::EmptyCity("destination"))
        );
    }

    #[test]
    fn reject_bad_dates() {
        for bad in ["", "2025-13-01", "2025-02-30", "tomorrow", "01/11/2025"] {
            assert_eq!(
                SearchRequest::parse("Mangalore", "Ayodhya", bad, 450.0),
                Err(DomainError::InvalidDate(bad.to_string())),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn ground_limit_is_not_validated() {
        let req = SearchRequest::parse("Kochi", "Delhi", "2025-11-01", -5.0).unwrap();
        assert_eq!(req.max_ground_km(), -5.0);

        let req = SearchRequest::parse("Kochi", "Delhi", "2025-11-01", 0.0).unwrap();
        assert_eq!(req.max_ground_km(), 0.0);
    }

    #[test]
    fn max_ground_minutes_builder() {
        let req = SearchRequest::parse("Kochi", "Delhi", "2025-11-01", 300.0)
            .unwrap()
            .with_max_ground_minutes(240);
        assert_eq!(req.max_ground_minutes(), Some(240));
    }
}
