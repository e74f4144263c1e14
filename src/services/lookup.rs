use crate::models::country::{CountryCode, ValidationError, YearRange};
use crate::models::page::{ContainerId, FieldId, TriggerId};
use crate::page::FormSource;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const INFO_PATH: &str = "/countryinfo/v1/info/";
pub const POPULATION_PATH: &str = "/countryinfo/v1/population/";
pub const STATUS_PATH: &str = "/countryinfo/v1/status/";

/// Characters left untouched by `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// A validated request, built from the form at trigger time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    CountryInfo {
        code: CountryCode,
        limit: Option<String>,
    },
    Population {
        code: CountryCode,
        years: Option<YearRange>,
    },
    Diagnostics,
}

impl Lookup {
    /// Reads the fields belonging to `trigger` and validates them.
    pub fn from_form<F>(trigger: TriggerId, form: &F) -> Result<Self, ValidationError>
    where
        F: FormSource + ?Sized,
    {
        match trigger {
            TriggerId::GetCountry => {
                let code = CountryCode::parse(&form.field_value(FieldId::CountryCode))?;
                let limit = form.field_value(FieldId::CityLimit).trim().to_string();
                Ok(Self::CountryInfo {
                    code,
                    limit: (!limit.is_empty()).then_some(limit),
                })
            }
            TriggerId::GetPopulation => {
                let code = CountryCode::parse(&form.field_value(FieldId::PopCountryCode))?;
                let years = YearRange::from_bounds(
                    &form.field_value(FieldId::StartYear),
                    &form.field_value(FieldId::EndYear),
                );
                Ok(Self::Population { code, years })
            }
            TriggerId::GetDiagnostics => Ok(Self::Diagnostics),
        }
    }

    /// Path and query relative to the service root.
    pub fn path(&self) -> String {
        match self {
            Self::CountryInfo { code, limit } => {
                let mut path = format!("{}{}", INFO_PATH, code);
                if let Some(limit) = limit {
                    path.push_str("?limit=");
                    path.push_str(&encode_component(limit));
                }
                path
            }
            Self::Population { code, years } => {
                let mut path = format!("{}{}", POPULATION_PATH, code);
                if let Some(years) = years {
                    path.push_str(&format!(
                        "?limit={}-{}",
                        encode_component(&years.start),
                        encode_component(&years.end)
                    ));
                }
                path
            }
            Self::Diagnostics => STATUS_PATH.to_string(),
        }
    }

    pub fn container(&self) -> ContainerId {
        match self {
            Self::CountryInfo { .. } => ContainerId::InfoResult,
            Self::Population { .. } => ContainerId::PopResult,
            Self::Diagnostics => ContainerId::DiagResult,
        }
    }

    pub fn heading(&self) -> String {
        match self {
            Self::CountryInfo { code, .. } => format!("Country Info for {}", code.to_uppercase()),
            Self::Population { code, .. } => {
                format!("Population Data for {}", code.to_uppercase())
            }
            Self::Diagnostics => "Diagnostics Status".to_string(),
        }
    }

    /// Human label used in failure logs and alerts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CountryInfo { .. } => "country info",
            Self::Population { .. } => "population data",
            Self::Diagnostics => "diagnostics data",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_component("5"), "5");
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_component("ø"), "%C3%B8");
    }
}
