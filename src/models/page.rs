//! Identifiers of the page elements the front end reads from and writes to.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown element id: {0}")]
pub struct UnknownElement(pub String);

macro_rules! element_ids {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $id:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $id),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownElement;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($id => Ok($name::$variant),)+
                    other => Err(UnknownElement(other.to_string())),
                }
            }
        }
    };
}

element_ids! {
    /// Input fields.
    FieldId {
        CountryCode => "countryCode",
        CityLimit => "cityLimit",
        PopCountryCode => "popCountryCode",
        StartYear => "startYear",
        EndYear => "endYear",
    }
}

element_ids! {
    /// Buttons that start a lookup.
    TriggerId {
        GetCountry => "getCountryBtn",
        GetPopulation => "getPopulationBtn",
        GetDiagnostics => "getDiagnosticsBtn",
    }
}

element_ids! {
    /// Output regions replaced on every successful lookup.
    ContainerId {
        InfoResult => "infoResult",
        PopResult => "popResult",
        DiagResult => "diagResult",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_dom_names() {
        for trigger in TriggerId::ALL {
            assert_eq!(trigger.as_str().parse::<TriggerId>(), Ok(*trigger));
        }
        assert_eq!(
            "nope".parse::<ContainerId>(),
            Err(UnknownElement("nope".to_string()))
        );
    }
}
