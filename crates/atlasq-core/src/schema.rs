//! The fixed schema of a country record.
//!
//! Fields are named by the `FieldRef` enum, so queries built in code are
//! checked at compile time. Textual callers (the CLI, config files) go
//! through `FromStr`, which is where `Error::InvalidField` surfaces.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    Int,
    Float,
    Utf8,
}

/// Reference to one of the nine record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldRef {
    Code,
    Name,
    Continent,
    Population,
    SurfaceArea,
    LifeExpectancy,
    Gnp,
    IndependenceYear,
    GovernmentForm,
}

impl FieldRef {
    /// Snake_case name forming the textual schema contract.
    pub fn name(&self) -> &'static str {
        match self {
            FieldRef::Code => "code",
            FieldRef::Name => "name",
            FieldRef::Continent => "continent",
            FieldRef::Population => "population",
            FieldRef::SurfaceArea => "surface_area",
            FieldRef::LifeExpectancy => "life_expectancy",
            FieldRef::Gnp => "gnp",
            FieldRef::IndependenceYear => "independence_year",
            FieldRef::GovernmentForm => "government_form",
        }
    }

    pub fn data_type(&self) -> DataType {
        match self {
            FieldRef::Code | FieldRef::Name | FieldRef::Continent | FieldRef::GovernmentForm => {
                DataType::Utf8
            }
            FieldRef::Population | FieldRef::IndependenceYear => DataType::Int,
            FieldRef::SurfaceArea | FieldRef::LifeExpectancy | FieldRef::Gnp => DataType::Float,
        }
    }

    /// Whether the field may carry an absent value.
    pub fn nullable(&self) -> bool {
        matches!(
            self,
            FieldRef::LifeExpectancy | FieldRef::Gnp | FieldRef::IndependenceYear
        )
    }

    pub const ALL: [FieldRef; 9] = [
        FieldRef::Code,
        FieldRef::Name,
        FieldRef::Continent,
        FieldRef::Population,
        FieldRef::SurfaceArea,
        FieldRef::LifeExpectancy,
        FieldRef::Gnp,
        FieldRef::IndependenceYear,
        FieldRef::GovernmentForm,
    ];
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        FieldRef::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| Error::InvalidField(s.to_string()))
    }
}
