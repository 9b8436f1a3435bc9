//! Record and scalar value types.
//!
//! `Record` is one immutable row of the dataset. Nullable columns are
//! `Option` on the struct and surface as `Value::Null` through `get`;
//! there are no sentinel values.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::FieldRef;

/// One country row. Query operations never mutate records; they clone or
/// borrow them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub code: String,
    pub name: String,
    pub continent: String,
    pub population: i64,
    pub surface_area: f64,
    pub life_expectancy: Option<f64>,
    pub gnp: Option<f64>,
    pub independence_year: Option<i32>,
    pub government_form: String,
}

impl Record {
    /// Read one field as a tagged scalar. Absent optionals come back as
    /// `Value::Null`.
    pub fn get(&self, field: FieldRef) -> Value {
        match field {
            FieldRef::Code => Value::Str(self.code.clone()),
            FieldRef::Name => Value::Str(self.name.clone()),
            FieldRef::Continent => Value::Str(self.continent.clone()),
            FieldRef::Population => Value::Int(self.population),
            FieldRef::SurfaceArea => Value::Float(self.surface_area),
            FieldRef::LifeExpectancy => self.life_expectancy.map_or(Value::Null, Value::Float),
            FieldRef::Gnp => self.gnp.map_or(Value::Null, Value::Float),
            FieldRef::IndependenceYear => self
                .independence_year
                .map_or(Value::Null, |y| Value::Int(i64::from(y))),
            FieldRef::GovernmentForm => Value::Str(self.government_form.clone()),
        }
    }
}

/// Lightweight tagged scalar, the unit of predicate operands and `pluck`
/// output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of the value, coercing `Int` to `Float`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Total order over non-null values of one field.
    ///
    /// Both sides come from the same field, so mixed numeric kinds coerce
    /// through f64 and everything else is string-vs-string. Callers must
    /// exclude nulls first; a null on either side compares equal so a
    /// stable sort leaves it where it was (the query layer rejects that
    /// case up front).
    pub fn cmp_non_null(&self, other: &Value) -> Ordering {
        use Value::*;
        match (self, other) {
            (Int(a), Int(b)) => a.cmp(b),
            (Str(a), Str(b)) => a.cmp(b),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
        }
    }
}
