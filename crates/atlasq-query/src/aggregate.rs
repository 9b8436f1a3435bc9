//! Reductions over a materialized result sequence.
//!
//! One comparator-parameterized extremum primitive serves both "biggest"
//! and "smallest"; inverting the comparator flips the direction.

use std::cmp::Ordering;

use atlasq_core::prelude::{DataType, Error, FieldRef, Record, Result};

/// Arithmetic sum of a numeric field. Absent values contribute nothing;
/// an empty sequence sums to 0.
pub fn sum(records: &[Record], field: FieldRef) -> Result<f64> {
    if field.data_type() == DataType::Utf8 {
        return Err(Error::InvalidOperand {
            field,
            detail: "sum is only defined on numeric fields".to_string(),
        });
    }
    let mut total = 0.0;
    for record in records {
        if let Some(x) = record.get(field).as_f64() {
            total += x;
        }
    }
    Ok(total)
}

/// The element judged "biggest" under `cmp`, or `None` for an empty
/// sequence. Ties resolve to the first such element in sequence order:
/// a candidate only replaces the current extremum when strictly greater.
pub fn extreme_by<F>(records: &[Record], cmp: F) -> Option<&Record>
where
    F: Fn(&Record, &Record) -> Ordering,
{
    let mut best: Option<&Record> = None;
    for record in records {
        match best {
            None => best = Some(record),
            Some(current) => {
                if cmp(record, current) == Ordering::Greater {
                    best = Some(record);
                }
            }
        }
    }
    best
}

/// Order two optional numbers, absent sorting lowest. Handy for GNP-style
/// comparators without unwrap noise.
pub fn cmp_nullable(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}
