//! Composable boolean predicates over one record.
//!
//! Null policy: a comparison against an absent value excludes the record
//! (`Ok(false)`), it never errors. Type mismatches between a field and an
//! operand are `Error::InvalidOperand` and always propagate.

use serde::{Deserialize, Serialize};

use atlasq_core::prelude::{DataType, Error, FieldRef, Record, Result, Value};

/// Comparison operators accepted by `Predicate::Compare`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    Gt,
    Lt,
    Ge,
    Le,
}

impl CmpOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            CmpOp::Gt => ">",
            CmpOp::Lt => "<",
            CmpOp::Ge => ">=",
            CmpOp::Le => "<=",
        }
    }
}

/// Tagged predicate tree. `Or`/`Not` would be additional variants here;
/// `matches` is the whole evaluation contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Predicate {
    /// Exact match. Case-sensitive for strings; `Int`/`Float` operands
    /// coerce numerically. Never matches an absent value.
    Equals(FieldRef, Value),
    /// True iff the field's optional value is present.
    NotNull(FieldRef),
    /// Numeric comparison. Only valid on numeric fields with numeric
    /// operands; absent values are excluded, not erred.
    Compare(FieldRef, CmpOp, Value),
    /// Case-insensitive substring match on a string field.
    Contains(FieldRef, String),
    /// Short-circuiting conjunction, left to right.
    And(Box<Predicate>, Box<Predicate>),
}

impl Predicate {
    /// Convenience conjunction.
    pub fn and(self, other: Predicate) -> Predicate {
        Predicate::And(Box::new(self), Box::new(other))
    }

    /// Evaluate this predicate against one record.
    pub fn matches(&self, record: &Record) -> Result<bool> {
        match self {
            Predicate::Equals(field, operand) => eval_equals(record.get(*field), operand),
            Predicate::NotNull(field) => Ok(!record.get(*field).is_null()),
            Predicate::Compare(field, op, operand) => {
                eval_compare(*field, record.get(*field), *op, operand)
            }
            Predicate::Contains(field, needle) => eval_contains(*field, record.get(*field), needle),
            Predicate::And(left, right) => {
                if !left.matches(record)? {
                    return Ok(false);
                }
                right.matches(record)
            }
        }
    }
}

fn eval_equals(value: Value, operand: &Value) -> Result<bool> {
    if value.is_null() || operand.is_null() {
        return Ok(false);
    }
    // Numeric operands compare across Int/Float; everything else is exact.
    if let (Some(x), Some(y)) = (value.as_f64(), operand.as_f64()) {
        return Ok(x == y);
    }
    Ok(value == *operand)
}

fn eval_compare(field: FieldRef, value: Value, op: CmpOp, operand: &Value) -> Result<bool> {
    if field.data_type() == DataType::Utf8 {
        return Err(Error::InvalidOperand {
            field,
            detail: format!("'{}' is not defined on string fields", op.symbol()),
        });
    }
    let rhs = operand.as_f64().ok_or_else(|| Error::InvalidOperand {
        field,
        detail: format!("expected a numeric operand, got {:?}", operand),
    })?;
    let lhs = match value.as_f64() {
        Some(x) => x,
        // Absent value: excluded, not an error.
        None => return Ok(false),
    };
    Ok(match op {
        CmpOp::Gt => lhs > rhs,
        CmpOp::Lt => lhs < rhs,
        CmpOp::Ge => lhs >= rhs,
        CmpOp::Le => lhs <= rhs,
    })
}

fn eval_contains(field: FieldRef, value: Value, needle: &str) -> Result<bool> {
    match value {
        Value::Str(s) => Ok(s.to_lowercase().contains(&needle.to_lowercase())),
        Value::Null => Ok(false),
        _ => Err(Error::InvalidOperand {
            field,
            detail: "contains is only defined on string fields".to_string(),
        }),
    }
}
