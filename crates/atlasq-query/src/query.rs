//! Immutable query pipelines over a loaded dataset.
//!
//! A `Query` is a value: builder methods consume it and return an extended
//! copy, so two queries never share mutable state and re-running one is
//! idempotent. Materialization applies predicates in dataset order, then a
//! stable sort on the order key, then the limit.

use serde::{Deserialize, Serialize};

use atlasq_core::prelude::{Error, FieldRef, Record, Result, Value};

use crate::predicate::Predicate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Ascending,
    Descending,
}

/// A filter/order/limit pipeline over a borrowed record sequence.
#[derive(Debug, Clone)]
pub struct Query<'a> {
    source: &'a [Record],
    predicates: Vec<Predicate>,
    order: Option<(FieldRef, Direction)>,
    limit: Option<usize>,
}

impl<'a> Query<'a> {
    pub fn new(source: &'a [Record]) -> Self {
        Self {
            source,
            predicates: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Add a predicate stage.
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Set the order key. The last call wins.
    pub fn order_by(mut self, field: FieldRef, direction: Direction) -> Self {
        self.order = Some((field, direction));
        self
    }

    /// Truncate the result to the first `n` rows after ordering.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Materialize the pipeline.
    pub fn to_list(&self) -> Result<Vec<Record>> {
        let mut rows = self.apply_predicates()?;

        if let Some((field, direction)) = self.order {
            // Extract keys up front so the comparator cannot fail. Every
            // candidate must have a present key; callers filter nullable
            // fields with NotNull before ordering on them.
            let keys: Vec<Value> = rows.iter().map(|r| r.get(field)).collect();
            if keys.iter().any(Value::is_null) {
                return Err(Error::UnorderableValue(field));
            }
            let mut order: Vec<usize> = (0..rows.len()).collect();
            // sort_by is stable, so ties keep dataset order in either
            // direction.
            order.sort_by(|&i, &j| {
                let ord = keys[i].cmp_non_null(&keys[j]);
                match direction {
                    Direction::Ascending => ord,
                    Direction::Descending => ord.reverse(),
                }
            });
            let mut sorted = Vec::with_capacity(rows.len());
            for i in order {
                sorted.push(rows[i].clone());
            }
            rows = sorted;
        }

        if let Some(n) = self.limit {
            rows.truncate(n);
        }

        tracing::trace!(rows = rows.len(), "query materialized");
        Ok(rows)
    }

    /// Materialize a single field of the pipeline output.
    pub fn pluck(&self, field: FieldRef) -> Result<Vec<Value>> {
        Ok(self.to_list()?.iter().map(|r| r.get(field)).collect())
    }

    /// First row of the pipeline output, if any.
    pub fn first(&self) -> Result<Option<Record>> {
        Ok(self.to_list()?.into_iter().next())
    }

    /// Cardinality after filtering. Order and limit are ignored.
    pub fn count(&self) -> Result<usize> {
        Ok(self.apply_predicates()?.len())
    }

    fn apply_predicates(&self) -> Result<Vec<Record>> {
        let mut out = Vec::new();
        'rows: for record in self.source {
            for predicate in &self.predicates {
                if !predicate.matches(record)? {
                    continue 'rows;
                }
            }
            out.push(record.clone());
        }
        Ok(out)
    }
}
