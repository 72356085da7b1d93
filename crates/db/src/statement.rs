//! Statement builders shared by the repositories.
//!
//! Partial updates only ever name columns from a fixed per-table enum, so no
//! caller-supplied text is interpolated into SQL. Values always travel as
//! positional parameters.

use folio_core::types::DbId;
use serde_json::Value;

use crate::DbError;

/// A column of one table that may appear in a `SET` clause.
pub trait Column: Copy {
    /// Table the column belongs to.
    const TABLE: &'static str;

    /// Column name as written in SQL (unquoted).
    fn name(self) -> &'static str;
}

/// Accumulates `column = ?` assignments for a partial update.
#[derive(Debug, Clone)]
pub struct UpdateSet<C: Column> {
    assignments: Vec<(C, Value)>,
}

impl<C: Column> UpdateSet<C> {
    pub fn new() -> Self {
        Self {
            assignments: Vec::new(),
        }
    }

    /// Add an assignment when `value` is present.
    pub fn set<V: Into<Value>>(mut self, column: C, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.assignments.push((column, value.into()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Render `UPDATE <table> SET ... WHERE id = ?` and its values.
    ///
    /// Fails with [`DbError::EmptyUpdate`] rather than emitting a statement
    /// with an empty `SET` clause.
    pub fn build(self, id: DbId) -> Result<(String, Vec<Value>), DbError> {
        if self.is_empty() {
            return Err(DbError::EmptyUpdate { table: C::TABLE });
        }

        let clause = self
            .assignments
            .iter()
            .map(|(column, _)| format!("`{}` = ?", column.name()))
            .collect::<Vec<_>>()
            .join(", ");

        let mut values: Vec<Value> = self.assignments.into_iter().map(|(_, v)| v).collect();
        values.push(Value::from(id));

        Ok((
            format!("UPDATE {} SET {clause} WHERE id = ?", C::TABLE),
            values,
        ))
    }
}

impl<C: Column> Default for UpdateSet<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[derive(Debug, Clone, Copy)]
    enum Demo {
        Title,
        Order,
    }

    impl Column for Demo {
        const TABLE: &'static str = "demo";

        fn name(self) -> &'static str {
            match self {
                Demo::Title => "title",
                Demo::Order => "order",
            }
        }
    }

    #[test]
    fn builds_only_present_fields() {
        let (sql, values) = UpdateSet::new()
            .set(Demo::Title, Some("hello"))
            .set::<i32>(Demo::Order, None)
            .build(7)
            .unwrap();

        assert_eq!(sql, "UPDATE demo SET `title` = ? WHERE id = ?");
        assert_eq!(values, vec![Value::from("hello"), Value::from(7)]);
    }

    #[test]
    fn quotes_reserved_words() {
        let (sql, values) = UpdateSet::new()
            .set(Demo::Title, Some("t"))
            .set(Demo::Order, Some(3))
            .build(1)
            .unwrap();

        assert_eq!(sql, "UPDATE demo SET `title` = ?, `order` = ? WHERE id = ?");
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn empty_update_is_rejected() {
        let result = UpdateSet::<Demo>::new().build(1);
        assert_matches!(result, Err(DbError::EmptyUpdate { table: "demo" }));
    }
}
