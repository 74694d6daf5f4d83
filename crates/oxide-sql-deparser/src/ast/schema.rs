//! Table and column references.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A table or column alias.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Alias {
    pub name: String,
    /// Whether the alias was introduced with `AS`.
    pub use_as: bool,
}

impl Alias {
    /// Creates an alias written with `AS`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            use_as: true,
        }
    }
}

/// A table reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    /// Schema name (optional).
    pub schema: Option<String>,
    /// Table name.
    pub name: String,
    pub alias: Option<Alias>,
}

impl Table {
    /// Creates a simple table reference.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: None,
            name: name.into(),
            alias: None,
        }
    }

    /// Sets the schema.
    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Sets an alias.
    #[must_use]
    pub fn with_alias(mut self, alias: Alias) -> Self {
        self.alias = Some(alias);
        self
    }

    /// Returns `schema.name`, or just `name` without a schema.
    ///
    /// Empty parts are skipped, so a table with neither schema nor name
    /// yields an empty string.
    #[must_use]
    pub fn fully_qualified_name(&self) -> String {
        match self.schema.as_deref() {
            Some(schema) if !schema.is_empty() && !self.name.is_empty() => {
                format!("{schema}.{}", self.name)
            }
            Some(schema) if self.name.is_empty() => String::from(schema),
            _ => self.name.clone(),
        }
    }
}

/// A column reference, optionally bound to its owning table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Column {
    pub table: Option<Table>,
    pub name: String,
}

impl Column {
    /// Creates an unqualified column.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }

    /// Binds the column to a table.
    #[must_use]
    pub fn with_table(mut self, table: Table) -> Self {
        self.table = Some(table);
        self
    }
}
