use serde::{Deserialize, Serialize};

use super::dnd::DndItemType;
use super::item::PanelItem;
use super::search::Searchable;

/// Helper function for serde default
fn default_true() -> bool {
    true
}

/// Column of a datasource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Physical column name (e.g., "num_boys")
    pub column_name: String,
    /// Human-readable label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// SQL expression for calculated columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    /// SQL type as reported by the database (e.g., "VARCHAR(255)")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Marked as a temporal column
    #[serde(default)]
    pub is_dttm: bool,
    #[serde(default = "default_true")]
    pub filterable: bool,
    #[serde(default = "default_true")]
    pub groupby: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_markdown: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certified_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification_details: Option<String>,
}

impl Column {
    pub fn new(column_name: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            verbose_name: None,
            description: None,
            expression: None,
            type_name: None,
            is_dttm: false,
            filterable: true,
            groupby: true,
            warning_markdown: None,
            certified_by: None,
            certification_details: None,
        }
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn temporal(mut self) -> Self {
        self.is_dttm = true;
        self
    }

    /// Broad type family, used for the list icon and default aggregate
    pub fn kind(&self) -> ColumnKind {
        if self.is_dttm {
            return ColumnKind::Temporal;
        }
        match self.type_name.as_deref() {
            Some(t) => ColumnKind::from_sql_type(t),
            None => ColumnKind::Unknown,
        }
    }
}

impl Searchable for Column {
    fn search_key(&self) -> &str {
        &self.column_name
    }
}

impl PanelItem for Column {
    const DND_TYPE: DndItemType = DndItemType::Column;

    fn name(&self) -> &str {
        &self.column_name
    }

    fn verbose_name(&self) -> Option<&str> {
        self.verbose_name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn expression(&self) -> Option<&str> {
        self.expression.as_deref()
    }

    fn warning_markdown(&self) -> Option<&str> {
        self.warning_markdown.as_deref()
    }

    fn certified_by(&self) -> Option<&str> {
        self.certified_by.as_deref()
    }

    fn certification_details(&self) -> Option<&str> {
        self.certification_details.as_deref()
    }
}

/// Type family of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Temporal,
    Numeric,
    String,
    Boolean,
    Unknown,
}

impl ColumnKind {
    /// Classify a database type string. Matching is by keyword, so
    /// parametrised types such as `DECIMAL(10, 2)` are recognised.
    pub fn from_sql_type(sql_type: &str) -> Self {
        let upper = sql_type.to_uppercase();
        let has = |keywords: &[&str]| keywords.iter().any(|k| upper.contains(k));

        if has(&["DATE", "TIME"]) {
            ColumnKind::Temporal
        } else if has(&["BOOL"]) {
            ColumnKind::Boolean
        } else if has(&["INT", "FLOAT", "DOUBLE", "DECIMAL", "NUMERIC", "REAL", "NUMBER"]) {
            ColumnKind::Numeric
        } else if has(&["CHAR", "TEXT", "STRING", "CLOB"]) {
            ColumnKind::String
        } else {
            ColumnKind::Unknown
        }
    }

    /// Icon name used by the list
    pub fn icon(&self) -> &'static str {
        match self {
            ColumnKind::Temporal => "column-temporal",
            ColumnKind::Numeric => "column-numeric",
            ColumnKind::String => "column-string",
            ColumnKind::Boolean => "column-boolean",
            ColumnKind::Unknown => "column-unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_kind_from_sql_type() {
        assert_eq!(ColumnKind::from_sql_type("BIGINT"), ColumnKind::Numeric);
        assert_eq!(ColumnKind::from_sql_type("decimal(10, 2)"), ColumnKind::Numeric);
        assert_eq!(ColumnKind::from_sql_type("VARCHAR(255)"), ColumnKind::String);
        assert_eq!(ColumnKind::from_sql_type("TIMESTAMP WITHOUT TIME ZONE"), ColumnKind::Temporal);
        assert_eq!(ColumnKind::from_sql_type("BOOLEAN"), ColumnKind::Boolean);
        assert_eq!(ColumnKind::from_sql_type("JSONB"), ColumnKind::Unknown);
    }

    #[test]
    fn test_is_dttm_wins_over_type() {
        let column = Column::new("ds").with_type("VARCHAR(10)").temporal();
        assert_eq!(column.kind(), ColumnKind::Temporal);
        assert_eq!(Column::new("x").kind(), ColumnKind::Unknown);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let column: Column =
            serde_json::from_str(r#"{"column_name": "gender", "type": "VARCHAR(16)"}"#).unwrap();
        assert_eq!(column.column_name, "gender");
        assert_eq!(column.type_name.as_deref(), Some("VARCHAR(16)"));
        assert!(column.filterable);
        assert!(column.groupby);
        assert!(!column.is_dttm);
    }
}
