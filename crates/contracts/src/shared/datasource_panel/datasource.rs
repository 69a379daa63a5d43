use serde::{Deserialize, Serialize};

use super::column::Column;
use super::error::{PanelError, PanelResult};
use super::metric::Metric;

/// Kind of data source backing the explore view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasourceType {
    /// Physical table registered as a dataset
    Table,
    /// Ad-hoc SQL Lab query
    Query,
    /// Virtual dataset
    Dataset,
    /// Query saved in SQL Lab but not turned into a dataset
    SavedQuery,
}

impl DatasourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasourceType::Table => "table",
            DatasourceType::Query => "query",
            DatasourceType::Dataset => "dataset",
            DatasourceType::SavedQuery => "saved_query",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.as_str() == s)
    }

    pub fn all() -> [DatasourceType; 4] {
        [
            DatasourceType::Table,
            DatasourceType::Query,
            DatasourceType::Dataset,
            DatasourceType::SavedQuery,
        ]
    }

    /// Source is not materialized yet: columns and metrics can only be
    /// edited after a dataset is created from it.
    pub fn needs_dataset(&self) -> bool {
        match self {
            DatasourceType::Query | DatasourceType::SavedQuery => true,
            DatasourceType::Table | DatasourceType::Dataset => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseRef {
    pub id: i64,
}

/// Datasource as handed to the explore view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datasource {
    pub id: i64,
    #[serde(rename = "type")]
    pub datasource_type: DatasourceType,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    pub database: DatabaseRef,
    pub datasource_name: String,
    /// JSON-encoded metadata (warning, certification)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,
}

impl Datasource {
    /// Unique key across datasource types (e.g., "1__table")
    pub fn uid(&self) -> String {
        format!("{}__{}", self.id, self.datasource_type.as_str())
    }

    pub fn with_type(mut self, datasource_type: DatasourceType) -> Self {
        self.datasource_type = datasource_type;
        self
    }

    pub fn with_extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    /// Parse `extra`. Missing, blank and `null` all mean "no metadata".
    pub fn parse_extra(&self) -> PanelResult<Option<DatasourceExtra>> {
        match self.extra.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => serde_json::from_str(raw).map_err(PanelError::InvalidExtra),
        }
    }

    /// Deprecation warning from `extra`. Malformed metadata yields no warning.
    pub fn warning_markdown(&self) -> Option<String> {
        self.parse_extra()
            .ok()
            .flatten()
            .and_then(|extra| extra.warning_markdown)
            .filter(|w| !w.trim().is_empty())
    }

    /// Who certified the datasource, if anyone
    pub fn certified_by(&self) -> Option<String> {
        self.parse_extra()
            .ok()
            .flatten()
            .and_then(|extra| extra.certification)
            .and_then(|c| c.certified_by)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.column_name == name)
    }

    pub fn metric(&self, name: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.metric_name == name)
    }
}

/// Known keys of the `extra` JSON. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasourceExtra {
    #[serde(default)]
    pub warning_markdown: Option<String>,
    #[serde(default)]
    pub certification: Option<Certification>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    #[serde(default)]
    pub certified_by: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

/// Request emitted when the user asks to turn a query into a dataset.
/// The host performs the actual creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDatasetRequest {
    pub name: String,
    pub database_id: i64,
    /// `uid()` of the query the dataset is created from
    pub source_uid: String,
}

impl CreateDatasetRequest {
    pub fn from_datasource(datasource: &Datasource, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            database_id: datasource.database.id,
            source_uid: datasource.uid(),
        }
    }
}
