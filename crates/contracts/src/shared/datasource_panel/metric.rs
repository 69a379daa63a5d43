use serde::{Deserialize, Serialize};

use super::dnd::DndItemType;
use super::item::PanelItem;
use super::search::Searchable;

/// Saved metric of a datasource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// Metric identifier (e.g., "sum__num")
    pub metric_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Aggregate SQL expression (e.g., "SUM(num)")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_markdown: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certified_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification_details: Option<String>,
}

impl Metric {
    pub fn new(metric_name: impl Into<String>) -> Self {
        Self {
            metric_name: metric_name.into(),
            verbose_name: None,
            description: None,
            expression: None,
            warning_markdown: None,
            certified_by: None,
            certification_details: None,
        }
    }

    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = Some(expression.into());
        self
    }
}

impl Searchable for Metric {
    fn search_key(&self) -> &str {
        &self.metric_name
    }
}

impl PanelItem for Metric {
    const DND_TYPE: DndItemType = DndItemType::Metric;

    fn name(&self) -> &str {
        &self.metric_name
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
