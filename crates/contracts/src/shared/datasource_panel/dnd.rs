//! Drag-and-drop payloads and how controls accept them

use serde::{Deserialize, Serialize};

use super::column::ColumnKind;
use super::controls::{AdhocMetric, AggregateFunction, ControlKind, ControlValue, MetricValue};
use super::datasource::Datasource;
use super::error::{PanelError, PanelResult};

/// MIME type of the payload stored in the browser `DataTransfer`
pub const DND_MIME_TYPE: &str = "application/x-datasource-item";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DndItemType {
    Column,
    Metric,
}

/// Item dragged out of the datasource panel
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DndItem {
    pub kind: DndItemType,
    pub name: String,
}

impl DndItem {
    pub fn column(name: impl Into<String>) -> Self {
        Self {
            kind: DndItemType::Column,
            name: name.into(),
        }
    }

    pub fn metric(name: impl Into<String>) -> Self {
        Self {
            kind: DndItemType::Metric,
            name: name.into(),
        }
    }

    pub fn to_payload(&self) -> PanelResult<String> {
        serde_json::to_string(self).map_err(PanelError::InvalidDragPayload)
    }

    pub fn from_payload(payload: &str) -> PanelResult<Self> {
        serde_json::from_str(payload).map_err(PanelError::InvalidDragPayload)
    }
}

impl ControlKind {
    /// Column controls take columns; metric controls take saved metrics
    /// and columns (turned into ad-hoc metrics).
    pub fn accepts(&self, item: &DndItem) -> bool {
        match (self, item.kind) {
            (ControlKind::ColumnSelect { .. }, DndItemType::Column) => true,
            (ControlKind::MetricSelect, _) => true,
            _ => false,
        }
    }
}

/// Default aggregate for a column dropped on a metric control
pub fn default_aggregate(kind: ColumnKind) -> AggregateFunction {
    match kind {
        ColumnKind::Numeric => AggregateFunction::Sum,
        _ => AggregateFunction::CountDistinct,
    }
}

/// New value of a control after `item` is dropped on it.
///
/// Returns `None` when the control rejects the item, the item is not part
/// of `datasource`, or the control already holds it. Filter controls only
/// take `filterable` columns, other column controls only `groupby` ones.
pub fn apply_drop(
    kind: ControlKind,
    value: &ControlValue,
    item: &DndItem,
    datasource: &Datasource,
) -> Option<ControlValue> {
    if !kind.accepts(item) {
        return None;
    }

    match (kind, item.kind) {
        (ControlKind::ColumnSelect { is_filter }, DndItemType::Column) => {
            let column = datasource.column(&item.name)?;
            let allowed = if is_filter { column.filterable } else { column.groupby };
            if !allowed {
                return None;
            }
            let mut names = value.column_names().to_vec();
            if names.contains(&item.name) {
                return None;
            }
            names.push(item.name.clone());
            Some(ControlValue::Columns(names))
        }
        (ControlKind::MetricSelect, DndItemType::Metric) => {
            datasource.metric(&item.name)?;
            let mut metrics = metric_values(value);
            let entry = MetricValue::Saved(item.name.clone());
            if metrics.contains(&entry) {
                return None;
            }
            metrics.push(entry);
            Some(ControlValue::Metrics(metrics))
        }
        (ControlKind::MetricSelect, DndItemType::Column) => {
            let column = datasource.column(&item.name)?;
            let aggregate = default_aggregate(column.kind());
            let mut metrics = metric_values(value);
            let exists = metrics.iter().any(|m| {
                matches!(m, MetricValue::Adhoc(a) if a.column_name == item.name && a.aggregate == aggregate)
            });
            if exists {
                return None;
            }
            metrics.push(MetricValue::Adhoc(AdhocMetric::new(item.name.clone(), aggregate)));
            Some(ControlValue::Metrics(metrics))
        }
        _ => None,
    }
}

fn metric_values(value: &ControlValue) -> Vec<MetricValue> {
    match value {
        ControlValue::Metrics(metrics) => metrics.clone(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::datasource_panel::fixtures;

    const FILTER: ControlKind = ControlKind::ColumnSelect { is_filter: true };

    #[test]
    fn test_payload_round_trip() {
        let item = DndItem::column("gender");
        let payload = item.to_payload().unwrap();
        assert_eq!(DndItem::from_payload(&payload).unwrap(), item);
    }

    #[test]
    fn test_foreign_payload_is_rejected() {
        assert!(matches!(
            DndItem::from_payload("text/plain garbage"),
            Err(PanelError::InvalidDragPayload(_))
        ));
    }

    #[test]
    fn test_accepts() {
        assert!(FILTER.accepts(&DndItem::column("a")));
        assert!(!FILTER.accepts(&DndItem::metric("a")));
        assert!(ControlKind::MetricSelect.accepts(&DndItem::metric("a")));
        assert!(ControlKind::MetricSelect.accepts(&DndItem::column("a")));
        assert!(!ControlKind::Datasource.accepts(&DndItem::column("a")));
    }

    #[test]
    fn test_drop_column_on_filter() {
        let ds = fixtures::datasource();
        let value = apply_drop(FILTER, &ControlValue::Empty, &DndItem::column("gender"), &ds).unwrap();
        assert_eq!(value, ControlValue::Columns(vec!["gender".into()]));

        let value = apply_drop(FILTER, &value, &DndItem::column("state"), &ds).unwrap();
        assert_eq!(value.labels(), vec!["gender", "state"]);
    }

    #[test]
    fn test_drop_never_duplicates() {
        let ds = fixtures::datasource();
        let value = ControlValue::Columns(vec!["gender".into()]);
        assert_eq!(apply_drop(FILTER, &value, &DndItem::column("gender"), &ds), None);

        let metrics = ControlValue::Metrics(vec![MetricValue::Saved("count".into())]);
        assert_eq!(
            apply_drop(ControlKind::MetricSelect, &metrics, &DndItem::metric("count"), &ds),
            None
        );
    }

    #[test]
    fn test_drop_unknown_item() {
        let ds = fixtures::datasource();
        assert_eq!(apply_drop(FILTER, &ControlValue::Empty, &DndItem::column("missing"), &ds), None);
        assert_eq!(
            apply_drop(ControlKind::MetricSelect, &ControlValue::Empty, &DndItem::metric("missing"), &ds),
            None
        );
    }

    #[test]
    fn test_drop_column_on_metrics_creates_adhoc_metric() {
        let ds = fixtures::datasource();

        let value = apply_drop(
            ControlKind::MetricSelect,
            &ControlValue::Empty,
            &DndItem::column("num_boys"),
            &ds,
        )
        .unwrap();
        assert_eq!(value.labels(), vec!["SUM(num_boys)"]);

        let value = apply_drop(ControlKind::MetricSelect, &value, &DndItem::column("gender"), &ds).unwrap();
        assert_eq!(value.labels(), vec!["SUM(num_boys)", "COUNT_DISTINCT(gender)"]);

        assert_eq!(
            apply_drop(ControlKind::MetricSelect, &value, &DndItem::column("num_boys"), &ds),
            None
        );
    }

    #[test]
    fn test_drop_metric_on_column_control_is_rejected() {
        let ds = fixtures::datasource();
        assert_eq!(apply_drop(FILTER, &ControlValue::Empty, &DndItem::metric("count"), &ds), None);
    }

    #[test]
    fn test_column_flags_limit_column_controls() {
        let mut ds = fixtures::datasource();
        for column in ds.columns.iter_mut() {
            match column.column_name.as_str() {
                "name" => column.filterable = false,
                "state" => column.groupby = false,
                _ => {}
            }
        }
        let groupby = ControlKind::ColumnSelect { is_filter: false };

        assert_eq!(apply_drop(FILTER, &ControlValue::Empty, &DndItem::column("name"), &ds), None);
        assert!(apply_drop(groupby, &ControlValue::Empty, &DndItem::column("name"), &ds).is_some());
        assert_eq!(apply_drop(groupby, &ControlValue::Empty, &DndItem::column("state"), &ds), None);
        assert!(apply_drop(FILTER, &ControlValue::Empty, &DndItem::column("state"), &ds).is_some());

        // Metric controls aggregate any column
        assert!(apply_drop(ControlKind::MetricSelect, &ControlValue::Empty, &DndItem::column("name"), &ds).is_some());
    }

    #[test]
    fn test_default_aggregate_per_column_kind() {
        assert_eq!(default_aggregate(ColumnKind::Numeric), AggregateFunction::Sum);
        for kind in [ColumnKind::Temporal, ColumnKind::String, ColumnKind::Boolean, ColumnKind::Unknown] {
            assert_eq!(default_aggregate(kind), AggregateFunction::CountDistinct);
        }
        assert_eq!(
            serde_json::to_value(AggregateFunction::CountDistinct).unwrap(),
            serde_json::json!("COUNT_DISTINCT")
        );
    }
}
