//! Sample datasource used by the demo page and tests

use super::column::Column;
use super::controls::{ControlKind, ControlState, ControlValue, ControlsSnapshot};
use super::datasource::{DatabaseRef, Datasource, DatasourceType};
use super::metric::Metric;

pub fn columns() -> Vec<Column> {
    vec![
        Column::new("ds").with_type("TIMESTAMP").temporal(),
        Column {
            verbose_name: Some("Gender".to_string()),
            ..Column::new("gender").with_type("VARCHAR(16)")
        },
        Column {
            description: Some("First name of the baby".to_string()),
            ..Column::new("name").with_type("VARCHAR(255)")
        },
        Column::new("num_boys").with_type("BIGINT"),
        Column {
            certified_by: Some("Data team".to_string()),
            certification_details: Some("Validated against census data".to_string()),
            ..Column::new("num_girls").with_type("BIGINT")
        },
        Column {
            warning_markdown: Some("Two-letter codes only since 2010".to_string()),
            ..Column::new("state").with_type("VARCHAR(10)")
        },
    ]
}

pub fn metrics() -> Vec<Metric> {
    vec![
        Metric {
            certified_by: Some("Data team".to_string()),
            ..Metric::new("sum__num").with_expression("SUM(num)")
        },
        Metric::new("count").with_expression("COUNT(*)"),
        Metric {
            verbose_name: Some("Average girls".to_string()),
            ..Metric::new("avg__num_girls").with_expression("AVG(num_girls)")
        },
        Metric {
            warning_markdown: Some("Deprecated, use sum__num".to_string()),
            ..Metric::new("max__num_boys").with_expression("MAX(num_boys)")
        },
    ]
}

pub fn datasource() -> Datasource {
    Datasource {
        id: 1,
        datasource_type: DatasourceType::Table,
        columns: columns(),
        metrics: metrics(),
        database: DatabaseRef { id: 1 },
        datasource_name: "table1".to_string(),
        extra: None,
    }
}

/// Controls of a typical chart form, all empty except the datasource
pub fn controls() -> ControlsSnapshot {
    let datasource = datasource();
    ControlsSnapshot::new(vec![
        ControlState::new("datasource", "Datasource", ControlKind::Datasource)
            .with_value(ControlValue::Datasource(datasource.uid())),
        ControlState::new("metrics", "Metrics", ControlKind::MetricSelect),
        ControlState::new("groupby", "Dimensions", ControlKind::ColumnSelect { is_filter: false }),
        ControlState::new("adhoc_filters", "Filters", ControlKind::ColumnSelect { is_filter: true }),
    ])
}
