//! Everything the panel renders, derived from its inputs in one pass

use super::column::Column;
use super::config::PanelConfig;
use super::controls::ControlsSnapshot;
use super::datasource::Datasource;
use super::exclusion::{droppable_columns, ExclusionSet};
use super::metric::Metric;
use super::notice::PanelNotice;
use super::search::{filter_items, SectionCount, Searchable};

/// Which sections were expanded past `max_items` with "Show all"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionExpansion {
    pub metrics: bool,
    pub columns: bool,
}

/// Inputs of a render pass
#[derive(Debug, Clone, Copy)]
pub struct PanelInput<'a> {
    pub datasource: &'a Datasource,
    pub controls: &'a ControlsSnapshot,
    pub search: &'a str,
    pub expansion: SectionExpansion,
}

/// One collapsible section ("Metrics" or "Columns").
///
/// `count` is always exact over every match; `items` is capped at
/// `max_items` until the section is expanded, `hidden` holds the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView<T> {
    /// Items to render
    pub items: Vec<T>,
    /// Counter over all matches, before truncation
    pub count: SectionCount,
    /// Matches cut off by `max_items`
    pub hidden: usize,
}

impl<T: Searchable + Clone> SectionView<T> {
    pub fn build(source: &[T], search: &str, max_items: usize, expanded: bool) -> Self {
        let mut items = filter_items(source, search);
        let count = SectionCount {
            shown: items.len(),
            total: source.len(),
        };
        let hidden = if expanded {
            0
        } else {
            items.len().saturating_sub(max_items)
        };
        items.truncate(items.len() - hidden);

        Self { items, count, hidden }
    }

    /// Section can be collapsed back after "Show all"
    pub fn can_collapse(&self, max_items: usize) -> bool {
        self.hidden == 0 && self.items.len() > max_items
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub notice: PanelNotice,
    pub metrics: SectionView<Metric>,
    /// Droppable columns only
    pub columns: SectionView<Column>,
}

impl PanelView {
    pub fn derive(input: &PanelInput<'_>, config: &PanelConfig) -> Self {
        let datasource = input.datasource;
        let exclusion = ExclusionSet::from_controls(input.controls);
        let columns = droppable_columns(&datasource.columns, &exclusion);

        Self {
            notice: PanelNotice::for_datasource(datasource),
            metrics: SectionView::build(
                &datasource.metrics,
                input.search,
                config.max_items,
                input.expansion.metrics,
            ),
            columns: SectionView::build(
                &columns,
                input.search,
                config.max_items,
                input.expansion.columns,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::datasource_panel::{
        fixtures, ControlKind, ControlState, ControlValue, DatasourceType, PanelBody, PanelItem,
    };

    fn derive(datasource: &Datasource, controls: &ControlsSnapshot, search: &str) -> PanelView {
        let input = PanelInput {
            datasource,
            controls,
            search,
            expansion: SectionExpansion::default(),
        };
        PanelView::derive(&input, &PanelConfig::default())
    }

    #[test]
    fn test_renders_all_metrics_and_columns() {
        let ds = fixtures::datasource();
        let view = derive(&ds, &fixtures::controls(), "");

        assert_eq!(view.metrics.items, ds.metrics);
        assert_eq!(view.columns.items, ds.columns);
        let metrics_num = ds.metrics.len();
        assert_eq!(view.metrics.count.label(), format!("Showing {} of {}", metrics_num, metrics_num));
        let columns_num = ds.columns.len();
        assert_eq!(view.columns.count.label(), format!("Showing {} of {}", columns_num, columns_num));
    }

    #[test]
    fn test_search_matching_columns() {
        let ds = fixtures::datasource();
        let view = derive(&ds, &fixtures::controls(), &ds.columns[0].column_name);

        assert!(view.columns.items.iter().any(|c| c.column_name == ds.columns[0].column_name));
        assert!(!view.columns.items.iter().any(|c| c.column_name == ds.columns[1].column_name));
        assert!(view.columns.count.shown <= view.columns.count.total);
    }

    #[test]
    fn test_search_matching_metrics() {
        let ds = fixtures::datasource();
        let view = derive(&ds, &fixtures::controls(), &ds.metrics[0].metric_name);

        let names: Vec<&str> = view.metrics.items.iter().map(|m| m.name()).collect();
        assert!(names.contains(&ds.metrics[0].metric_name.as_str()));
        assert!(!names.contains(&ds.metrics[1].metric_name.as_str()));
    }

    #[test]
    fn test_warning_shown_for_deprecated_source() {
        let ds = fixtures::datasource().with_extra(r#"{"warning_markdown": "This is a warning."}"#);
        let view = derive(&ds, &fixtures::controls(), "");
        assert_eq!(view.notice.warning.as_deref(), Some("This is a warning."));

        let view = derive(&fixtures::datasource(), &fixtures::controls(), "");
        assert_eq!(view.notice.warning, None);
    }

    #[test]
    fn test_query_gets_create_dataset_prompt() {
        let ds = fixtures::datasource().with_type(DatasourceType::Query);
        let view = derive(&ds, &fixtures::controls(), "");
        assert_eq!(view.notice.body, PanelBody::CreateDatasetPrompt);

        let ds = fixtures::datasource().with_type(DatasourceType::Table);
        let view = derive(&ds, &fixtures::controls(), "");
        assert_eq!(view.notice.body, PanelBody::Sections);
    }

    #[test]
    fn test_filtered_columns_are_not_droppable() {
        let ds = fixtures::datasource();
        let first = ds.columns[0].column_name.clone();
        let third = ds.columns[2].column_name.clone();
        let controls = ControlsSnapshot::new(vec![
            ControlState::new("filter_1", "Filter", ControlKind::ColumnSelect { is_filter: true })
                .with_value(ControlValue::Columns(vec![first.clone()])),
            ControlState::new("filter_2", "Filter", ControlKind::ColumnSelect { is_filter: true })
                .with_value(ControlValue::Columns(vec![first.clone(), third.clone()])),
        ]);

        let view = derive(&ds, &controls, "");
        let names: Vec<&str> = view.columns.items.iter().map(|c| c.name()).collect();
        assert!(!names.contains(&first.as_str()));
        assert!(!names.contains(&third.as_str()));
        assert!(names.contains(&ds.columns[1].column_name.as_str()));
        assert_eq!(view.columns.count.total, ds.columns.len() - 2);
        assert_eq!(view.metrics.items.len(), ds.metrics.len());
    }

    #[test]
    fn test_long_sections_are_truncated() {
        let mut ds = fixtures::datasource();
        ds.columns = (0..60).map(|i| Column::new(format!("col_{:02}", i))).collect();
        let controls = ControlsSnapshot::default();

        let view = derive(&ds, &controls, "");
        assert_eq!(view.columns.items.len(), 50);
        assert_eq!(view.columns.hidden, 10);
        assert_eq!(view.columns.count.label(), "Showing 60 of 60");
        assert!(!view.columns.can_collapse(50));

        let input = PanelInput {
            datasource: &ds,
            controls: &controls,
            search: "",
            expansion: SectionExpansion { metrics: false, columns: true },
        };
        let view = PanelView::derive(&input, &PanelConfig::default());
        assert_eq!(view.columns.items.len(), 60);
        assert_eq!(view.columns.hidden, 0);
        assert!(view.columns.can_collapse(50));

        let view = derive(&ds, &controls, "col_5");
        assert_eq!(view.columns.items.len(), 10);
        assert_eq!(view.columns.count.label(), "Showing 10 of 60");
    }

    #[test]
    fn test_counter_bounds_hold_for_any_search() {
        let ds = fixtures::datasource();
        for search in ["", "a", "num", "zzz", "S", "__"] {
            let view = derive(&ds, &fixtures::controls(), search);
            for count in [view.metrics.count, view.columns.count] {
                assert!(count.shown <= count.total);
                if search.is_empty() {
                    assert_eq!(count.shown, count.total);
                }
            }
        }
    }
}
