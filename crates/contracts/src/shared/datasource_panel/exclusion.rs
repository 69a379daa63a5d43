use std::collections::HashSet;

use super::column::Column;
use super::controls::{ControlKind, ControlsSnapshot};

/// Column names already consumed by filter controls on the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    /// Union of the columns held by every filter-type column control
    pub fn from_controls(controls: &ControlsSnapshot) -> Self {
        let names = controls
            .iter()
            .filter(|c| matches!(c.kind, ControlKind::ColumnSelect { is_filter: true }))
            .flat_map(|c| c.value.column_names().iter().cloned())
            .collect();
        Self { names }
    }

    pub fn contains(&self, column_name: &str) -> bool {
        self.names.contains(column_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Columns that may still be dragged out of the panel, in original order
pub fn droppable_columns(columns: &[Column], exclusion: &ExclusionSet) -> Vec<Column> {
    columns
        .iter()
        .filter(|c| !exclusion.contains(&c.column_name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::datasource_panel::{ControlState, ControlValue};

    fn filter_control(name: &str, columns: &[&str]) -> ControlState {
        ControlState::new(name, "Filter", ControlKind::ColumnSelect { is_filter: true }).with_value(
            ControlValue::Columns(columns.iter().map(|c| c.to_string()).collect()),
        )
    }

    #[test]
    fn test_only_unselected_columns_are_droppable() {
        let columns = vec![Column::new("A"), Column::new("B"), Column::new("C")];
        let controls = ControlsSnapshot::new(vec![
            filter_control("filter_1", &["A"]),
            filter_control("filter_2", &["A", "C"]),
        ]);

        let exclusion = ExclusionSet::from_controls(&controls);
        assert_eq!(exclusion.len(), 2);

        let droppable = droppable_columns(&columns, &exclusion);
        let names: Vec<&str> = droppable.iter().map(|c| c.column_name.as_str()).collect();
        assert_eq!(names, vec!["B"]);
    }

    #[test]
    fn test_non_filter_controls_do_not_exclude() {
        let controls = ControlsSnapshot::new(vec![
            ControlState::new("groupby", "Dimensions", ControlKind::ColumnSelect { is_filter: false })
                .with_value(ControlValue::Columns(vec!["A".into()])),
            ControlState::new("datasource", "Datasource", ControlKind::Datasource)
                .with_value(ControlValue::Datasource("A".into())),
        ]);
        assert!(ExclusionSet::from_controls(&controls).is_empty());
    }

    #[test]
    fn test_empty_exclusion_keeps_all_columns() {
        let columns = vec![Column::new("x"), Column::new("y")];
        let droppable = droppable_columns(&columns, &ExclusionSet::default());
        assert_eq!(droppable, columns);
    }

    #[test]
    fn test_from_iter() {
        let exclusion: ExclusionSet = ["a", "b", "a"].into_iter().collect();
        assert_eq!(exclusion.len(), 2);
        assert!(exclusion.contains("b"));
        assert!(!exclusion.contains("c"));
    }
}
