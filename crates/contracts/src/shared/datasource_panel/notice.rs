use super::datasource::{Datasource, DatasourceType};

/// Label of the call-to-action button shown for unsaved queries
pub const CREATE_DATASET_LABEL: &str = "Create a dataset";

/// Text following the call-to-action button
pub const CREATE_DATASET_HINT: &str = "to edit or add columns and metrics.";

/// What the panel body shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelBody {
    /// Metrics and columns sections
    Sections,
    /// Prompt to create a dataset from the query
    CreateDatasetPrompt,
}

impl From<DatasourceType> for PanelBody {
    fn from(datasource_type: DatasourceType) -> Self {
        if datasource_type.needs_dataset() {
            PanelBody::CreateDatasetPrompt
        } else {
            PanelBody::Sections
        }
    }
}

/// Contextual messaging derived from datasource attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelNotice {
    /// Deprecation warning (markdown)
    pub warning: Option<String>,
    pub certified_by: Option<String>,
    pub body: PanelBody,
}

impl PanelNotice {
    pub fn for_datasource(datasource: &Datasource) -> Self {
        Self {
            warning: datasource.warning_markdown(),
            certified_by: datasource.certified_by(),
            body: PanelBody::from(datasource.datasource_type),
        }
    }

    pub fn shows_sections(&self) -> bool {
        self.body == PanelBody::Sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::datasource_panel::fixtures;

    #[test]
    fn test_table_shows_sections_without_prompt() {
        let notice = PanelNotice::for_datasource(&fixtures::datasource());
        assert_eq!(notice.body, PanelBody::Sections);
        assert!(notice.shows_sections());
        assert_eq!(notice.warning, None);
    }

    #[test]
    fn test_query_shows_prompt_instead_of_sections() {
        let ds = fixtures::datasource().with_type(DatasourceType::Query);
        let notice = PanelNotice::for_datasource(&ds);
        assert_eq!(notice.body, PanelBody::CreateDatasetPrompt);
        assert!(!notice.shows_sections());
    }

    #[test]
    fn test_dataset_and_saved_query() {
        let dataset = fixtures::datasource().with_type(DatasourceType::Dataset);
        assert_eq!(PanelNotice::for_datasource(&dataset).body, PanelBody::Sections);

        let saved = fixtures::datasource().with_type(DatasourceType::SavedQuery);
        assert_eq!(PanelNotice::for_datasource(&saved).body, PanelBody::CreateDatasetPrompt);
    }

    #[test]
    fn test_warning_is_independent_of_body() {
        let ds = fixtures::datasource()
            .with_type(DatasourceType::Query)
            .with_extra(r#"{"warning_markdown": "This is a warning."}"#);
        let notice = PanelNotice::for_datasource(&ds);
        assert_eq!(notice.warning.as_deref(), Some("This is a warning."));
        assert_eq!(notice.body, PanelBody::CreateDatasetPrompt);
    }
}
