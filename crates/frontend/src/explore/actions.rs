use contracts::shared::datasource_panel::{ControlValue, CreateDatasetRequest};
use leptos::prelude::*;

/// Callbacks the explore page hands to the panel and its sibling controls
#[derive(Clone, Copy)]
pub struct ControlActions {
    /// Replace the value of the named control
    pub set_control_value: Callback<(String, ControlValue)>,
    /// Ask the host to turn the current query into a dataset
    pub create_dataset: Callback<CreateDatasetRequest>,
}
