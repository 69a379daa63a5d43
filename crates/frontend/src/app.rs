use crate::explore::{
    ControlActions, DatasourcePanel, DndColumnSelect, DndMetricSelect, ExploreContainer,
};
use crate::shared::config::load_panel_config;
use contracts::shared::datasource_panel::{
    fixtures, ControlValue, CreateDatasetRequest, DatasourceType,
};
use leptos::prelude::*;

const PANEL_WIDTH_PX: u32 = 300;

#[component]
pub fn App() -> impl IntoView {
    // Panel settings for the whole explore page
    provide_context(load_panel_config());

    let datasource = RwSignal::new(fixtures::datasource());
    let controls = RwSignal::new(fixtures::controls());

    let actions = ControlActions {
        set_control_value: Callback::new(move |(name, value): (String, ControlValue)| {
            log::debug!("control {} = {:?}", name, value);
            controls.update(|c| *c = c.with_value(&name, value));
        }),
        create_dataset: Callback::new(move |request: CreateDatasetRequest| {
            log::info!("dataset {:?} created from {}", request.name, request.source_uid);
            datasource.update(|ds| {
                ds.datasource_type = DatasourceType::Dataset;
                ds.datasource_name = request.name.clone();
            });
            let uid = datasource.with_untracked(|ds| ds.uid());
            controls.update(|c| *c = c.with_value("datasource", ControlValue::Datasource(uid)));
        }),
    };

    let switch_type = move |raw: String| {
        let Some(datasource_type) = DatasourceType::parse(&raw) else {
            log::warn!("unknown datasource type {:?}", raw);
            return;
        };
        datasource.update(|ds| ds.datasource_type = datasource_type);
        let uid = datasource.with_untracked(|ds| ds.uid());
        controls.update(|c| *c = c.with_value("datasource", ControlValue::Datasource(uid)));
    };

    view! {
        <div class="explore-page">
            <label class="datasource-type-picker">
                "Source type "
                <select
                    prop:value=move || datasource.with(|ds| ds.datasource_type.as_str())
                    on:change=move |ev| switch_type(event_target_value(&ev))
                >
                    {DatasourceType::all()
                        .into_iter()
                        .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                        .collect_view()}
                </select>
            </label>

            <ExploreContainer>
                <DatasourcePanel
                    datasource=datasource
                    controls=controls
                    actions=actions
                    width=PANEL_WIDTH_PX
                />
                <div class="explore-controls">
                    <DndMetricSelect
                        name="metrics"
                        controls=controls
                        datasource=datasource
                        actions=actions
                    />
                    <DndColumnSelect
                        name="groupby"
                        controls=controls
                        datasource=datasource
                        actions=actions
                    />
                    <DndColumnSelect
                        name="adhoc_filters"
                        is_filter=true
                        controls=controls
                        datasource=datasource
                        actions=actions
                    />
                </div>
            </ExploreContainer>
        </div>
    }
}
