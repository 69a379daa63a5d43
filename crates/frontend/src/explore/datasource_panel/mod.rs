//! Datasource panel - metrics and columns of the current datasource

mod infobox;
mod item;
mod section;

pub use infobox::CreateDatasetInfobox;
pub use item::DatasourcePanelItem;
pub use section::PanelSection;

use contracts::shared::datasource_panel::{
    Column, ControlsSnapshot, Datasource, Metric, PanelBody, PanelConfig, PanelInput, PanelView,
    SectionExpansion,
};
use leptos::prelude::*;

use crate::explore::actions::ControlActions;
use crate::shared::icons::{certified_icon, icon, warning_icon};
use crate::shared::list_utils::SearchInput;

#[component]
pub fn DatasourcePanel(
    #[prop(into)] datasource: Signal<Datasource>,
    /// Sibling controls; filter controls hide their columns from the list
    #[prop(into)]
    controls: Signal<ControlsSnapshot>,
    actions: ControlActions,
    /// Panel width in pixels
    #[prop(into)]
    width: Signal<u32>,
) -> impl IntoView {
    let config = use_context::<PanelConfig>().unwrap_or_default();
    let max_items = config.max_items;

    let (search, set_search) = signal(String::new());
    let metrics_expanded = RwSignal::new(false);
    let columns_expanded = RwSignal::new(false);

    // A new datasource starts with a clean search
    Effect::new(move |prev: Option<String>| {
        let uid = datasource.with(|ds| ds.uid());
        if prev.as_ref().is_some_and(|p| *p != uid) {
            log::debug!("datasource switched to {}, resetting search", uid);
            set_search.set(String::new());
            metrics_expanded.set(false);
            columns_expanded.set(false);
        }
        uid
    });

    Effect::new(move |_| {
        datasource.with(|ds| {
            if let Err(e) = ds.parse_extra() {
                log::warn!("datasource {}: {}", ds.uid(), e);
            }
        });
    });

    let derive_config = config.clone();
    let panel_view = Memo::new(move |_| {
        let expansion = SectionExpansion {
            metrics: metrics_expanded.get(),
            columns: columns_expanded.get(),
        };
        datasource.with(|ds| {
            controls.with(|ctl| {
                search.with(|s| {
                    let input = PanelInput {
                        datasource: ds,
                        controls: ctl,
                        search: s,
                        expansion,
                    };
                    PanelView::derive(&input, &derive_config)
                })
            })
        })
    });

    // Separate memo so typing does not rebuild the body
    let body = Memo::new(move |_| panel_view.with(|v| v.notice.body));

    let label_config = config.clone();
    let max_chars = Signal::derive(move || label_config.max_label_chars(width.get()));

    let placeholder = config.search_placeholder.clone();
    let debounce_ms = config.search_debounce_ms;

    view! {
        <div class="datasource-panel" style=move || format!("width: {}px;", width.get())>
            <div class="datasource-panel-header">
                <span class="datasource-icon">{icon("dataset")}</span>
                <span class="datasource-name">{move || datasource.with(|ds| ds.datasource_name.clone())}</span>
                {move || panel_view.with(|v| v.notice.certified_by.clone()).map(|by| certified_icon(by, None))}
                {move || panel_view.with(|v| v.notice.warning.clone()).map(|w| warning_icon("warning", w))}
            </div>

            {move || match body.get() {
                PanelBody::CreateDatasetPrompt => view! {
                    <CreateDatasetInfobox datasource=datasource on_create=actions.create_dataset />
                }.into_any(),
                PanelBody::Sections => view! {
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |value: String| set_search.set(value))
                        placeholder=placeholder.clone()
                        debounce_ms=debounce_ms
                    />

                    <PanelSection
                        title="Metrics"
                        count_label=Signal::derive(move || panel_view.with(|v| v.metrics.count.label()))
                        hidden=Signal::derive(move || panel_view.with(|v| v.metrics.hidden))
                        can_collapse=Signal::derive(move || panel_view.with(|v| v.metrics.can_collapse(max_items)))
                        expanded=metrics_expanded
                    >
                        <div class="datasource-panel-list">
                            <For
                                each=move || panel_view.with(|v| v.metrics.items.clone())
                                key=|metric| metric.metric_name.clone()
                                children=move |metric: Metric| view! {
                                    <DatasourcePanelItem item=metric icon_name="metric" max_chars=max_chars />
                                }
                            />
                            {move || panel_view.with(|v| v.metrics.items.is_empty()).then(|| view! {
                                <div class="datasource-panel-empty">"No matching metrics"</div>
                            })}
                        </div>
                    </PanelSection>

                    <PanelSection
                        title="Columns"
                        count_label=Signal::derive(move || panel_view.with(|v| v.columns.count.label()))
                        hidden=Signal::derive(move || panel_view.with(|v| v.columns.hidden))
                        can_collapse=Signal::derive(move || panel_view.with(|v| v.columns.can_collapse(max_items)))
                        expanded=columns_expanded
                    >
                        <div class="datasource-panel-list" data-test="fieldSelections">
                            <For
                                each=move || panel_view.with(|v| v.columns.items.clone())
                                key=|column| column.column_name.clone()
                                children=move |column: Column| {
                                    let icon_name = column.kind().icon();
                                    view! {
                                        <DatasourcePanelItem item=column icon_name=icon_name max_chars=max_chars />
                                    }
                                }
                            />
                            {move || panel_view.with(|v| v.columns.items.is_empty()).then(|| view! {
                                <div class="datasource-panel-empty">"No matching columns"</div>
                            })}
                        </div>
                    </PanelSection>
                }.into_any(),
            }}
        </div>
    }
}
