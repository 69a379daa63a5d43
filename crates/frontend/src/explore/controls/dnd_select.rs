//! Drop-target controls fed from the datasource panel

use contracts::shared::datasource_panel::{
    apply_drop, ControlKind, ControlsSnapshot, Datasource, DndItem, DND_MIME_TYPE,
};
use leptos::prelude::*;

use crate::explore::actions::ControlActions;
use crate::explore::container::DragContext;
use crate::shared::icons::icon;

/// Control that collects columns or metrics dropped on it; the label
/// comes from the control's entry in `controls`
#[component]
pub fn DndSelect(
    name: String,
    kind: ControlKind,
    #[prop(into)] controls: Signal<ControlsSnapshot>,
    #[prop(into)] datasource: Signal<Datasource>,
    actions: ControlActions,
) -> impl IntoView {
    let drag = use_context::<DragContext>();
    let (hover, set_hover) = signal(false);

    let name = StoredValue::new(name);
    let value = Memo::new(move |_| controls.with(|c| c.value_of(&name.get_value())));
    let label = Memo::new(move |_| name.with_value(|name| controls.with(|c| c.label_of(name).to_string())));

    let placeholder = match kind {
        ControlKind::MetricSelect => "Drop columns or metrics here",
        _ => "Drop columns here",
    };

    // Without a drag context (drag from outside) the payload decides on drop
    let can_accept = move || match drag {
        Some(drag) => drag
            .dragging
            .with(|item| item.as_ref().is_some_and(|item| kind.accepts(item))),
        None => true,
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_hover.set(false);

        let Some(payload) = ev.data_transfer().and_then(|dt| dt.get_data(DND_MIME_TYPE).ok()) else {
            return;
        };
        let item = match DndItem::from_payload(&payload) {
            Ok(item) => item,
            Err(e) => {
                log::warn!("ignored drop on {}: {}", name.get_value(), e);
                return;
            }
        };

        let current = value.get_untracked();
        let next = datasource.with_untracked(|ds| apply_drop(kind, &current, &item, ds));
        match next {
            Some(next) => {
                log::debug!("{} <- {:?}", name.get_value(), item);
                actions.set_control_value.run((name.get_value(), next));
            }
            None => log::debug!("{} rejected {:?}", name.get_value(), item),
        }
    };

    let remove = move |index: usize| {
        let next = value.get_untracked().without(index);
        actions.set_control_value.run((name.get_value(), next));
    };

    view! {
        <div class="dnd-select">
            <div class="dnd-select-label">{move || label.get()}</div>
            <div
                class="dnd-select-target"
                class:dnd-hover=move || hover.get()
                on:dragover=move |ev: web_sys::DragEvent| {
                    if can_accept() {
                        ev.prevent_default();
                        set_hover.set(true);
                    }
                }
                on:dragleave=move |_| set_hover.set(false)
                on:drop=on_drop
            >
                {move || {
                    let labels = value.with(|v| v.labels());
                    if labels.is_empty() {
                        view! { <span class="dnd-select-placeholder">{placeholder}</span> }.into_any()
                    } else {
                        labels
                            .into_iter()
                            .enumerate()
                            .map(|(index, label)| view! {
                                <span class="dnd-select-entry">
                                    <span class="dnd-select-entry-label">{label}</span>
                                    <button
                                        class="dnd-select-remove"
                                        title="Remove"
                                        on:click=move |_| remove(index)
                                    >
                                        {icon("x")}
                                    </button>
                                </span>
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

/// Column drop target; `is_filter` marks it as a filter control whose
/// columns are hidden from the panel
#[component]
pub fn DndColumnSelect(
    #[prop(into)] name: String,
    #[prop(optional)] is_filter: bool,
    #[prop(into)] controls: Signal<ControlsSnapshot>,
    #[prop(into)] datasource: Signal<Datasource>,
    actions: ControlActions,
) -> impl IntoView {
    let kind = ControlKind::ColumnSelect { is_filter };

    view! {
        <DndSelect
            name=name
            kind=kind
            controls=controls
            datasource=datasource
            actions=actions
        />
    }
}

#[component]
pub fn DndMetricSelect(
    #[prop(into)] name: String,
    #[prop(into)] controls: Signal<ControlsSnapshot>,
    #[prop(into)] datasource: Signal<Datasource>,
    actions: ControlActions,
) -> impl IntoView {
    view! {
        <DndSelect
            name=name
            kind=ControlKind::MetricSelect
            controls=controls
            datasource=datasource
            actions=actions
        />
    }
}
