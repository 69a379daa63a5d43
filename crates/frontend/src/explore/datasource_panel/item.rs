use contracts::shared::datasource_panel::{truncate_label, PanelItem, DND_MIME_TYPE};
use leptos::prelude::*;

use crate::explore::container::DragContext;
use crate::shared::icons::{certified_icon, icon, warning_icon};

/// Draggable row of the metrics or columns list
#[component]
pub fn DatasourcePanelItem<T>(
    item: T,
    icon_name: &'static str,
    /// Longest label that fits the panel width
    #[prop(into)]
    max_chars: Signal<usize>,
) -> impl IntoView
where
    T: PanelItem + Send + Sync + 'static,
{
    let drag = use_context::<DragContext>();
    let (dragging, set_dragging) = signal(false);

    let dnd_item = item.dnd_item();
    let payload = match dnd_item.to_payload() {
        Ok(payload) => Some(payload),
        Err(e) => {
            log::warn!("{} is not draggable: {}", dnd_item.name, e);
            None
        }
    };

    let name = item.name().to_string();
    let title = item.tooltip().unwrap_or_else(|| name.clone());
    let certified = item.is_certified().then(|| {
        (
            item.certified_by().unwrap_or_default().to_string(),
            item.certification_details().map(str::to_string),
        )
    });
    let warning = item.warning_markdown().map(str::to_string);

    view! {
        <div
            class="datasource-panel-item"
            class:dragging=move || dragging.get()
            draggable="true"
            title=title
            on:dragstart=move |ev| {
                if let (Some(data_transfer), Some(payload)) = (ev.data_transfer(), payload.as_ref()) {
                    if data_transfer.set_data(DND_MIME_TYPE, payload).is_err() {
                        log::warn!("could not attach drag payload for {}", dnd_item.name);
                    }
                    data_transfer.set_effect_allowed("copy");
                }
                if let Some(drag) = drag {
                    drag.start(dnd_item.clone());
                }
                set_dragging.set(true);
            }
            on:dragend=move |_| {
                if let Some(drag) = drag {
                    drag.end();
                }
                set_dragging.set(false);
            }
        >
            <span class="item-icon">{icon(icon_name)}</span>
            <span class="item-label">{move || truncate_label(&name, max_chars.get())}</span>
            {certified.map(|(by, details)| certified_icon(by, details))}
            {warning.map(|w| warning_icon("item warning", w))}
        </div>
    }
}
