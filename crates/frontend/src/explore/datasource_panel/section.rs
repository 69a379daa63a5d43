use leptos::prelude::*;

use crate::shared::icons::icon;

/// Collapsible "Metrics" / "Columns" section with its counter and
/// show-all toggle
#[component]
pub fn PanelSection(
    title: &'static str,
    /// "Showing X of Y"
    #[prop(into)]
    count_label: Signal<String>,
    /// Matches cut off by the item limit
    #[prop(into)]
    hidden: Signal<usize>,
    #[prop(into)]
    can_collapse: Signal<bool>,
    /// Set by "Show all", cleared by "Show less"
    expanded: RwSignal<bool>,
    children: ChildrenFn,
) -> impl IntoView {
    let (open, set_open) = signal(true);

    view! {
        <div class="datasource-panel-section">
            <button
                class="section-header"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {move || if open.get() { icon("chevron-down") } else { icon("chevron-right") }}
                <span class="section-title">{title}</span>
            </button>

            <Show when=move || open.get()>
                <div class="section-count">{move || count_label.get()}</div>
                {children()}
                {move || {
                    let hidden = hidden.get();
                    (hidden > 0).then(|| view! {
                        <button class="section-toggle" on:click=move |_| expanded.set(true)>
                            {format!("Show all ({} more)", hidden)}
                        </button>
                    })
                }}
                {move || can_collapse.get().then(|| view! {
                    <button class="section-toggle" on:click=move |_| expanded.set(false)>
                        "Show less"
                    </button>
                })}
            </Show>
        </div>
    }
}
