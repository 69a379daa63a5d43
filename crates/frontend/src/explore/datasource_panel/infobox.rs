//! Infobox shown instead of the lists while the source is an unsaved query

use contracts::shared::datasource_panel::{
    CreateDatasetRequest, Datasource, CREATE_DATASET_HINT, CREATE_DATASET_LABEL,
};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CreateDatasetInfobox(
    #[prop(into)] datasource: Signal<Datasource>,
    on_create: Callback<CreateDatasetRequest>,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let (dataset_name, set_dataset_name) = signal(String::new());

    let open_form = move || {
        set_dataset_name.set(datasource.with_untracked(|ds| ds.datasource_name.clone()));
        set_editing.set(true);
    };

    let save = move || {
        let name = dataset_name.get_untracked();
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let request = datasource.with_untracked(|ds| CreateDatasetRequest::from_datasource(ds, name));
        log::info!("create dataset {:?} from {}", request.name, request.source_uid);
        on_create.run(request);
        set_editing.set(false);
    };

    view! {
        <div class="datasource-panel-infobox">
            <MessageBar intent=MessageBarIntent::Info>
                <div class="infobox-text">
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Transparent
                        on_click=move |_| open_form()
                    >
                        {CREATE_DATASET_LABEL}
                    </Button>
                    " "
                    <span>{CREATE_DATASET_HINT}</span>
                </div>
            </MessageBar>

            <Show when=move || editing.get()>
                <div class="create-dataset-form">
                    <label class="create-dataset-label">
                        "Dataset name"
                        <input
                            type="text"
                            prop:value=move || dataset_name.get()
                            on:input=move |ev| set_dataset_name.set(event_target_value(&ev))
                        />
                    </label>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || dataset_name.get().trim().is_empty())
                        on_click=move |_| save()
                    >
                        "Save"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| set_editing.set(false)
                    >
                        "Cancel"
                    </Button>
                </div>
            </Show>
        </div>
    }
}
