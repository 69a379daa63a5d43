//! Explore container - shares drag state between the panel and the controls

use contracts::shared::datasource_panel::DndItem;
use leptos::prelude::*;

/// Item currently dragged out of the datasource panel
#[derive(Clone, Copy)]
pub struct DragContext {
    pub dragging: RwSignal<Option<DndItem>>,
}

impl DragContext {
    pub fn new() -> Self {
        Self {
            dragging: RwSignal::new(None),
        }
    }

    pub fn start(&self, item: DndItem) {
        log::debug!("drag start: {:?}", item);
        self.dragging.set(Some(item));
    }

    pub fn end(&self) {
        self.dragging.set(None);
    }
}

impl Default for DragContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps the panel and the drop-target controls
#[component]
pub fn ExploreContainer(children: Children) -> impl IntoView {
    provide_context(DragContext::new());

    view! {
        <div class="explore-container">
            {children()}
        </div>
    }
}
