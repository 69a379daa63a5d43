pub mod actions;
pub mod container;
pub mod controls;
pub mod datasource_panel;

pub use actions::ControlActions;
pub use container::{DragContext, ExploreContainer};
pub use controls::{DndColumnSelect, DndMetricSelect};
pub use datasource_panel::DatasourcePanel;
