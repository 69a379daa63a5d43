mod dnd_select;

pub use dnd_select::{DndColumnSelect, DndMetricSelect, DndSelect};
