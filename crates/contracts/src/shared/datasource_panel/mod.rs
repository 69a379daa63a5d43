//! Datasource panel: the list of metrics and columns shown next to the
//! explore controls, with search, exclusion of already-filtered columns
//! and contextual notices.

pub mod column;
pub mod config;
pub mod controls;
pub mod datasource;
pub mod dnd;
pub mod error;
pub mod exclusion;
pub mod fixtures;
pub mod item;
pub mod metric;
pub mod notice;
pub mod panel;
pub mod search;

pub use column::*;
pub use config::*;
pub use controls::*;
pub use datasource::*;
pub use dnd::*;
pub use error::*;
pub use exclusion::*;
pub use item::*;
pub use metric::*;
pub use notice::*;
pub use panel::*;
pub use search::*;
