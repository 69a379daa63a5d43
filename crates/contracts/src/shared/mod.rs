pub mod datasource_panel;
