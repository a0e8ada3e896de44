pub mod dashboard;
pub mod entry_form;
pub mod history;
pub mod weekly_chart;
