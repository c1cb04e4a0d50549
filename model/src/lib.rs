pub mod checkbox_gate;
pub mod config;
pub mod date_picker;
pub mod delete_confirmation;
pub mod error;
pub mod navigation;
pub mod outcome;
pub mod prompt;
pub mod submission_guard;
pub mod tools;
pub mod trade_date;
pub mod weekend_guard;
