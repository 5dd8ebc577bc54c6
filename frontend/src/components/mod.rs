pub mod cards;
pub mod common;
pub mod forms;
