pub mod frame;
pub mod ui;
