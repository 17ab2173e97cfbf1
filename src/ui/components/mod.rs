pub mod empty_state;
pub mod footer;
pub mod header;
pub mod help_panel;
pub mod input_box;
pub mod task_list;
pub mod toast;
