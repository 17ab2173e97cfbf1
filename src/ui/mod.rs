pub mod click_areas;
pub mod components;
pub mod task_screen;
