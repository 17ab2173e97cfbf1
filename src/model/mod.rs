pub mod store;
pub mod task;
pub mod validator;

pub use store::TaskListStore;
pub use task::Task;
