// Task-Modul: Enthält alle Embassy Tasks
//
// Es gibt genau einen Task, der die Strip-Leitungen besitzt.

pub mod strip_refresh;

// Re-export Tasks für einfachen Import
pub use strip_refresh::strip_refresh_task;
