// Task-Modul: Enthält den Embassy Task des Terminals
//
// Nur ein Task: der Scheduler aus terminal-core bedient
// alle Peripherie kooperativ in einer Schleife.

pub mod terminal;

// Re-export Tasks für einfachen Import
pub use terminal::terminal_task;
