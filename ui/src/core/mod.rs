//! Framework-light building blocks shared by every platform shell.

pub mod locale;
pub mod routing;
