pub mod ai;
pub mod api;
pub mod carousel;
pub mod cli;
pub mod content;
pub mod core;
