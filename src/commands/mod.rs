//! Command handlers for spur

pub mod dispatch;

mod interactive;
mod matrix;
mod paths;
