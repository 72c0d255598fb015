#![forbid(unsafe_code)]

pub mod expansion;
pub mod model;
pub mod reveal;
pub mod time;

pub use time::Clock;
