pub mod projection;
pub mod stats;
pub mod target;
