pub mod conf;
pub mod core;
pub mod model;
pub mod pipeline;
