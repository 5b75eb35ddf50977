pub mod builder;
pub mod defs;
pub mod model;
