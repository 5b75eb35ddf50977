pub mod descriptor;
pub mod engine;
pub mod presentation;
pub mod timing;
