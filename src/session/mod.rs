pub mod export;
pub mod frame;
pub mod opts;
pub mod player;
