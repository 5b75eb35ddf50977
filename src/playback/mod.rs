pub mod autoplay;
pub mod input;
pub mod navigation;
pub mod state;
