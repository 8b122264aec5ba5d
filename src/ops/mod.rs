pub mod intake;
pub mod render;
