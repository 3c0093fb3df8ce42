pub mod gauge;
pub mod render;
