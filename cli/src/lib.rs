pub mod load;
pub mod render;
