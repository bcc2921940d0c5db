pub mod assets;
pub mod renderer;
