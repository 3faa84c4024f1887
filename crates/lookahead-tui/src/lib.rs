pub mod app;
pub mod colors;
pub mod headless;
pub mod render;
