pub mod canvas;
pub mod image_analysis;
pub mod practice;
pub mod progress;
pub mod quiz;
