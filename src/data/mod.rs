pub mod data_generator;

pub use data_generator::{DataGenerator, Line, ON_LINE_LABEL};
