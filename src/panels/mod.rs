//! Ready-made panel implementations
//!
//! - **PlaceholderPanel**: Generic placeholder for prototyping

mod placeholder;

pub use placeholder::{PlaceholderFactory, PlaceholderPanel};
