pub mod buffer;
pub mod geometry;
pub mod rounding;

pub fn version() -> &'static str {
    "0.1.0"
}
