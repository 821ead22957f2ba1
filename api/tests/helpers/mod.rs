pub mod app;

#[allow(unused_imports)]
pub use app::{CALCULATOR_SVG, make_test_app};
