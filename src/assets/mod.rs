pub mod decode;
pub mod grid;
