pub mod encode;
pub mod model;
pub mod run;
