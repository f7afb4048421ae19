pub mod path;
pub mod payload;
