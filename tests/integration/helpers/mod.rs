pub mod prelude;
pub mod project;
