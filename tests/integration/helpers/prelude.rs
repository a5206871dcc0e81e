pub use crate::helpers::arg_builder::{binary, binary_src, ArgBuilder};
pub use crate::helpers::output::created_paths;
pub use crate::helpers::project_builder::tempdir;
pub use indoc::indoc;
pub use predicates::prelude::*;
