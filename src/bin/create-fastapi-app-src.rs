//! src-based layout: `src/` tree started through a top level `main.py`.
use std::process::ExitCode;

use create_fastapi_app::layout::SRC_BASED;

fn main() -> anyhow::Result<ExitCode> {
    create_fastapi_app::run(&SRC_BASED)
}
