//! Classic layout: `app/` package served by `uvicorn app.main:app`.
use std::process::ExitCode;

use create_fastapi_app::layout::CLASSIC;

fn main() -> anyhow::Result<ExitCode> {
    create_fastapi_app::run(&CLASSIC)
}
