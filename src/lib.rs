//! Generators for FastAPI project skeletons.
//!
//! Each binary owns one static [`layout::Layout`] and hands it to [`run`].

mod app_log;
mod args;
mod error;
mod interactive;
pub mod layout;
mod project_dir;
mod scaffold;
mod template;
mod templates;
mod user_parsed_input;
mod utils;

use std::process::ExitCode;

use anyhow::Result;
use log::info;

pub use args::AppArgs;
pub use error::ScaffoldError;
pub use layout::Layout;
pub use scaffold::generate;
pub use user_parsed_input::UserParsedInput;

/// Entry point shared by the binaries: parse the command line, generate
/// `layout` and turn the two recognized refusals into exit code 1.
pub fn run(layout: &Layout) -> Result<ExitCode> {
    let args = args::resolve_args(layout.command);
    app_log::log_env_init(args.verbose);

    let outcome = UserParsedInput::try_from_args(&args, layout.command)
        .and_then(|user_parsed_input| generate(layout, &user_parsed_input));
    match outcome {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.downcast_ref::<ScaffoldError>() {
            Some(handled) => {
                info!("{handled}");
                Ok(ExitCode::FAILURE)
            }
            None => Err(err),
        },
    }
}
