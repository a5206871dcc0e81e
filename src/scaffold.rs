use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use log::{debug, info};

use crate::interactive;
use crate::layout::{Layout, PACKAGE_MARKER};
use crate::project_dir::ProjectDir;
use crate::template::{create_liquid_engine, create_liquid_object, file_content};
use crate::user_parsed_input::UserParsedInput;

/// Generate `layout` for `user_parsed_input` and return the project directory.
///
/// Prompts before replacing an existing directory unless overwriting was
/// requested. A failure halfway leaves the partial tree on disk.
pub fn generate(layout: &Layout, user_parsed_input: &UserParsedInput) -> Result<PathBuf> {
    let project_name = user_parsed_input.name();
    let project_dir = ProjectDir::new(user_parsed_input.destination(), project_name);
    project_dir.prepare(user_parsed_input.overwrite(), || {
        interactive::overwrite(project_name)
    })?;
    debug!(
        "🔧 {}",
        style(format!("Destination: {project_dir} ...")).bold().yellow()
    );

    build_folders(layout, project_dir.as_ref())?;
    emit_files(layout, project_dir.as_ref(), project_name)?;
    report(layout, project_name);

    Ok(project_dir.as_ref().to_owned())
}

/// Create every layout folder, dropping a package marker where the layout asks for one.
pub fn build_folders(layout: &Layout, root: &Path) -> Result<()> {
    for folder in layout.folders {
        let folder_path = root.join(folder);
        fs::create_dir_all(&folder_path)
            .with_context(|| format!("cannot create directory {}", folder_path.display()))?;
        if layout.needs_marker(folder) {
            create_file(&folder_path.join(PACKAGE_MARKER), "")?;
        }
    }
    Ok(())
}

/// Write the layout's manifest in order; only rendered entries see `project_name`.
pub fn emit_files(layout: &Layout, root: &Path, project_name: &str) -> Result<()> {
    let parser = create_liquid_engine()?;
    let context = create_liquid_object(project_name);
    for file in layout.files {
        let content = file_content(file, &parser, &context)
            .with_context(|| format!("cannot render template {}", file.path))?;
        create_file(&root.join(file.path), &content)?;
    }
    Ok(())
}

fn create_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("cannot write {}", path.display()))?;
    info!("Created: {}", path.display());
    Ok(())
}

/// Success banner and the commands to get the generated service running.
pub fn report(layout: &Layout, project_name: &str) {
    info!("\n✅ FastAPI project created in {project_name}/");
    info!("\nTo start your app:");
    info!("  cd {project_name}");
    info!("  pip install -r requirements.txt");
    info!("  {}\n", layout.run_command);
}
