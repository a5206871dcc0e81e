//! Static project layouts: which folders exist, which of them are Python
//! packages, and which files get written where.

use crate::templates::*;

/// Empty file that turns a folder into a Python package.
pub const PACKAGE_MARKER: &str = "__init__.py";

/// How a manifest entry becomes file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Written byte for byte.
    Verbatim,
    /// Rendered with the liquid engine, `project_name` is the only variable.
    Rendered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: &'static str,
    pub content: &'static str,
    pub kind: FileKind,
}

/// Which generated folders receive a [`PACKAGE_MARKER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRule {
    /// Folders whose relative path starts with the prefix.
    Prefix(&'static str),
    /// Every folder except the project root and the listed ones.
    AllExcept(&'static [&'static str]),
}

#[derive(Debug)]
pub struct Layout {
    /// Binary that generates this layout, used in the usage line.
    pub command: &'static str,
    /// Relative folders, parents before children. `""` is the project root.
    pub folders: &'static [&'static str],
    pub markers: MarkerRule,
    /// Written in this order after all folders exist.
    pub files: &'static [TemplateFile],
    /// Last line of the getting started hint.
    pub run_command: &'static str,
}

impl Layout {
    pub fn needs_marker(&self, folder: &str) -> bool {
        match self.markers {
            MarkerRule::Prefix(prefix) => folder.starts_with(prefix),
            MarkerRule::AllExcept(excluded) => !folder.is_empty() && !excluded.contains(&folder),
        }
    }
}

const fn verbatim(path: &'static str, content: &'static str) -> TemplateFile {
    TemplateFile {
        path,
        content,
        kind: FileKind::Verbatim,
    }
}

const fn rendered(path: &'static str, content: &'static str) -> TemplateFile {
    TemplateFile {
        path,
        content,
        kind: FileKind::Rendered,
    }
}

/// `app/` package with `tests/` next to it, served by `uvicorn app.main:app`.
pub static CLASSIC: Layout = Layout {
    command: "create-fastapi-app",
    folders: &[
        "",
        "app",
        "app/api",
        "app/api/endpoints",
        "app/core",
        "app/db",
        "app/models",
        "app/schemas",
        "app/utils",
        "tests",
    ],
    markers: MarkerRule::Prefix("app"),
    files: &[
        verbatim("app/main.py", CLASSIC_MAIN_PY),
        verbatim("app/api/api.py", CLASSIC_API_PY),
        verbatim("app/core/config.py", CLASSIC_CONFIG_PY),
        verbatim("app/db/session.py", CLASSIC_DB_SESSION_PY),
        verbatim(".env", CLASSIC_ENV),
        verbatim("requirements.txt", CLASSIC_REQUIREMENTS_TXT),
        rendered("README.md", CLASSIC_README_MD),
    ],
    run_command: "uvicorn app.main:app --reload",
};

/// `src/` tree split into controllers, services, routes and config, started
/// through a top level `main.py`.
pub static SRC_BASED: Layout = Layout {
    command: "create-fastapi-app-src",
    folders: &[
        "",
        "src",
        "src/app",
        "src/app/controllers",
        "src/app/middleware",
        "src/app/models",
        "src/app/schemas",
        "src/app/services",
        "src/config",
        "src/database",
        "src/database/factories",
        "src/database/migrations",
        "src/public",
        "src/routes",
        "src/routes/api",
        "src/scripts",
        "test",
    ],
    markers: MarkerRule::AllExcept(&["test"]),
    files: &[
        verbatim("main.py", SRC_MAIN_PY),
        verbatim("src/routes/api/v1.py", SRC_API_V1_PY),
        verbatim("src/config/env.py", SRC_CONFIG_PY),
        verbatim("src/config/security.py", SRC_CONFIG_PY),
        verbatim("src/database/session.py", SRC_DB_SESSION_PY),
        verbatim("src/app/services/base_service.py", SRC_BASE_SERVICE_PY),
        verbatim("src/app/controllers/base_controller.py", SRC_BASE_CONTROLLER_PY),
        verbatim(".env", SRC_ENV),
        verbatim(".gitignore", SRC_GITIGNORE),
        verbatim("requirements.txt", SRC_REQUIREMENTS_TXT),
        rendered("README.md", SRC_README_MD),
    ],
    run_command: "python main.py",
};
