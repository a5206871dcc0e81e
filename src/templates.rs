//! Template texts, embedded at compile time from `templates/`.
//!
//! Files there carry a `.tmpl` suffix so the repository never holds a live
//! `.env` or `.gitignore`. Only the readmes contain liquid placeholders.

// -------------------------------------------------------
// classic layout (`app/` package)
// -------------------------------------------------------

pub const CLASSIC_MAIN_PY: &str = include_str!("../templates/classic/main.py.tmpl");
pub const CLASSIC_API_PY: &str = include_str!("../templates/classic/api.py.tmpl");
pub const CLASSIC_CONFIG_PY: &str = include_str!("../templates/classic/config.py.tmpl");
pub const CLASSIC_DB_SESSION_PY: &str = include_str!("../templates/classic/session.py.tmpl");
pub const CLASSIC_ENV: &str = include_str!("../templates/classic/env.tmpl");
pub const CLASSIC_REQUIREMENTS_TXT: &str =
    include_str!("../templates/classic/requirements.txt.tmpl");
pub const CLASSIC_README_MD: &str = include_str!("../templates/classic/README.md.tmpl");

// -------------------------------------------------------
// src-based layout (`src/` package, top level `main.py`)
// -------------------------------------------------------

pub const SRC_MAIN_PY: &str = include_str!("../templates/src_based/main.py.tmpl");
pub const SRC_API_V1_PY: &str = include_str!("../templates/src_based/v1.py.tmpl");
pub const SRC_CONFIG_PY: &str = include_str!("../templates/src_based/config.py.tmpl");
pub const SRC_DB_SESSION_PY: &str = include_str!("../templates/src_based/session.py.tmpl");
pub const SRC_BASE_SERVICE_PY: &str = include_str!("../templates/src_based/base_service.py.tmpl");
pub const SRC_BASE_CONTROLLER_PY: &str =
    include_str!("../templates/src_based/base_controller.py.tmpl");
pub const SRC_ENV: &str = include_str!("../templates/src_based/env.tmpl");
pub const SRC_GITIGNORE: &str = include_str!("../templates/src_based/gitignore.tmpl");
pub const SRC_REQUIREMENTS_TXT: &str = include_str!("../templates/src_based/requirements.txt.tmpl");
pub const SRC_README_MD: &str = include_str!("../templates/src_based/README.md.tmpl");
