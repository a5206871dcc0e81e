use anyhow::Result;
use liquid::{Parser, ParserBuilder};
use liquid_core::{Object, Value};

use crate::layout::{FileKind, TemplateFile};

pub fn create_liquid_engine() -> Result<Parser> {
    Ok(ParserBuilder::with_stdlib().build()?)
}

/// create liquid object for the template, filled with the project name
pub fn create_liquid_object(project_name: &str) -> Object {
    let mut liquid_object = Object::new();
    liquid_object.insert(
        "project_name".into(),
        Value::Scalar(project_name.to_owned().into()),
    );
    liquid_object
}

/// Final on-disk content of a manifest entry.
pub fn file_content(file: &TemplateFile, parser: &Parser, context: &Object) -> Result<String> {
    match file.kind {
        FileKind::Verbatim => Ok(file.content.to_owned()),
        FileKind::Rendered => render_string(context, parser, file.content),
    }
}

pub fn render_string(context: &Object, parser: &Parser, content: &str) -> Result<String> {
    let template = parser.parse(content)?;
    Ok(template.render(context)?)
}
