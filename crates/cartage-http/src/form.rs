//! Multipart form parts

use std::path::PathBuf;

/// One named field of a multipart/form-data body.
///
/// A request's parts are sent in the order given; servers may depend on
/// field order.
#[derive(Debug, Clone)]
pub struct FormPart {
    /// Field name. Must be non-empty.
    pub name: String,
    /// Field contents.
    pub contents: FormContents,
}

/// Contents of a form part: either a literal value or a local file reference.
#[derive(Debug, Clone)]
pub enum FormContents {
    /// Literal value, attached as in-memory data.
    Text(String),
    /// Local file, attached as a file-backed part. When no content type is
    /// declared the engine's default detection applies.
    File {
        path: PathBuf,
        content_type: Option<String>,
    },
}

impl FormPart {
    /// A text field with a literal value.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: FormContents::Text(value.into()),
        }
    }

    /// A file field read from a local path.
    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            contents: FormContents::File {
                path: path.into(),
                content_type: None,
            },
        }
    }

    /// A file field with an explicitly declared content type.
    pub fn file_with_content_type(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            contents: FormContents::File {
                path: path.into(),
                content_type: Some(content_type.into()),
            },
        }
    }
}
