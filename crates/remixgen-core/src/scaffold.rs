//! Scaffold planning and materialization.
//!
//! Planning is pure: [`sample_intents`] decides *what* to write as a list
//! of [`FileWriteIntent`]s. [`materialize`] performs the writes later,
//! resolving copy sources against a template root. Sample file contents
//! are opaque; they are copied verbatim, never templated.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::SynthError;
use crate::options::RemixProjectOptions;

/// A single declared write into the generated project tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum FileWriteIntent {
    /// Write a text file with the given lines.
    Text {
        /// Destination, relative to the project root.
        path: PathBuf,
        /// File content, one entry per line.
        lines: Vec<String>,
    },
    /// Copy a single template file verbatim.
    CopyFile {
        /// Source, relative to the template root.
        source: PathBuf,
        /// Destination, relative to the project root.
        dest: PathBuf,
    },
    /// Copy a template directory recursively, verbatim.
    CopyDir {
        /// Source, relative to the template root.
        source: PathBuf,
        /// Destination, relative to the project root.
        dest: PathBuf,
    },
}

/// Plan the sample scaffold for a project.
///
/// Emits the Remix app directory, the top-level `remix.config.js`, and
/// (only when Tailwind is enabled) the styles directory. Destinations
/// honor the configured remix directory.
pub fn sample_intents(options: &RemixProjectOptions) -> Vec<FileWriteIntent> {
    let remix_dir = options.remix_dir();

    let mut intents = vec![
        FileWriteIntent::CopyDir {
            source: PathBuf::from("remix"),
            dest: PathBuf::from(remix_dir),
        },
        FileWriteIntent::CopyFile {
            source: PathBuf::from("remix.config.js"),
            dest: PathBuf::from("remix.config.js"),
        },
    ];

    if options.tailwind() {
        intents.push(FileWriteIntent::CopyDir {
            source: PathBuf::from("styles"),
            dest: PathBuf::from(format!("{remix_dir}/styles")),
        });
    }

    intents
}

/// Realize file intents against a project root.
///
/// Text intents carry their content inline; copy intents resolve their
/// source against `template_root`, which must be provided when any copy
/// intent is present. Existing files are overwritten.
///
/// # Errors
///
/// Returns `SynthError::MissingTemplateRoot` if a copy intent is given
/// without a template root.
/// Returns `SynthError::Io` if a write or copy fails.
#[instrument(skip(intents))]
pub fn materialize(
    project_root: &Path,
    template_root: Option<&Path>,
    intents: &[FileWriteIntent],
) -> Result<(), SynthError> {
    for intent in intents {
        match intent {
            FileWriteIntent::Text { path, lines } => {
                let dest = project_root.join(path);
                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                let mut content = lines.join("\n");
                content.push('\n');
                fs::write(&dest, content)?;
                debug!(path = %dest.display(), "wrote text file");
            }
            FileWriteIntent::CopyFile { source, dest } => {
                let root = template_root.ok_or(SynthError::MissingTemplateRoot)?;
                let target = project_root.join(dest);
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(root.join(source), &target)?;
                debug!(path = %target.display(), "copied template file");
            }
            FileWriteIntent::CopyDir { source, dest } => {
                let root = template_root.ok_or(SynthError::MissingTemplateRoot)?;
                let target = project_root.join(dest);
                copy_dir_recursive(&root.join(source), &target)?;
                debug!(path = %target.display(), "copied template directory");
            }
        }
    }
    Ok(())
}

/// Append ignore patterns to the project `.gitignore`, one per line.
///
/// Creates the file if missing. A pattern already present as an exact
/// line is skipped, so re-running synthesis does not duplicate entries.
///
/// # Errors
///
/// Returns `SynthError::Io` if the file cannot be read or written.
pub fn append_gitignore(project_root: &Path, patterns: &[String]) -> Result<(), SynthError> {
    let gitignore_path = project_root.join(".gitignore");

    let mut content = if gitignore_path.exists() {
        fs::read_to_string(&gitignore_path)?
    } else {
        String::new()
    };

    for pattern in patterns {
        let already_present = content.lines().any(|line| line.trim() == pattern);
        if already_present {
            continue;
        }
        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(pattern);
        content.push('\n');
    }

    fs::write(&gitignore_path, content)?;
    Ok(())
}

/// Recursively copy a directory tree, overwriting existing files.
fn copy_dir_recursive(source: &Path, dest: &Path) -> Result<(), SynthError> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.path().is_dir() {
            copy_dir_recursive(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::BaseAppOptions;

    fn options(tailwind: bool, remix_dir: Option<&str>) -> RemixProjectOptions {
        let base = BaseAppOptions::builder()
            .name("hello")
            .cdk_version("2.51.1")
            .build();
        match remix_dir {
            Some(dir) => RemixProjectOptions::builder()
                .base(base)
                .tailwind(tailwind)
                .remix_dir(dir)
                .build(),
            None => RemixProjectOptions::builder()
                .base(base)
                .tailwind(tailwind)
                .build(),
        }
    }

    #[test]
    fn test_should_plan_full_sample_scaffold_with_tailwind() {
        let intents = sample_intents(&options(true, None));

        assert_eq!(
            intents,
            vec![
                FileWriteIntent::CopyDir {
                    source: PathBuf::from("remix"),
                    dest: PathBuf::from("remix"),
                },
                FileWriteIntent::CopyFile {
                    source: PathBuf::from("remix.config.js"),
                    dest: PathBuf::from("remix.config.js"),
                },
                FileWriteIntent::CopyDir {
                    source: PathBuf::from("styles"),
                    dest: PathBuf::from("remix/styles"),
                },
            ]
        );
    }

    #[test]
    fn test_should_omit_styles_scaffold_without_tailwind() {
        let intents = sample_intents(&options(false, None));
        assert_eq!(intents.len(), 2);
        assert!(
            !intents
                .iter()
                .any(|i| matches!(i, FileWriteIntent::CopyDir { source, .. } if source == &PathBuf::from("styles"))),
            "styles directory should not be planned"
        );
    }

    #[test]
    fn test_should_honor_remix_dir_in_destinations_only() {
        let intents = sample_intents(&options(true, Some("web")));

        assert_eq!(
            intents[0],
            FileWriteIntent::CopyDir {
                source: PathBuf::from("remix"),
                dest: PathBuf::from("web"),
            }
        );
        assert_eq!(
            intents[2],
            FileWriteIntent::CopyDir {
                source: PathBuf::from("styles"),
                dest: PathBuf::from("web/styles"),
            }
        );
    }

    #[test]
    fn test_should_materialize_text_intent_with_trailing_newline() {
        let dir = tempfile::TempDir::new().expect("should create temp dir");
        let intents = vec![FileWriteIntent::Text {
            path: PathBuf::from(".nvmrc"),
            lines: vec!["16".to_owned()],
        }];

        materialize(dir.path(), None, &intents).expect("should materialize");

        let content =
            std::fs::read_to_string(dir.path().join(".nvmrc")).expect("should read marker");
        assert_eq!(content, "16\n");
    }

    #[test]
    fn test_should_materialize_copies_from_template_root() {
        let templates = tempfile::TempDir::new().expect("should create template dir");
        let project = tempfile::TempDir::new().expect("should create project dir");

        std::fs::create_dir_all(templates.path().join("remix/app"))
            .expect("should create template tree");
        std::fs::write(
            templates.path().join("remix/app/root.tsx"),
            "export default {}",
        )
        .expect("should write template file");
        std::fs::write(templates.path().join("remix.config.js"), "module.exports = {}")
            .expect("should write template file");

        let intents = vec![
            FileWriteIntent::CopyDir {
                source: PathBuf::from("remix"),
                dest: PathBuf::from("remix"),
            },
            FileWriteIntent::CopyFile {
                source: PathBuf::from("remix.config.js"),
                dest: PathBuf::from("remix.config.js"),
            },
        ];

        materialize(project.path(), Some(templates.path()), &intents)
            .expect("should materialize");

        let copied = std::fs::read_to_string(project.path().join("remix/app/root.tsx"))
            .expect("should read copied file");
        assert_eq!(copied, "export default {}");
        assert!(project.path().join("remix.config.js").exists());
    }

    #[test]
    fn test_should_fail_copy_without_template_root() {
        let project = tempfile::TempDir::new().expect("should create project dir");
        let intents = vec![FileWriteIntent::CopyFile {
            source: PathBuf::from("remix.config.js"),
            dest: PathBuf::from("remix.config.js"),
        }];

        let result = materialize(project.path(), None, &intents);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            SynthError::MissingTemplateRoot
        ));
    }

    #[test]
    fn test_should_create_gitignore_when_missing() {
        let dir = tempfile::TempDir::new().expect("should create temp dir");
        append_gitignore(dir.path(), &["/remix/.cache".to_owned(), ".env".to_owned()])
            .expect("should append");

        let content =
            std::fs::read_to_string(dir.path().join(".gitignore")).expect("should read gitignore");
        assert_eq!(content, "/remix/.cache\n.env\n");
    }

    #[test]
    fn test_should_append_after_existing_content() {
        let dir = tempfile::TempDir::new().expect("should create temp dir");
        // No trailing newline on purpose.
        std::fs::write(dir.path().join(".gitignore"), "node_modules").expect("should write");

        append_gitignore(dir.path(), &[".env".to_owned()]).expect("should append");

        let content =
            std::fs::read_to_string(dir.path().join(".gitignore")).expect("should read gitignore");
        assert_eq!(content, "node_modules\n.env\n");
    }

    #[test]
    fn test_should_not_duplicate_existing_patterns() {
        let dir = tempfile::TempDir::new().expect("should create temp dir");
        std::fs::write(dir.path().join(".gitignore"), ".env\n").expect("should write");

        append_gitignore(dir.path(), &[".env".to_owned(), "cdk-outputs.json".to_owned()])
            .expect("should append");
        // Re-run with the same patterns; nothing should change.
        append_gitignore(dir.path(), &[".env".to_owned(), "cdk-outputs.json".to_owned()])
            .expect("should append again");

        let content =
            std::fs::read_to_string(dir.path().join(".gitignore")).expect("should read gitignore");
        assert_eq!(content, ".env\ncdk-outputs.json\n");
    }

    #[test]
    fn test_should_serialize_intents_with_kind_tag() {
        let intent = FileWriteIntent::Text {
            path: PathBuf::from(".nvmrc"),
            lines: vec!["16".to_owned()],
        };
        let value = serde_json::to_value(&intent).expect("should serialize");
        assert_eq!(value["kind"], "text");
        assert_eq!(value["lines"][0], "16");

        let copy = FileWriteIntent::CopyDir {
            source: PathBuf::from("styles"),
            dest: PathBuf::from("remix/styles"),
        };
        let value = serde_json::to_value(&copy).expect("should serialize");
        assert_eq!(value["kind"], "copyDir");
    }
}
