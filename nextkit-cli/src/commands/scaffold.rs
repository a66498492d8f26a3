use colored::Colorize;
use std::path::{Path, PathBuf};

use super::templates::{self, TemplateKind};
use crate::error::ScaffoldError;
use crate::fs_ops::{self, StepLog};
use crate::layout;

/// Which `src/` folder a scaffold lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldKind {
    Component,
    Container,
}

impl ScaffoldKind {
    /// Singular noun used in messages.
    pub fn label(self) -> &'static str {
        match self {
            ScaffoldKind::Component => "component",
            ScaffoldKind::Container => "container",
        }
    }

    /// Parent folder under `src/`.
    pub fn folder(self) -> &'static str {
        match self {
            ScaffoldKind::Component => "components",
            ScaffoldKind::Container => "containers",
        }
    }
}

/// Options for `nextkit component` and `nextkit container`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    pub kind: ScaffoldKind,
    /// Positional name as typed; `None` if it was not given.
    pub name: Option<String>,
    /// Emit `.jsx` instead of `.tsx`.
    pub js: bool,
}

impl ScaffoldOptions {
    pub fn extension(&self) -> &'static str {
        if self.js { "jsx" } else { "tsx" }
    }
}

/// Paths a scaffold writes, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldTarget {
    pub name: String,
    pub dir: PathBuf,
    pub file: PathBuf,
}

impl ScaffoldTarget {
    /// Capitalize the name and place it under `src/<kind>s/<Name>/`.
    ///
    /// Fails with [`ScaffoldError::MissingArgument`] for a missing or empty name.
    pub fn resolve(opts: &ScaffoldOptions) -> Result<Self, ScaffoldError> {
        let raw = opts
            .name
            .as_deref()
            .filter(|n| !n.is_empty())
            .ok_or(ScaffoldError::MissingArgument(opts.kind.label()))?;
        let name = templates::capitalize(raw);
        let dir = Path::new(layout::SRC_DIR)
            .join(opts.kind.folder())
            .join(&name);
        let file = dir.join(format!("{name}.{}", opts.extension()));
        Ok(Self { name, dir, file })
    }
}

/// Create `src/<kind>s/<Name>/<Name>.tsx` (or `.jsx`) holding an empty
/// functional component.
///
/// The name is validated before anything touches the filesystem. After that,
/// a failed directory creation is printed and the file step is still tried.
pub fn run(opts: &ScaffoldOptions) -> Result<StepLog, ScaffoldError> {
    let target = ScaffoldTarget::resolve(opts)?;
    let mut log = StepLog::new();

    log.record(fs_ops::create_directory(&target.dir));
    let created = log.record(fs_ops::create_file(
        &target.file,
        &templates::render_kind(TemplateKind::ReactComponent, &target.name),
    ));

    if created {
        println!(
            "{} Generated {}: {}",
            "✓".green(),
            opts.kind.label(),
            target.file.display().to_string().cyan()
        );
    }
    println!("done");

    Ok(log)
}
