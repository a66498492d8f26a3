use colored::Colorize;
use std::path::Path;

use super::templates::{self, TemplateKind};
use crate::fs_ops::{self, StepLog};
use crate::layout;
use crate::package;

/// Options for `nextkit start`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartOptions {
    /// The project has tailwind installed.
    pub tailwind: bool,
}

/// Clean the starter assets of a fresh Next.js project and lay out the
/// standard folder structure.
///
/// Steps, in order:
/// 1. Print the app name and version from `package.json` (warning if unavailable)
/// 2. Delete `public/next.svg` and `public/vercel.svg`
/// 3. Create `public/fonts/` and `public/img/`
/// 4. With tailwind: write tailwind directives to `globals.css` and write
///    `tailwind.config.ts`. Without: delete `Home.module.css` and blank
///    `globals.css`
/// 5. Overwrite `src/pages/index.tsx` with an empty `Home` component
/// 6. Create the standard folders under `src/`
///
/// A failing step is printed and skipped; every later step still runs. The
/// returned log holds whatever failed.
pub fn run(opts: &StartOptions) -> StepLog {
    let mut log = StepLog::new();

    print_package_info();
    clean_public_folder(&mut log);
    if opts.tailwind {
        clean_src_folder_tailwind(&mut log);
    } else {
        clean_src_folder_plain(&mut log);
    }
    log.record(fs_ops::write_file(
        Path::new(layout::PAGES_INDEX),
        &templates::render_kind(TemplateKind::HomePage, ""),
    ));
    create_src_folders(&mut log);

    println!();
    if log.is_clean() {
        println!("{} {}", "✓".green(), "Project structure ready.".green().bold());
    } else {
        println!(
            "{}",
            format!("Finished with {} error(s).", log.error_count())
                .yellow()
                .bold()
        );
    }

    log
}

fn print_package_info() {
    match package::read(Path::new(layout::PACKAGE_JSON)) {
        Ok(meta) => println!(
            "{} Next.js app found: {} v{}",
            "->".blue(),
            meta.name.green(),
            meta.version
        ),
        Err(err) => {
            tracing::debug!(error = %err, "package metadata unavailable");
            eprintln!("{} {}", "!".yellow(), err.to_string().yellow());
        }
    }
}

fn clean_public_folder(log: &mut StepLog) {
    println!("Cleaning public folder ...");
    for asset in layout::PUBLIC_DEFAULT_ASSETS {
        log.record(fs_ops::remove_entry(Path::new(asset)));
    }
    for folder in layout::PUBLIC_FOLDERS {
        log.record(fs_ops::create_directory(Path::new(folder)));
    }
}

fn clean_src_folder_tailwind(log: &mut StepLog) {
    println!("Cleaning src folder ...");
    log.record(fs_ops::write_file(
        Path::new(layout::GLOBALS_CSS),
        &templates::render_kind(TemplateKind::TailwindGlobals, ""),
    ));
    log.record(fs_ops::write_file(
        Path::new(layout::TAILWIND_CONFIG),
        &templates::render_kind(TemplateKind::TailwindConfig, ""),
    ));
}

fn clean_src_folder_plain(log: &mut StepLog) {
    println!("Cleaning src folder ...");
    log.record(fs_ops::remove_entry(Path::new(layout::HOME_MODULE_CSS)));
    log.record(fs_ops::write_file(
        Path::new(layout::GLOBALS_CSS),
        &templates::render_kind(TemplateKind::PlainGlobals, ""),
    ));
}

fn create_src_folders(log: &mut StepLog) {
    println!("Creating necessary files and folders...");
    for folder in layout::SRC_FOLDERS {
        log.record(fs_ops::create_directory(
            &Path::new(layout::SRC_DIR).join(folder),
        ));
    }
}
