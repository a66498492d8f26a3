//! Command implementations for the `nextkit` CLI.
//!
//! Each submodule corresponds to a top-level CLI command.

/// Component and container scaffolding - `nextkit component <name>` and
/// `nextkit container <name>`.
///
/// Both create `src/<kind>s/<Name>/<Name>.tsx` with an empty component; they
/// differ only in the parent folder.
pub mod scaffold;

/// Project cleanup - `nextkit start`.
///
/// Removes the Next.js starter assets, rewrites the style files for a
/// tailwind or plain CSS setup, blanks the landing page and creates the
/// standard `src/` folders.
pub mod start;

/// Boilerplate text for components, pages, style sheets and tailwind config.
pub mod templates;

/// `nextkit version`.
pub mod version;
