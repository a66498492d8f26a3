//! Fixed locations inside a Next.js project, relative to the project root.

pub const PACKAGE_JSON: &str = "package.json";
pub const TAILWIND_CONFIG: &str = "tailwind.config.ts";

/// Starter assets removed by `nextkit start`.
pub const PUBLIC_DEFAULT_ASSETS: &[&str] = &["public/next.svg", "public/vercel.svg"];
pub const PUBLIC_FOLDERS: &[&str] = &["public/fonts", "public/img"];

pub const GLOBALS_CSS: &str = "src/styles/globals.css";
pub const HOME_MODULE_CSS: &str = "src/styles/Home.module.css";
pub const PAGES_INDEX: &str = "src/pages/index.tsx";

pub const SRC_DIR: &str = "src";

/// Standard folders created under `src/`.
pub const SRC_FOLDERS: &[&str] = &[
    "components",
    "containers",
    "configs",
    "hooks",
    "locale",
    "reducers",
    "store",
    "services",
    "svg",
    "types",
    "utils",
];
