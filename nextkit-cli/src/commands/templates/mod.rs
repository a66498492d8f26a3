pub mod react;
pub mod styles;

/// Boilerplate files that nextkit knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    ReactComponent,
    TailwindGlobals,
    TailwindConfig,
    PlainGlobals,
    HomePage,
}

/// Produce the text for `kind`. Only [`TemplateKind::ReactComponent`] uses
/// `name`; the other kinds are fixed.
pub fn render_kind(kind: TemplateKind, name: &str) -> String {
    match kind {
        TemplateKind::ReactComponent => react::component(name),
        TemplateKind::TailwindGlobals => styles::TAILWIND_GLOBALS.to_string(),
        TemplateKind::TailwindConfig => styles::TAILWIND_CONFIG.to_string(),
        TemplateKind::PlainGlobals => styles::PLAIN_GLOBALS.to_string(),
        TemplateKind::HomePage => react::home_page(),
    }
}

/// Simple template rendering: replaces {{key}} with value.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut output = template.to_string();
    for (key, value) in vars {
        output = output.replace(&format!("{{{{{}}}}}", key), value);
    }
    output
}

/// Uppercase the first character and leave the rest unchanged.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
