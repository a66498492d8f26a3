use super::render;

const COMPONENT: &str = r#"import React from 'react'

export default function {{name}}() {
	return (
		<></>
	)
}
"#;

/// Empty functional component exported as `name`.
pub fn component(name: &str) -> String {
    render(COMPONENT, &[("name", name)])
}

/// Landing page written over `src/pages/index.tsx`.
pub fn home_page() -> String {
    component("Home")
}
