pub const TAILWIND_GLOBALS: &str = "@tailwind base;
@tailwind components;
@tailwind utilities;
";

pub const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
	content: [
		"./src/**/*.{js,ts,jsx,tsx,mdx}"
	],
	theme: {
		extend: {},
	},
	plugins: [],
}
"#;

pub const PLAIN_GLOBALS: &str = "";
