//! Template file contents

/// Single-file Vue component wrapping one icon's markup
///
/// `markup` is already trimmed and indented by two spaces.
pub const COMPONENT_VUE: &str = r"<template>
{{markup}}
</template>";

/// Nuxt module registering a package's components under its category prefix
pub const NUXT_MODULE_JS: &str = r#"import { join } from "path";

export default function () {
  const { nuxt } = this

  if (!nuxt.options.components) {
    throw new Error('please set `components: true` inside `nuxt.config` and ensure using `nuxt >= 2.13.0`')
  }

  this.nuxt.hook("components:dirs", (dirs) => {
    dirs.push({
      path: join(__dirname, "../src/components"),
      prefix: "{{category}}",
    });
  });
}
"#;

/// Barrel module re-exporting every component of a package
pub const BARREL_INDEX_JS: &str =
    "{{#each components}}export { default as {{name}} } from './components/{{file}}'\n{{/each}}";
