//! Content transforms applied to template files at install time.
//!
//! The pipeline runs in a fixed order:
//! 1. import-alias substitution
//! 2. TypeScript strip (only for JavaScript projects)
//! 3. New York style class substitution (only for the `new-york` variant)
//!
//! The TypeScript strip is a textual, pattern-based pass, not a parser: it
//! removes type-only imports and annotation-shaped text, and can
//! mis-transform code containing the matched patterns in non-type
//! contexts. This is a documented limitation carried over from the shipped
//! behavior.
//!
//! The New York substitutions are likewise applied *sequentially*, so
//! earlier outputs feed later rules: `rounded-md` becomes `rounded-lg` and
//! is then promoted again to `rounded-xl` by the following rule. Consumers
//! relying on the exact output should treat the table as a cascade, not a
//! parallel map.

use anyhow::Result;
use regex::Regex;

use crate::config::{ProjectConfig, Style};

/// Ordered New York substitutions. Applied top to bottom over the whole
/// content; order is load-bearing (see module docs).
const NEW_YORK_SUBSTITUTIONS: [(&str, &str); 4] = [
    ("rounded-md", "rounded-lg"),
    ("rounded-lg", "rounded-xl"),
    ("text-sm", "text-base"),
    ("text-base", "text-lg"),
];

/// Run the full transform pipeline for the given project configuration.
pub fn transform_content(content: &str, config: &ProjectConfig) -> Result<String> {
    let mut transformed = apply_aliases(content, config);

    if !config.typescript {
        transformed = strip_typescript(&transformed)?;
    }

    if config.style == Style::NewYork {
        transformed = apply_new_york_style(&transformed);
    }

    Ok(transformed)
}

/// Replace the template's canonical alias placeholders with the project's
/// configured aliases.
pub fn apply_aliases(content: &str, config: &ProjectConfig) -> String {
    content
        .replace("@/lib/utils", &config.aliases.utils)
        .replace("@/components", &config.aliases.components)
}

/// Best-effort TypeScript-to-JavaScript strip.
pub fn strip_typescript(content: &str) -> Result<String> {
    let type_import = Regex::new(r#"import type \{[^}]+\} from ['"][^'"]+['"];?\n?"#)?;
    let annotation = Regex::new(r": ([A-Z][a-zA-Z]*)(<[^>]*>)?")?;
    let generic_params = Regex::new(r"<([A-Z][a-zA-Z]*)<[^>]*>>")?;
    let react_fc = Regex::new(r"React\.FC<[^>]*>")?;
    let props_without_ref = Regex::new(r"React\.ComponentPropsWithoutRef<[^>]*>")?;
    let extension = Regex::new(r"\.tsx?$")?;

    let mut result = content.to_string();
    result = type_import.replace_all(&result, "").into_owned();
    result = annotation.replace_all(&result, "").into_owned();
    result = generic_params.replace_all(&result, "<$1>").into_owned();
    result = react_fc.replace_all(&result, "React.FC").into_owned();
    result = props_without_ref.replace_all(&result, "any").into_owned();
    result = extension.replace_all(&result, ".js").into_owned();

    Ok(result)
}

/// Apply the New York class substitutions sequentially.
pub fn apply_new_york_style(content: &str) -> String {
    let mut result = content.to_string();
    for (from, to) in NEW_YORK_SUBSTITUTIONS {
        result = result.replace(from, to);
    }
    result
}
