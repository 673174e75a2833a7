//! The seeded component table.
//!
//! Component content lives under `templates/`; each entry here names its
//! template files and the npm packages the component needs in the consuming
//! project.

use crate::registry::{ComponentFile, ComponentMeta, FileKind};

const AUTHOR: &str = "Harukit Team";
const LICENSE: &str = "MIT";
const REPOSITORY: &str = "https://github.com/harukit/harukit";

/// All installable components, in catalog order.
pub static COMPONENTS: &[ComponentMeta] = &[
    ComponentMeta {
        name: "accordion",
        description: "Collapsible content sections",
        version: "0.1.0",
        category: "Layout",
        tags: &["layout", "collapsible", "accessible"],
        dependencies: &["@radix-ui/react-accordion"],
        dev_dependencies: &[],
        files: &[ComponentFile {
            name: "accordion.tsx",
            path: "components/accordion.tsx",
            kind: FileKind::Component,
        }],
        author: AUTHOR,
        license: LICENSE,
        repository: Some(REPOSITORY),
        documentation: Some("https://harukit.dev/docs/components/accordion"),
    },
    ComponentMeta {
        name: "button",
        description: "Versatile button with multiple variants",
        version: "0.1.0",
        category: "Form",
        tags: &["form", "interactive", "accessible"],
        dependencies: &["@radix-ui/react-slot", "class-variance-authority"],
        dev_dependencies: &[],
        files: &[ComponentFile {
            name: "button.tsx",
            path: "components/button.tsx",
            kind: FileKind::Component,
        }],
        author: AUTHOR,
        license: LICENSE,
        repository: Some(REPOSITORY),
        documentation: Some("https://harukit.dev/docs/components/button"),
    },
    ComponentMeta {
        name: "card",
        description: "Container for content with header, content, and footer",
        version: "0.1.0",
        category: "Layout",
        tags: &["layout", "container", "content"],
        dependencies: &[],
        dev_dependencies: &[],
        files: &[ComponentFile {
            name: "card.tsx",
            path: "components/card.tsx",
            kind: FileKind::Component,
        }],
        author: AUTHOR,
        license: LICENSE,
        repository: Some(REPOSITORY),
        documentation: Some("https://harukit.dev/docs/components/card"),
    },
    ComponentMeta {
        name: "input",
        description: "Form input field",
        version: "0.1.0",
        category: "Form",
        tags: &["form", "input", "accessible"],
        dependencies: &[],
        dev_dependencies: &[],
        files: &[ComponentFile {
            name: "input.tsx",
            path: "components/input.tsx",
            kind: FileKind::Component,
        }],
        author: AUTHOR,
        license: LICENSE,
        repository: Some(REPOSITORY),
        documentation: Some("https://harukit.dev/docs/components/input"),
    },
    ComponentMeta {
        name: "label",
        description: "Form label with accessibility features",
        version: "0.1.0",
        category: "Form",
        tags: &["form", "label", "accessible"],
        dependencies: &["@radix-ui/react-label"],
        dev_dependencies: &[],
        files: &[ComponentFile {
            name: "label.tsx",
            path: "components/label.tsx",
            kind: FileKind::Component,
        }],
        author: AUTHOR,
        license: LICENSE,
        repository: Some(REPOSITORY),
        documentation: Some("https://harukit.dev/docs/components/label"),
    },
    ComponentMeta {
        name: "tooltip",
        description: "Hover tooltips",
        version: "0.1.0",
        category: "Feedback",
        tags: &["feedback", "tooltip", "accessible"],
        dependencies: &["@radix-ui/react-tooltip"],
        dev_dependencies: &[],
        files: &[ComponentFile {
            name: "tooltip.tsx",
            path: "components/tooltip.tsx",
            kind: FileKind::Component,
        }],
        author: AUTHOR,
        license: LICENSE,
        repository: Some(REPOSITORY),
        documentation: Some("https://harukit.dev/docs/components/tooltip"),
    },
];
