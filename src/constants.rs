//! Global constants used throughout the Harukit codebase.
//!
//! File names, environment variable names, and the base dependency set are
//! defined centrally so the detection heuristics and the init flow stay in
//! sync with the tests that exercise them.

/// Name of the per-project configuration file written at the project root.
pub const CONFIG_FILE_NAME: &str = "harukit.json";

/// Schema marker written into newly created configuration files.
pub const CONFIG_SCHEMA_URL: &str = "https://harukit.dev/schema.json";

/// Lock files scanned when inferring the active package manager, in
/// detection priority order. Bun ships two lockfile formats (binary and
/// text), both map to the same manager.
pub const BUN_LOCK_FILES: [&str; 2] = ["bun.lockb", "bun.lock"];
/// pnpm lock file name.
pub const PNPM_LOCK_FILE: &str = "pnpm-lock.yaml";
/// Yarn lock file name.
pub const YARN_LOCK_FILE: &str = "yarn.lock";
/// npm lock file name.
pub const NPM_LOCK_FILE: &str = "package-lock.json";

/// Environment variable holding the path of the package-manager executable
/// that launched the current process (`npx`, `yarn dlx`, `pnpm dlx`, `bunx`
/// all set it).
pub const ENV_EXEC_PATH: &str = "npm_execpath";

/// Environment variable carrying the invoking package manager's user agent
/// string (e.g. `pnpm/9.1.0 npm/? node/v20.11.0 linux x64`).
pub const ENV_USER_AGENT: &str = "npm_config_user_agent";

/// Set to any value to disable spinners and progress output.
pub const ENV_NO_PROGRESS: &str = "HARUKIT_NO_PROGRESS";

/// Packages installed into every project by `harukit init`.
pub const BASE_DEPENDENCIES: [&str; 4] =
    ["clsx", "tailwind-merge", "class-variance-authority", "lucide-react"];

/// Extra package installed by `init` when the project uses TypeScript.
pub const TYPESCRIPT_EXTRA_DEPENDENCY: &str = "@types/node";
