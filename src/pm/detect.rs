//! Package manager detection.
//!
//! A linear priority chain of independent probes, each returning
//! `Option<PackageManager>`, short-circuited by the first hit:
//!
//! 1. the launch command of the current process (`npx`/`yarn`/`pnpm`/`bun`
//!    substrings in argv[0])
//! 2. the `npm_execpath` environment variable set by `npx`, `yarn dlx`,
//!    `pnpm dlx`, and `bunx`
//! 3. the `npm_config_user_agent` environment variable
//! 4. lock files present in the target project
//! 5. a `bun` binary probe
//! 6. default: npm
//!
//! Substring order inside the string probes matters: `pnpm` contains
//! `npm`, so the plain-npm check always comes last.

use std::path::Path;
use tracing::debug;

use crate::constants::{
    BUN_LOCK_FILES, ENV_EXEC_PATH, ENV_USER_AGENT, NPM_LOCK_FILE, PNPM_LOCK_FILE, YARN_LOCK_FILE,
};
use crate::pm::PackageManager;

impl PackageManager {
    /// Resolve the package manager for the project at `root`.
    ///
    /// Runs the probe chain once and returns a plain value; callers thread
    /// it through the rest of the command instead of re-detecting.
    #[must_use]
    pub fn detect(root: &Path) -> Self {
        let manager = from_launch_command()
            .or_else(from_exec_path)
            .or_else(from_user_agent)
            .or_else(|| from_lock_files(root))
            .or_else(from_bun_binary)
            .unwrap_or(Self::Npm);

        debug!("Resolved package manager: {}", manager.binary());
        manager
    }
}

/// Probe 1: the command used to launch this process.
fn from_launch_command() -> Option<PackageManager> {
    let argv0 = std::env::args().next()?;
    from_command_hint(&argv0)
}

/// Probe 2: the executing package manager's own path.
fn from_exec_path() -> Option<PackageManager> {
    let exec_path = std::env::var(ENV_EXEC_PATH).ok()?;
    from_command_hint(&exec_path)
}

/// Probe 3: the user agent string the invoking tool advertises.
fn from_user_agent() -> Option<PackageManager> {
    let user_agent = std::env::var(ENV_USER_AGENT).ok()?;
    from_user_agent_hint(&user_agent)
}

/// Probe 4: lock files at the project root.
fn from_lock_files(root: &Path) -> Option<PackageManager> {
    if BUN_LOCK_FILES.iter().any(|f| root.join(f).exists()) {
        return Some(PackageManager::Bun);
    }
    if root.join(PNPM_LOCK_FILE).exists() {
        return Some(PackageManager::Pnpm);
    }
    if root.join(YARN_LOCK_FILE).exists() {
        return Some(PackageManager::Yarn);
    }
    if root.join(NPM_LOCK_FILE).exists() {
        return Some(PackageManager::Npm);
    }
    None
}

/// Probe 5: an available `bun` binary.
fn from_bun_binary() -> Option<PackageManager> {
    which::which("bun").ok().map(|_| PackageManager::Bun)
}

/// Map a command or executable path to a manager.
///
/// `npx` implies npm; the bare `npm` check runs last so `pnpm` paths are
/// not misread.
fn from_command_hint(hint: &str) -> Option<PackageManager> {
    if hint.contains("npx") {
        Some(PackageManager::Npm)
    } else if hint.contains("yarn") {
        Some(PackageManager::Yarn)
    } else if hint.contains("pnpm") {
        Some(PackageManager::Pnpm)
    } else if hint.contains("bun") {
        Some(PackageManager::Bun)
    } else if hint.contains("npm") {
        Some(PackageManager::Npm)
    } else {
        None
    }
}

/// Map a user agent string (`pnpm/9.1.0 npm/? node/v20 linux x64`) to a
/// manager.
fn from_user_agent_hint(user_agent: &str) -> Option<PackageManager> {
    if user_agent.contains("yarn") {
        Some(PackageManager::Yarn)
    } else if user_agent.contains("pnpm") {
        Some(PackageManager::Pnpm)
    } else if user_agent.contains("bun") {
        Some(PackageManager::Bun)
    } else if user_agent.contains("npm") {
        Some(PackageManager::Npm)
    } else {
        None
    }
}
