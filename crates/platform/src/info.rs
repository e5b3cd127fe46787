//! Platform and architecture detection

use serde::{Deserialize, Serialize};
use std::fmt;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Operating system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Linux,
    Darwin,
    Windows,
}

impl Os {
    /// Detect the current operating system at runtime
    ///
    /// Returns `None` if the OS family is not recognized
    pub fn current() -> Option<Self> {
        Self::from_name(std::env::consts::OS)
    }

    /// Map an `std::env::consts::OS` style name to a family
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linux" => Some(Self::Linux),
            "macos" => Some(Self::Darwin),
            "windows" => Some(Self::Windows),
            _ => None,
        }
    }

    /// Returns the lowercase string identifier for this OS
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Windows => "windows",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// CPU architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    X86_64,
    Aarch64,
    Arm,
}

impl Arch {
    /// Detect the current CPU architecture at runtime
    ///
    /// Returns `None` if the architecture is not recognized
    pub fn current() -> Option<Self> {
        match std::env::consts::ARCH {
            "x86_64" => Some(Self::X86_64),
            "aarch64" => Some(Self::Aarch64),
            "arm" => Some(Self::Arm),
            _ => None,
        }
    }

    /// Returns the lowercase string identifier for this architecture
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            Self::Aarch64 => "aarch64",
            Self::Arm => "arm",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable snapshot of host identity, captured once at construction
///
/// All accessors after construction are pure reads or simple
/// comparisons; the two Windows-only facets ([`Self::windows_version`]
/// and [`Self::supports_long_paths`]) are looked up lazily on request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformInfo {
    /// OS family, `None` when unrecognized
    pub os: Option<Os>,
    /// OS name as reported by the host (e.g. "Ubuntu", "Windows")
    pub name: String,
    /// OS release string
    pub release: String,
    /// Detailed OS version string
    pub version: String,
    /// Machine architecture (e.g. "x86_64")
    pub machine: String,
    /// Typed architecture facet, `None` when unrecognized
    pub arch: Option<Arch>,
    /// Processor description
    pub processor: String,
    /// Version of the rustc this crate was built with
    pub rustc: String,
    pub hostname: String,
    pub username: String,
}

impl PlatformInfo {
    /// Gather current platform information
    pub fn current() -> Self {
        let cpu = System::new_with_specifics(
            RefreshKind::nothing().with_cpu(CpuRefreshKind::everything()),
        );
        let processor = cpu
            .cpus()
            .first()
            .map(|c| c.brand().trim().to_string())
            .unwrap_or_default();

        let info = Self {
            os: Os::current(),
            name: System::name().unwrap_or_else(|| "unknown".to_string()),
            release: System::os_version().unwrap_or_else(|| "unknown".to_string()),
            version: System::long_os_version().unwrap_or_else(|| "unknown".to_string()),
            machine: System::cpu_arch(),
            arch: Arch::current(),
            processor,
            rustc: env!("SHARK_RUSTC_VERSION").to_string(),
            hostname: whoami::fallible::hostname().unwrap_or_else(|_| "unknown".to_string()),
            username: whoami::username(),
        };

        tracing::debug!(
            family = info.family(),
            machine = %info.machine,
            "captured platform snapshot"
        );

        info
    }

    /// The family identifier, `"unknown"` for unrecognized hosts
    pub fn family(&self) -> &'static str {
        self.os.map_or("unknown", |os| os.as_str())
    }

    /// Check if running on Windows
    pub fn is_windows(&self) -> bool {
        self.os == Some(Os::Windows)
    }

    /// Check if running on Linux
    pub fn is_linux(&self) -> bool {
        self.os == Some(Os::Linux)
    }

    /// Check if running on macOS
    pub fn is_macos(&self) -> bool {
        self.os == Some(Os::Darwin)
    }

    /// Human-readable Windows product version
    ///
    /// Returns `None` off Windows. On Windows, reads the product name
    /// and build number from the registry; when that lookup fails the
    /// result degrades to `"Windows {release}"` rather than an error.
    pub fn windows_version(&self) -> Option<String> {
        if !self.is_windows() {
            return None;
        }
        Some(self.resolve_windows_version())
    }

    fn resolve_windows_version(&self) -> String {
        #[cfg(windows)]
        if let Some(version) = crate::registry::product_version() {
            return version;
        }
        format!("Windows {}", self.release)
    }

    /// Whether paths longer than the legacy 260-character limit work
    ///
    /// Non-Windows systems have no such limitation, so this is always
    /// `true` there. On Windows the `LongPathsEnabled` registry flag is
    /// consulted; a missing or unreadable flag counts as unsupported.
    pub fn supports_long_paths(&self) -> bool {
        if !self.is_windows() {
            return true;
        }

        #[cfg(windows)]
        {
            crate::registry::long_paths_enabled()
        }

        #[cfg(not(windows))]
        {
            false
        }
    }

    /// Snapshot of every field as ordered key/value pairs
    ///
    /// Key order is fixed: `system`, `name`, `release`, `version`,
    /// `machine`, `arch`, `processor`, `rustc`, `hostname`, `username`,
    /// `is_windows`, `is_linux`, `is_macos`, then `windows_version`
    /// and `long_paths_enabled` on Windows only.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let mut entries = vec![
            ("system", self.family().to_string()),
            ("name", self.name.clone()),
            ("release", self.release.clone()),
            ("version", self.version.clone()),
            ("machine", self.machine.clone()),
            (
                "arch",
                self.arch.map_or("unknown", |arch| arch.as_str()).to_string(),
            ),
            ("processor", self.processor.clone()),
            ("rustc", self.rustc.clone()),
            ("hostname", self.hostname.clone()),
            ("username", self.username.clone()),
            ("is_windows", self.is_windows().to_string()),
            ("is_linux", self.is_linux().to_string()),
            ("is_macos", self.is_macos().to_string()),
        ];

        if self.is_windows() {
            entries.push(("windows_version", self.resolve_windows_version()));
            entries.push(("long_paths_enabled", self.supports_long_paths().to_string()));
        }

        entries
    }
}

impl fmt::Display for PlatformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Platform: {} {}", self.family(), self.release)?;
        writeln!(f, "Machine: {}", self.machine)?;
        write!(f, "Rust: {}", self.rustc)
    }
}
