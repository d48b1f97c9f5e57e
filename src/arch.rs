//! CPU architecture types and utilities.

use std::fmt;
use std::str::FromStr;

use crate::error::{ArchError, Result};

/// CPU architecture of a host or target binary.
///
/// Each variant carries the canonical classifier string used downstream to
/// name architecture-specific artifacts (native binaries, package
/// classifiers). The set of variants is closed; an unrecognized host is a
/// hard misconfiguration, not a fallback case.
///
/// # Examples
///
/// ```
/// use hostarch::Architecture;
///
/// let arch: Architecture = "amd64".parse()?;
/// assert_eq!(arch, Architecture::X64);
/// assert_eq!(arch.classifier(), "x86_64");
/// # Ok::<(), hostarch::ArchError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Architecture {
    /// x86_64 / AMD64 (64-bit) - Most common desktop/server architecture
    #[serde(rename = "x86_64")]
    X64,
    /// AArch64 / ARM64 (64-bit) - Apple Silicon, modern ARM devices
    #[serde(rename = "aarch64")]
    AArch64,
    /// LoongArch (64-bit) - Loongson LA464 and newer
    #[serde(rename = "loongarch64")]
    LoongArch64,
}

impl Architecture {
    /// The closed set of supported architectures.
    pub const ALL: [Self; 3] = [Self::X64, Self::AArch64, Self::LoongArch64];

    /// Classifies a raw architecture name.
    ///
    /// Matching is exact and case-sensitive. `"amd64"` and `"x86_64"` are
    /// accepted as synonyms for [`Architecture::X64`]; the other families
    /// have a single recognized spelling.
    pub fn from_raw(raw: &str) -> Result<Self> {
        match raw {
            "amd64" | "x86_64" => Ok(Self::X64),
            "aarch64" => Ok(Self::AArch64),
            "loongarch64" => Ok(Self::LoongArch64),
            _ => Err(ArchError::UnsupportedArchitecture {
                raw: raw.to_string(),
            }),
        }
    }

    /// Classifies the architecture the current process runs on.
    ///
    /// Thin wrapper over [`Architecture::from_raw`] supplying the
    /// host-reported value. There is no fallback architecture: an
    /// unrecognized host halts whatever packaging step depends on
    /// architecture detection.
    pub fn current() -> Result<Self> {
        let raw = std::env::consts::ARCH;
        log::debug!("Host-reported architecture: {}", raw);
        Self::from_raw(raw)
    }

    /// Returns the canonical classifier string for artifact naming.
    pub fn classifier(self) -> &'static str {
        match self {
            Self::X64 => "x86_64",
            Self::AArch64 => "aarch64",
            Self::LoongArch64 => "loongarch64",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.classifier())
    }
}

impl FromStr for Architecture {
    type Err = ArchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_raw(s)
    }
}
