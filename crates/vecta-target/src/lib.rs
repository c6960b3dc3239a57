//! Host vector-unit detection and the process-wide vector width for vecta.
//!
//! Every `Vector<T>` in `vecta-numeric` spans the same number of bytes for
//! the lifetime of the process. This crate decides that number once, from
//! the CPU features of the host and an optional [`WidthConfig`], and hands
//! out the result as an immutable [`HostCapabilities`] descriptor.
//!
//! # Width selection
//!
//! | Host vector unit | Default width | Accelerated |
//! |------------------|---------------|-------------|
//! | AVX2 / AVX       | 256 bits      | yes         |
//! | AVX-512F         | 256 bits (512 on request) | yes |
//! | SSE2 / NEON / SIMD128 | 128 bits | yes         |
//! | none             | 128 bits (software emulated) | no |
//!
//! # Configuration
//!
//! The descriptor is built lazily by [`host`] from the environment:
//!
//! - `VECTA_VECTOR_BITS` - requested width in bits (`128`, `256`, `512`)
//! - `VECTA_DISABLE_ACCELERATION` - any non-empty value other than `0`
//!   forces software emulation
//!
//! Embedders can call [`install`] with an explicit [`WidthConfig`] (for
//! example parsed from TOML with [`WidthConfig::from_toml_str`]) before the
//! first vector is created.

#![warn(missing_docs)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Largest vector width the engine can represent, in bytes.
pub const MAX_VECTOR_BYTES: usize = 64;

/// Environment variable holding the requested vector width in bits.
pub const VECTOR_BITS_ENV: &str = "VECTA_VECTOR_BITS";

/// Environment variable that disables hardware acceleration.
pub const DISABLE_ACCELERATION_ENV: &str = "VECTA_DISABLE_ACCELERATION";

/// Host architecture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Arch {
    /// x86-64 (AMD64).
    X86_64,
    /// 64-bit ARM.
    Aarch64,
    /// 32-bit WebAssembly.
    Wasm32,
    /// 64-bit RISC-V.
    Riscv64,
    /// Anything else; treated as having no vector unit.
    Other,
}

impl Arch {
    /// The architecture this crate was compiled for.
    #[must_use]
    pub const fn host() -> Self {
        if cfg!(target_arch = "x86_64") {
            Self::X86_64
        } else if cfg!(target_arch = "aarch64") {
            Self::Aarch64
        } else if cfg!(target_arch = "wasm32") {
            Self::Wasm32
        } else if cfg!(target_arch = "riscv64") {
            Self::Riscv64
        } else {
            Self::Other
        }
    }

    /// Get the name of this architecture.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            Self::Aarch64 => "aarch64",
            Self::Wasm32 => "wasm32",
            Self::Riscv64 => "riscv64",
            Self::Other => "other",
        }
    }

    /// Check if this architecture can carry a vector unit we know how to use.
    #[must_use]
    pub const fn has_simd(self) -> bool {
        matches!(self, Self::X86_64 | Self::Aarch64 | Self::Wasm32)
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// CPU vector features relevant to width selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CpuFeatures {
    /// SSE2 support (x86_64 baseline).
    pub sse2: bool,
    /// SSE4.2 support (x86_64).
    pub sse42: bool,
    /// AVX support (x86_64).
    pub avx: bool,
    /// AVX2 support (x86_64).
    pub avx2: bool,
    /// AVX-512 Foundation support (x86_64).
    pub avx512f: bool,
    /// NEON support (aarch64).
    pub neon: bool,
    /// SIMD128 support (wasm).
    pub simd128: bool,
}

impl CpuFeatures {
    /// Create a feature set with no features enabled.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            sse2: false,
            sse42: false,
            avx: false,
            avx2: false,
            avx512f: false,
            neon: false,
            simd128: false,
        }
    }

    /// Baseline features every CPU of the given architecture provides.
    #[must_use]
    pub fn default_for_arch(arch: Arch) -> Self {
        let mut features = Self::none();
        match arch {
            Arch::X86_64 => {
                features.sse2 = true;
            }
            Arch::Aarch64 => {
                features.neon = true;
            }
            Arch::Wasm32 => {
                features.simd128 = cfg!(target_feature = "simd128");
            }
            _ => {}
        }
        features
    }

    /// Query the running CPU.
    #[must_use]
    pub fn detect() -> Self {
        #[allow(unused_mut)]
        let mut features = Self::default_for_arch(Arch::host());

        #[cfg(target_arch = "x86_64")]
        {
            features.sse2 = std::arch::is_x86_feature_detected!("sse2");
            features.sse42 = std::arch::is_x86_feature_detected!("sse4.2");
            features.avx = std::arch::is_x86_feature_detected!("avx");
            features.avx2 = std::arch::is_x86_feature_detected!("avx2");
            features.avx512f = std::arch::is_x86_feature_detected!("avx512f");
        }

        #[cfg(target_arch = "aarch64")]
        {
            features.neon = std::arch::is_aarch64_feature_detected!("neon");
        }

        features
    }

    /// Get the maximum SIMD vector width in bits, or 0 without a vector unit.
    #[must_use]
    pub const fn max_vector_width(&self) -> u32 {
        if self.avx512f {
            512
        } else if self.avx || self.avx2 {
            256
        } else if self.sse2 || self.sse42 || self.neon || self.simd128 {
            128
        } else {
            0
        }
    }

    /// Whether any usable vector unit is present.
    #[must_use]
    pub const fn has_vector_unit(&self) -> bool {
        self.max_vector_width() > 0
    }
}

/// Width of every vector in the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VectorWidth {
    /// 16 bytes.
    Bits128,
    /// 32 bytes.
    Bits256,
    /// 64 bytes.
    Bits512,
}

impl VectorWidth {
    /// Parse a width given in bits.
    ///
    /// # Errors
    ///
    /// Returns [`TargetError::InvalidWidth`] for anything but 128, 256 or 512.
    pub fn from_bits(bits: u32) -> Result<Self, TargetError> {
        match bits {
            128 => Ok(Self::Bits128),
            256 => Ok(Self::Bits256),
            512 => Ok(Self::Bits512),
            _ => Err(TargetError::InvalidWidth(bits)),
        }
    }

    /// Width in bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits128 => 128,
            Self::Bits256 => 256,
            Self::Bits512 => 512,
        }
    }

    /// Width in bytes.
    #[must_use]
    pub const fn bytes(self) -> usize {
        self.bits() as usize / 8
    }
}

impl fmt::Display for VectorWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}

/// User-facing knobs for width selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidthConfig {
    /// Requested width in bits; `None` picks the host default.
    pub vector_bits: Option<u32>,
    /// Allow the hardware vector unit to be used.
    pub allow_acceleration: bool,
}

impl Default for WidthConfig {
    fn default() -> Self {
        Self {
            vector_bits: None,
            allow_acceleration: true,
        }
    }
}

impl WidthConfig {
    /// Parse a config from TOML.
    ///
    /// ```
    /// use vecta_target::WidthConfig;
    ///
    /// let config = WidthConfig::from_toml_str("vector_bits = 128").unwrap();
    /// assert_eq!(config.vector_bits, Some(128));
    /// assert!(config.allow_acceleration);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML or an unsupported width.
    pub fn from_toml_str(s: &str) -> Result<Self, TargetError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Build a config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `VECTA_VECTOR_BITS` is not a supported width.
    pub fn from_env() -> Result<Self, TargetError> {
        Self::default().with_env_overrides()
    }

    /// Apply environment overrides on top of this config.
    ///
    /// # Errors
    ///
    /// Returns an error if `VECTA_VECTOR_BITS` is not a supported width.
    pub fn with_env_overrides(mut self) -> Result<Self, TargetError> {
        if let Ok(raw) = std::env::var(VECTOR_BITS_ENV) {
            let bits = raw
                .trim()
                .parse::<u32>()
                .map_err(|_| TargetError::InvalidEnv {
                    name: VECTOR_BITS_ENV,
                    value: raw.clone(),
                })?;
            self.vector_bits = Some(bits);
        }
        if let Ok(raw) = std::env::var(DISABLE_ACCELERATION_ENV) {
            let raw = raw.trim();
            if !raw.is_empty() && raw != "0" {
                self.allow_acceleration = false;
            }
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), TargetError> {
        if let Some(bits) = self.vector_bits {
            VectorWidth::from_bits(bits)?;
        }
        Ok(())
    }
}

/// The immutable, process-wide vector capability descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostCapabilities {
    /// Host architecture.
    pub arch: Arch,
    /// Detected CPU features.
    pub features: CpuFeatures,
    /// Width of every vector.
    pub width: VectorWidth,
    /// Whether operations may use the hardware vector unit.
    pub hardware_accelerated: bool,
}

impl HostCapabilities {
    /// Detect the running host and resolve `config` against it.
    #[must_use]
    pub fn detect(config: &WidthConfig) -> Self {
        let arch = Arch::host();
        let features = CpuFeatures::detect();
        debug!(%arch, ?features, "detected host vector features");
        Self::resolve(arch, features, config)
    }

    /// Resolve a width for the given architecture and features.
    ///
    /// Without a vector unit (or with acceleration disabled) any requested
    /// width is emulated in software. With a vector unit, a request wider
    /// than the hardware falls back to the hardware default.
    #[must_use]
    pub fn resolve(arch: Arch, features: CpuFeatures, config: &WidthConfig) -> Self {
        let hardware_accelerated = config.allow_acceleration && features.has_vector_unit();

        let default_width = match features.max_vector_width() {
            512 | 256 => VectorWidth::Bits256,
            _ => VectorWidth::Bits128,
        };

        let requested = config
            .vector_bits
            .and_then(|bits| match VectorWidth::from_bits(bits) {
                Ok(width) => Some(width),
                Err(err) => {
                    warn!(%err, "ignoring requested vector width");
                    None
                }
            });

        let width = match requested {
            Some(width) if hardware_accelerated && width.bits() > features.max_vector_width() => {
                warn!(
                    requested = width.bits(),
                    supported = features.max_vector_width(),
                    "requested vector width exceeds the hardware, using default"
                );
                default_width
            }
            Some(width) => width,
            None => default_width,
        };

        Self {
            arch,
            features,
            width,
            hardware_accelerated,
        }
    }

    /// Width of every vector in bytes.
    #[must_use]
    pub const fn vector_bytes(&self) -> usize {
        self.width.bytes()
    }
}

impl fmt::Display for HostCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.arch,
            self.width,
            if self.hardware_accelerated {
                "accelerated"
            } else {
                "emulated"
            }
        )
    }
}

/// Errors raised while configuring the vector width.
#[derive(Debug, Error)]
pub enum TargetError {
    /// Unsupported vector width.
    #[error("unsupported vector width: {0} bits (expected 128, 256 or 512)")]
    InvalidWidth(u32),
    /// Malformed environment override.
    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Raw value.
        value: String,
    },
    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Config(#[from] toml::de::Error),
    /// The descriptor was already fixed.
    #[error("vector width already initialized as {0}")]
    AlreadyInitialized(VectorWidth),
}

static HOST: OnceLock<HostCapabilities> = OnceLock::new();

fn log_installed(caps: &HostCapabilities) {
    info!(
        arch = %caps.arch,
        bits = caps.width.bits(),
        accelerated = caps.hardware_accelerated,
        "vector width fixed for this process"
    );
}

/// Get the process-wide descriptor, detecting it on first use.
pub fn host() -> &'static HostCapabilities {
    HOST.get_or_init(|| {
        let config = WidthConfig::from_env().unwrap_or_else(|err| {
            warn!(%err, "ignoring vector width environment overrides");
            WidthConfig::default()
        });
        let caps = HostCapabilities::detect(&config);
        log_installed(&caps);
        caps
    })
}

/// Fix the process-wide descriptor from an explicit config.
///
/// # Errors
///
/// Returns [`TargetError::AlreadyInitialized`] if [`host`] or `install` ran
/// before.
pub fn install(config: &WidthConfig) -> Result<&'static HostCapabilities, TargetError> {
    config.validate()?;
    let mut installed = false;
    let caps = HOST.get_or_init(|| {
        installed = true;
        let caps = HostCapabilities::detect(config);
        log_installed(&caps);
        caps
    });
    if installed {
        Ok(caps)
    } else {
        Err(TargetError::AlreadyInitialized(caps.width))
    }
}

/// Width of every vector in bytes.
#[inline]
#[must_use]
pub fn vector_bytes() -> usize {
    host().vector_bytes()
}

/// Whether vector operations run on the hardware vector unit.
#[inline]
#[must_use]
pub fn is_hardware_accelerated() -> bool {
    host().hardware_accelerated
}
