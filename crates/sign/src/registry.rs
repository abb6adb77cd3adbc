//! Lookup of parameter sets by name
//!
//! Names are matched case-insensitively, and `_` is accepted in place of
//! `-`, so `"ML-DSA-65"`, `"ml-dsa-65"` and `"ML_DSA_65"` all resolve to the
//! same entry.

use core::fmt;
use core::str::FromStr;
use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{rejected, Error, Result};
use crate::pq::{FalconVariant, MlDsaLevel};

/// Any named configuration served by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterSet {
    /// An ML-DSA level (ring of degree 256, q = 8380417)
    MlDsa(MlDsaLevel),
    /// A Falcon variant (ring of degree 512 or 1024, q = 12289)
    Falcon(FalconVariant),
}

static REGISTRY: Lazy<HashMap<String, ParameterSet>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for set in ParameterSet::all() {
        m.insert(normalize(set.name()), set);
    }
    m
});

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('_', "-")
}

impl ParameterSet {
    /// Every configuration, ML-DSA first
    pub fn all() -> impl Iterator<Item = ParameterSet> {
        MlDsaLevel::ALL
            .into_iter()
            .map(ParameterSet::MlDsa)
            .chain(FalconVariant::ALL.into_iter().map(ParameterSet::Falcon))
    }

    /// Resolve a configuration from its name
    pub fn from_name(name: &str) -> Result<Self> {
        REGISTRY.get(&normalize(name)).copied().ok_or_else(|| {
            rejected(
                "parameter set lookup",
                Error::UnknownParameterSet {
                    name: name.to_string(),
                },
            )
        })
    }

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            Self::MlDsa(level) => level.name(),
            Self::Falcon(variant) => variant.name(),
        }
    }

    /// Base-2 logarithm of the ring degree
    pub fn logn(self) -> u32 {
        match self {
            Self::MlDsa(_) => 8,
            Self::Falcon(variant) => variant.logn(),
        }
    }

    /// Ring degree
    pub fn degree(self) -> usize {
        1 << self.logn()
    }

    /// Coefficient modulus of the ring
    pub fn modulus(self) -> u32 {
        match self {
            Self::MlDsa(_) => pqntt_params::pqc::ml_dsa::ML_DSA_Q,
            Self::Falcon(_) => pqntt_params::pqc::falcon::FALCON_Q,
        }
    }
}

impl FromStr for ParameterSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<MlDsaLevel> for ParameterSet {
    fn from(level: MlDsaLevel) -> Self {
        Self::MlDsa(level)
    }
}

impl From<FalconVariant> for ParameterSet {
    fn from(variant: FalconVariant) -> Self {
        Self::Falcon(variant)
    }
}
