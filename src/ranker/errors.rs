// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for ranker construction.

use std::fmt;
use strum_macros::EnumCount as EnumCountMacro;

/// Reasons a universe size cannot be ranked.
#[derive(Debug, Clone, PartialEq, Eq, EnumCountMacro)]
pub enum ConfigurationError {
    /// Perfect matchings only exist for even universe sizes.
    OddUniverse { universe: usize },

    /// The universe must hold at least one pair.
    UniverseTooSmall { universe: usize },

    /// Elements are encoded as single bytes, capping the universe at 255.
    UniverseTooLarge { universe: usize },

    /// The rank space of this universe exceeds u64.
    RankOverflow { universe: usize },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::OddUniverse { universe } => {
                write!(f, "Universe size {} is odd; no perfect matching exists", universe)
            }
            ConfigurationError::UniverseTooSmall { universe } => {
                write!(f, "Universe size {} is below the minimum of 2", universe)
            }
            ConfigurationError::UniverseTooLarge { universe } => {
                write!(f, "Universe size {} exceeds the byte-encoding maximum of 255", universe)
            }
            ConfigurationError::RankOverflow { universe } => {
                write!(f, "Rank space for universe size {} does not fit in u64", universe)
            }
        }
    }
}
