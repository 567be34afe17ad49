use crate::error::{ChunkerError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Segmentation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkStrategy {
    /// Syntax-aware chunks for function definitions
    Function,

    /// Syntax-aware chunks for class definitions
    Class,

    /// Fixed-size line windows with overlap
    Line,

    /// Fixed-size character windows with overlap
    Char,

    /// Syntax-aware or structural chunks first, size-capped afterwards
    Mixed,
}

impl ChunkStrategy {
    /// Stable string form, matching the serialized representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Class => "class",
            Self::Line => "line",
            Self::Char => "char",
            Self::Mixed => "mixed",
        }
    }
}

impl FromStr for ChunkStrategy {
    type Err = ChunkerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "function" => Ok(Self::Function),
            "class" => Ok(Self::Class),
            "line" => Ok(Self::Line),
            "char" => Ok(Self::Char),
            "mixed" => Ok(Self::Mixed),
            other => Err(ChunkerError::invalid_config(format!(
                "unknown chunk strategy: {other}"
            ))),
        }
    }
}

/// Configuration for chunking behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Segmentation strategy to use
    pub strategy: ChunkStrategy,

    /// Maximum chunk size: lines for line-oriented modes, characters for char mode
    pub max_chunk_size: usize,

    /// Lines shared between consecutive generic windows
    pub overlap: usize,

    /// Minimum chunk size in lines (small files are exempt)
    pub min_chunk_size: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            strategy: ChunkStrategy::Mixed,
            max_chunk_size: 500,
            overlap: 0,
            min_chunk_size: 10,
        }
    }
}

impl ChunkerConfig {
    /// Create a config with the given strategy and default sizes
    #[must_use]
    pub fn with_strategy(strategy: ChunkStrategy) -> Self {
        Self {
            strategy,
            ..Default::default()
        }
    }

    /// Validate configuration
    ///
    /// An overlap at or above the window size would stall the window advance,
    /// so it is rejected here instead of guarded in the splitting loop.
    pub fn validate(&self) -> Result<()> {
        if self.max_chunk_size == 0 {
            return Err(ChunkerError::invalid_config("max_chunk_size must be > 0"));
        }

        if self.overlap >= self.max_chunk_size {
            return Err(ChunkerError::invalid_config(format!(
                "overlap ({}) must be smaller than max_chunk_size ({})",
                self.overlap, self.max_chunk_size
            )));
        }

        if self.min_chunk_size > self.max_chunk_size {
            return Err(ChunkerError::invalid_config(format!(
                "min_chunk_size ({}) cannot exceed max_chunk_size ({})",
                self.min_chunk_size, self.max_chunk_size
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ChunkerConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_overlap_at_or_above_window_size() {
        let config = ChunkerConfig {
            max_chunk_size: 100,
            overlap: 100,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ChunkerConfig {
            max_chunk_size: 100,
            overlap: 250,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ChunkerConfig {
            max_chunk_size: 100,
            overlap: 99,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_window_and_min_above_max() {
        let config = ChunkerConfig {
            max_chunk_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ChunkerConfig {
            max_chunk_size: 5,
            overlap: 0,
            min_chunk_size: 10,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn strategy_parses_from_configuration_names() {
        assert_eq!(
            "function".parse::<ChunkStrategy>().unwrap(),
            ChunkStrategy::Function
        );
        assert_eq!("mixed".parse::<ChunkStrategy>().unwrap(), ChunkStrategy::Mixed);
        assert!("paragraph".parse::<ChunkStrategy>().is_err());
    }

    #[test]
    fn strategy_serializes_lowercase() {
        let json = serde_json::to_string(&ChunkStrategy::Class).unwrap();
        assert_eq!(json, "\"class\"");
    }
}
