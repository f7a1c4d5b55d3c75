//! Per-request block limit handling

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidOverflowPolicyError;

use super::block::Block;

/// Maximum number of children Notion accepts in one append request
pub const MAX_BLOCKS_PER_REQUEST: usize = 100;

/// What to do with blocks beyond the per-request limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OverflowPolicy {
    /// Send the first 100 blocks in one request and drop the rest
    #[default]
    Truncate,
    /// Send every block, 100 per request
    Paginate,
}

impl OverflowPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Truncate => "truncate",
            Self::Paginate => "paginate",
        }
    }
}

impl FromStr for OverflowPolicy {
    type Err = InvalidOverflowPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "truncate" => Ok(Self::Truncate),
            "paginate" => Ok(Self::Paginate),
            _ => Err(InvalidOverflowPolicyError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Request batches derived from a block list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchPlan {
    batches: Vec<Vec<Block>>,
    dropped: usize,
}

impl BatchPlan {
    /// Split `blocks` into request-sized batches according to `policy`.
    ///
    /// An empty block list still yields one (empty) batch so that the
    /// export issues exactly one request.
    pub fn new(mut blocks: Vec<Block>, policy: OverflowPolicy) -> Self {
        match policy {
            OverflowPolicy::Truncate => {
                let dropped = blocks.len().saturating_sub(MAX_BLOCKS_PER_REQUEST);
                blocks.truncate(MAX_BLOCKS_PER_REQUEST);
                Self {
                    batches: vec![blocks],
                    dropped,
                }
            }
            OverflowPolicy::Paginate => {
                if blocks.is_empty() {
                    return Self {
                        batches: vec![Vec::new()],
                        dropped: 0,
                    };
                }
                let mut batches = Vec::with_capacity(blocks.len().div_ceil(MAX_BLOCKS_PER_REQUEST));
                while blocks.len() > MAX_BLOCKS_PER_REQUEST {
                    let rest = blocks.split_off(MAX_BLOCKS_PER_REQUEST);
                    batches.push(blocks);
                    blocks = rest;
                }
                batches.push(blocks);
                Self {
                    batches,
                    dropped: 0,
                }
            }
        }
    }

    pub fn batches(&self) -> &[Vec<Block>] {
        &self.batches
    }

    /// Number of blocks that will not be sent
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Number of blocks that will be sent
    pub fn total_blocks(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }
}
