//! Document-store style object identifiers.
//!
//! An id is 12 bytes rendered as 24 lowercase hex characters:
//!
//! | bytes | content                                  |
//! |-------|------------------------------------------|
//! | 0..4  | creation time, big-endian unix seconds   |
//! | 4..9  | random value chosen once per process     |
//! | 9..12 | big-endian counter, random start         |

use std::{
    fmt,
    str::FromStr,
    sync::{
        atomic::{AtomicU32, Ordering},
        LazyLock,
    },
};

use chrono::Utc;

const COUNTER_MASK: u32 = 0x00ff_ffff;

static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(rand::random::<[u8; 5]>);
static COUNTER: LazyLock<AtomicU32> =
    LazyLock::new(|| AtomicU32::new(rand::random::<u32>() & COUNTER_MASK));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Generates a fresh id stamped with the current time.
    pub fn new() -> Self {
        let seconds = u32::try_from(Utc::now().timestamp()).unwrap_or(u32::MAX);
        let count = COUNTER.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK;
        Self::from_parts(seconds, *PROCESS_UNIQUE, count)
    }

    fn from_parts(seconds: u32, process: [u8; 5], count: u32) -> Self {
        let mut bytes = [0u8; 12];
        bytes[0..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(&process);
        bytes[9..12].copy_from_slice(&count.to_be_bytes()[1..4]);
        Self(bytes)
    }

    /// Parses a 24 character hex string; anything else yields `None`.
    pub fn parse(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for ObjectId {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: [u8; 12] = hex::decode(s)?
            .try_into()
            .map_err(|_| hex::FromHexError::InvalidStringLength)?;
        Ok(Self(bytes))
    }
}
