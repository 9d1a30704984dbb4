use crate::Flake;
use core::fmt;

/// A 64-bit ID using the node+datacenter layout from Twitter's original
/// generator
///
/// - 1 bit reserved (keeps the signed value non-negative)
/// - 41 bits timestamp (ms since [`TWITTER_EPOCH`])
/// - 5 bits datacenter ID
/// - 5 bits node ID
/// - 12 bits sequence
///
/// ```text
///  Bit Index:  63           63 62            22 21            17 16         12 11             0
///              +--------------+----------------+----------------+-------------+---------------+
///  Field:      | reserved (1) | timestamp (41) | datacenter (5) |  node (5)   | sequence (12) |
///              +--------------+----------------+----------------+-------------+---------------+
///              |<---------------- MSB ------------- 64 bits ----------- LSB ----------------->|
/// ```
/// [`TWITTER_EPOCH`]: crate::TWITTER_EPOCH
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MultiWorkerId {
    id: i64,
}

impl MultiWorkerId {
    /// Bitmask for extracting the 41-bit timestamp field. Occupies bits 22
    /// through 62.
    pub const TIMESTAMP_MASK: i64 = (1 << 41) - 1;

    /// Bitmask for extracting the 5-bit datacenter field. Occupies bits 17
    /// through 21.
    pub const DATACENTER_MASK: i64 = (1 << 5) - 1;

    /// Bitmask for extracting the 5-bit node field. Occupies bits 12 through
    /// 16.
    pub const NODE_MASK: i64 = (1 << 5) - 1;

    /// Bitmask for extracting the 12-bit sequence field. Occupies bits 0
    /// through 11.
    pub const SEQUENCE_MASK: i64 = (1 << 12) - 1;

    /// Number of bits to shift the timestamp to its correct position (bit 22).
    pub const TIMESTAMP_SHIFT: i64 = 22;

    /// Number of bits to shift the datacenter ID to its correct position
    /// (bit 17).
    pub const DATACENTER_SHIFT: i64 = 17;

    /// Number of bits to shift the node ID to its correct position (bit 12).
    pub const NODE_SHIFT: i64 = 12;

    /// Number of bits to shift the sequence field (bit 0).
    pub const SEQUENCE_SHIFT: i64 = 0;

    /// Packs an ID from its raw field values, masking each into its bit
    /// range. Arguments follow the bit layout top-down, so `datacenter` comes
    /// before `node` here, unlike [`Flake::from_parts`]. Prefer the latter,
    /// which bounds-checks the fields in debug builds before delegating here.
    pub const fn from(timestamp: i64, datacenter: i64, node: i64, sequence: i64) -> Self {
        let timestamp = (timestamp & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT;
        let datacenter = (datacenter & Self::DATACENTER_MASK) << Self::DATACENTER_SHIFT;
        let node = (node & Self::NODE_MASK) << Self::NODE_SHIFT;
        let sequence = (sequence & Self::SEQUENCE_MASK) << Self::SEQUENCE_SHIFT;
        Self {
            id: timestamp | datacenter | node | sequence,
        }
    }

    /// Extracts the timestamp from the packed ID.
    pub const fn timestamp(&self) -> i64 {
        (self.id >> Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK
    }

    /// Extracts the datacenter ID from the packed ID.
    pub const fn datacenter(&self) -> i64 {
        (self.id >> Self::DATACENTER_SHIFT) & Self::DATACENTER_MASK
    }

    /// Extracts the node ID from the packed ID.
    pub const fn node(&self) -> i64 {
        (self.id >> Self::NODE_SHIFT) & Self::NODE_MASK
    }

    /// Extracts the sequence number from the packed ID.
    pub const fn sequence(&self) -> i64 {
        (self.id >> Self::SEQUENCE_SHIFT) & Self::SEQUENCE_MASK
    }

    /// Returns the raw packed integer.
    pub const fn to_raw(&self) -> i64 {
        self.id
    }

    /// Reinterprets a raw integer as an ID.
    pub const fn from_raw(raw: i64) -> Self {
        Self { id: raw }
    }
}

impl Flake for MultiWorkerId {
    fn timestamp(&self) -> i64 {
        self.timestamp()
    }

    fn max_timestamp() -> i64 {
        Self::TIMESTAMP_MASK
    }

    fn node(&self) -> i64 {
        self.node()
    }

    fn max_node() -> i64 {
        Self::NODE_MASK
    }

    fn datacenter(&self) -> i64 {
        self.datacenter()
    }

    fn max_datacenter() -> i64 {
        Self::DATACENTER_MASK
    }

    fn sequence(&self) -> i64 {
        self.sequence()
    }

    fn max_sequence() -> i64 {
        Self::SEQUENCE_MASK
    }

    fn from_parts(timestamp: i64, node: i64, datacenter: i64, sequence: i64) -> Self {
        debug_assert!(
            timestamp >= 0 && timestamp <= Self::TIMESTAMP_MASK,
            "timestamp overflow"
        );
        debug_assert!(node >= 0 && node <= Self::NODE_MASK, "node overflow");
        debug_assert!(
            datacenter >= 0 && datacenter <= Self::DATACENTER_MASK,
            "datacenter overflow"
        );
        debug_assert!(
            sequence >= 0 && sequence <= Self::SEQUENCE_MASK,
            "sequence overflow"
        );
        Self::from(timestamp, datacenter, node, sequence)
    }

    fn to_i64(&self) -> i64 {
        self.id
    }

    fn from_i64(raw: i64) -> Self {
        Self { id: raw }
    }
}

impl fmt::Display for MultiWorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for MultiWorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiWorkerId")
            .field("id", &self.id)
            .field("timestamp", &self.timestamp())
            .field("datacenter", &self.datacenter())
            .field("node", &self.node())
            .field("sequence", &self.sequence())
            .finish()
    }
}
