use crate::Flake;
use core::fmt;

/// A 64-bit ID using the single-identity layout
///
/// - 1 bit reserved (keeps the signed value non-negative)
/// - 41 bits timestamp (ms since [`TWITTER_EPOCH`])
/// - 10 bits node ID
/// - 12 bits sequence
///
/// ```text
///  Bit Index:  63           63 62            22 21          12 11             0
///              +--------------+----------------+--------------+---------------+
///  Field:      | reserved (1) | timestamp (41) |  node (10)   | sequence (12) |
///              +--------------+----------------+--------------+---------------+
///              |<----------- MSB ---------- 64 bits -------- LSB ------------>|
/// ```
/// [`TWITTER_EPOCH`]: crate::TWITTER_EPOCH
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SingleWorkerId {
    id: i64,
}

impl SingleWorkerId {
    /// Bitmask for extracting the 41-bit timestamp field. Occupies bits 22
    /// through 62.
    pub const TIMESTAMP_MASK: i64 = (1 << 41) - 1;

    /// Bitmask for extracting the 10-bit node field. Occupies bits 12 through
    /// 21.
    pub const NODE_MASK: i64 = (1 << 10) - 1;

    /// Bitmask for extracting the 12-bit sequence field. Occupies bits 0
    /// through 11.
    pub const SEQUENCE_MASK: i64 = (1 << 12) - 1;

    /// Number of bits to shift the timestamp to its correct position (bit 22).
    pub const TIMESTAMP_SHIFT: i64 = 22;

    /// Number of bits to shift the node ID to its correct position (bit 12).
    pub const NODE_SHIFT: i64 = 12;

    /// Number of bits to shift the sequence field (bit 0).
    pub const SEQUENCE_SHIFT: i64 = 0;

    /// Packs an ID from its raw field values, masking each into its bit
    /// range. Prefer [`Flake::from_parts`], which bounds-checks the fields in
    /// debug builds before delegating here.
    pub const fn from(timestamp: i64, node: i64, sequence: i64) -> Self {
        let timestamp = (timestamp & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT;
        let node = (node & Self::NODE_MASK) << Self::NODE_SHIFT;
        let sequence = (sequence & Self::SEQUENCE_MASK) << Self::SEQUENCE_SHIFT;
        Self {
            id: timestamp | node | sequence,
        }
    }

    /// Extracts the timestamp from the packed ID.
    pub const fn timestamp(&self) -> i64 {
        (self.id >> Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK
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

impl Flake for SingleWorkerId {
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
        0
    }

    fn max_datacenter() -> i64 {
        0
    }

    fn sequence(&self) -> i64 {
        self.sequence()
    }

    fn max_sequence() -> i64 {
        Self::SEQUENCE_MASK
    }

    fn from_parts(timestamp: i64, node: i64, _datacenter: i64, sequence: i64) -> Self {
        debug_assert!(
            timestamp >= 0 && timestamp <= Self::TIMESTAMP_MASK,
            "timestamp overflow"
        );
        debug_assert!(node >= 0 && node <= Self::NODE_MASK, "node overflow");
        debug_assert!(
            sequence >= 0 && sequence <= Self::SEQUENCE_MASK,
            "sequence overflow"
        );
        Self::from(timestamp, node, sequence)
    }

    fn to_i64(&self) -> i64 {
        self.id
    }

    fn from_i64(raw: i64) -> Self {
        Self { id: raw }
    }
}

impl fmt::Display for SingleWorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for SingleWorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleWorkerId")
            .field("id", &self.id)
            .field("timestamp", &self.timestamp())
            .field("node", &self.node())
            .field("sequence", &self.sequence())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_single_worker_id_fields_and_bounds() {
        let ts = SingleWorkerId::max_timestamp();
        let node = SingleWorkerId::max_node();
        let seq = SingleWorkerId::max_sequence();

        let id = SingleWorkerId::from(ts, node, seq);
        assert_eq!(id.timestamp(), ts);
        assert_eq!(id.node(), node);
        assert_eq!(id.sequence(), seq);
        assert_eq!(Flake::datacenter(&id), 0);
        assert_eq!(SingleWorkerId::from_parts(ts, node, 0, seq), id);
        assert!(id.to_raw() > 0, "sign bit must stay clear");
    }

    #[test]
    fn raw_ordering_matches_field_ordering() {
        let a = SingleWorkerId::from(10, 1, 100);
        let b = SingleWorkerId::from(10, 2, 0);
        let c = SingleWorkerId::from(11, 0, 0);
        assert!(a < b && b < c);
    }

    #[test]
    #[should_panic(expected = "timestamp overflow")]
    fn timestamp_overflow_panics() {
        let ts = SingleWorkerId::max_timestamp() + 1;
        SingleWorkerId::from_parts(ts, 0, 0, 0);
    }

    #[test]
    #[should_panic(expected = "node overflow")]
    fn node_overflow_panics() {
        let node = SingleWorkerId::max_node() + 1;
        SingleWorkerId::from_parts(0, node, 0, 0);
    }

    #[test]
    #[should_panic(expected = "sequence overflow")]
    fn sequence_overflow_panics() {
        let seq = SingleWorkerId::max_sequence() + 1;
        SingleWorkerId::from_parts(0, 0, 0, seq);
    }

    #[test]
    fn display_and_bytes_are_plain_decimal() {
        let id = SingleWorkerId::from_raw(13587);
        assert_eq!(id.to_string(), "13587");
        assert_eq!(Flake::to_bytes(&id), b"13587".to_vec());
    }

    #[test]
    fn encode_wraps_decimal_in_quotes() {
        let id = SingleWorkerId::from_raw(13587);
        let text = Flake::encode(&id);
        assert_eq!(text, "\"13587\"");
        assert_eq!(text.len(), 7);
    }

    #[test]
    fn decode_accepts_quoted_decimal() {
        let id = SingleWorkerId::decode(b"\"13587\"").expect("well-formed input");
        assert_eq!(id.to_raw(), 13587);
    }

    #[test]
    fn decode_rejects_unquoted_input() {
        let err = SingleWorkerId::decode(b"1").expect_err("bare digit must fail");
        assert_eq!(
            err,
            Error::MalformedQuotedInt {
                original: b"1".to_vec()
            }
        );
    }

    #[test]
    fn decode_rejects_unterminated_quote() {
        let err = SingleWorkerId::decode(b"\"invalid").expect_err("missing close quote");
        assert_eq!(
            err,
            Error::MalformedQuotedInt {
                original: b"\"invalid".to_vec()
            }
        );
    }

    #[test]
    fn decode_rejects_non_numeric_interior() {
        let err = SingleWorkerId::decode(b"\"12x34\"").expect_err("non-numeric interior");
        assert!(matches!(err, Error::ParseInt(_)));
    }

    #[test]
    fn time_restores_the_absolute_instant() {
        use std::time::{Duration, UNIX_EPOCH};

        let id = SingleWorkerId::from_parts(42, 0, 0, 0);
        let expected =
            UNIX_EPOCH + Duration::from_millis((SingleWorkerId::EPOCH_MS + 42) as u64);
        assert_eq!(id.time(), expected);
    }
}
