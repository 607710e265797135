//! Envelope header layout and construction.
//!
//! The header is fully determined by the device type. Everything after it is
//! the payload, copied byte for byte.

mod writer;


pub use writer::{build, build_named, write_envelope};

use std::io::{self, Write};

use crate::device::DeviceType;

/// Magic token at offset 0.
pub const MAGIC: &[u8; 4] = b"ampf";

/// Length of the device type tag at offset 4.
const TYPE_TAG_LEN: usize = 4;

/// Marker token at offset 8.
pub const MARKER: &[u8; 8] = b"metaptch";

/// Total header length preceding the payload.
pub const HEADER_LEN: usize = MAGIC.len() + TYPE_TAG_LEN + MARKER.len();

/// A device envelope over a borrowed payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    /// The device type encoded in the header.
    pub device_type: DeviceType,
    /// The patcher document bytes.
    pub payload: &'a [u8],
}

impl<'a> Envelope<'a> {
    /// Creates an envelope for the given payload and device type.
    pub fn new(payload: &'a [u8], device_type: DeviceType) -> Self {
        Self {
            device_type,
            payload,
        }
    }

    /// Returns the 16-byte header for this envelope.
    pub fn header(&self) -> [u8; HEADER_LEN] {
        let mut header = [0u8; HEADER_LEN];
        header[..4].copy_from_slice(MAGIC);
        header[4..8].copy_from_slice(self.device_type.tag());
        header[8..].copy_from_slice(MARKER);
        header
    }

    /// Total serialized length (header plus payload).
    pub fn len(&self) -> usize {
        HEADER_LEN + self.payload.len()
    }

    /// Always false: an envelope carries at least its header.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Writes header then payload to a writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.header())?;
        writer.write_all(self.payload)?;
        Ok(())
    }

    /// Serializes the envelope to a byte vector.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.len());
        buffer.extend_from_slice(&self.header());
        buffer.extend_from_slice(self.payload);
        buffer
    }
}
