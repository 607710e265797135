//! Envelope builder and streaming writer.

use std::io::Write;

use super::Envelope;
use crate::device::DeviceType;
use crate::error::EnvelopeResult;

/// Builds a complete envelope as bytes.
///
/// # Arguments
/// * `payload` - Patcher document bytes (treated as opaque)
/// * `device_type` - Device type encoded in the header
///
/// # Returns
/// `HEADER_LEN + payload.len()` bytes: header followed by the payload
pub fn build(payload: &[u8], device_type: DeviceType) -> Vec<u8> {
    Envelope::new(payload, device_type).to_bytes()
}

/// Builds an envelope from a textual device type selector.
///
/// Fails with `InvalidDeviceType` when `device_type` is not one of
/// `audio`, `midi` or `instrument`. Nothing is built in that case.
pub fn build_named(payload: &[u8], device_type: &str) -> EnvelopeResult<Vec<u8>> {
    let device_type: DeviceType = device_type.parse()?;
    Ok(build(payload, device_type))
}

/// Writes a complete envelope to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `payload` - Patcher document bytes
/// * `device_type` - Device type encoded in the header
///
/// # Returns
/// `EnvelopeError::Io` if the writer fails part way through
pub fn write_envelope<W: Write>(
    writer: &mut W,
    payload: &[u8],
    device_type: DeviceType,
) -> EnvelopeResult<()> {
    Envelope::new(payload, device_type).write_to(writer)?;
    Ok(())
}
