//! Device envelope format for `.amxd` files.
//!
//! An `.amxd` device is a patcher document (`.maxpat` JSON) prefixed by a
//! fixed 16-byte header that tells the host what kind of device it is.
//!
//! # Layout
//!
//! | Offset | Size | Content                                   |
//! |--------|------|-------------------------------------------|
//! | 0      | 4    | `ampf` magic                              |
//! | 4      | 4    | type tag (`aaaa`, `mmmm` or `iiii`)       |
//! | 8      | 8    | `metaptch` marker                         |
//! | 16     | n    | patcher document bytes, copied unmodified |
//!
//! The payload is never parsed or validated. Frozen devices carry an extra
//! footer whose layout is undocumented; this crate only produces unfrozen
//! devices.
//!
//! # Example
//!
//! ```
//! use amxd_format::{build, DeviceType, HEADER_LEN};
//!
//! let payload = br#"{"patcher":{}}"#;
//! let bytes = build(payload, DeviceType::Midi);
//!
//! assert_eq!(bytes.len(), HEADER_LEN + payload.len());
//! assert_eq!(&bytes[..HEADER_LEN], b"ampfmmmmmetaptch");
//! assert_eq!(&bytes[HEADER_LEN..], payload);
//! ```
//!
//! # Modules
//!
//! - [`device`]: device types and their header tags
//! - [`envelope`]: header layout, builder and writer
//! - [`error`]: error type for selector parsing and I/O

pub mod device;
pub mod envelope;
pub mod error;

pub use device::DeviceType;
pub use envelope::{build, build_named, write_envelope, Envelope, HEADER_LEN, MAGIC, MARKER};
pub use error::{EnvelopeError, EnvelopeResult};
