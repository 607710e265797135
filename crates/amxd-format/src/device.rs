//! Device types and their envelope tags.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EnvelopeError;

/// The kind of device an envelope describes.
///
/// The host reads the tag to decide which track kind the device loads on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    /// Audio effect.
    Audio,
    /// MIDI effect.
    Midi,
    /// Instrument.
    Instrument,
}

impl DeviceType {
    /// All device types, in tag-table order.
    pub const ALL: [DeviceType; 3] = [DeviceType::Audio, DeviceType::Midi, DeviceType::Instrument];

    /// Returns the 4-byte header tag for this device type.
    pub fn tag(&self) -> &'static [u8; 4] {
        match self {
            DeviceType::Audio => b"aaaa",
            DeviceType::Midi => b"mmmm",
            DeviceType::Instrument => b"iiii",
        }
    }

    /// Returns the canonical selector name (e.g., "audio").
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Audio => "audio",
            DeviceType::Midi => "midi",
            DeviceType::Instrument => "instrument",
        }
    }

    /// Returns a short human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            DeviceType::Audio => "audio effect",
            DeviceType::Midi => "MIDI effect",
            DeviceType::Instrument => "instrument",
        }
    }

    /// Returns the host track kind a device of this type is dropped onto.
    pub fn track_kind(&self) -> &'static str {
        match self {
            DeviceType::Audio => "audio",
            DeviceType::Midi | DeviceType::Instrument => "MIDI",
        }
    }
}

impl FromStr for DeviceType {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "audio" => Ok(DeviceType::Audio),
            "midi" => Ok(DeviceType::Midi),
            "instrument" => Ok(DeviceType::Instrument),
            other => Err(EnvelopeError::invalid_device_type(other)),
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(DeviceType::Audio.tag(), b"aaaa");
        assert_eq!(DeviceType::Midi.tag(), b"mmmm");
        assert_eq!(DeviceType::Instrument.tag(), b"iiii");
    }

    #[test]
    fn test_parse_known_names() {
        for t in DeviceType::ALL {
            assert_eq!(t.as_str().parse::<DeviceType>().unwrap(), t);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_miscased() {
        for name in ["unknown", "", "Audio", "MIDI", " audio", "instrument "] {
            let err = name.parse::<DeviceType>().unwrap_err();
            match err {
                EnvelopeError::InvalidDeviceType { name: rejected } => assert_eq!(rejected, name),
                other => panic!("expected InvalidDeviceType, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_track_kind() {
        assert_eq!(DeviceType::Audio.track_kind(), "audio");
        assert_eq!(DeviceType::Midi.track_kind(), "MIDI");
        assert_eq!(DeviceType::Instrument.track_kind(), "MIDI");
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&DeviceType::Instrument).unwrap();
        assert_eq!(json, "\"instrument\"");
        let parsed: DeviceType = serde_json::from_str("\"midi\"").unwrap();
        assert_eq!(parsed, DeviceType::Midi);
    }

    #[test]
    fn test_display() {
        assert_eq!(DeviceType::Audio.to_string(), "audio");
    }
}
