//! Ableton Live EQ Eight, as an 8-band description loaded from JSON.

use serde::{Deserialize, Serialize};

/// EQ Eight filter modes, numbered as Live stores them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum AbletonBandMode {
    LowCut48 = 0,
    LowCut12 = 1,
    LeftShelf = 2,
    Bell = 3,
    Notch = 4,
    RightShelf = 5,
    HighCut12 = 6,
    HighCut48 = 7,
}

impl TryFrom<i32> for AbletonBandMode {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => AbletonBandMode::LowCut48,
            1 => AbletonBandMode::LowCut12,
            2 => AbletonBandMode::LeftShelf,
            3 => AbletonBandMode::Bell,
            4 => AbletonBandMode::Notch,
            5 => AbletonBandMode::RightShelf,
            6 => AbletonBandMode::HighCut12,
            7 => AbletonBandMode::HighCut48,
            other => return Err(format!("unknown EQ Eight band mode {other}")),
        })
    }
}

impl From<AbletonBandMode> for i32 {
    fn from(mode: AbletonBandMode) -> Self {
        mode as i32
    }
}

/// EQ Eight global channel mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum AbletonChannelMode {
    #[default]
    Stereo = 0,
    LeftRight = 1,
    MidSide = 2,
}

impl TryFrom<i32> for AbletonChannelMode {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AbletonChannelMode::Stereo),
            1 => Ok(AbletonChannelMode::LeftRight),
            2 => Ok(AbletonChannelMode::MidSide),
            other => Err(format!("unknown EQ Eight channel mode {other}")),
        }
    }
}

impl From<AbletonChannelMode> for i32 {
    fn from(mode: AbletonChannelMode) -> Self {
        mode as i32
    }
}

/// EQ Eight keeps two parallel band sets. `ParameterB` is the second
/// channel in LeftRight and MidSide modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandSet {
    ParameterA,
    ParameterB,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbletonEq8Band {
    pub parameter: BandSet,
    /// Band number, 0 to 7
    pub number: u8,
    pub is_on: bool,
    pub mode: AbletonBandMode,
    pub freq: f64,
    pub gain: f64,
    pub q: f64,
}

impl AbletonEq8Band {
    pub fn new(number: u8, mode: AbletonBandMode, freq: f64, gain: f64, q: f64) -> Self {
        Self {
            parameter: BandSet::ParameterA,
            number,
            is_on: true,
            mode,
            freq,
            gain,
            q,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbletonEq8 {
    pub mode: AbletonChannelMode,
    pub bands: Vec<AbletonEq8Band>,
}

impl AbletonEq8 {
    /// `ParameterA` bands, by band number
    pub fn primary_bands(&self) -> Vec<&AbletonEq8Band> {
        let mut bands: Vec<_> = self
            .bands
            .iter()
            .filter(|b| b.parameter == BandSet::ParameterA)
            .collect();
        bands.sort_by_key(|b| b.number);
        bands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let json = r#"{
            "mode": 0,
            "bands": [
                { "parameter": "ParameterA", "number": 3, "is_on": false,
                  "mode": 3, "freq": 2000, "gain": -3, "q": 3 },
                { "parameter": "ParameterB", "number": 0, "is_on": true,
                  "mode": 2, "freq": 60, "gain": 1, "q": 1 },
                { "parameter": "ParameterA", "number": 0, "is_on": true,
                  "mode": 2, "freq": 50, "gain": 6, "q": 0.71 }
            ]
        }"#;
        let eq: AbletonEq8 = serde_json::from_str(json).unwrap();
        assert_eq!(eq.mode, AbletonChannelMode::Stereo);
        let primary = eq.primary_bands();
        assert_eq!(primary.len(), 2);
        assert_eq!(primary[0].number, 0);
        assert_eq!(primary[0].mode, AbletonBandMode::LeftShelf);
        assert_eq!(primary[1].mode, AbletonBandMode::Bell);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let json = r#"{ "mode": 5, "bands": [] }"#;
        let err = serde_json::from_str::<AbletonEq8>(json).unwrap_err();
        assert!(err.to_string().contains("unknown EQ Eight channel mode 5"));
    }

    #[test]
    fn test_modes_serialize_as_numbers() {
        let band = AbletonEq8Band::new(7, AbletonBandMode::HighCut48, 15000.0, 0.0, 1.0);
        let value = serde_json::to_value(&band).unwrap();
        assert_eq!(value["mode"], 7);
        assert_eq!(value["parameter"], "ParameterA");
    }
}
