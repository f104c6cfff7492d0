//! # Chapter Model
//!
//! One surah as delivered by the equran.id API. Records are never mutated
//! after they are parsed; everything the screen displays is derived from
//! these fields on demand.
//!
//! ```text
//! API field     Rust field         Example
//! ──────────    ────────────────   ───────────
//! nomor         number             1
//! nama          arabic_name        الفاتحة
//! namaLatin     latin_name         Al-Fatihah
//! jumlahAyat    verse_count        7
//! tempatTurun   revelation_place   "mekah"
//! ```

use serde::{Deserialize, Serialize};

/// Place of revelation, as the lower-case code the API sends.
///
/// Only `"mekah"` is recognised. Every other code (including `"madinah"`)
/// is kept verbatim in `Other` so the raw value survives, but it is
/// labelled "Madinah" on screen. A null, missing or non-string value never
/// rejects the record; it becomes `Other` too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "String")]
pub enum RevelationPlace {
    Mekah,
    Other(String),
}

impl RevelationPlace {
    /// The raw API code.
    pub fn code(&self) -> &str {
        match self {
            RevelationPlace::Mekah => "mekah",
            RevelationPlace::Other(code) => code,
        }
    }

    /// Display label. Two-way on purpose: anything that isn't Mekah is Madinah.
    pub fn label(&self) -> &'static str {
        match self {
            RevelationPlace::Mekah => "Mekkah",
            RevelationPlace::Other(_) => "Madinah",
        }
    }
}

impl From<String> for RevelationPlace {
    fn from(code: String) -> Self {
        if code == "mekah" {
            RevelationPlace::Mekah
        } else {
            RevelationPlace::Other(code)
        }
    }
}

impl Default for RevelationPlace {
    fn default() -> Self {
        RevelationPlace::Other(String::new())
    }
}

impl From<serde_json::Value> for RevelationPlace {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(code) => code.into(),
            serde_json::Value::Null => RevelationPlace::default(),
            other => RevelationPlace::Other(other.to_string()),
        }
    }
}

impl From<RevelationPlace> for String {
    fn from(place: RevelationPlace) -> Self {
        match place {
            RevelationPlace::Mekah => "mekah".to_string(),
            RevelationPlace::Other(code) => code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(rename = "nomor")]
    pub number: u32,
    #[serde(rename = "nama")]
    pub arabic_name: String,
    #[serde(rename = "namaLatin")]
    pub latin_name: String,
    #[serde(rename = "jumlahAyat")]
    pub verse_count: u32,
    #[serde(rename = "tempatTurun", default)]
    pub revelation_place: RevelationPlace,
}

impl Chapter {
    /// Stable list key and navigation parameter: the ordinal as a string.
    pub fn key(&self) -> String {
        self.number.to_string()
    }

    /// Secondary line under the Latin name, e.g. `"7 ayat • Mekkah"`.
    pub fn subtitle(&self) -> String {
        format!(
            "{} ayat • {}",
            self.verse_count,
            self.revelation_place.label()
        )
    }
}
