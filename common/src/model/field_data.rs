use serde::{Deserialize, Serialize};
use std::fmt;

/// A single fisheries-production observation reported by a field officer.
///
/// Records live in the validation queue only while unresolved; approving or
/// rejecting one removes it (see `crate::validation`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDataRecord {
    /// Opaque identifier such as `FD-001`. Never changes once created.
    pub id: String,
    /// Observation date as an ISO `YYYY-MM-DD` string.
    pub date: String,
    /// Kecamatan.
    pub sub_district: String,
    /// Desa. Must belong to `sub_district` when entered through the form.
    pub village: String,
    pub commodity: Commodity,
    pub quantity: f64,
    pub unit: Unit,
    /// Name of the submitting officer. Free text, not a user id.
    pub reported_by: String,
    pub status: RecordStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Pending,
    Draft,
}

impl RecordStatus {
    pub const ALL: [RecordStatus; 2] = [RecordStatus::Pending, RecordStatus::Draft];

    pub fn label(self) -> &'static str {
        match self {
            RecordStatus::Pending => "Pending",
            RecordStatus::Draft => "Draft",
        }
    }

    /// Value used in `<select>` options.
    pub fn key(self) -> &'static str {
        match self {
            RecordStatus::Pending => "pending",
            RecordStatus::Draft => "draft",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

/// Species or product being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Commodity {
    #[serde(rename = "Ikan Bandeng")]
    IkanBandeng,
    #[serde(rename = "Ikan Nila")]
    IkanNila,
    #[serde(rename = "Ikan Lele")]
    IkanLele,
    #[serde(rename = "Ikan Gurame")]
    IkanGurame,
    #[serde(rename = "Ikan Tongkol")]
    IkanTongkol,
    #[serde(rename = "Ikan Cakalang")]
    IkanCakalang,
    #[serde(rename = "Udang Windu")]
    UdangWindu,
    #[serde(rename = "Udang Vaname")]
    UdangVaname,
    #[serde(rename = "Cumi-cumi")]
    CumiCumi,
    #[serde(rename = "Rajungan")]
    Rajungan,
}

impl Commodity {
    pub const ALL: [Commodity; 10] = [
        Commodity::IkanBandeng,
        Commodity::IkanNila,
        Commodity::IkanLele,
        Commodity::IkanGurame,
        Commodity::IkanTongkol,
        Commodity::IkanCakalang,
        Commodity::UdangWindu,
        Commodity::UdangVaname,
        Commodity::CumiCumi,
        Commodity::Rajungan,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Commodity::IkanBandeng => "Ikan Bandeng",
            Commodity::IkanNila => "Ikan Nila",
            Commodity::IkanLele => "Ikan Lele",
            Commodity::IkanGurame => "Ikan Gurame",
            Commodity::IkanTongkol => "Ikan Tongkol",
            Commodity::IkanCakalang => "Ikan Cakalang",
            Commodity::UdangWindu => "Udang Windu",
            Commodity::UdangVaname => "Udang Vaname",
            Commodity::CumiCumi => "Cumi-cumi",
            Commodity::Rajungan => "Rajungan",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unit of measure for `FieldDataRecord::quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    Kg,
    Ton,
    Ekor,
    Keranjang,
}

impl Unit {
    pub const ALL: [Unit; 4] = [Unit::Kg, Unit::Ton, Unit::Ekor, Unit::Keranjang];

    pub fn label(self) -> &'static str {
        match self {
            Unit::Kg => "Kg",
            Unit::Ton => "Ton",
            Unit::Ekor => "Ekor",
            Unit::Keranjang => "Keranjang",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.label() == label)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Numeric suffix of an `FD-nnn` id.
pub fn record_seq(id: &str) -> Option<u32> {
    id.strip_prefix("FD-")?.parse().ok()
}

/// Highest `FD-nnn` suffix among `ids`, or 0.
pub fn highest_record_seq<'a>(ids: impl IntoIterator<Item = &'a str>) -> u32 {
    ids.into_iter().filter_map(record_seq).max().unwrap_or(0)
}

pub fn record_id(seq: u32) -> String {
    format!("FD-{:03}", seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commodity_serializes_with_display_name() {
        let json = serde_json::to_string(&Commodity::UdangVaname).unwrap();
        assert_eq!(json, "\"Udang Vaname\"");
        assert_eq!(Commodity::from_label("Cumi-cumi"), Some(Commodity::CumiCumi));
        assert_eq!(Commodity::from_label("Paus"), None);
    }

    #[test]
    fn status_keys_round_trip_through_select_values() {
        for status in RecordStatus::ALL {
            assert_eq!(RecordStatus::from_key(status.key()), Some(status));
        }
        assert_eq!(RecordStatus::from_key("all"), None);
    }

    #[test]
    fn highest_record_seq_ignores_foreign_ids() {
        assert_eq!(highest_record_seq(Vec::<&str>::new()), 0);
        assert_eq!(highest_record_seq(["FD-002", "FD-007", "FD-003"]), 7);
        assert_eq!(highest_record_seq(["X-99", "FD-abc"]), 0);
        assert_eq!(record_seq("FD-4294967295"), Some(u32::MAX));
        assert_eq!(record_id(8), "FD-008");
    }
}
