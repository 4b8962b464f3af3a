//! Kecamatan/desa catalog for Kabupaten Kebumen, as used by the entry form.

pub const SUB_DISTRICTS: [&str; 10] = [
    "Ayah",
    "Buayan",
    "Puring",
    "Petanahan",
    "Klirong",
    "Mirit",
    "Prembun",
    "Kutowinangun",
    "Alian",
    "Rowokele",
];

const VILLAGES: [(&str, &[&str]); 10] = [
    ("Ayah", &["Ayah", "Baseh", "Gombong", "Karangbolong", "Karangduwur"]),
    ("Buayan", &["Buayan", "Kalibalik", "Sidoharjo", "Watulawang"]),
    ("Puring", &["Puring", "Kalibening", "Karanggayam", "Tanjungsari"]),
    ("Petanahan", &["Petanahan", "Bener", "Jladri", "Sidomulyo"]),
    ("Klirong", &["Klirong", "Soko", "Tanggeran", "Wadasmalang"]),
    ("Mirit", &["Mirit", "Boto", "Jati", "Sidowarno"]),
    ("Prembun", &["Prembun", "Karangsari", "Sumberejo"]),
    ("Kutowinangun", &["Kutowinangun", "Karangsambung", "Wadas"]),
    ("Alian", &["Alian", "Pujotirto", "Rowokele"]),
    ("Rowokele", &["Rowokele", "Karanggayam", "Pandansari"]),
];

/// Villages of `sub_district`, or an empty slice for an unknown name.
pub fn villages_of(sub_district: &str) -> &'static [&'static str] {
    VILLAGES
        .iter()
        .find(|(name, _)| *name == sub_district)
        .map(|(_, villages)| *villages)
        .unwrap_or(&[])
}

pub fn village_belongs_to(sub_district: &str, village: &str) -> bool {
    villages_of(sub_district).contains(&village)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sub_district_has_villages() {
        for sub_district in SUB_DISTRICTS {
            assert!(!villages_of(sub_district).is_empty(), "{sub_district}");
        }
    }

    #[test]
    fn villages_are_scoped_to_their_sub_district() {
        assert!(village_belongs_to("Petanahan", "Jladri"));
        assert!(!village_belongs_to("Ayah", "Jladri"));
        // Same village name under two sub-districts.
        assert!(village_belongs_to("Puring", "Karanggayam"));
        assert!(village_belongs_to("Rowokele", "Karanggayam"));
        assert!(villages_of("Jakarta").is_empty());
    }
}
