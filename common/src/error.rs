use thiserror::Error;

/// Reasons a form cannot be submitted.
///
/// Messages are user-facing and are shown in the toast/alert as they are.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    #[error("Kuantitas harus berupa angka lebih dari 0")]
    InvalidQuantity,

    #[error("Alamat email tidak valid: {0}")]
    InvalidEmail(String),

    #[error("Desa {village} tidak termasuk Kecamatan {sub_district}")]
    VillageOutsideSubDistrict {
        sub_district: String,
        village: String,
    },

    #[error("Age must be a whole number between 0 and 150")]
    InvalidAge,

    #[error("Estimated cost must be a number greater than 0")]
    InvalidAmount,
}
