//! State of the field-data entry form ("Input Data Lapangan").
//!
//! The form starts `Idle`; after the first edit it is re-validated on every
//! change and reports `Valid` or `Invalid`. Submitting a valid form yields a
//! pending `FieldDataRecord` and resets the form.

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::fixtures::CURRENT_OFFICER;
use crate::model::field_data::{Commodity, FieldDataRecord, RecordStatus, Unit};
use crate::model::region::{village_belongs_to, villages_of};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Valid,
    Invalid,
}

/// One user edit on the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    SubDistrict(String),
    Village(String),
    Date(String),
    Commodity(Option<Commodity>),
    Quantity(String),
    Unit(Unit),
    Notes(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDataForm {
    pub sub_district: String,
    pub village: String,
    pub date: String,
    pub commodity: Option<Commodity>,
    /// Raw text of the quantity input.
    pub quantity: String,
    pub unit: Unit,
    pub officer: String,
    pub notes: String,
    touched: bool,
}

impl Default for FieldDataForm {
    fn default() -> Self {
        Self::new(CURRENT_OFFICER)
    }
}

impl FieldDataForm {
    pub fn new(officer: &str) -> Self {
        Self {
            sub_district: String::new(),
            village: String::new(),
            date: String::new(),
            commodity: None,
            quantity: String::new(),
            unit: Unit::Kg,
            officer: officer.to_string(),
            notes: String::new(),
            touched: false,
        }
    }

    pub fn apply(&mut self, edit: FieldEdit) {
        self.touched = true;
        match edit {
            FieldEdit::SubDistrict(value) => {
                self.sub_district = value;
                self.village.clear();
            }
            FieldEdit::Village(value) => self.village = value,
            FieldEdit::Date(value) => self.date = value,
            FieldEdit::Commodity(value) => self.commodity = value,
            FieldEdit::Quantity(value) => self.quantity = value,
            FieldEdit::Unit(value) => self.unit = value,
            FieldEdit::Notes(value) => self.notes = value,
        }
    }

    /// Villages selectable for the chosen sub-district.
    pub fn available_villages(&self) -> &'static [&'static str] {
        villages_of(&self.sub_district)
    }

    pub fn status(&self) -> FormStatus {
        if !self.touched {
            FormStatus::Idle
        } else if self.validate().is_ok() {
            FormStatus::Valid
        } else {
            FormStatus::Invalid
        }
    }

    /// Checks the required fields and returns the parsed quantity.
    pub fn validate(&self) -> Result<f64, FormError> {
        if self.sub_district.is_empty() {
            return Err(FormError::MissingField("Kecamatan"));
        }
        if self.village.is_empty() {
            return Err(FormError::MissingField("Desa"));
        }
        if !village_belongs_to(&self.sub_district, &self.village) {
            return Err(FormError::VillageOutsideSubDistrict {
                sub_district: self.sub_district.clone(),
                village: self.village.clone(),
            });
        }
        if self.date.is_empty() {
            return Err(FormError::MissingField("Tanggal Produksi"));
        }
        if self.commodity.is_none() {
            return Err(FormError::MissingField("Jenis Komoditas"));
        }
        let raw = self.quantity.trim();
        if raw.is_empty() {
            return Err(FormError::MissingField("Kuantitas Produksi"));
        }
        match raw.parse::<f64>() {
            Ok(quantity) if quantity.is_finite() && quantity > 0.0 => Ok(quantity),
            _ => Err(FormError::InvalidQuantity),
        }
    }

    /// Builds a pending record with `id` and resets the form.
    /// The form is left untouched on error.
    pub fn submit(&mut self, id: String) -> Result<FieldDataRecord, FormError> {
        let quantity = self.validate()?;
        let commodity = self.commodity.ok_or(FormError::MissingField("Jenis Komoditas"))?;
        let notes = self.notes.trim();

        let record = FieldDataRecord {
            id,
            date: self.date.clone(),
            sub_district: self.sub_district.clone(),
            village: self.village.clone(),
            commodity,
            quantity,
            unit: self.unit,
            reported_by: self.officer.clone(),
            status: RecordStatus::Pending,
            notes: (!notes.is_empty()).then(|| notes.to_string()),
        };
        *self = Self::new(&self.officer);
        Ok(record)
    }
}
