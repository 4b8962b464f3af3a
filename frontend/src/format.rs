//! Display formatting for quantities, money and dates.

use num_format::{Locale, ToFormattedString};
use wasm_bindgen::JsValue;

/// English grouping, as used on the dashboard cards: `142,580`.
pub fn thousands(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

/// Indonesian grouping with at most two decimals: `1.250,5`.
pub fn quantity(value: f64) -> String {
    let cents = (value.max(0.0) * 100.0).round() as u64;
    let mut out = (cents / 100).to_formatted_string(&Locale::id);
    let fraction = cents % 100;
    if fraction != 0 {
        out.push_str(Locale::id.decimal());
        out.push_str(format!("{:02}", fraction).trim_end_matches('0'));
    }
    out
}

pub fn usd(amount: u64) -> String {
    format!("${}", thousands(amount))
}

pub fn percent_change(value: f64) -> String {
    format!("{:+.1}%", value)
}

/// `2025-11-05` as `5/11/2025`. Falls back to the raw text for bad input.
pub fn date_id(iso: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return iso.to_string();
    }
    date.to_locale_date_string("id-ID", &JsValue::UNDEFINED).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_counts_use_commas() {
        assert_eq!(thousands(142_580), "142,580");
        assert_eq!(thousands(47), "47");
    }

    #[test]
    fn quantities_use_indonesian_separators() {
        assert_eq!(quantity(450.0), "450");
        assert_eq!(quantity(1250.5), "1.250,5");
        assert_eq!(quantity(0.25), "0,25");
    }

    #[test]
    fn money_and_growth() {
        assert_eq!(usd(2250), "$2,250");
        assert_eq!(percent_change(12.5), "+12.5%");
    }
}
