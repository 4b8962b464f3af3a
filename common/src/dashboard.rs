//! Figures shown on the monitoring dashboard.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kpis {
    pub annual_production_kg: u64,
    pub growth_percent: f64,
    pub validated_records: u64,
    pub pending_records: usize,
}

impl Kpis {
    /// Pending comes from the live validation queue; the rest is mock data.
    pub fn with_pending(pending_records: usize) -> Self {
        Self {
            annual_production_kg: 142_580,
            growth_percent: 12.5,
            validated_records: 1_248,
            pending_records,
        }
    }
}

/// One bar or line point, in Kg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: u64,
}

pub fn weekly_production() -> Vec<SeriesPoint> {
    [1250, 1580, 1420, 1890, 1650, 2100, 1920, 2250]
        .into_iter()
        .enumerate()
        .map(|(i, value)| SeriesPoint {
            label: format!("Minggu {}", i + 1),
            value,
        })
        .collect()
}

pub fn production_by_sub_district() -> Vec<SeriesPoint> {
    [
        ("Ayah", 4500),
        ("Buayan", 3200),
        ("Puring", 5800),
        ("Petanahan", 6200),
        ("Klirong", 2900),
        ("Mirit", 3400),
    ]
    .into_iter()
    .map(|(label, value)| SeriesPoint {
        label: label.to_string(),
        value,
    })
    .collect()
}

/// Largest value of a series, used to scale bars. Never zero.
pub fn series_max(points: &[SeriesPoint]) -> u64 {
    points.iter().map(|p| p.value).max().unwrap_or(0).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Excel,
}

impl ExportFormat {
    pub fn key(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "excel",
        }
    }

    /// Alert text of the mock export.
    pub fn export_message(self) -> String {
        format!(
            "Mengekspor laporan dalam format {}...",
            self.key().to_uppercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_shapes() {
        let weekly = weekly_production();
        assert_eq!(weekly.len(), 8);
        assert_eq!(weekly[0].label, "Minggu 1");
        assert_eq!(series_max(&weekly), 2250);

        let regions = production_by_sub_district();
        assert_eq!(regions.len(), 6);
        assert_eq!(series_max(&regions), 6200);
        assert_eq!(series_max(&[]), 1);
    }

    #[test]
    fn export_message_upper_cases_format() {
        assert_eq!(
            ExportFormat::Excel.export_message(),
            "Mengekspor laporan dalam format EXCEL..."
        );
        assert_eq!(
            ExportFormat::Pdf.export_message(),
            "Mengekspor laporan dalam format PDF..."
        );
    }

    #[test]
    fn pending_kpi_is_live() {
        assert_eq!(Kpis::with_pending(3).pending_records, 3);
    }
}
