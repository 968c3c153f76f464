//! CSV export of the projection series.
//!
//! The reporting collaborator renders charts from these files; output is
//! deterministic for identical inputs so regenerated reports match
//! byte-for-byte.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::finance::types::{MonthlyData, YearlyData};

/// Column header for the first-year monthly series.
const MONTHLY_HEADER: &str = "month,production_kwh,consumption_kwh,surplus_kwh,\
                              deficit_kwh,savings";

/// Column header for the 25-year projection series.
const YEARLY_HEADER: &str = "year,production_kwh,consumption_kwh,savings,\
                             cumulative_savings,cumulative_cost,net_profit,roi_pct,\
                             degradation_factor,cash_flow_without_solar";

/// Exports a scenario's monthly series to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_monthly_csv(rows: &[MonthlyData], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_monthly_csv(rows, buf)
}

/// Writes a scenario's monthly series as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_monthly_csv(rows: &[MonthlyData], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(MONTHLY_HEADER.split(',').map(str::trim))?;
    for row in rows {
        wtr.write_record(&[
            row.month.clone(),
            format!("{:.0}", row.production),
            format!("{:.0}", row.consumption),
            format!("{:.0}", row.surplus),
            format!("{:.0}", row.deficit),
            format!("{:.0}", row.savings),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports a scenario's 25-year projection to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_yearly_csv(rows: &[YearlyData], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_yearly_csv(rows, buf)
}

/// Writes a scenario's 25-year projection as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_yearly_csv(rows: &[YearlyData], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(YEARLY_HEADER.split(',').map(str::trim))?;
    for row in rows {
        wtr.write_record(&[
            row.year.to_string(),
            format!("{:.0}", row.production),
            format!("{:.0}", row.consumption),
            format!("{:.0}", row.savings),
            format!("{:.0}", row.cumulative_savings),
            format!("{:.0}", row.cumulative_cost),
            format!("{:.0}", row.net_profit),
            format!("{:.1}", row.roi_pct),
            format!("{:.4}", row.degradation_factor),
            format!("{:.0}", row.cash_flow_without_solar),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
