//! CSV export encoder.

use crate::error::ExportError;
use crate::policy::ResultTable;

/// Serialize the table as UTF-8 CSV: header row, then one row per record,
/// in table order.
pub fn write_csv(table: &ResultTable) -> Result<Vec<u8>, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(ResultTable::header())?;
    for row in table.rows() {
        wtr.write_record(&row)?;
    }

    wtr.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}
