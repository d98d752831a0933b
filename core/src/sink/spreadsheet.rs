//! # XLSX Writer
//!
//! Single worksheet workbook with a bold, frozen header row.
//! Without the `xlsx` feature the writer still exists but refuses to render.

use crate::error::AppResult;
use crate::report::{ColumnRecord, Projection};
use crate::sink::traits::TabularWriter;

/// Name of the only worksheet.
pub const SHEET_NAME: &str = "DB Definition";

/// Excel workbook output.
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxWriter;

#[cfg(feature = "xlsx")]
impl TabularWriter for XlsxWriter {
    fn render(&self, records: &[ColumnRecord], projection: Projection) -> AppResult<Vec<u8>> {
        use crate::error::AppError;
        use rust_xlsxwriter::{Format, Workbook, XlsxError};

        let xlsx_err = |e: XlsxError| AppError::Serialization(format!("XLSX encoding failed: {}", e));

        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME).map_err(xlsx_err)?;

        for (col, header) in projection.headers().iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, *header, &header_format)
                .map_err(xlsx_err)?;
        }

        for (idx, record) in records.iter().enumerate() {
            let row = idx as u32 + 1;
            for (col, cell) in record.cells(projection).iter().enumerate() {
                worksheet
                    .write_string(row, col as u16, cell)
                    .map_err(xlsx_err)?;
            }
        }

        worksheet.set_freeze_panes(1, 0).map_err(xlsx_err)?;
        worksheet.autofit();

        workbook.save_to_buffer().map_err(xlsx_err)
    }
}

#[cfg(not(feature = "xlsx"))]
impl TabularWriter for XlsxWriter {
    fn render(&self, _records: &[ColumnRecord], _projection: Projection) -> AppResult<Vec<u8>> {
        Err(crate::error::AppError::Unsupported(
            "XLSX output requires building with the `xlsx` feature".to_string(),
        ))
    }
}
