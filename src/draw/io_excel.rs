// Primitives for reading spreadsheets.

use calamine::{open_workbook_auto, DataType, Range, Reader};

use crate::draw::{io_common::cell_text, *};

pub fn read_excel_participants(path: &str, worksheet: Option<&str>) -> RaffleResult<Registry> {
    let mut workbook = open_workbook_auto(path).context(OpeningExcelSnafu { path })?;
    let wrange = match worksheet {
        Some(name) => workbook
            .worksheet_range(name)
            .context(MissingWorksheetSnafu { path, name })?
            .context(OpeningExcelSnafu { path })?,
        None => workbook
            .worksheet_range_at(0)
            .context(EmptyExcelSnafu { path })?
            .context(OpeningExcelSnafu { path })?,
    };
    participants_from_range(&wrange, path)
}

/// Reads the participants of a worksheet. The first row is the header.
pub fn participants_from_range(wrange: &Range<DataType>, path: &str) -> RaffleResult<Registry> {
    let mut iter = wrange.rows();
    let header = iter.next();
    debug!("read_excel_participants: header: {:?}", header);

    let mut builder = Builder::new();
    for (idx, row) in iter.enumerate() {
        // The header is row 1.
        let lineno = (idx + 2) as u32;
        let name = row.get(0).and_then(cell_text);
        let handle = row.get(1).and_then(cell_text);
        builder.add_row(lineno, name.as_deref(), handle.as_deref());
    }
    builder.build().context(NoParticipantsLoadedSnafu { path })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(rows: &[(&str, &str)]) -> Range<DataType> {
        let mut r = Range::new((0, 0), (rows.len() as u32, 1));
        r.set_value((0, 0), DataType::String("Name".to_string()));
        r.set_value((0, 1), DataType::String("Handle".to_string()));
        for (i, (n, h)) in rows.iter().enumerate() {
            let row = (i + 1) as u32;
            if !n.is_empty() {
                r.set_value((row, 0), DataType::String(n.to_string()));
            }
            if !h.is_empty() {
                r.set_value((row, 1), DataType::String(h.to_string()));
            }
        }
        r
    }

    #[test]
    fn skips_header_and_blank_rows() {
        let r = sheet(&[("A", "a"), ("", "b"), ("C", "c")]);
        let reg = participants_from_range(&r, "test.xlsx").unwrap();
        let shown: Vec<String> = reg.participants().map(|p| p.to_string()).collect();
        assert_eq!(shown, vec!["A - a", "C - c"]);
        let rows: Vec<u32> = reg.list().iter().map(|e| e.id.0).collect();
        assert_eq!(rows, vec![2, 4]);
    }

    #[test]
    fn numeric_handles() {
        let mut r = sheet(&[("Dan", "")]);
        r.set_value((1, 1), DataType::Float(42.0));
        let reg = participants_from_range(&r, "test.xlsx").unwrap();
        assert_eq!(reg.list()[0].participant.handle, "42");
    }

    #[test]
    fn only_header() {
        let r = sheet(&[]);
        assert!(matches!(
            participants_from_range(&r, "test.xlsx"),
            Err(RaffleError::NoParticipantsLoaded { .. })
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            read_excel_participants("/nonexistent/people.xlsx", None),
            Err(RaffleError::OpeningExcel { .. })
        ));
    }
}
