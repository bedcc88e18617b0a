// Primitives for reading CSV files.

use std::fs::File;

use crate::draw::*;

pub fn read_csv_participants(path: &str) -> RaffleResult<Registry> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .context(CsvOpenSnafu { path })?;
    participants_from_records(rdr.into_records(), path)
}

fn participants_from_records(
    records: csv::StringRecordsIntoIter<File>,
    path: &str,
) -> RaffleResult<Registry> {
    let mut builder = Builder::new();
    for (idx, line_r) in records.enumerate() {
        let lineno = idx + 1;
        let line = line_r.context(CsvLineParseSnafu { path, lineno })?;
        debug!("read_csv_participants: {:?} {:?}", lineno, line);
        if lineno == 1 {
            // Header
            continue;
        }
        builder.add_row(lineno as u32, line.get(0), line.get(1));
    }
    builder.build().context(NoParticipantsLoadedSnafu { path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn reads_rows_in_order() {
        let f = write_csv("Name,Handle\nAlice,@a\n,@b\nCara , @c \nDan\n");
        let reg = read_csv_participants(f.path().to_str().unwrap()).unwrap();
        let shown: Vec<String> = reg.participants().map(|p| p.to_string()).collect();
        assert_eq!(shown, vec!["Alice - @a", "Cara - @c"]);
        let rows: Vec<u32> = reg.list().iter().map(|e| e.id.0).collect();
        assert_eq!(rows, vec![2, 4]);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let f = write_csv("Name,Handle,Email\nAlice,@a,alice@example.com\n");
        let reg = read_csv_participants(f.path().to_str().unwrap()).unwrap();
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.list()[0].participant.handle, "@a");
    }

    #[test]
    fn header_only() {
        let f = write_csv("Name,Handle\n");
        assert!(matches!(
            read_csv_participants(f.path().to_str().unwrap()),
            Err(RaffleError::NoParticipantsLoaded { .. })
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            read_csv_participants("/nonexistent/people.csv"),
            Err(RaffleError::CsvOpen { .. })
        ));
    }
}
