use log::debug;

pub use crate::config::*;

/// A builder for assembling a registry from the rows of a participant list.
///
/// All the readers go through the builder, so they share the same acceptance rule:
/// a row is kept only if both its name and its handle are non-blank.
///
/// ```
/// pub use prize_draw::builder::Builder;
/// # use prize_draw::LoadErrors;
///
/// let mut builder = Builder::new();
/// builder.add_row(2, Some("Alice"), Some("@alice"));
/// builder.add_row(3, Some("   "), Some("@nobody"));
/// builder.add_row(4, Some("Bob"), None);
///
/// let registry = builder.build()?;
/// assert_eq!(registry.len(), 1);
/// # Ok::<(), LoadErrors>(())
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    pub(crate) _entries: Vec<Entry>,
    pub(crate) _rows_read: usize,
}

impl Builder {
    pub fn new() -> Builder {
        Builder::default()
    }

    /// Adds one data row of the source.
    ///
    /// `row` is the position of the row in the source, starting at 1 with the header.
    /// Returns whether the row was accepted.
    pub fn add_row(&mut self, row: u32, name: Option<&str>, handle: Option<&str>) -> bool {
        self._rows_read += 1;
        let participant = match (name, handle) {
            (Some(n), Some(h)) => Participant::from_fields(n, h),
            _ => None,
        };
        match participant {
            Some(participant) => {
                self._entries.push(Entry {
                    id: EntryId(row),
                    participant,
                });
                true
            }
            None => {
                debug!(
                    "add_row: skipping row {}: name {:?} handle {:?}",
                    row, name, handle
                );
                false
            }
        }
    }

    /// Adds a participant as if it were the next row of the source.
    pub fn add_participant_simple(&mut self, name: &str, handle: &str) -> bool {
        // Row 1 is the header.
        let row = (self._rows_read + 2) as u32;
        self.add_row(row, Some(name), Some(handle))
    }

    pub fn build(self) -> Result<Registry, LoadErrors> {
        if self._entries.is_empty() {
            return Err(LoadErrors::NoUsableRows {
                rows_read: self._rows_read,
            });
        }
        debug!(
            "build: {} participants out of {} rows",
            self._entries.len(),
            self._rows_read
        );
        Ok(Registry {
            entries: self._entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_skipped() {
        let mut b = Builder::new();
        assert!(b.add_participant_simple("A", "a"));
        assert!(!b.add_participant_simple("", "b"));
        assert!(b.add_participant_simple("C", "c"));
        let reg = b.build().unwrap();
        let names: Vec<String> = reg.participants().map(|p| p.to_string()).collect();
        assert_eq!(names, vec!["A - a", "C - c"]);
    }

    #[test]
    fn rows_keep_source_numbers() {
        let mut b = Builder::new();
        b.add_participant_simple("A", "a");
        b.add_participant_simple("  ", "b");
        b.add_participant_simple("C", "c");
        let reg = b.build().unwrap();
        let ids: Vec<EntryId> = reg.list().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![EntryId(2), EntryId(4)]);
    }

    #[test]
    fn values_are_trimmed() {
        let mut b = Builder::new();
        b.add_row(2, Some("  Alice "), Some("\t@a\n"));
        let reg = b.build().unwrap();
        assert_eq!(
            reg.list()[0].participant,
            Participant {
                name: "Alice".to_string(),
                handle: "@a".to_string()
            }
        );
    }

    #[test]
    fn missing_cells_are_skipped() {
        let mut b = Builder::new();
        b.add_row(2, None, Some("@a"));
        b.add_row(3, Some("Bob"), None);
        b.add_row(4, Some("Cara"), Some("@c"));
        let reg = b.build().unwrap();
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.list()[0].id, EntryId(4));
    }

    #[test]
    fn no_usable_rows() {
        let mut b = Builder::new();
        b.add_row(2, Some(""), Some(""));
        b.add_row(3, Some("Bob"), Some(" "));
        assert_eq!(b.build(), Err(LoadErrors::NoUsableRows { rows_read: 2 }));
        assert_eq!(
            Builder::new().build(),
            Err(LoadErrors::NoUsableRows { rows_read: 0 })
        );
    }
}
