// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// A person taking part in the draw.
///
/// Both fields are trimmed and never empty when built through
/// [`Participant::from_fields`].
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Participant {
    pub name: String,
    /// The social handle or any other identifier shown next to the name.
    pub handle: String,
}

impl Participant {
    /// Returns None if the name or the handle is blank after trimming.
    pub fn from_fields(name: &str, handle: &str) -> Option<Participant> {
        let name = name.trim();
        let handle = handle.trim();
        if name.is_empty() || handle.is_empty() {
            return None;
        }
        Some(Participant {
            name: name.to_string(),
            handle: handle.to_string(),
        })
    }
}

impl Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.handle)
    }
}

/// The row of the source list a participant was read from (1-based, the header is row 1).
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub struct EntryId(pub u32);

/// A participant together with its position in the loaded list.
///
/// Two rows with the same name and handle are two different entries.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct Entry {
    pub id: EntryId,
    pub participant: Participant,
}

/// All the participants of one load, in source order.
///
/// A registry is built once by [`crate::builder::Builder`] and never modified
/// afterwards. Loading a new list means replacing the whole value.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct Registry {
    pub(crate) entries: Vec<Entry>,
}

impl Registry {
    pub fn empty() -> Registry {
        Registry::default()
    }

    pub fn list(&self) -> &[Entry] {
        &self.entries
    }

    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.entries.iter().map(|e| &e.participant)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ********* Stages **********

/// The three prizes, in the order they are drawn.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub enum Prize {
    Third,
    Second,
    First,
}

impl Prize {
    pub const ALL: [Prize; 3] = [Prize::Third, Prize::Second, Prize::First];

    pub fn title(&self) -> &'static str {
        match self {
            Prize::Third => "Third Place",
            Prize::Second => "Second Place",
            Prize::First => "First Place",
        }
    }

    /// Short lowercase name, used as a key in summaries and configuration files.
    pub fn key(&self) -> &'static str {
        match self {
            Prize::Third => "third",
            Prize::Second => "second",
            Prize::First => "first",
        }
    }

    /// The label of the action that awards this prize.
    pub fn action_label(&self) -> String {
        format!("Draw {}", self.title())
    }
}

/// The next prize to award, as a counter: 1 is the third place, 3 the first place.
///
/// Any value above 3 means that all the prizes have been awarded.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub struct DrawStage(pub(crate) u32);

impl DrawStage {
    pub const INITIAL: DrawStage = DrawStage(1);
    pub const LAST: u32 = Prize::ALL.len() as u32;

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn prize(&self) -> Option<Prize> {
        match self.0 {
            1..=DrawStage::LAST => Some(Prize::ALL[(self.0 - 1) as usize]),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.0 > DrawStage::LAST
    }

    pub(crate) fn next(self) -> DrawStage {
        DrawStage(self.0 + 1)
    }
}

impl Default for DrawStage {
    fn default() -> Self {
        DrawStage::INITIAL
    }
}

// ******** Errors *********

/// Errors that prevent a draw from happening. The engine is left unchanged.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum DrawErrors {
    /// The registry does not contain anybody.
    NoParticipants,
    /// Everybody in the registry has already won a prize.
    NoEligibleParticipants,
    /// The three prizes have been awarded.
    DrawSequenceExhausted,
}

impl Error for DrawErrors {}

impl Display for DrawErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawErrors::NoParticipants => write!(f, "No participants in the list"),
            DrawErrors::NoEligibleParticipants => {
                write!(f, "No participants left who have not already won")
            }
            DrawErrors::DrawSequenceExhausted => write!(f, "All the prizes have been awarded"),
        }
    }
}

/// Errors when assembling a registry from source rows.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum LoadErrors {
    /// None of the data rows had both a name and a handle.
    NoUsableRows { rows_read: usize },
}

impl Error for LoadErrors {}

impl Display for LoadErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadErrors::NoUsableRows { rows_read } => write!(
                f,
                "no row with both a name and a handle ({} data rows read)",
                rows_read
            ),
        }
    }
}
