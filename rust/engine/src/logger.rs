use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::{HandOutcome, ShowdownEntry};
use crate::player::PlayerAction;

/// Represents a betting street.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Before any community card (private cards dealt)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
}

impl Street {
    pub const ALL: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

    /// Community cards dealt when this street opens.
    pub fn cards_dealt(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Street::Preflop => "preflop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        }
    }
}

/// Records a single action applied during a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: String,
    pub street: Street,
    /// The action actually applied (after any bot downgrade)
    pub action: PlayerAction,
    /// Chips moved from the stack into the pot
    pub paid: u32,
    /// `true` when a bot's chosen action was unaffordable and got replaced
    #[serde(default)]
    pub downgraded: bool,
}

/// Chips forced into the pot before cards are played.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BlindPost {
    pub player: String,
    pub amount: u32,
}

/// Complete record of a settled hand, one JSON object per line of the
/// hand history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Unique identifier for this hand (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// Seed of the hand's random source (enables deterministic replay)
    pub seed: u64,
    pub blinds: Vec<BlindPost>,
    /// Chronological list of all player actions
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    pub pot: u32,
    pub winners: Vec<String>,
    pub awards: Vec<(String, u32)>,
    /// Timestamp when the hand was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

/// Hands revealed when the pot went to showdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    pub hands: Vec<ShowdownEntry>,
    /// e.g. "split pot"
    #[serde(default)]
    pub notes: Option<String>,
}

impl HandRecord {
    pub fn from_outcome(hand_id: String, outcome: &HandOutcome) -> Self {
        let showdown = outcome.showdown.as_ref().map(|hands| ShowdownInfo {
            hands: hands.clone(),
            notes: (outcome.winners.len() > 1).then(|| "split pot".to_string()),
        });
        Self {
            hand_id,
            seed: outcome.seed,
            blinds: outcome.blinds.clone(),
            actions: outcome.actions.clone(),
            board: outcome.board.clone(),
            pot: outcome.pot,
            winners: outcome.winners.clone(),
            awards: outcome.awards.clone(),
            ts: None,
            showdown,
        }
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Hand history sink: one [`HandRecord`] per line, LF terminated, ids
/// numbered from 1 under the date the history was opened.
pub struct HandLogger<W: Write = BufWriter<File>> {
    sink: W,
    date: String,
    seq: u32,
}

impl HandLogger {
    /// Truncates or creates the file at `path`, creating missing parent
    /// directories first.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)?,
            _ => {}
        }
        let file = File::create(path)?;
        Ok(Self::new(
            BufWriter::new(file),
            &Utc::now().format("%Y%m%d").to_string(),
        ))
    }
}

impl<W: Write> HandLogger<W> {
    pub fn new(sink: W, date: &str) -> Self {
        Self {
            sink,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    /// Numbers a settled hand, stamps it and appends it. Returns what was written.
    pub fn log(&mut self, outcome: &HandOutcome) -> io::Result<HandRecord> {
        let mut record = HandRecord::from_outcome(self.next_id(), outcome);
        record.ts = Some(now_rfc3339());
        self.append(&record)?;
        Ok(record)
    }

    /// Appends a prepared record; `ts` is filled in only when absent.
    pub fn write(&mut self, record: &HandRecord) -> io::Result<()> {
        if record.ts.is_some() {
            return self.append(record);
        }
        let stamped = HandRecord {
            ts: Some(now_rfc3339()),
            ..record.clone()
        };
        self.append(&stamped)
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn append(&mut self, record: &HandRecord) -> io::Result<()> {
        serde_json::to_writer(&mut self.sink, record).map_err(io::Error::other)?;
        self.sink.write_all(b"\n")?;
        self.sink.flush()
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
