//! Verlauf der ausgeführten Commands für die Status-Bar.
//!
//! Aufeinanderfolgende gleiche Commands (z.B. die vielen `ExtendStroke`
//! eines Strokes) werden zu einem Eintrag mit Zähler zusammengefasst.

use super::AppCommand;

/// Ein Verlaufseintrag: Command-Kurzname und Anzahl direkter Wiederholungen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    pub label: &'static str,
    pub repeat: usize,
}

impl std::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.repeat > 1 {
            write!(f, "{} ×{}", self.label, self.repeat)
        } else {
            f.write_str(self.label)
        }
    }
}

/// Begrenzter Command-Verlauf in Ausführungsreihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<LogEntry>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 200;

    /// Erstellt einen leeren Verlauf.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nimmt einen ausgeführten Command auf.
    pub fn record(&mut self, command: &AppCommand) {
        let label = command.label();
        if let Some(last) = self.entries.last_mut() {
            if last.label == label {
                last.repeat += 1;
                return;
            }
        }

        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(LogEntry { label, repeat: 1 });
    }

    /// Anzahl der Einträge (Wiederholungen zählen einfach).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Kurzname des zuletzt ausgeführten Commands.
    pub fn last_label(&self) -> Option<&'static str> {
        self.entries.last().map(|e| e.label)
    }

    /// Die letzten `count` Einträge, neuester zuerst.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev().take(count)
    }
}
