//! Begrenztes Command-Log für Diagnose und Replay-Ausgaben.

use super::AppCommand;

/// Ein ausgeführter Command mit fortlaufender Nummer.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandRecord {
    /// Laufende Nummer seit Programmstart (ab 1, überlebt das Kürzen)
    pub seq: u64,
    /// Der Command selbst
    pub command: AppCommand,
}

/// Ringpuffer-artiges Log der ausgeführten Commands, älteste zuerst.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<CommandRecord>,
    next_seq: u64,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Leeres Log, Nummerierung beginnt bei 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Protokolliert einen Command mit der nächsten laufenden Nummer.
    /// Bei MAX_ENTRIES wird die ältere Hälfte verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.next_seq += 1;
        self.entries.push(CommandRecord {
            seq: self.next_seq,
            command: command.clone(),
        });
    }

    /// Anzahl der aktuell gehaltenen Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true`, solange noch nichts protokolliert wurde.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Alle gehaltenen Einträge.
    pub fn entries(&self) -> &[CommandRecord] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_truncates_older_half() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::MAX_ENTRIES {
            log.record(&AppCommand::WriteViewParams);
        }
        log.record(&AppCommand::CopyUrl);

        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        let last = log.entries().last().expect("Eintrag erwartet");
        assert_eq!(last.command, AppCommand::CopyUrl);
        assert_eq!(last.seq, CommandLog::MAX_ENTRIES as u64 + 1);
        assert_eq!(log.entries()[0].seq, CommandLog::MAX_ENTRIES as u64 / 2 + 1);
    }

    #[test]
    fn test_sequence_starts_at_one() {
        let mut log = CommandLog::new();
        assert!(log.is_empty());
        log.record(&AppCommand::MarkCopied);
        assert_eq!(log.entries()[0].seq, 1);
    }
}
