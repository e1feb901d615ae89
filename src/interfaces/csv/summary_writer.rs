use crate::domain::player::PlayerRecord;
use crate::error::Result;
use std::io::Write;

/// Writes the final leaderboard as CSV, richest player first.
pub struct SummaryWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> SummaryWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_players(&mut self, mut players: Vec<PlayerRecord>) -> Result<()> {
        players.sort_by(|a, b| b.tokens.cmp(&a.tokens).then_with(|| a.name.cmp(&b.name)));
        for player in players {
            self.writer.serialize(player)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ledger::Tokens;

    fn record(name: &str, tokens: u64) -> PlayerRecord {
        let mut r = PlayerRecord::new(name);
        r.tokens = Tokens::new(tokens);
        r
    }

    #[test]
    fn test_writer_sorts_by_tokens_desc() {
        let mut writer = SummaryWriter::new(Vec::new());
        writer
            .write_players(vec![
                record("low", 10),
                record("high", 900),
                record("mid", 500),
            ])
            .unwrap();

        let out = String::from_utf8(writer.writer.into_inner().unwrap()).unwrap();
        let names: Vec<&str> = out
            .lines()
            .skip(1)
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_writer_emits_header_and_totals() {
        let mut writer = SummaryWriter::new(Vec::new());
        writer.write_players(vec![record("guest", 120)]).unwrap();

        let out = String::from_utf8(writer.writer.into_inner().unwrap()).unwrap();
        assert!(out.starts_with("name,tokens,rounds_played,total_wagered,total_won,last_seen"));
        assert!(out.contains("guest,120,0,0,0"));
    }
}
