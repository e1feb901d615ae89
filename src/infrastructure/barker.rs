use crate::domain::ports::DialogueSource;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

const CANNED_LINES: [&str; 4] = [
    "Step right up, the crystals are warm tonight!",
    "Three balls, twelve cards, one destiny!",
    "Winners walk tall at the Perya!",
    "The table is honest and the night is young!",
];

/// A dialogue source that cycles through canned barker lines.
///
/// Stands in for the generative backend; always answers, never slow.
#[derive(Default)]
pub struct CannedBarker {
    cursor: AtomicUsize,
}

impl CannedBarker {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DialogueSource for CannedBarker {
    async fn line(&self, _context: &str) -> Result<String> {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        Ok(CANNED_LINES[i % CANNED_LINES.len()].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_canned_barker_cycles_lines() {
        let barker = CannedBarker::new();
        let first = barker.line("round won").await.unwrap();
        let second = barker.line("round lost").await.unwrap();
        assert_ne!(first, second);

        for _ in 0..CANNED_LINES.len() - 2 {
            barker.line("filler").await.unwrap();
        }
        assert_eq!(barker.line("wrapped").await.unwrap(), first);
    }
}
