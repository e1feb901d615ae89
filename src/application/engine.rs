use crate::domain::card::Card;
use crate::domain::command::{ActionType, Command};
use crate::domain::ledger::{BetToggle, Tokens};
use crate::domain::player::PlayerRecord;
use crate::domain::ports::{DialogueSourceBox, RegistryStoreBox};
use crate::domain::table::{BALLS_PER_ROUND, GameTable, RoundResult};
use crate::error::{GameError, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

/// Charge ticks applied when a launch command does not say how long the
/// trigger was held. 25 ticks takes the meter from 0 to full power.
const DEFAULT_HOLD_TICKS: u64 = 25;

/// A dialogue source slower than this is abandoned for a canned line.
const BARKER_TIMEOUT: Duration = Duration::from_secs(2);

/// Substituted when the dialogue source fails or times out. No retry.
const FALLBACK_LINES: [&str; 3] = [
    "Step right up! Your destiny awaits!",
    "The crystals never lie, suki!",
    "Another round, another fortune!",
];

/// What a processed command did, for the caller to render.
#[derive(Debug)]
pub enum Outcome {
    /// The balance after a deposit was credited.
    Balance(Tokens),
    StakeSet(Tokens),
    Bet(BetToggle),
    BetsCleared,
    Round { result: RoundResult, barker: String },
}

/// The main entry point: one player's session at the Perya table.
///
/// Owns the table state machine, the PRNG and the boxed registry/dialogue
/// ports. Commands are strictly sequential; a refused command leaves the
/// table untouched. The registry record is persisted after every accepted
/// command, so a persistent store resumes the player's tokens next session.
pub struct GameEngine {
    table: GameTable,
    rng: StdRng,
    registry: RegistryStoreBox,
    barker: DialogueSourceBox,
    record: PlayerRecord,
    fallback_cursor: usize,
}

impl GameEngine {
    /// Opens a session, resuming the player's token balance if the registry
    /// already knows them.
    pub async fn open(
        player: &str,
        registry: RegistryStoreBox,
        barker: DialogueSourceBox,
    ) -> Result<Self> {
        let record = registry
            .get(player)
            .await?
            .unwrap_or_else(|| PlayerRecord::new(player));
        let mut table = GameTable::new();
        if record.tokens > Tokens::ZERO {
            table.deposit(record.tokens)?;
        }
        Ok(Self {
            table,
            rng: StdRng::from_entropy(),
            registry,
            barker,
            record,
            fallback_cursor: 0,
        })
    }

    /// Replaces the PRNG with a seeded one so a session is reproducible.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn table(&self) -> &GameTable {
        &self.table
    }

    pub async fn process_command(&mut self, cmd: Command) -> Result<Outcome> {
        let outcome = match cmd.action {
            ActionType::Deposit => {
                let amount = require_amount(&cmd, "deposit")?;
                let balance = self.table.deposit(amount)?;
                Outcome::Balance(balance)
            }
            ActionType::Stake => {
                let amount = require_amount(&cmd, "stake")?;
                self.table.set_stake(amount)?;
                Outcome::StakeSet(amount)
            }
            ActionType::Bet => {
                let card = require_card(&cmd)?;
                Outcome::Bet(self.table.toggle_bet(card)?)
            }
            ActionType::Launch => {
                let ticks = cmd.amount.unwrap_or(DEFAULT_HOLD_TICKS);
                let result = self.run_round(ticks)?;
                let barker = self.announce(&result).await;
                self.record.record_round(&result, self.table.balance());
                Outcome::Round { result, barker }
            }
            ActionType::Reset => {
                self.table.reset_bets()?;
                Outcome::BetsCleared
            }
        };

        self.record.tokens = self.table.balance();
        self.record.touch();
        self.registry.store(self.record.clone()).await?;
        Ok(outcome)
    }

    /// Charge, release and resolve the three balls in draw order. The join
    /// counter in the table settles the round when the third ball reports.
    fn run_round(&mut self, hold_ticks: u64) -> Result<RoundResult> {
        self.table.start_charge()?;
        for _ in 0..hold_ticks {
            self.table.tick_charge();
        }
        self.table.release_charge(&mut self.rng)?;
        for _ in 0..BALLS_PER_ROUND {
            self.table.ball_landed()?;
        }
        self.table.take_result()
    }

    /// Asks the dialogue source for a barker line; on failure or timeout,
    /// substitutes a canned one. Never surfaces an error to the round.
    async fn announce(&mut self, result: &RoundResult) -> String {
        let context = if result.matches > 0 {
            format!(
                "HUZZAH! A winning match! Claim your {} Tokens.",
                result.payout
            )
        } else {
            "Tough luck! The crystals have spoken.".to_string()
        };
        match tokio::time::timeout(BARKER_TIMEOUT, self.barker.line(&context)).await {
            Ok(Ok(line)) => line,
            _ => {
                let line = FALLBACK_LINES[self.fallback_cursor % FALLBACK_LINES.len()];
                self.fallback_cursor += 1;
                line.to_string()
            }
        }
    }

    /// Consumes the session and returns every known player record.
    pub async fn into_results(self) -> Result<Vec<PlayerRecord>> {
        self.registry.all_players().await
    }
}

fn require_amount(cmd: &Command, action: &str) -> Result<Tokens> {
    match cmd.amount {
        Some(amount) if amount > 0 => Ok(Tokens::new(amount)),
        _ => Err(GameError::Validation(format!(
            "{action} requires a positive amount"
        ))),
    }
}

fn require_card(cmd: &Command) -> Result<Card> {
    cmd.card
        .ok_or_else(|| GameError::Validation("bet requires a card id".to_string()))
}
