use crate::domain::card::{Card, Deck};
use crate::domain::ledger::{BetSet, BetToggle, Tokens};
use crate::domain::payout::{self, MatchRule, PayoutTable};
use crate::error::{GameError, Result};
use rand::Rng;

/// Balls dropped per launch.
pub const BALLS_PER_ROUND: usize = 3;

/// Tokens wagered per bet card unless the player picks another stake.
pub const DEFAULT_STAKE: Tokens = Tokens(10);

const CHARGE_STEP: u8 = 4;
const CHARGE_MAX: u8 = 100;

/// The launch power meter. Power bounces between 0 and 100 while the
/// trigger is held; the value at release is recorded in the round result
/// but does not influence where the balls land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeMeter {
    power: u8,
    rising: bool,
}

impl ChargeMeter {
    pub fn new() -> Self {
        Self {
            power: 0,
            rising: true,
        }
    }

    pub fn power(&self) -> u8 {
        self.power
    }

    /// Advances the oscillation one tick and returns the new power.
    pub fn tick(&mut self) -> u8 {
        if self.rising {
            self.power = (self.power + CHARGE_STEP).min(CHARGE_MAX);
            if self.power == CHARGE_MAX {
                self.rising = false;
            }
        } else {
            self.power = self.power.saturating_sub(CHARGE_STEP);
            if self.power == 0 {
                self.rising = true;
            }
        }
        self.power
    }
}

impl Default for ChargeMeter {
    fn default() -> Self {
        Self::new()
    }
}

/// One round moves strictly through these phases; there are no concurrent
/// rounds. Charging cannot be cancelled: releasing the trigger launches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    BetOpen,
    Charging,
    Launched,
    Resolved,
}

/// Where the balls landed and what it paid, for one resolved round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub landings: [Card; BALLS_PER_ROUND],
    pub power: u8,
    pub matches: usize,
    pub wagered: Tokens,
    pub payout: Tokens,
}

/// The betting table: balance, stake, bet set and the round state machine.
///
/// Owned by the caller; every mutation goes through a method here, and a
/// refused operation mutates nothing. Randomness is injected at launch so
/// outcomes can be pinned in tests.
#[derive(Debug, Clone)]
pub struct GameTable {
    balance: Tokens,
    stake: Tokens,
    bets: BetSet,
    phase: Phase,
    meter: ChargeMeter,
    pending: Vec<Card>,
    landed: usize,
    wagered: Tokens,
    payout_table: PayoutTable,
    rule: MatchRule,
    result: Option<RoundResult>,
}

impl GameTable {
    pub fn new() -> Self {
        Self {
            balance: Tokens::ZERO,
            stake: DEFAULT_STAKE,
            bets: BetSet::new(),
            phase: Phase::Idle,
            meter: ChargeMeter::new(),
            pending: Vec::with_capacity(BALLS_PER_ROUND),
            landed: 0,
            wagered: Tokens::ZERO,
            payout_table: PayoutTable::default(),
            rule: MatchRule::default(),
            result: None,
        }
    }

    pub fn with_rules(payout_table: PayoutTable, rule: MatchRule) -> Self {
        Self {
            payout_table,
            rule,
            ..Self::new()
        }
    }

    pub fn balance(&self) -> Tokens {
        self.balance
    }

    pub fn stake(&self) -> Tokens {
        self.stake
    }

    pub fn bets(&self) -> &BetSet {
        &self.bets
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn power(&self) -> u8 {
        self.meter.power()
    }

    pub fn round_in_progress(&self) -> bool {
        matches!(self.phase, Phase::Charging | Phase::Launched | Phase::Resolved)
    }

    pub fn deposit(&mut self, amount: Tokens) -> Result<Tokens> {
        if self.round_in_progress() {
            return Err(GameError::RoundInProgress);
        }
        self.balance = self.balance.checked_add(amount).ok_or_else(|| {
            GameError::Validation("deposit would exceed the token range".to_string())
        })?;
        Ok(self.balance)
    }

    pub fn set_stake(&mut self, amount: Tokens) -> Result<()> {
        if self.round_in_progress() {
            return Err(GameError::RoundInProgress);
        }
        if amount == Tokens::ZERO {
            return Err(GameError::Validation(
                "stake must be positive".to_string(),
            ));
        }
        self.stake = amount;
        Ok(())
    }

    /// Adds the card to the bet set if absent, removes it if present.
    /// Refused while a round is in progress, without touching the set.
    pub fn toggle_bet(&mut self, card: Card) -> Result<BetToggle> {
        if self.round_in_progress() {
            return Err(GameError::RoundInProgress);
        }
        let toggle = self.bets.toggle(card);
        self.phase = if self.bets.is_empty() {
            Phase::Idle
        } else {
            Phase::BetOpen
        };
        Ok(toggle)
    }

    /// Clears the bet set outside of a round.
    pub fn reset_bets(&mut self) -> Result<()> {
        if self.round_in_progress() {
            return Err(GameError::RoundInProgress);
        }
        self.bets.clear();
        self.phase = Phase::Idle;
        Ok(())
    }

    /// True iff there is something to launch and the balance covers it.
    pub fn can_launch(&self) -> bool {
        !self.round_in_progress() && self.check_launchable().is_ok()
    }

    fn check_launchable(&self) -> Result<Tokens> {
        if self.bets.is_empty() {
            return Err(GameError::NoBets);
        }
        let needed = self.stake.checked_times(self.bets.len()).ok_or_else(|| {
            GameError::Validation("wager would exceed the token range".to_string())
        })?;
        if self.balance < needed {
            return Err(GameError::InsufficientTokens {
                needed,
                available: self.balance,
            });
        }
        // The credited balance must also fit, whatever the balls do.
        let best_case = self
            .payout_table
            .multiplier(BALLS_PER_ROUND)
            .checked_mul(self.stake.value())
            .map(Tokens::new)
            .and_then(|max_payout| (self.balance - needed).checked_add(max_payout));
        if best_case.is_none() {
            return Err(GameError::Validation(
                "payout would exceed the token range".to_string(),
            ));
        }
        Ok(needed)
    }

    /// Begins the charge phase. Refused, with nothing mutated, when there
    /// are no bets, the balance cannot cover the wager, or a round is
    /// already in progress.
    pub fn start_charge(&mut self) -> Result<()> {
        if self.round_in_progress() {
            return Err(GameError::RoundInProgress);
        }
        self.check_launchable()?;
        self.meter = ChargeMeter::new();
        self.phase = Phase::Charging;
        Ok(())
    }

    /// Advances the power meter while the trigger is held.
    pub fn tick_charge(&mut self) -> u8 {
        match self.phase {
            Phase::Charging => self.meter.tick(),
            _ => self.meter.power(),
        }
    }

    /// Releasing the trigger: debits the wager and draws the three landing
    /// cards, independently and uniformly over the deck. Duplicates are
    /// allowed; the same card may catch more than one ball.
    pub fn release_charge<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        if self.phase != Phase::Charging {
            return Err(GameError::Validation(
                "release without an active charge".to_string(),
            ));
        }
        let deck = Deck::cards();
        let mut landings = [deck[0]; BALLS_PER_ROUND];
        for slot in &mut landings {
            *slot = deck[rng.gen_range(0..Deck::SIZE)];
        }
        self.begin_resolution(landings)
    }

    /// Deterministic launch used by tests and front-ends that animate the
    /// balls before reporting where they landed.
    pub fn launch_with(&mut self, landings: [Card; BALLS_PER_ROUND]) -> Result<()> {
        if self.round_in_progress() && self.phase != Phase::Charging {
            return Err(GameError::RoundInProgress);
        }
        self.begin_resolution(landings)
    }

    fn begin_resolution(&mut self, landings: [Card; BALLS_PER_ROUND]) -> Result<()> {
        let wagered = self.check_launchable()?;
        self.balance -= wagered;
        self.wagered = wagered;
        self.pending = landings.to_vec();
        self.landed = 0;
        self.result = None;
        self.phase = Phase::Launched;
        Ok(())
    }

    /// Reports one ball down, in draw order. The round resolves when the
    /// third ball reports: matches are counted, the payout is credited and
    /// the phase becomes `Resolved`.
    pub fn ball_landed(&mut self) -> Result<Card> {
        if self.phase != Phase::Launched {
            return Err(GameError::Validation(
                "no balls in flight".to_string(),
            ));
        }
        let card = self.pending[self.landed];
        self.landed += 1;
        if self.landed == BALLS_PER_ROUND {
            self.settle();
        }
        Ok(card)
    }

    fn settle(&mut self) {
        let matches = payout::count_matches(&self.bets, &self.pending, self.rule);
        let won = payout::payout(
            &self.bets,
            &self.pending,
            self.stake,
            &self.payout_table,
            self.rule,
        );
        self.balance += won;

        let mut landings = [self.pending[0]; BALLS_PER_ROUND];
        landings.copy_from_slice(&self.pending);
        self.result = Some(RoundResult {
            landings,
            power: self.meter.power(),
            matches,
            wagered: self.wagered,
            payout: won,
        });
        self.phase = Phase::Resolved;
    }

    /// Collects the result of a resolved round, clears the bet set and
    /// returns the table to `Idle`.
    pub fn take_result(&mut self) -> Result<RoundResult> {
        let result = self.result.take().ok_or(GameError::NoResolvedRound)?;
        self.bets.clear();
        self.pending.clear();
        self.landed = 0;
        self.wagered = Tokens::ZERO;
        self.meter = ChargeMeter::new();
        self.phase = Phase::Idle;
        Ok(result)
    }
}

impl Default for GameTable {
    fn default() -> Self {
        Self::new()
    }
}
