use perya::application::engine::{GameEngine, Outcome};
use perya::domain::card::{Card, Rank, Suit};
use perya::domain::command::{ActionType, Command};
use perya::domain::ledger::Tokens;
use perya::domain::payout::PayoutTable;
use perya::domain::table::{GameTable, Phase};
use perya::infrastructure::barker::CannedBarker;
use perya::infrastructure::in_memory::InMemoryRegistry;

fn cmd(action: ActionType, card: Option<&str>, amount: Option<u64>) -> Command {
    Command {
        action,
        card: card.map(|c| c.parse().unwrap()),
        amount,
    }
}

#[tokio::test]
async fn test_session_over_boxed_ports() {
    let mut engine = GameEngine::open(
        "guest",
        Box::new(InMemoryRegistry::new()),
        Box::new(CannedBarker::new()),
    )
    .await
    .unwrap();
    engine.set_seed(1);

    engine
        .process_command(cmd(ActionType::Deposit, None, Some(1000)))
        .await
        .unwrap();
    engine
        .process_command(cmd(ActionType::Stake, None, Some(50)))
        .await
        .unwrap();
    engine
        .process_command(cmd(ActionType::Bet, Some("HEARTS-A"), None))
        .await
        .unwrap();

    let Outcome::Round { result, .. } = engine
        .process_command(cmd(ActionType::Launch, None, Some(30)))
        .await
        .unwrap()
    else {
        panic!("expected a resolved round");
    };

    assert_eq!(result.wagered, Tokens::new(50));
    assert_eq!(
        result.payout,
        Tokens::new(PayoutTable::CLASSIC.multiplier(result.matches) * 50)
    );
    assert_eq!(
        engine.table().balance(),
        Tokens::new(1000) - result.wagered + result.payout
    );
    assert_eq!(engine.table().phase(), Phase::Idle);
    assert!(engine.table().bets().is_empty());
}

#[tokio::test]
async fn test_shared_registry_builds_leaderboard() {
    let registry = InMemoryRegistry::new();

    for (player, deposit) in [("isko", 300u64), ("neneng", 700), ("totoy", 100)] {
        let mut engine = GameEngine::open(
            player,
            Box::new(registry.clone()),
            Box::new(CannedBarker::new()),
        )
        .await
        .unwrap();
        engine
            .process_command(cmd(ActionType::Deposit, None, Some(deposit)))
            .await
            .unwrap();
    }

    let engine = GameEngine::open(
        "isko",
        Box::new(registry),
        Box::new(CannedBarker::new()),
    )
    .await
    .unwrap();
    let players = engine.into_results().await.unwrap();
    assert_eq!(players.len(), 3);

    let tokens: Vec<u64> = {
        let mut sorted = players.clone();
        sorted.sort_by(|a, b| b.tokens.cmp(&a.tokens));
        sorted.iter().map(|p| p.tokens.value()).collect()
    };
    assert_eq!(tokens, vec![700, 300, 100]);
}

#[tokio::test]
async fn test_consecutive_rounds_stay_sequential() {
    let mut engine = GameEngine::open(
        "guest",
        Box::new(InMemoryRegistry::new()),
        Box::new(CannedBarker::new()),
    )
    .await
    .unwrap();
    engine.set_seed(5);

    engine
        .process_command(cmd(ActionType::Deposit, None, Some(500)))
        .await
        .unwrap();

    let mut balance = Tokens::new(500);
    for round in 0..5u64 {
        engine
            .process_command(cmd(ActionType::Bet, Some("SPADES-K"), None))
            .await
            .unwrap();
        let Outcome::Round { result, .. } = engine
            .process_command(cmd(ActionType::Launch, None, Some(round + 1)))
            .await
            .unwrap()
        else {
            panic!("expected a resolved round");
        };
        balance = balance - result.wagered + result.payout;
        assert_eq!(engine.table().balance(), balance);
        // The bet set is cleared after each resolved round.
        assert!(engine.table().bets().is_empty());
    }

    let players = engine.into_results().await.unwrap();
    assert_eq!(players[0].rounds_played, 5);
    assert_eq!(players[0].total_wagered, Tokens::new(50));
}

#[test]
fn test_repeat_hit_pays_with_multiplicity() {
    let jack = Card::new(Suit::Hearts, Rank::Jack);
    let mut table = GameTable::new();
    table.deposit(Tokens::new(100)).unwrap();
    table.toggle_bet(jack).unwrap();

    table
        .launch_with([jack, jack, Card::new(Suit::Spades, Rank::Ace)])
        .unwrap();
    for _ in 0..3 {
        table.ball_landed().unwrap();
    }
    let result = table.take_result().unwrap();

    // Two balls on the same bet card count twice under the per-ball rule.
    assert_eq!(result.matches, 2);
    assert_eq!(result.payout, Tokens::new(30));
    assert_eq!(table.balance(), Tokens::new(120));
}
