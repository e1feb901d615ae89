use crate::domain::card::Card;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Deposit,
    Stake,
    Bet,
    Launch,
    Reset,
}

/// One row of a session script.
///
/// `card` is required for `bet`; `amount` is the token amount for `deposit`
/// and `stake`, and the number of charge ticks the trigger is held for
/// `launch`.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Command {
    pub action: ActionType,
    #[serde(default, deserialize_with = "deserialize_card")]
    pub card: Option<Card>,
    #[serde(default)]
    pub amount: Option<u64>,
}

fn deserialize_card<'de, D>(deserializer: D) -> Result<Option<Card>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(id) => id.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::{Rank, Suit};

    #[test]
    fn test_command_deserialization_with_empty_card() {
        let csv = "action, card, amount\ndeposit, , 500\nbet, HEARTS-J, ";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let mut iter = reader.deserialize::<Command>();

        let deposit = iter.next().unwrap().expect("deposit row");
        assert_eq!(deposit.action, ActionType::Deposit);
        assert_eq!(deposit.card, None);
        assert_eq!(deposit.amount, Some(500));

        let bet = iter.next().unwrap().expect("bet row");
        assert_eq!(bet.action, ActionType::Bet);
        assert_eq!(bet.card, Some(Card::new(Suit::Hearts, Rank::Jack)));
        assert_eq!(bet.amount, None);
    }

    #[test]
    fn test_command_rejects_unknown_card() {
        let csv = "action, card, amount\nbet, CLUBS-J, ";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let result = reader.deserialize::<Command>().next().unwrap();
        assert!(result.is_err());
    }
}
