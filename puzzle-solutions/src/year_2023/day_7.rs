use anyhow::anyhow;
use itertools::Itertools;
use puzzle_solver::{AocParser, ParseError, PartSolver, SolveError};
use puzzle_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 7, tags = ["camel-cards"])]
pub struct Solver;

/// Joker value, below every regular card
const JOKER: u8 = 1;

#[derive(Debug, Clone)]
pub struct Hand {
    cards: [u8; 5],
    bid: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPairs,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl Hand {
    fn hand_type(&self) -> HandType {
        let jokers = self.cards.iter().filter(|&&c| c == JOKER).count();
        let mut counts: Vec<usize> = self
            .cards
            .iter()
            .filter(|&&c| c != JOKER)
            .counts()
            .into_values()
            .sorted_unstable()
            .rev()
            .collect();
        // Jokers always join the largest group.
        if counts.is_empty() {
            counts.push(0);
        }
        counts[0] += jokers;

        match (counts[0], counts.get(1).copied().unwrap_or(0)) {
            (5, _) => HandType::FiveOfAKind,
            (4, _) => HandType::FourOfAKind,
            (3, 2) => HandType::FullHouse,
            (3, _) => HandType::ThreeOfAKind,
            (2, 2) => HandType::TwoPairs,
            (2, _) => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }

    /// Hands compare by type first, then card by card in hand order.
    fn rank_key(&self) -> (HandType, [u8; 5]) {
        (self.hand_type(), self.cards)
    }

    fn with_jokers(&self) -> Hand {
        let cards = self.cards.map(|c| if c == 11 { JOKER } else { c });
        Hand {
            cards,
            bid: self.bid,
        }
    }
}

fn card_value(symbol: char) -> anyhow::Result<u8> {
    match symbol {
        'A' => Ok(14),
        'K' => Ok(13),
        'Q' => Ok(12),
        'J' => Ok(11),
        'T' => Ok(10),
        '2'..='9' => Ok(symbol as u8 - b'0'),
        other => Err(anyhow!("unknown card symbol {other:?}")),
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hand>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .trim()
            .lines()
            .map(|line| parse_hand(line).map_err(|e| ParseError::InvalidFormat(e.to_string())))
            .collect()
    }
}

fn parse_hand(line: &str) -> anyhow::Result<Hand> {
    let (cards, bid) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("missing bid in {line:?}"))?;
    let cards: Vec<u8> = cards.chars().map(card_value).collect::<anyhow::Result<_>>()?;
    let cards: [u8; 5] = cards
        .try_into()
        .map_err(|_| anyhow!("a hand must have exactly 5 cards: {line:?}"))?;
    let bid = bid.parse().map_err(|_| anyhow!("bad bid in {line:?}"))?;
    Ok(Hand { cards, bid })
}

fn total_winnings(hands: impl IntoIterator<Item = Hand>) -> u64 {
    hands
        .into_iter()
        .sorted_unstable_by_key(Hand::rank_key)
        .enumerate()
        .map(|(index, hand)| (index as u64 + 1) * hand.bid)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Vec<Hand>) -> Result<String, SolveError> {
        Ok(total_winnings(shared.iter().cloned()).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Vec<Hand>) -> Result<String, SolveError> {
        Ok(total_winnings(shared.iter().map(Hand::with_jokers)).to_string())
    }
}
