//! Reward points for a stored receipt.
//!
//! Scoring never fails: a field that cannot be parsed is logged and its rule
//! contributes nothing, while the remaining rules are still applied.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{Item, Receipt};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

const CENTS_PER_DOLLAR: i64 = 100;
const CENTS_PER_QUARTER: i64 = 25;

/// Points contributed by each rule for a single receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_total: u64,
    pub quarter_total: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_total,
            self.quarter_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

pub fn score_receipt(receipt: &Receipt) -> PointsBreakdown {
    let (round_total, quarter_total) = match parse_amount_cents(&receipt.total) {
        Some(cents) => (round_dollar_points(cents), quarter_multiple_points(cents)),
        None => (0, 0),
    };

    PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_total,
        quarter_total,
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: receipt
            .items
            .iter()
            .map(item_description_points)
            .fold(0, u64::saturating_add),
        odd_day: odd_day_points(&receipt.purchase_date),
        afternoon: afternoon_points(&receipt.purchase_time),
    }
}

pub fn calculate_points(receipt: &Receipt) -> u64 {
    let breakdown = score_receipt(receipt);
    tracing::debug!(?breakdown, "Scored receipt");
    breakdown.total()
}

/// One point per letter or digit in the retailer name.
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

/// Parses a non-negative decimal amount and expresses it in cents.
///
/// Returns `None` (after logging) for unparsable or negative amounts.
pub fn parse_amount_cents(amount: &str) -> Option<Decimal> {
    let value = match Decimal::from_str(amount) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Error parsing total {:?}: {}", amount, e);
            return None;
        }
    };

    if value < Decimal::ZERO {
        tracing::warn!("Negative total amount: {}", value);
        return None;
    }

    Some(value * Decimal::from(CENTS_PER_DOLLAR))
}

pub fn round_dollar_points(cents: Decimal) -> u64 {
    if (cents % Decimal::from(CENTS_PER_DOLLAR)).is_zero() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

pub fn quarter_multiple_points(cents: Decimal) -> u64 {
    if (cents % Decimal::from(CENTS_PER_QUARTER)).is_zero() {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * POINTS_PER_ITEM_PAIR
}

/// When the trimmed description length is a multiple of 3 (zero included),
/// the item earns a fifth of its price, rounded up.
pub fn item_description_points(item: &Item) -> u64 {
    let description_len = item.short_description.trim().chars().count();
    if description_len % 3 != 0 {
        return 0;
    }

    let price = match Decimal::from_str(&item.price) {
        Ok(price) => price,
        Err(e) => {
            tracing::warn!("Error parsing item price {:?}: {}", item.price, e);
            return 0;
        }
    };

    if price < Decimal::ZERO {
        tracing::warn!("Negative item price: {}", price);
        return 0;
    }

    let points = (price * Decimal::new(2, 1)).ceil();
    points.to_u64().unwrap_or_else(|| {
        tracing::warn!("Item points out of range for price {}", price);
        0
    })
}

pub fn odd_day_points(purchase_date: &str) -> u64 {
    if !is_date_shaped(purchase_date) {
        tracing::warn!("Purchase date {:?} is not YYYY-MM-DD", purchase_date);
        return 0;
    }

    match NaiveDate::parse_from_str(purchase_date, "%Y-%m-%d") {
        Ok(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        Ok(_) => 0,
        Err(e) => {
            tracing::warn!("Error parsing purchase date {:?}: {}", purchase_date, e);
            0
        }
    }
}

/// Purchases made between 14:00 and 15:59 inclusive.
pub fn afternoon_points(purchase_time: &str) -> u64 {
    if !is_time_shaped(purchase_time) {
        tracing::warn!("Purchase time {:?} is not HH:MM", purchase_time);
        return 0;
    }

    match NaiveTime::parse_from_str(purchase_time, "%H:%M") {
        Ok(time) if (14..=15).contains(&time.hour()) => AFTERNOON_POINTS,
        Ok(_) => 0,
        Err(e) => {
            tracing::warn!("Error parsing purchase time {:?}: {}", purchase_time, e);
            0
        }
    }
}

/// Four-digit year, two-digit month and day, dash separated.
fn is_date_shaped(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// One or two hour digits and exactly two minute digits.
fn is_time_shaped(time: &str) -> bool {
    match time.split_once(':') {
        Some((hour, minute)) => {
            (1..=2).contains(&hour.len())
                && minute.len() == 2
                && hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}
