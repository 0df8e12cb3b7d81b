//! Receipt scoring rules
//!
//! A receipt's point total is the sum of four independent rules:
//!
//! 1. One point per alphanumeric character in the retailer name.
//! 2. 50 points for a whole-dollar total, plus 25 points when the total is
//!    a multiple of 0.25. Both can apply.
//! 3. 5 points per pair of items, plus `ceil(price * 0.2)` points for every
//!    item whose trimmed description length is a multiple of three.
//! 4. 6 points when the purchase day is odd, plus 10 points when the
//!    purchase time falls strictly between 14:00 and 16:00.
//!
//! Scoring is pure: the same receipt always produces the same total. Any
//! rule that cannot parse its field fails the whole computation, and the
//! caller must reject the receipt rather than store a partial score.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{ScoreError, ScoreResult};
use crate::types::Receipt;

/// Points for a whole-dollar total
const ROUND_TOTAL_POINTS: u64 = 50;
/// Points for a total that is a multiple of 0.25
const QUARTER_TOTAL_POINTS: u64 = 25;
/// Points per complete pair of items
const ITEM_PAIR_POINTS: u64 = 5;
/// Points for an odd purchase day
const ODD_DAY_POINTS: u64 = 6;
/// Points for a purchase in the afternoon window
const AFTERNOON_POINTS: u64 = 10;

/// Compute the point total for a receipt
pub fn calculate_points(receipt: &Receipt) -> ScoreResult<u64> {
    let mut points = retailer_points(receipt);
    points += total_points(receipt)?;
    points += item_points(receipt)?;
    points += date_time_points(receipt)?;
    Ok(points)
}

/// One point per alphanumeric character in the retailer name
fn retailer_points(receipt: &Receipt) -> u64 {
    receipt
        .retailer
        .chars()
        .filter(|c| c.is_alphanumeric())
        .count() as u64
}

/// 50 points for a whole-dollar total, 25 more for a multiple of 0.25
fn total_points(receipt: &Receipt) -> ScoreResult<u64> {
    let total = parse_amount(&receipt.total)
        .ok_or_else(|| ScoreError::InvalidTotal(receipt.total.clone()))?;

    let mut points = 0;
    if total.fract().is_zero() {
        points += ROUND_TOTAL_POINTS;
    }
    if (total * Decimal::from(4)).fract().is_zero() {
        points += QUARTER_TOTAL_POINTS;
    }
    Ok(points)
}

/// 5 points per pair of items, plus ceil(price * 0.2) for every item whose
/// trimmed description length is a multiple of three
fn item_points(receipt: &Receipt) -> ScoreResult<u64> {
    let mut points = (receipt.items.len() as u64 / 2) * ITEM_PAIR_POINTS;

    for item in &receipt.items {
        // The empty trimmed description (length zero) qualifies too.
        if item.short_description.trim().chars().count() % 3 != 0 {
            continue;
        }
        let price = parse_amount(&item.price)
            .ok_or_else(|| ScoreError::InvalidPrice(item.price.clone()))?;
        // A negative price would yield a negative award; it contributes
        // nothing instead of underflowing the total.
        points += (price * Decimal::new(2, 1)).ceil().to_u64().unwrap_or(0);
    }

    Ok(points)
}

/// 6 points for an odd purchase day, 10 for a purchase strictly between
/// 14:00 and 16:00
///
/// The window endpoints are exclusive: 14:00 and 16:00 themselves award
/// nothing, 14:01 through 15:59 all qualify. Dates and times are validated
/// by decomposition, not against the calendar.
fn date_time_points(receipt: &Receipt) -> ScoreResult<u64> {
    let mut points = 0;

    let date_parts: Vec<&str> = receipt.purchase_date.split('-').collect();
    if date_parts.len() != 3 {
        return Err(ScoreError::InvalidDate(receipt.purchase_date.clone()));
    }
    let day: u32 = date_parts[2]
        .parse()
        .map_err(|_| ScoreError::InvalidDate(receipt.purchase_date.clone()))?;
    if day % 2 == 1 {
        points += ODD_DAY_POINTS;
    }

    let time_parts: Vec<&str> = receipt.purchase_time.split(':').collect();
    if time_parts.len() < 2 {
        return Err(ScoreError::InvalidTime(receipt.purchase_time.clone()));
    }
    let hour: u32 = time_parts[0]
        .parse()
        .map_err(|_| ScoreError::InvalidTime(receipt.purchase_time.clone()))?;
    let minute: u32 = time_parts[1]
        .parse()
        .map_err(|_| ScoreError::InvalidTime(receipt.purchase_time.clone()))?;
    if (hour == 14 && minute != 0) || hour == 15 {
        points += AFTERNOON_POINTS;
    }

    Ok(points)
}

fn parse_amount(text: &str) -> Option<Decimal> {
    Decimal::from_str(text).ok()
}
