//! Aggregate spending statistics for the dashboard.
//!
//! Derives summary figures from a transaction snapshot plus settings:
//! count, total spend, top category, trailing-7-day spend, and the
//! budget-cap status. All figures are structured data; formatting for a
//! visual surface happens elsewhere.

use crate::core::settings::{Settings, currency_symbol};
use crate::entities::TransactionModel;
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Budget-cap classification thresholds, in percent.
const EXCEEDED_PERCENT: f64 = 100.0;
const WARNING_PERCENT: f64 = 80.0;

/// Summary figures over a transaction snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of transactions
    pub count: usize,
    /// Sum of all amounts
    pub total_spend: Decimal,
    /// Category with the largest summed amount; `"—"` when empty.
    /// Ties go to whichever category was encountered first.
    pub top_category: String,
    /// Sum of amounts dated within the 7 days up to and including today
    pub trailing_week_spend: Decimal,
    /// Budget-cap status for the total spend
    pub budget: BudgetStatus,
}

/// Classification of total spend against the budget cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetLevel {
    /// Under 80% of the cap
    Normal,
    /// At or above 80%, still under the cap
    Warning,
    /// At or above the cap
    Exceeded,
}

/// Budget-cap figures for display.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    /// `min(total / cap * 100, 100)`
    pub percent: f64,
    /// Classification derived from the (clamped) percentage
    pub level: BudgetLevel,
    /// `cap - total`; negative once the cap is exceeded
    pub remaining: Decimal,
}

/// Computes the dashboard summary for a transaction snapshot.
///
/// `today` anchors the trailing-week window `[today - 7 days, today]`;
/// passing it in keeps the computation deterministic under test.
#[must_use]
pub fn summarize(
    transactions: &[TransactionModel],
    settings: &Settings,
    today: NaiveDate,
) -> Summary {
    let week_start = today - Duration::days(7);

    let mut total_spend = Decimal::ZERO;
    let mut trailing_week_spend = Decimal::ZERO;
    // First-encounter order decides ties for the top category
    let mut category_sums: Vec<(String, Decimal)> = Vec::new();

    for t in transactions {
        total_spend += t.amount;
        if t.date >= week_start && t.date <= today {
            trailing_week_spend += t.amount;
        }
        match category_sums.iter_mut().find(|(c, _)| *c == t.category) {
            Some((_, sum)) => *sum += t.amount,
            None => category_sums.push((t.category.clone(), t.amount)),
        }
    }

    let mut top_category = "—".to_string();
    let mut top_sum = None;
    for (category, sum) in &category_sums {
        if top_sum.is_none_or(|best| *sum > best) {
            top_category = category.clone();
            top_sum = Some(*sum);
        }
    }

    Summary {
        count: transactions.len(),
        total_spend,
        top_category,
        trailing_week_spend,
        budget: budget_status(total_spend, settings.budget_cap),
    }
}

/// Classifies total spend against a budget cap.
#[must_use]
pub fn budget_status(total_spend: Decimal, budget_cap: Decimal) -> BudgetStatus {
    let percent = if budget_cap > Decimal::ZERO {
        (total_spend / budget_cap * Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(EXCEEDED_PERCENT)
            .min(EXCEEDED_PERCENT)
    } else if total_spend.is_zero() {
        0.0
    } else {
        EXCEEDED_PERCENT
    };

    let level = if percent >= EXCEEDED_PERCENT {
        BudgetLevel::Exceeded
    } else if percent >= WARNING_PERCENT {
        BudgetLevel::Warning
    } else {
        BudgetLevel::Normal
    };

    BudgetStatus {
        percent,
        level,
        remaining: budget_cap - total_spend,
    }
}

/// Formats an amount with the currency's display symbol, two decimal
/// places, falling back to `$` for unknown codes.
#[must_use]
pub fn format_currency(amount: Decimal, currency: &str) -> String {
    format!("{}{:.2}", currency_symbol(currency), amount)
}
