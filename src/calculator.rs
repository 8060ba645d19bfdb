//! Charge calculator.
//!
//! [`compute`] prices a single trade against a broker schedule and returns
//! the seven statutory and broker charge components. Which components apply
//! is decided by the trade's [`TradeKind`] through a fixed rule table:
//!
//! | Kind | Brokerage rate | STT | Stamp duty | DP |
//! |---|---|---|---|---|
//! | `DeliveryBuy` | delivery buy | – | ✔ | – |
//! | `DeliverySell` | delivery sell | ✔ | – | ✔ |
//! | `IntradayBuy` | intraday | – | ✔ | – |
//! | `IntradaySell` | intraday | ✔ | – | – |
//!
//! Transaction charges, GST, and SEBI fees apply to every kind.
//!
//! Intermediate values keep full precision. Components are rounded to two
//! decimal places (midpoint away from zero) only when the breakdown is built,
//! and the total is the sum of the rounded components.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::MONEY_DP;
use crate::error::Result;
use crate::registry::FeeScheduleRegistry;
use crate::types::{BrokerSchedule, ChargeBreakdown, TradeFact, TradeKind};

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum BrokerageRate {
    DeliveryBuy,
    DeliverySell,
    Intraday,
}

#[derive(Debug, Clone, Copy)]
struct ChargeRules {
    brokerage: BrokerageRate,
    stt: bool,
    stamp_duty: bool,
    dp: bool,
}

impl ChargeRules {
    const fn for_kind(kind: TradeKind) -> Self {
        match kind {
            TradeKind::DeliveryBuy => Self {
                brokerage: BrokerageRate::DeliveryBuy,
                stt: false,
                stamp_duty: true,
                dp: false,
            },
            TradeKind::DeliverySell => Self {
                brokerage: BrokerageRate::DeliverySell,
                stt: true,
                stamp_duty: false,
                dp: true,
            },
            TradeKind::IntradayBuy => Self {
                brokerage: BrokerageRate::Intraday,
                stt: false,
                stamp_duty: true,
                dp: false,
            },
            TradeKind::IntradaySell => Self {
                brokerage: BrokerageRate::Intraday,
                stt: true,
                stamp_duty: false,
                dp: false,
            },
        }
    }

    fn brokerage_rate(self, schedule: &BrokerSchedule) -> Decimal {
        match self.brokerage {
            BrokerageRate::DeliveryBuy => schedule.delivery_buy_rate,
            BrokerageRate::DeliverySell => schedule.delivery_sell_rate,
            BrokerageRate::Intraday => schedule.intraday_rate,
        }
    }
}

// ---------------------------------------------------------------------------
// Computation
// ---------------------------------------------------------------------------

/// Round a money amount to two decimal places, midpoint away from zero.
///
/// Idempotent: rounding an already-rounded value returns it unchanged.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// `amount × rate%`.
fn percent_of(amount: Decimal, rate: Decimal) -> Decimal {
    amount * rate / Decimal::ONE_HUNDRED
}

/// Price the charges of one trade under `schedule`.
///
/// The trade is assumed valid; no input checks are made. The broker on the
/// trade is ignored here, so callers can price a trade against any schedule.
pub fn compute(schedule: &BrokerSchedule, trade: &TradeFact) -> ChargeBreakdown {
    let kind = trade.kind();
    let rules = ChargeRules::for_kind(kind);
    let turnover = trade.turnover();

    let when = |applies: bool, value: Decimal| if applies { value } else { Decimal::ZERO };

    let brokerage = percent_of(turnover, rules.brokerage_rate(schedule));
    let stt = when(rules.stt, percent_of(turnover, schedule.stt_rate));
    let transaction_charges = percent_of(turnover, schedule.transaction_charge_rate);
    let gst = percent_of(brokerage + transaction_charges, schedule.gst_rate);
    let sebi_charges = percent_of(turnover, schedule.sebi_rate);
    let stamp_duty = when(rules.stamp_duty, percent_of(turnover, schedule.stamp_duty_rate));
    let dp_charges = when(rules.dp, schedule.dp_charges);

    let mut breakdown = ChargeBreakdown {
        brokerage: round_money(brokerage),
        stt: round_money(stt),
        transaction_charges: round_money(transaction_charges),
        gst: round_money(gst),
        sebi_charges: round_money(sebi_charges),
        stamp_duty: round_money(stamp_duty),
        dp_charges: round_money(dp_charges),
        total: Decimal::ZERO,
    };
    breakdown.total = breakdown.components().into_iter().sum();

    tracing::debug!(
        symbol = %trade.symbol,
        broker = %trade.broker,
        ?kind,
        %turnover,
        total = %breakdown.total,
        "computed charges"
    );

    breakdown
}

// ---------------------------------------------------------------------------
// Registry-bound calculator
// ---------------------------------------------------------------------------

/// Prices trades using the schedule of each trade's own broker.
#[derive(Debug, Clone, Copy)]
pub struct ChargeCalculator<'a> {
    registry: &'a FeeScheduleRegistry,
}

impl<'a> ChargeCalculator<'a> {
    pub fn new(registry: &'a FeeScheduleRegistry) -> Self {
        Self { registry }
    }

    /// Resolve the trade's broker schedule and compute its charges.
    ///
    /// Fails with [`BrokerageError::UnknownBroker`](crate::error::BrokerageError::UnknownBroker)
    /// if the registry has no schedule for the broker.
    pub fn charges_for(&self, trade: &TradeFact) -> Result<ChargeBreakdown> {
        let schedule = self.registry.resolve(trade.broker)?;
        Ok(compute(schedule, trade))
    }

    /// Price every trade, pairing each with its breakdown in input order.
    pub fn charge_all<I>(&self, trades: I) -> Result<Vec<(TradeFact, ChargeBreakdown)>>
    where
        I: IntoIterator<Item = TradeFact>,
    {
        trades
            .into_iter()
            .map(|trade| {
                let charges = self.charges_for(&trade)?;
                Ok((trade, charges))
            })
            .collect()
    }
}
