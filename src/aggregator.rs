//! P&L aggregation across priced trades.

use rust_decimal::Decimal;

use crate::calculator::round_money;
use crate::error::{BrokerageError, Result};
use crate::types::{CalculationSummary, ChargeBreakdown, TradeFact, TradeSide};

/// Fold priced trades into buy/sell totals and gross/net P&L.
///
/// Trades are summed in order in a single pass. Nothing is deduplicated: a
/// trade that appears twice is counted twice. Running sums keep full
/// precision and only the final fields are rounded.
///
/// Fails with [`BrokerageError::EmptyInput`] if `pairs` is empty.
pub fn aggregate(pairs: &[(TradeFact, ChargeBreakdown)]) -> Result<CalculationSummary> {
    if pairs.is_empty() {
        return Err(BrokerageError::EmptyInput);
    }

    let mut buy_total = Decimal::ZERO;
    let mut sell_total = Decimal::ZERO;
    let mut buy_charges = Decimal::ZERO;
    let mut sell_charges = Decimal::ZERO;

    for (trade, charges) in pairs {
        match trade.side {
            TradeSide::BUY => {
                buy_total += trade.turnover();
                buy_charges += charges.total;
            }
            TradeSide::SELL => {
                sell_total += trade.turnover();
                sell_charges += charges.total;
            }
        }
    }

    let gross_pl = sell_total - buy_total;
    let net_pl = gross_pl - buy_charges - sell_charges;

    Ok(CalculationSummary {
        buy_total: round_money(buy_total),
        sell_total: round_money(sell_total),
        buy_charges: round_money(buy_charges),
        sell_charges: round_money(sell_charges),
        gross_pl: round_money(gross_pl),
        net_pl: round_money(net_pl),
        trade_count: pairs.len(),
    })
}
