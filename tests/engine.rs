//! Charge calculator, registry, and aggregator tests.
//!
//! # Running
//!
//! ```sh
//! cargo test --test engine
//! ```
//!
//! # What is tested
//!
//! - **Registry** — standard rate cards, custom registries, JSON loading
//! - **Charges** — itemized breakdowns for every trade kind and broker
//! - **Charge rules** — STT, stamp duty, and DP applicability
//! - **Rounding** — midpoint handling and idempotence
//! - **Aggregation** — totals, P&L, duplicates, empty input

use std::sync::Arc;

use brokerage_rs::aggregator::aggregate;
use brokerage_rs::calculator::{ChargeCalculator, compute, round_money};
use brokerage_rs::error::BrokerageError;
use brokerage_rs::registry::FeeScheduleRegistry;
use brokerage_rs::types::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Helper: a delivery trade of `qty` shares at `price` on `broker`.
fn trade(broker: Broker, side: TradeSide, qty: u64, price: Decimal) -> TradeFact {
    TradeFact::new("INFY", qty, price, side, broker)
}

/// Helper: a breakdown whose only content is its total.
fn charged(total: Decimal) -> ChargeBreakdown {
    ChargeBreakdown {
        total,
        ..ChargeBreakdown::default()
    }
}

/// Every kind of trade on every broker, at a few awkward prices.
fn trade_grid() -> Vec<TradeFact> {
    let mut trades = Vec::new();
    for broker in Broker::ALL {
        for side in [TradeSide::BUY, TradeSide::SELL] {
            for (qty, price) in [(1, dec!(0.05)), (10, dec!(100)), (37, dec!(1234.55)), (999, dec!(87.35))] {
                let fact = trade(broker, side, qty, price);
                trades.push(fact.clone());
                trades.push(fact.intraday());
            }
        }
    }
    trades
}

// ===================================================================
// Registry
// ===================================================================

#[test]
fn test_standard_registry_covers_every_broker() {
    let registry = FeeScheduleRegistry::standard();
    for broker in Broker::ALL {
        assert!(registry.resolve(broker).is_ok(), "{broker} should resolve");
    }
    assert_eq!(registry.brokers().collect::<Vec<_>>(), Broker::ALL.to_vec());
    assert_eq!(FeeScheduleRegistry::default(), registry);
}

#[test]
fn test_standard_rate_cards() {
    let registry = FeeScheduleRegistry::standard();

    let zerodha = registry.resolve(Broker::Zerodha).unwrap();
    assert_eq!(zerodha.delivery_buy_rate, dec!(0));
    assert_eq!(zerodha.delivery_sell_rate, dec!(0.1));
    assert_eq!(zerodha.intraday_rate, dec!(0.03));
    assert_eq!(zerodha.dp_charges, dec!(15.93));

    let groww = registry.resolve(Broker::Groww).unwrap();
    assert_eq!(groww.delivery_sell_rate, dec!(0.05));
    assert_eq!(groww.intraday_rate, dec!(0.05));
    assert_eq!(groww.gst_rate, dec!(18));
}

#[test]
fn test_resolve_name_is_case_insensitive() {
    let registry = FeeScheduleRegistry::standard();
    let by_name = registry.resolve_name(" zerodha ").unwrap();
    assert_eq!(by_name, registry.resolve(Broker::Zerodha).unwrap());
}

#[test]
fn test_resolve_unknown_broker_name() {
    let registry = FeeScheduleRegistry::standard();
    match registry.resolve_name("Upstox") {
        Err(BrokerageError::UnknownBroker(name)) => assert_eq!(name, "Upstox"),
        other => panic!("expected UnknownBroker, got {other:?}"),
    }
}

#[test]
fn test_registry_without_broker_fails_to_resolve() {
    let standard = FeeScheduleRegistry::standard();
    let zerodha = *standard.resolve(Broker::Zerodha).unwrap();
    let registry = FeeScheduleRegistry::new([(Broker::Zerodha, zerodha)]);

    assert!(matches!(
        registry.resolve(Broker::Groww),
        Err(BrokerageError::UnknownBroker(name)) if name == "Groww"
    ));

    let calculator = ChargeCalculator::new(&registry);
    let groww_trade = trade(Broker::Groww, TradeSide::BUY, 1, dec!(10));
    assert!(matches!(
        calculator.charges_for(&groww_trade),
        Err(BrokerageError::UnknownBroker(_))
    ));
}

#[test]
fn test_registry_from_json() {
    let json = r#"{
        "groww": {
            "deliveryBuyRate": "0",
            "deliverySellRate": "0.05",
            "intradayRate": "0.05",
            "sttRate": "0.1",
            "transactionChargeRate": "0.00345",
            "gstRate": "18",
            "sebiRate": "0.0001",
            "stampDutyRate": "0.015",
            "dpCharges": "15.93"
        }
    }"#;

    let registry = FeeScheduleRegistry::from_json(json).unwrap();
    assert_eq!(registry.brokers().collect::<Vec<_>>(), vec![Broker::Groww]);
    assert_eq!(
        registry.resolve(Broker::Groww).unwrap(),
        FeeScheduleRegistry::standard().resolve(Broker::Groww).unwrap()
    );
    assert!(registry.resolve(Broker::Zerodha).is_err());
}

#[test]
fn test_registry_from_json_rejects_unknown_broker() {
    let json = r#"{ "Upstox": {
        "deliveryBuyRate": "0", "deliverySellRate": "0", "intradayRate": "0",
        "sttRate": "0", "transactionChargeRate": "0", "gstRate": "0",
        "sebiRate": "0", "stampDutyRate": "0", "dpCharges": "0"
    } }"#;
    assert!(matches!(
        FeeScheduleRegistry::from_json(json),
        Err(BrokerageError::UnknownBroker(name)) if name == "Upstox"
    ));
}

#[test]
fn test_registry_from_json_rejects_malformed_payload() {
    assert!(matches!(
        FeeScheduleRegistry::from_json(r#"{ "Zerodha": { "sttRate": "0.1" } }"#),
        Err(BrokerageError::Json(_))
    ));
}

#[test]
fn test_registry_is_shared_across_threads() {
    let registry = Arc::new(FeeScheduleRegistry::standard());
    let sell = trade(Broker::Zerodha, TradeSide::SELL, 10, dec!(100));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let sell = sell.clone();
            std::thread::spawn(move || ChargeCalculator::new(&registry).charges_for(&sell).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().total, dec!(18.15));
    }
}

// ===================================================================
// Charges
// ===================================================================

#[test]
fn test_zerodha_delivery_sell() {
    let registry = FeeScheduleRegistry::standard();
    let sell = trade(Broker::Zerodha, TradeSide::SELL, 10, dec!(100));
    let charges = ChargeCalculator::new(&registry).charges_for(&sell).unwrap();

    assert_eq!(charges.brokerage, dec!(1.00));
    assert_eq!(charges.stt, dec!(1.00));
    assert_eq!(charges.transaction_charges, dec!(0.03));
    assert_eq!(charges.gst, dec!(0.19));
    assert_eq!(charges.sebi_charges, dec!(0.00));
    assert_eq!(charges.stamp_duty, dec!(0.00));
    assert_eq!(charges.dp_charges, dec!(15.93));
    assert_eq!(charges.total, dec!(18.15));
}

#[test]
fn test_zerodha_delivery_buy() {
    let registry = FeeScheduleRegistry::standard();
    let buy = trade(Broker::Zerodha, TradeSide::BUY, 10, dec!(100));
    let charges = ChargeCalculator::new(&registry).charges_for(&buy).unwrap();

    assert_eq!(charges.brokerage, dec!(0));
    assert_eq!(charges.stt, dec!(0));
    assert_eq!(charges.transaction_charges, dec!(0.03));
    // 18% of the unrounded 0.0345 transaction charge.
    assert_eq!(charges.gst, dec!(0.01));
    assert_eq!(charges.stamp_duty, dec!(0.15));
    assert_eq!(charges.dp_charges, dec!(0));
    assert_eq!(charges.total, dec!(0.19));
}

#[test]
fn test_zerodha_intraday_buy() {
    let registry = FeeScheduleRegistry::standard();
    let buy = trade(Broker::Zerodha, TradeSide::BUY, 100, dec!(250.50)).intraday();
    let charges = ChargeCalculator::new(&registry).charges_for(&buy).unwrap();

    // turnover 25050
    assert_eq!(charges.brokerage, dec!(7.52));
    assert_eq!(charges.stt, dec!(0));
    assert_eq!(charges.transaction_charges, dec!(0.86));
    assert_eq!(charges.gst, dec!(1.51));
    assert_eq!(charges.sebi_charges, dec!(0.03));
    assert_eq!(charges.stamp_duty, dec!(3.76));
    assert_eq!(charges.dp_charges, dec!(0));
    assert_eq!(charges.total, dec!(13.68));
}

#[test]
fn test_zerodha_intraday_sell() {
    let registry = FeeScheduleRegistry::standard();
    let sell = trade(Broker::Zerodha, TradeSide::SELL, 100, dec!(250.50)).intraday();
    let charges = ChargeCalculator::new(&registry).charges_for(&sell).unwrap();

    assert_eq!(charges.brokerage, dec!(7.52));
    assert_eq!(charges.stt, dec!(25.05));
    assert_eq!(charges.stamp_duty, dec!(0));
    assert_eq!(charges.dp_charges, dec!(0));
    assert_eq!(charges.total, dec!(34.97));
}

#[test]
fn test_groww_delivery_sell() {
    let registry = FeeScheduleRegistry::standard();
    let sell = trade(Broker::Groww, TradeSide::SELL, 10, dec!(100));
    let charges = ChargeCalculator::new(&registry).charges_for(&sell).unwrap();

    assert_eq!(charges.brokerage, dec!(0.50));
    assert_eq!(charges.stt, dec!(1.00));
    assert_eq!(charges.gst, dec!(0.10));
    assert_eq!(charges.dp_charges, dec!(15.93));
    assert_eq!(charges.total, dec!(17.56));
}

#[test]
fn test_compute_uses_given_schedule() {
    let base = *FeeScheduleRegistry::standard().resolve(Broker::Zerodha).unwrap();
    let schedule = BrokerSchedule {
        delivery_buy_rate: dec!(0),
        stamp_duty_rate: dec!(0.5),
        ..base
    };

    let buy = trade(Broker::Groww, TradeSide::BUY, 10, dec!(100));
    let charges = compute(&schedule, &buy);

    assert_eq!(charges.brokerage, dec!(0));
    assert_eq!(charges.stamp_duty, dec!(5.00));
}

#[test]
fn test_compute_is_deterministic() {
    let registry = FeeScheduleRegistry::standard();
    let calculator = ChargeCalculator::new(&registry);
    for fact in trade_grid() {
        assert_eq!(
            calculator.charges_for(&fact).unwrap(),
            calculator.charges_for(&fact).unwrap()
        );
    }
}

#[test]
fn test_charge_all_keeps_input_order() {
    let registry = FeeScheduleRegistry::standard();
    let trades = trade_grid();
    let priced = ChargeCalculator::new(&registry)
        .charge_all(trades.clone())
        .unwrap();

    assert_eq!(priced.len(), trades.len());
    for ((fact, _), original) in priced.iter().zip(&trades) {
        assert_eq!(fact, original);
    }
}

// ===================================================================
// Charge rules
// ===================================================================

#[test]
fn test_trade_kind_classification() {
    let buy = trade(Broker::Zerodha, TradeSide::BUY, 1, dec!(1));
    let sell = trade(Broker::Zerodha, TradeSide::SELL, 1, dec!(1));

    assert_eq!(buy.kind(), TradeKind::DeliveryBuy);
    assert_eq!(sell.kind(), TradeKind::DeliverySell);
    assert_eq!(buy.clone().intraday().kind(), TradeKind::IntradayBuy);
    assert_eq!(sell.clone().intraday().kind(), TradeKind::IntradaySell);
    assert_eq!(TradeKind::IntradaySell.side(), TradeSide::SELL);
    assert!(!TradeKind::DeliveryBuy.is_intraday());
}

#[test]
fn test_stt_only_on_sells_and_stamp_duty_only_on_buys() {
    let registry = FeeScheduleRegistry::standard();
    let calculator = ChargeCalculator::new(&registry);

    for fact in trade_grid() {
        let charges = calculator.charges_for(&fact).unwrap();
        match fact.side {
            TradeSide::BUY => {
                assert_eq!(charges.stt, Decimal::ZERO, "{fact:?}");
                assert!(charges.stamp_duty >= Decimal::ZERO, "{fact:?}");
            }
            TradeSide::SELL => {
                assert!(charges.stt >= Decimal::ZERO, "{fact:?}");
                assert_eq!(charges.stamp_duty, Decimal::ZERO, "{fact:?}");
            }
        }
    }
}

#[test]
fn test_dp_charged_only_on_delivery_sells() {
    let registry = FeeScheduleRegistry::standard();
    let calculator = ChargeCalculator::new(&registry);

    for fact in trade_grid() {
        let charges = calculator.charges_for(&fact).unwrap();
        let flat = registry.resolve(fact.broker).unwrap().dp_charges;
        if fact.kind() == TradeKind::DeliverySell {
            assert_eq!(charges.dp_charges, flat, "{fact:?}");
        } else {
            assert_eq!(charges.dp_charges, Decimal::ZERO, "{fact:?}");
        }
    }
}

#[test]
fn test_dp_is_not_scaled_by_quantity() {
    let registry = FeeScheduleRegistry::standard();
    let calculator = ChargeCalculator::new(&registry);
    let small = trade(Broker::Zerodha, TradeSide::SELL, 1, dec!(10));
    let large = trade(Broker::Zerodha, TradeSide::SELL, 5000, dec!(10));

    assert_eq!(
        calculator.charges_for(&small).unwrap().dp_charges,
        calculator.charges_for(&large).unwrap().dp_charges
    );
}

#[test]
fn test_total_is_sum_of_rounded_components() {
    let registry = FeeScheduleRegistry::standard();
    let calculator = ChargeCalculator::new(&registry);

    for fact in trade_grid() {
        let charges = calculator.charges_for(&fact).unwrap();
        let sum: Decimal = charges.components().into_iter().sum();
        assert_eq!(charges.total, sum, "{fact:?}");
        for component in charges.components() {
            assert_eq!(round_money(component), component, "{fact:?}");
        }
    }
}

// ===================================================================
// Rounding
// ===================================================================

#[test]
fn test_round_money_midpoint_away_from_zero() {
    assert_eq!(round_money(dec!(0.125)), dec!(0.13));
    assert_eq!(round_money(dec!(0.135)), dec!(0.14));
    assert_eq!(round_money(dec!(-0.125)), dec!(-0.13));
    assert_eq!(round_money(dec!(0.0345)), dec!(0.03));
    assert_eq!(round_money(dec!(0.18621)), dec!(0.19));
}

#[test]
fn test_round_money_is_idempotent() {
    for value in [dec!(0), dec!(1.5), dec!(18.15), dec!(-179.85), dec!(15.93)] {
        assert_eq!(round_money(round_money(value)), round_money(value));
        assert_eq!(round_money(value), value);
    }
}

// ===================================================================
// Aggregation
// ===================================================================

#[test]
fn test_aggregate_buy_and_sell() {
    let pairs = vec![
        (trade(Broker::Zerodha, TradeSide::BUY, 10, dec!(100)), charged(dec!(2.00))),
        (trade(Broker::Zerodha, TradeSide::SELL, 10, dec!(120)), charged(dec!(18.15))),
    ];
    let summary = aggregate(&pairs).unwrap();

    assert_eq!(summary.buy_total, dec!(1000));
    assert_eq!(summary.sell_total, dec!(1200));
    assert_eq!(summary.buy_charges, dec!(2.00));
    assert_eq!(summary.sell_charges, dec!(18.15));
    assert_eq!(summary.gross_pl, dec!(200));
    assert_eq!(summary.net_pl, dec!(179.85));
    assert_eq!(summary.total_charges(), dec!(20.15));
    assert_eq!(summary.trade_count, 2);
}

#[test]
fn test_aggregate_single_buy_with_zero_delivery_brokerage() {
    let registry = FeeScheduleRegistry::standard();
    let buy = trade(Broker::Zerodha, TradeSide::BUY, 10, dec!(100));
    let charges = ChargeCalculator::new(&registry).charges_for(&buy).unwrap();
    assert_eq!(charges.brokerage, dec!(0));
    assert_eq!(charges.stamp_duty, dec!(1000) * dec!(0.015) / dec!(100));

    let summary = aggregate(&[(buy, charges)]).unwrap();
    assert_eq!(summary.buy_total, dec!(1000));
    assert_eq!(summary.sell_total, dec!(0));
    assert_eq!(summary.gross_pl, dec!(-1000));
    assert_eq!(summary.net_pl, dec!(-1000.19));
}

#[test]
fn test_aggregate_loss() {
    let pairs = vec![
        (trade(Broker::Groww, TradeSide::BUY, 50, dec!(200.05)), charged(dec!(1.65))),
        (trade(Broker::Groww, TradeSide::SELL, 50, dec!(190)), charged(dec!(21.30))),
    ];
    let summary = aggregate(&pairs).unwrap();

    assert_eq!(summary.buy_total, dec!(10002.50));
    assert_eq!(summary.sell_total, dec!(9500));
    assert_eq!(summary.gross_pl, dec!(-502.50));
    assert_eq!(summary.net_pl, dec!(-525.45));
}

#[test]
fn test_aggregate_counts_duplicates_twice() {
    let buy = (trade(Broker::Zerodha, TradeSide::BUY, 10, dec!(100)), charged(dec!(0.19)));
    let summary = aggregate(&[buy.clone(), buy]).unwrap();

    assert_eq!(summary.buy_total, dec!(2000));
    assert_eq!(summary.buy_charges, dec!(0.38));
    assert_eq!(summary.trade_count, 2);
}

#[test]
fn test_aggregate_empty_input() {
    assert!(matches!(aggregate(&[]), Err(BrokerageError::EmptyInput)));
}

#[test]
fn test_aggregate_priced_round_trip() {
    let registry = FeeScheduleRegistry::standard();
    let trades = vec![
        trade(Broker::Zerodha, TradeSide::BUY, 100, dec!(250.50)).intraday(),
        trade(Broker::Zerodha, TradeSide::SELL, 100, dec!(250.50)).intraday(),
    ];
    let priced = ChargeCalculator::new(&registry).charge_all(trades).unwrap();
    let summary = aggregate(&priced).unwrap();

    assert_eq!(summary.gross_pl, dec!(0));
    assert_eq!(summary.buy_charges, dec!(13.68));
    assert_eq!(summary.sell_charges, dec!(34.97));
    assert_eq!(summary.net_pl, dec!(-48.65));
}

// ===================================================================
// Wire format
// ===================================================================

#[test]
fn test_trade_fact_deserializes_with_delivery_default() {
    let json = r#"{ "symbol": "TCS", "quantity": 5, "price": "3500.50", "side": "SELL", "broker": "Groww" }"#;
    let fact: TradeFact = serde_json::from_str(json).unwrap();

    assert_eq!(fact.price, dec!(3500.50));
    assert_eq!(fact.side, TradeSide::SELL);
    assert_eq!(fact.broker, Broker::Groww);
    assert!(!fact.intraday);
    assert_eq!(fact.turnover(), dec!(17502.50));
}

#[test]
fn test_summary_serializes_with_pl_field_names() {
    let pairs = vec![(trade(Broker::Zerodha, TradeSide::SELL, 1, dec!(10)), charged(dec!(1)))];
    let value = serde_json::to_value(aggregate(&pairs).unwrap()).unwrap();

    for key in ["buyTotal", "sellTotal", "buyCharges", "sellCharges", "grossPL", "netPL", "tradeCount"] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
}

#[test]
fn test_breakdown_serializes_camel_case() {
    let value = serde_json::to_value(ChargeBreakdown::default()).unwrap();
    for key in [
        "brokerage",
        "stt",
        "transactionCharges",
        "gst",
        "sebiCharges",
        "stampDuty",
        "dpCharges",
        "total",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
}
