use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

use finplat_contracts::domain::{
    Alert, AlertCondition, AlertOperator, AlertType, Holding, InstrumentType, InvestmentGoal,
    NewsSentiment, PerformanceData, Portfolio, RiskTolerance, Theme, TimeHorizon, Trade,
    TradeSide, TradeStatus, UserRole,
};
use finplat_contracts::DomainError;

fn holding(total_value: rust_decimal::Decimal, cost_basis: rust_decimal::Decimal) -> Holding {
    let gain = Holding::derive_unrealized_gain(total_value, cost_basis);
    Holding {
        id: "holding_1".into(),
        symbol: "AAPL".into(),
        company_name: "Apple Inc.".to_string(),
        shares: dec!(10),
        current_price: dec!(185.25),
        total_value,
        cost_basis,
        unrealized_gain: gain,
        unrealized_gain_percent: Holding::derive_unrealized_gain_percent(total_value, cost_basis),
        sector: "Technology".to_string(),
        last_updated: Utc.with_ymd_and_hms(2024, 3, 1, 16, 0, 0).unwrap(),
    }
}

#[test]
fn holding_derivations_match_the_documented_example() {
    let h = holding(dec!(1852.50), dec!(1700.00));
    assert_eq!(h.unrealized_gain, dec!(152.50));
    assert!((h.unrealized_gain_percent - dec!(8.97)).abs() < dec!(0.005));
    assert!(h.validate_derived().is_ok());
}

#[test]
fn holding_with_inconsistent_gain_is_flagged() {
    let mut h = holding(dec!(1852.50), dec!(1700.00));
    h.unrealized_gain = dec!(200.00);
    match h.validate_derived() {
        Err(DomainError::ValueMismatch { field, .. }) => assert_eq!(field, "unrealizedGain"),
        other => panic!("expected ValueMismatch, got {other:?}"),
    }
}

#[test]
fn portfolio_total_must_match_holding_sum() {
    let holdings = vec![
        holding(dec!(1852.50), dec!(1700.00)),
        holding(dec!(950.00), dec!(1000.00)),
    ];
    let mut portfolio = Portfolio {
        id: "portfolio_456".into(),
        user_id: "user_123".into(),
        name: "Growth".to_string(),
        description: None,
        total_value: dec!(2802.50),
        day_change: dec!(12.40),
        day_change_percent: dec!(0.44),
        holdings,
        performance: vec![PerformanceData {
            date: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            value: dec!(2790.10),
            period_return: dec!(12.40),
            return_percent: dec!(0.44),
        }],
        created_at: Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 3, 1, 16, 0, 0).unwrap(),
    };
    assert!(portfolio.validate_totals().is_ok());

    portfolio.total_value = dec!(3000.00);
    assert!(portfolio.validate_totals().is_err());
}

#[test]
fn portfolio_json_uses_camel_case_and_keyword_rename() {
    let portfolio = Portfolio {
        id: "portfolio_456".into(),
        user_id: "user_123".into(),
        name: "Growth".to_string(),
        description: Some("Long-horizon equities".to_string()),
        total_value: dec!(1852.50),
        day_change: dec!(0),
        day_change_percent: dec!(0),
        holdings: vec![holding(dec!(1852.50), dec!(1700.00))],
        performance: vec![PerformanceData {
            date: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            value: dec!(1852.50),
            period_return: dec!(152.50),
            return_percent: dec!(8.97),
        }],
        created_at: Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 3, 1, 16, 0, 0).unwrap(),
    };

    let json = serde_json::to_value(&portfolio).unwrap();
    assert_eq!(json["userId"], "user_123");
    assert_eq!(json["totalValue"], 1852.5);
    let percent = json["holdings"][0]["unrealizedGainPercent"].as_f64().unwrap();
    assert!((percent - 8.97).abs() < 0.005);
    assert_eq!(json["performance"][0]["return"], 152.5);

    let back: Portfolio = serde_json::from_value(json).unwrap();
    assert_eq!(back.id, portfolio.id);
    assert_eq!(back.total_value, portfolio.total_value);
    assert_eq!(back.holdings[0].unrealized_gain, dec!(152.50));
}

#[test]
fn missing_required_field_is_rejected() {
    // No `totalValue`.
    let payload = serde_json::json!({
        "id": "portfolio_456",
        "userId": "user_123",
        "name": "Growth",
        "dayChange": 0,
        "dayChangePercent": 0,
        "holdings": [],
        "performance": [],
        "createdAt": "2023-06-01T00:00:00Z",
        "updatedAt": "2024-03-01T16:00:00Z",
    });
    let err = serde_json::from_value::<Portfolio>(payload).unwrap_err();
    assert!(err.to_string().contains("totalValue"));
}

#[test]
fn absent_description_stays_distinct_from_empty() {
    let absent: serde_json::Value = serde_json::json!({
        "name": "Growth",
    });
    let empty: serde_json::Value = serde_json::json!({
        "name": "Growth",
        "description": "",
    });
    let a: finplat_contracts::api::CreatePortfolioRequest =
        serde_json::from_value(absent).unwrap();
    let e: finplat_contracts::api::CreatePortfolioRequest =
        serde_json::from_value(empty).unwrap();
    assert_eq!(a.description, None);
    assert_eq!(e.description, Some(String::new()));
}

#[test]
fn every_user_role_tag_passes_and_unknown_fails() {
    for tag in ["investor", "trader", "advisor", "admin"] {
        assert!(tag.parse::<UserRole>().is_ok(), "{tag} should parse");
        assert!(serde_json::from_str::<UserRole>(&format!("\"{tag}\"")).is_ok());
    }
    assert!("broker".parse::<UserRole>().is_err());
    assert!(serde_json::from_str::<UserRole>("\"broker\"").is_err());
}

#[test]
fn every_instrument_type_tag_round_trips() {
    for tag in [
        "stock",
        "bond",
        "etf",
        "mutual_fund",
        "crypto",
        "option",
        "future",
    ] {
        let parsed: InstrumentType = tag.parse().unwrap();
        assert_eq!(parsed.as_str(), tag);
    }
}

#[test]
fn sentiment_outside_closed_set_fails_validation() {
    assert!(serde_json::from_str::<NewsSentiment>("\"mixed\"").is_err());
}

/// Every listed tag must pass both parse paths and round-trip; the unknown
/// tag must fail both. One invocation per closed enumeration.
macro_rules! assert_closed_enum {
    ($ty:ty, [$($tag:literal),+ $(,)?], $unknown:literal) => {
        for tag in [$($tag),+] {
            let parsed: $ty = tag.parse().unwrap_or_else(|e| panic!("{tag}: {e}"));
            assert_eq!(parsed.as_str(), tag);
            let from_json: $ty =
                serde_json::from_str(&format!("\"{tag}\"")).unwrap();
            assert_eq!(from_json, parsed);
            assert_eq!(serde_json::to_string(&parsed).unwrap(), format!("\"{tag}\""));
        }
        assert!($unknown.parse::<$ty>().is_err(), "{} accepted", $unknown);
        assert!(
            serde_json::from_str::<$ty>(concat!("\"", $unknown, "\"")).is_err(),
            "{} accepted via serde",
            $unknown
        );
    };
}

#[test]
fn theme_tags_form_a_closed_set() {
    assert_closed_enum!(Theme, ["light", "dark"], "sepia");
}

#[test]
fn trade_status_tags_form_a_closed_set() {
    assert_closed_enum!(
        TradeStatus,
        ["pending", "executed", "cancelled", "failed"],
        "stop"
    );
}

#[test]
fn trade_side_tags_form_a_closed_set() {
    assert_closed_enum!(TradeSide, ["buy", "sell"], "hold");
}

#[test]
fn risk_tolerance_tags_form_a_closed_set() {
    assert_closed_enum!(
        RiskTolerance,
        ["conservative", "moderate", "aggressive"],
        "reckless"
    );
}

#[test]
fn time_horizon_tags_form_a_closed_set() {
    assert_closed_enum!(TimeHorizon, ["short", "medium", "long"], "forever");
}

#[test]
fn investment_goal_tags_form_a_closed_set() {
    assert_closed_enum!(
        InvestmentGoal,
        [
            "retirement",
            "education",
            "home",
            "emergency",
            "wealth_building",
            "income"
        ],
        "yacht"
    );
}

#[test]
fn alert_type_tags_form_a_closed_set() {
    assert_closed_enum!(
        AlertType,
        ["price", "volume", "portfolio_value", "news", "ratio"],
        "dividend"
    );
}

#[test]
fn alert_operator_tags_form_a_closed_set() {
    assert_closed_enum!(
        AlertOperator,
        ["greater_than", "less_than", "equals", "percentage_change"],
        "not_equals"
    );
}

fn pending_trade() -> Trade {
    Trade {
        id: "trade_789".into(),
        portfolio_id: "portfolio_456".into(),
        symbol: "AAPL".into(),
        side: TradeSide::Buy,
        shares: dec!(10),
        price: dec!(185.25),
        total_amount: dec!(1852.50),
        fees: dec!(1.00),
        status: TradeStatus::Pending,
        executed_at: None,
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap(),
    }
}

#[test]
fn trade_lifecycle_is_one_way() {
    let mut trade = pending_trade();
    assert_eq!(trade.executed_at, None);

    let at = Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 5).unwrap();
    trade.execute(at).unwrap();
    assert_eq!(trade.status, TradeStatus::Executed);
    assert_eq!(trade.executed_at, Some(at));

    // Terminal: no way back to pending, no second transition of any kind.
    assert!(trade.cancel().is_err());
    assert!(trade.fail().is_err());
    assert!(trade.execute(Utc::now()).is_err());
    assert_eq!(trade.executed_at, Some(at));
}

#[test]
fn cancel_and_fail_do_not_set_executed_at() {
    let mut cancelled = pending_trade();
    cancelled.cancel().unwrap();
    assert_eq!(cancelled.status, TradeStatus::Cancelled);
    assert_eq!(cancelled.executed_at, None);

    let mut failed = pending_trade();
    failed.fail().unwrap();
    assert_eq!(failed.status, TradeStatus::Failed);
    assert_eq!(failed.executed_at, None);
}

#[test]
fn alert_triggers_exactly_once() {
    let mut alert = Alert {
        id: "alert_42".into(),
        user_id: "user_123".into(),
        alert_type: AlertType::PortfolioValue,
        symbol: None,
        portfolio_id: Some("portfolio_456".into()),
        condition: AlertCondition {
            operator: AlertOperator::PercentageChange,
            value: dec!(-5),
            timeframe: Some("1d".to_string()),
        },
        is_active: true,
        is_triggered: false,
        created_at: Utc::now(),
        triggered_at: None,
    };

    let first = Utc.with_ymd_and_hms(2024, 3, 1, 15, 0, 0).unwrap();
    alert.trigger(first).unwrap();
    assert!(alert.trigger(Utc::now()).is_err());
    assert_eq!(alert.triggered_at, Some(first));
}
