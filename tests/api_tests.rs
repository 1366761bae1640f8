use rust_decimal_macros::dec;

use finplat_contracts::api::{
    ApiResponse, LoginRequest, OrderType, PaginatedResponse, Pagination, TradeRequest,
};
use finplat_contracts::domain::{Stock, TradeSide};
use finplat_contracts::ContractError;

#[test]
fn ok_and_err_constructors_are_conformant() {
    let ok: ApiResponse<u32> = ApiResponse::ok(7);
    assert!(ok.validate().is_ok());
    assert_eq!(ok.data, Some(7));
    assert_eq!(ok.error, None);

    let err: ApiResponse<u32> = ApiResponse::err("portfolio not found");
    assert!(err.validate().is_ok());
    assert!(!err.success);
    assert_eq!(err.data, None);
}

#[test]
fn success_with_error_field_is_flagged() {
    let mut response: ApiResponse<u32> = ApiResponse::ok(7);
    response.error = Some("should not be here".to_string());
    assert_eq!(response.validate(), Err(ContractError::SuccessWithError));
}

#[test]
fn failure_with_data_is_flagged() {
    let mut response: ApiResponse<u32> = ApiResponse::err("boom");
    response.data = Some(7);
    assert_eq!(response.validate(), Err(ContractError::FailureWithData));
}

#[test]
fn envelope_omits_absent_fields_on_the_wire() {
    let ok: ApiResponse<u32> = ApiResponse::ok(7).with_message("created");
    let json = serde_json::to_value(&ok).unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], 7);
    assert_eq!(json["message"], "created");
    assert!(json.get("error").is_none());
}

#[test]
fn pagination_contract_example() {
    let page: PaginatedResponse<Stock> = PaginatedResponse::new(vec![], 1, 10, 95);
    assert_eq!(page.pagination.total_pages, 10);
    assert!(page.validate().is_ok());
}

#[test]
fn received_pagination_with_wrong_page_count_is_flagged() {
    let pagination = Pagination {
        page: 1,
        limit: 10,
        total: 95,
        total_pages: 9,
    };
    assert_eq!(
        pagination.validate(),
        Err(ContractError::PaginationMismatch {
            expected: 10,
            actual: 9,
        })
    );
}

#[test]
fn exact_multiple_needs_no_extra_page() {
    let pagination = Pagination {
        page: 1,
        limit: 10,
        total: 100,
        total_pages: 10,
    };
    assert!(pagination.validate().is_ok());
}

#[test]
fn trade_request_parses_from_wire_payload() {
    let payload = serde_json::json!({
        "portfolioId": "portfolio_456",
        "symbol": "AAPL",
        "type": "buy",
        "shares": 10,
        "orderType": "limit",
        "limitPrice": 185.25,
    });
    let request: TradeRequest = serde_json::from_value(payload).unwrap();
    assert_eq!(request.side, TradeSide::Buy);
    assert_eq!(request.order_type, OrderType::Limit);
    assert_eq!(request.limit_price, Some(dec!(185.25)));
}

#[test]
fn order_type_tags_form_a_closed_set() {
    for tag in ["market", "limit"] {
        let parsed: OrderType = tag.parse().unwrap();
        assert_eq!(parsed.as_str(), tag);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), format!("\"{tag}\""));
    }
    assert!("stop_loss".parse::<OrderType>().is_err());
    assert!(serde_json::from_str::<OrderType>("\"stop_loss\"").is_err());
}

#[test]
fn trade_request_rejects_unknown_order_type() {
    let payload = serde_json::json!({
        "portfolioId": "portfolio_456",
        "symbol": "AAPL",
        "type": "buy",
        "shares": 10,
        "orderType": "stop_loss",
    });
    assert!(serde_json::from_value::<TradeRequest>(payload).is_err());
}

#[test]
fn login_request_round_trips() {
    let request = LoginRequest {
        email: "ada@example.com".to_string(),
        password: "hunter2".to_string(),
    };
    let json = serde_json::to_string(&request).unwrap();
    let back: LoginRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, request);
}
