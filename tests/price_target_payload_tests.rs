use pricetarget_rs::core::PriceTargetSet;
use rust_decimal::Decimal;

#[test]
fn wire_payload_deserializes_with_snake_case_last_close() {
    let payload = r#"{
        "high": 200.0,
        "low": 150.0,
        "mean": 175.0,
        "last_close": 180.0,
        "symbol": "TEST",
        "name": "Test Co",
        "logo_url": "https://example.com/logo.png"
    }"#;

    let data: PriceTargetSet = serde_json::from_str(payload).expect("payload");
    assert_eq!(data.last_close, 180.0);
    assert_eq!(data.symbol, "TEST");
    assert_eq!(data.logo_url.as_deref(), Some("https://example.com/logo.png"));
}

#[test]
fn missing_logo_url_defaults_to_none() {
    let payload = r#"{
        "high": 200.0,
        "low": 150.0,
        "mean": 175.0,
        "last_close": 180.0,
        "symbol": "TEST",
        "name": "Test Co"
    }"#;

    let data: PriceTargetSet = serde_json::from_str(payload).expect("payload");
    assert_eq!(data.logo_url, None);
}

#[test]
fn builder_attaches_logo_url() {
    let data = PriceTargetSet::new(150.0, 175.0, 200.0, 180.0, "TEST", "Test Co")
        .with_logo_url("https://example.com/logo.png");
    assert!(data.logo_url.is_some());
}

#[test]
fn decimal_prices_convert_to_f64() {
    let data = PriceTargetSet::from_decimals(
        Decimal::new(15_000, 2),
        Decimal::new(17_500, 2),
        Decimal::new(20_000, 2),
        Decimal::new(18_025, 2),
        "TEST",
        "Test Co",
    )
    .expect("decimal payload");

    assert_eq!(data.low, 150.0);
    assert_eq!(data.mean, 175.0);
    assert_eq!(data.high, 200.0);
    assert_eq!(data.last_close, 180.25);
    data.validate().expect("finite prices");
}

#[test]
fn validate_rejects_non_finite_prices() {
    let mut data = PriceTargetSet::new(150.0, 175.0, 200.0, 180.0, "TEST", "Test Co");
    data.mean = f64::NAN;
    assert!(data.validate().is_err());

    data.mean = f64::INFINITY;
    assert!(data.validate().is_err());
}

#[test]
fn prices_come_back_in_payload_order() {
    let data = PriceTargetSet::new(150.0, 175.0, 200.0, 180.0, "TEST", "Test Co");
    assert_eq!(data.prices(), [150.0, 175.0, 200.0, 180.0]);
}
