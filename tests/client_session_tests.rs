use pricetarget_rs::client::{ApiError, FetchSession, FetchedTarget, normalize_symbol};
use pricetarget_rs::core::PriceTargetSet;

#[test]
fn fetched_targets_are_timestamped_on_arrival() {
    let before = chrono::Utc::now();
    let fetched = FetchedTarget::new(PriceTargetSet::new(
        150.0, 175.0, 200.0, 180.0, "TEST", "Test Co",
    ));
    let after = chrono::Utc::now();

    assert!(fetched.fetched_at >= before);
    assert!(fetched.fetched_at <= after);
    assert_eq!(fetched.data.symbol, "TEST");
}

#[test]
fn symbols_are_trimmed_and_uppercased() {
    assert_eq!(normalize_symbol("aapl").expect("symbol"), "AAPL");
    assert_eq!(normalize_symbol("  msft  ").expect("symbol"), "MSFT");
    assert_eq!(normalize_symbol("BRK.B").expect("symbol"), "BRK.B");
}

#[test]
fn empty_and_whitespace_symbols_are_rejected_before_any_fetch() {
    assert!(matches!(normalize_symbol(""), Err(ApiError::EmptySymbol)));
    assert!(matches!(
        normalize_symbol("   \t "),
        Err(ApiError::EmptySymbol)
    ));
}

#[test]
fn error_statuses_match_http_semantics() {
    assert_eq!(ApiError::EmptySymbol.status(), 400);
    assert_eq!(
        ApiError::SymbolNotFound {
            symbol: "XXXX".to_owned()
        }
        .status(),
        404
    );
    assert_eq!(
        ApiError::Upstream {
            status: 503,
            message: "upstream down".to_owned()
        }
        .status(),
        503
    );
    assert_eq!(ApiError::Transport("timed out".to_owned()).status(), 500);
}

#[test]
fn not_found_message_names_the_symbol() {
    let err = ApiError::SymbolNotFound {
        symbol: "XXXX".to_owned(),
    };
    assert_eq!(err.to_string(), "symbol 'XXXX' not found");
}

#[test]
fn latest_ticket_wins() {
    let session = FetchSession::new();

    let first = session.begin();
    let second = session.begin();

    // The slow first response arrives after the second search started.
    assert!(!session.accept(first));
    assert!(session.accept(second));
}

#[test]
fn ticket_stays_valid_until_superseded() {
    let session = FetchSession::new();

    let ticket = session.begin();
    assert!(session.accept(ticket));
    assert!(session.accept(ticket));

    session.begin();
    assert!(!session.accept(ticket));
}

#[test]
fn stale_result_does_not_overwrite_newer_state() {
    // The discard-stale pattern a host screen is expected to follow.
    let session = FetchSession::new();
    let mut displayed: Option<PriceTargetSet> = None;

    let stale_ticket = session.begin();
    let fresh_ticket = session.begin();

    let fresh = PriceTargetSet::new(150.0, 175.0, 200.0, 180.0, "FRESH", "Fresh Co");
    if session.accept(fresh_ticket) {
        displayed = Some(fresh.clone());
    }

    let stale = PriceTargetSet::new(1.0, 2.0, 3.0, 4.0, "STALE", "Stale Co");
    if session.accept(stale_ticket) {
        displayed = Some(stale);
    }

    assert_eq!(displayed.as_ref().map(|d| d.symbol.as_str()), Some("FRESH"));
    assert_eq!(displayed, Some(fresh));
}
