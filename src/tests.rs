use std::collections::HashMap;
use std::rc::Rc;

use clap::Parser;
use client::testing::MockTransport;
use client::{Method, NoCredentials};
use config::Environment;
use model::{PayoutAction, Resolution};
use serde_json::json;

use crate::cli::commands::execute;
use crate::cli::{
    AppContext, BookingCommand, Cli, Commands, DisputeCommand, PayoutCommand, PropertyCommand,
};
use crate::config::{DEFAULT_API_BASE_URL, Settings};
use crate::output::Format;

fn settings() -> Settings {
    Settings {
        api_base_url: MockTransport::BASE_URL.to_string(),
        token: None,
        request_timeout_ms: 1_000,
        default_limit: 10,
    }
}

fn context(mock: &Rc<MockTransport>, format: Format) -> AppContext {
    AppContext::new(&settings(), mock.clone(), Rc::new(NoCredentials), format)
}

#[test]
fn test_parse_verify_requires_a_decision() {
    assert!(Cli::try_parse_from(["rentadmin", "properties", "verify", "p1"]).is_err());
    assert!(
        Cli::try_parse_from(["rentadmin", "properties", "verify", "p1", "--approve", "--reject"])
            .is_err()
    );

    let cli = Cli::try_parse_from([
        "rentadmin", "properties", "verify", "p1", "--reject", "--reason", "Blurry photos",
    ])
    .unwrap();
    match cli.command {
        Commands::Properties { command: PropertyCommand::Verify { id, approve, reject, reason } } => {
            assert_eq!(id, "p1");
            assert!(!approve);
            assert!(reject);
            assert_eq!(reason, "Blurry photos");
        }
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn test_parse_typed_arguments() {
    let cli = Cli::try_parse_from([
        "rentadmin", "--json", "disputes", "resolve", "d1", "--resolution", "refund_tenant",
        "--notes", "Host admitted fault",
    ])
    .unwrap();
    assert!(cli.json);
    assert!(matches!(
        cli.command,
        Commands::Disputes {
            command: DisputeCommand::Resolve { resolution: Resolution::RefundTenant, .. }
        }
    ));

    assert!(
        Cli::try_parse_from(["rentadmin", "payouts", "process", "p1", "--action", "MAYBE"]).is_err()
    );
    assert!(
        Cli::try_parse_from(["rentadmin", "properties", "list", "--status", "ALL"]).is_err()
    );
}

#[test]
fn test_settings_defaults_and_environment() {
    let defaults = Settings::build(None, Environment::with_prefix("RENTADMIN_UNUSED")).unwrap();
    assert_eq!(defaults.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(defaults.token, None);
    assert_eq!(defaults.default_limit, 10);

    let env = HashMap::from([
        ("RENTADMIN_API_BASE_URL".to_string(), "https://admin.example.com/api/v1/".to_string()),
        ("RENTADMIN_DEFAULT_LIMIT".to_string(), "25".to_string()),
        ("RENTADMIN_TOKEN".to_string(), "  ".to_string()),
    ]);
    let settings =
        Settings::build(None, Environment::with_prefix("RENTADMIN").source(Some(env))).unwrap();
    assert_eq!(settings.api_base_url, "https://admin.example.com/api/v1");
    assert_eq!(settings.default_limit, 25);
    assert_eq!(settings.token, None);
}

#[test]
fn test_flags_override_settings() {
    let settings = settings().with_overrides(Some("http://other/api/v1".into()), Some("t0k".into()));
    assert_eq!(settings.api_base_url, "http://other/api/v1");
    assert_eq!(settings.token.as_deref(), Some("t0k"));
}

#[tokio::test]
async fn test_bookings_list_prints_footer() {
    let mock = MockTransport::new();
    mock.on_page(
        Method::Get,
        "/bookings",
        json!([
            {"id": "b1", "status": "CONFIRMED", "property": {"title": "Loft"}, "startDate": "2024-06-01", "endDate": "2024-06-04"},
            {"id": "b2", "status": "PENDING"}
        ]),
        json!({"nextCursor": "b2", "hasMore": true, "total": 7}),
    );
    let ctx = context(&mock, Format::Text);

    let out = execute(
        &ctx,
        Commands::Bookings {
            command: BookingCommand::List { limit: Some(2), cursor: None, status: None, search: None },
        },
    )
    .await
    .unwrap();

    assert!(out.contains("b1  CONFIRMED"));
    assert!(out.contains("2024-06-01 -> 2024-06-04"));
    assert!(out.ends_with("-- 2 of 7 shown; more with --cursor b2"));
    assert_eq!(mock.last_request().unwrap().param("limit"), Some("2"));
}

#[tokio::test]
async fn test_short_resolve_notes_never_reach_the_server() {
    let mock = MockTransport::new();
    let ctx = context(&mock, Format::Text);

    let err = execute(
        &ctx,
        Commands::Disputes {
            command: DisputeCommand::Resolve {
                id: "d1".into(),
                resolution: Resolution::RejectDispute,
                notes: "abcd".into(),
            },
        },
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "Admin notes must be at least 5 characters");
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_reject_without_reason_is_refused_locally() {
    let mock = MockTransport::new();
    let ctx = context(&mock, Format::Text);

    let result = execute(
        &ctx,
        Commands::Properties {
            command: PropertyCommand::Verify {
                id: "p1".into(),
                approve: false,
                reject: true,
                reason: String::new(),
            },
        },
    )
    .await;

    assert!(result.is_err());
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn test_dispute_show_without_booking_match() {
    let mock = MockTransport::new();
    mock.on_data(
        Method::Get,
        "/disputes",
        json!([{"id": "d1", "bookingId": "b404", "reason": "Noise", "status": "OPEN"}]),
    );
    mock.on_page(Method::Get, "/bookings", json!([{"id": "b1"}]), json!({"hasMore": false}));
    let ctx = context(&mock, Format::Text);

    let out = execute(&ctx, Commands::Disputes { command: DisputeCommand::Show { id: "d1".into() } })
        .await
        .unwrap();

    assert!(out.contains("Reason      Noise"));
    assert!(out.contains("No booking match found"));
}

#[tokio::test]
async fn test_payout_process_reports_server_message() {
    let mock = MockTransport::new();
    mock.on_json(
        Method::Post,
        "/finance/admin/payouts/p1/process",
        422,
        json!({"status": "error", "message": "Payout already processed"}),
    );
    let ctx = context(&mock, Format::Text);

    let err = execute(
        &ctx,
        Commands::Payouts {
            command: PayoutCommand::Process {
                id: "p1".into(),
                action: PayoutAction::Approve,
                notes: String::new(),
            },
        },
    )
    .await
    .unwrap_err();

    assert!(format!("{err:#}").contains("Payout already processed"));
    let api = err.downcast_ref::<client::ApiError>().unwrap();
    assert_eq!(api.user_message(), "Payout already processed");
    assert_eq!(mock.last_request().unwrap().json_body(), Some(json!({"action": "APPROVE"})));
}

#[tokio::test]
async fn test_wallet_json_output() {
    let mock = MockTransport::new();
    mock.on_data(
        Method::Get,
        "/finance/wallet",
        json!({"id": "w1", "userId": "u1", "balance": "99.50", "currency": "USD", "transactions": []}),
    );
    let ctx = context(&mock, Format::Json);

    let out = execute(&ctx, Commands::Wallet).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["id"], "w1");
    assert_eq!(value["balance"], "99.50");

    let text = execute(&context(&mock, Format::Text), Commands::Wallet).await.unwrap();
    assert!(text.starts_with("Balance: $99.50"));
    assert!(text.contains("No transactions."));
}
