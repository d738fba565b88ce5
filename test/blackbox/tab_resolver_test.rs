use crate::common::FakeSheets;
use sheet_recorder::common::errors::AppError;
use sheet_recorder::recorder::tab::ensure_tab;
use sheet_recorder::sheets::api::TabId;

#[tokio::test]
async fn unseen_product_gets_exactly_one_tab_with_a_header() {
    let fake = FakeSheets::new();

    let first = ensure_tab(&fake, "Acme").await.expect("create");
    let second = ensure_tab(&fake, "Acme").await.expect("lookup");

    assert_eq!(first, second);
    assert_eq!(fake.add_sheet_calls(), 1);
    let rows = fake.rows("Acme");
    assert_eq!(rows, [["SL", "Name", "Email", "ClusterID", "Time"]]);
}

#[tokio::test]
async fn existing_tab_is_returned_without_create_calls() {
    let fake = FakeSheets::new();
    let seeded = fake.seed_tab(
        "Acme",
        vec![vec!["SL".to_string(), "Name".to_string()]],
    );

    let resolved = ensure_tab(&fake, "Acme").await.expect("lookup");

    assert_eq!(resolved, seeded);
    assert_eq!(fake.add_sheet_calls(), 0);
    // No header rewrite on the hit path.
    assert_eq!(fake.rows("Acme").len(), 1);
}

#[tokio::test]
async fn tab_id_zero_is_a_valid_lookup_result() {
    let fake = FakeSheets::new();
    let seeded = fake.seed_tab("Acme", Vec::new());
    assert_eq!(seeded, TabId(0));

    let resolved = ensure_tab(&fake, "Acme").await.expect("lookup");
    assert_eq!(resolved, TabId(0));
    assert_eq!(fake.add_sheet_calls(), 0);
}

#[tokio::test]
async fn titles_match_case_sensitively() {
    let fake = FakeSheets::new();
    fake.seed_tab("Acme", Vec::new());

    ensure_tab(&fake, "acme").await.expect("create");
    assert_eq!(fake.add_sheet_calls(), 1);
}

#[tokio::test]
async fn empty_product_name_is_rejected() {
    let fake = FakeSheets::new();
    let err = ensure_tab(&fake, "  ").await.expect_err("empty");
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(fake.add_sheet_calls(), 0);
}
