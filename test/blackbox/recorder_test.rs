use crate::common::FakeSheets;
use sheet_recorder::recorder::SheetRecorder;
use sheet_recorder::recorder::event::LicenseEvent;
use sheet_recorder::recorder::row::WriteStrategy;
use sheet_recorder::sheets::api::TabId;

fn acme_event() -> LicenseEvent {
    LicenseEvent::new(
        "Alice".to_string(),
        "a@x.com".to_string(),
        "Acme".to_string(),
        "cid-1".to_string(),
    )
}

#[tokio::test]
async fn first_event_creates_tab_with_header_and_one_row() {
    let recorder = SheetRecorder::new(FakeSheets::new());
    let event = acme_event();

    let tab = recorder
        .record(&event, WriteStrategy::Overwrite)
        .await
        .expect("record");
    assert_eq!(tab, TabId(0));

    let rows = recorder.api().rows("Acme");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], ["SL", "Name", "Email", "ClusterID", "Time"]);
    assert_eq!(
        rows[1],
        [
            "1",
            "Alice",
            "a@x.com",
            "cid-1",
            event.timestamp.as_str()
        ]
    );
}

#[tokio::test]
async fn second_event_reuses_the_tab_and_increments_the_sequence() {
    let recorder = SheetRecorder::new(FakeSheets::new());

    recorder
        .record(&acme_event(), WriteStrategy::Overwrite)
        .await
        .expect("first record");
    recorder
        .record(&acme_event(), WriteStrategy::Overwrite)
        .await
        .expect("second record");

    assert_eq!(recorder.api().add_sheet_calls(), 1);
    let rows = recorder.api().rows("Acme");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1][0], "1");
    assert_eq!(rows[2][0], "2");
}

#[tokio::test]
async fn distinct_products_land_in_distinct_tabs() {
    let recorder = SheetRecorder::new(FakeSheets::new());
    let mut other = acme_event();
    other.product = "Kubeform".to_string();

    let acme_tab = recorder
        .record(&acme_event(), WriteStrategy::Overwrite)
        .await
        .expect("acme");
    let other_tab = recorder
        .record(&other, WriteStrategy::Overwrite)
        .await
        .expect("kubeform");

    assert_ne!(acme_tab, other_tab);
    assert_eq!(recorder.api().add_sheet_calls(), 2);
    assert_eq!(recorder.api().rows("Acme").len(), 2);
    assert_eq!(recorder.api().rows("Kubeform").len(), 2);
}

#[tokio::test]
async fn written_fields_read_back_unchanged() {
    let recorder = SheetRecorder::new(FakeSheets::new());
    let event = acme_event();

    recorder
        .record(&event, WriteStrategy::Append)
        .await
        .expect("record");

    let rows = recorder.api().rows("Acme");
    let data = rows.last().expect("data row");
    assert_eq!(data[1], event.name);
    assert_eq!(data[2], event.email);
    assert_eq!(data[3], event.cluster_id);
    assert_eq!(data[4], event.timestamp);
}
