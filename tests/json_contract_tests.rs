use serde_json::{Value, json};
use serp_deck::api::{DATASET_JSON_SCHEMA_V1, DatasetSnapshot};
use serp_deck::core::MetricTable;
use serp_deck::data::SeoDataset;
use serp_deck::error::DeckError;

fn sample() -> DatasetSnapshot {
    SeoDataset::sample().expect("sample").snapshot()
}

#[test]
fn metric_tables_keep_the_dataset_shape() {
    let data = SeoDataset::sample().expect("sample");
    let value = serde_json::to_value(&data.branded_traffic).expect("json");
    let object = value.as_object().expect("object");
    let ids: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(
        ids,
        vec!["fortinet", "cisco", "hpe", "paloalto", "checkpoint", "crowdstrike"]
    );
    assert_eq!(object["hpe"], json!([null, 482.0, 411.0, 413.0, 375.0]));
}

#[test]
fn ragged_tables_are_rejected() {
    let ragged = r#"{ "a": [1, 2, null], "b": [1, 2] }"#;
    let err = serde_json::from_str::<MetricTable>(ragged).expect_err("ragged");
    assert!(err.to_string().contains("expected 3"), "{err}");

    let table: MetricTable =
        serde_json::from_str(r#"{ "a": [null, 0, 5] }"#).expect("table");
    assert_eq!(table.period_count(), 3);
    assert_eq!(table.series("a").map(|s| s.get(1)), Some(Some(0.0)));
    assert_eq!(table.series("a").map(|s| s.get(0)), Some(None));
}

#[test]
fn versioned_envelope_round_trips() {
    let snapshot = sample();
    let text = snapshot.to_json_contract_v1_pretty().expect("contract");
    let value: Value = serde_json::from_str(&text).expect("json");
    assert_eq!(value["schema_version"], json!(DATASET_JSON_SCHEMA_V1));
    assert_eq!(value["periods"]["labels"][0], json!("Sep 2025"));

    let parsed = DatasetSnapshot::from_json_compat_str(&text).expect("parse");
    assert_eq!(parsed, snapshot);
}

#[test]
fn parsing_keeps_competitor_and_metric_order() {
    let snapshot = sample();
    let text = snapshot.to_json_contract_v1_pretty().expect("contract");
    let parsed = DatasetSnapshot::from_json_compat_str(&text).expect("parse");

    let metric_names: Vec<&str> = parsed.metrics.keys().map(String::as_str).collect();
    assert_eq!(
        metric_names,
        vec![
            "organicTraffic",
            "brandedTraffic",
            "nonBrandedTraffic",
            "organicKeywords",
            "pageOneKeywords",
            "domainAuthority",
            "referringDomains",
        ]
    );
    for table in parsed.metrics.values() {
        let ids: Vec<&str> = table.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["fortinet", "cisco", "hpe", "paloalto", "checkpoint", "crowdstrike"]
        );
    }

    let bare = serde_json::to_string(&snapshot).expect("bare");
    let parsed = DatasetSnapshot::from_json_compat_str(&bare).expect("parse bare");
    let first = parsed.metrics.get("organicTraffic").expect("organic traffic");
    assert_eq!(first.iter().next().map(|(id, _)| id.as_str()), Some("fortinet"));
}

#[test]
fn bare_payload_is_accepted() {
    let snapshot = sample();
    let text = serde_json::to_string(&snapshot).expect("bare");
    assert_eq!(
        DatasetSnapshot::from_json_compat_str(&text).expect("parse"),
        snapshot
    );
}

#[test]
fn unknown_schema_version_is_rejected() {
    let mut value = serde_json::to_value(sample()).expect("json");
    value["schema_version"] = json!(2);
    let err = DatasetSnapshot::from_json_compat_str(&value.to_string()).expect_err("v2");
    assert_eq!(
        err,
        DeckError::InvalidData("unsupported dataset schema version: 2".to_owned())
    );
}

#[test]
fn inconsistent_payloads_are_rejected() {
    let base = json!({
        "periods": { "keys": ["2025-09", "2025-10"], "labels": ["Sep 2025", "Oct 2025"] },
        "competitors": [{ "id": "a", "name": "A", "color": "#123456" }],
        "metrics": { "traffic": { "a": [1, 2] } }
    });
    DatasetSnapshot::from_json_compat_str(&base.to_string()).expect("valid");

    let mut short_table = base.clone();
    short_table["metrics"]["traffic"]["a"] = json!([1]);
    assert!(DatasetSnapshot::from_json_compat_str(&short_table.to_string()).is_err());

    let mut stranger = base.clone();
    stranger["metrics"]["traffic"] = json!({ "zz": [1, 2] });
    assert_eq!(
        DatasetSnapshot::from_json_compat_str(&stranger.to_string()),
        Err(DeckError::UnknownCompetitor("zz".to_owned()))
    );

    let mut bad_color = base.clone();
    bad_color["competitors"][0]["color"] = json!("red");
    assert!(DatasetSnapshot::from_json_compat_str(&bad_color.to_string()).is_err());

    let mut ragged_axis = base;
    ragged_axis["periods"]["labels"] = json!(["Sep 2025"]);
    assert!(DatasetSnapshot::from_json_compat_str(&ragged_axis.to_string()).is_err());
}
