use serp_deck::api::{MetricTabKind, Sentiment};
use serp_deck::core::{AxisDomainPolicy, series_change};
use serp_deck::data::{opportunities, sase, traffic_overview};

fn sase_panel() -> serp_deck::MetricPanel {
    sase::panel(AxisDomainPolicy::STANDARD).expect("sase panel")
}

#[test]
fn panel_opens_on_first_tab_with_everyone_visible() {
    let panel = sase_panel();
    assert_eq!(panel.active_kind(), MetricTabKind::Keywords);
    assert_eq!(panel.visible().len(), 6);
    assert_eq!(panel.tabs().len(), 4);
    assert!(!panel.is_editing());
}

#[test]
fn traffic_axis_tracks_visibility() {
    let mut panel = sase_panel();
    assert!(panel.select_tab(MetricTabKind::Traffic));
    assert_eq!(panel.axis_domain().expect("domain").max, 12_686.0);

    assert_eq!(panel.toggle_competitor("fortinet"), Some(false));
    assert_eq!(panel.axis_domain().expect("domain").max, 12_259.0);

    for id in ["cisco", "hpe", "paloalto", "checkpoint", "crowdstrike"] {
        panel.toggle_competitor(id);
    }
    assert!(panel.visible().is_empty());
    assert_eq!(panel.axis_domain().expect("domain").as_tuple(), (0.0, 100.0));

    assert_eq!(panel.toggle_competitor("fortinet"), Some(true));
    assert_eq!(panel.axis_domain().expect("domain").max, 12_686.0);
}

#[test]
fn chart_rows_only_carry_visible_series() {
    let mut panel = sase_panel();
    panel.toggle_competitor("cisco");
    let rows = panel.chart_rows().expect("rows");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].label, "Oct 2025");
    assert!(!rows[0].has_series("cisco"));
    assert_eq!(rows[3].value("fortinet"), Some(196.0));
    assert_eq!(rows[3].values.len(), 5);
}

#[test]
fn ai_overview_tab_starts_in_november() {
    let mut panel = sase_panel();
    panel.select_tab(MetricTabKind::AiOverview);
    let rows = panel.chart_rows().expect("rows");
    let labels: Vec<&str> = rows.iter().map(|row| row.label.as_str()).collect();
    assert_eq!(labels, vec!["Nov 2025", "Dec 2025", "Jan 2026"]);
    assert_eq!(rows[0].value("paloalto"), Some(127.0));
}

#[test]
fn insights_follow_the_active_tab() {
    let mut panel = sase_panel();
    assert_eq!(panel.insights()[0].headline, "Strong Keyword Growth");
    panel.select_tab(MetricTabKind::Traffic);
    let card = &panel.insights()[0];
    assert_eq!(card.sentiment, Sentiment::Negative);
    assert_eq!(card.body.len(), 2);
}

#[test]
fn narrative_figures_match_the_series() {
    let panel = sase_panel();
    let tab = |kind| {
        panel
            .tabs()
            .iter()
            .find(|tab| tab.kind() == kind)
            .expect("tab")
    };

    let keywords = tab(MetricTabKind::Keywords);
    let periods = keywords.periods();
    let growth = series_change(
        keywords.table().current(),
        "fortinet",
        periods.period(0).expect("oct"),
        periods.latest(),
    );
    assert_eq!(growth.label().as_deref(), Some("+12.0%"));

    let traffic = tab(MetricTabKind::Traffic);
    let growth = series_change(
        traffic.table().current(),
        "paloalto",
        traffic.periods().period(0).expect("oct"),
        traffic.periods().latest(),
    );
    assert_eq!(growth.label().as_deref(), Some("+18.5%"));

    let aio = tab(MetricTabKind::AiOverview);
    let growth = series_change(
        aio.table().current(),
        "hpe",
        aio.periods().period(0).expect("nov"),
        aio.periods().latest(),
    );
    assert_eq!(growth.label().as_deref(), Some("+44.7%"));
}

#[test]
fn edits_apply_only_in_edit_mode_and_parse_strictly() {
    let mut panel = sase_panel();
    panel.select_tab(MetricTabKind::Traffic);
    assert!(!panel.set_value_from_text("hpe", 0, "20000"));

    assert!(panel.begin_edit());
    assert!(panel.is_editing());
    assert!(!panel.set_value_from_text("hpe", 0, "20k"));
    assert!(!panel.set_value_from_text("hpe", 0, ""));
    assert!(!panel.set_value_from_text("nobody", 0, "1"));
    assert!(!panel.set_value_from_text("hpe", 9, "1"));
    assert_eq!(panel.axis_domain().expect("domain").max, 12_686.0);

    assert!(panel.set_value_from_text("hpe", 0, "20000"));
    assert_eq!(panel.axis_domain().expect("domain").max, 23_000.0);
}

#[test]
fn save_keeps_and_cancel_restores() {
    let mut panel = sase_panel();
    panel.select_tab(MetricTabKind::Traffic);
    panel.begin_edit();
    panel.set_value_from_text("hpe", 0, "20000");
    assert!(panel.save());
    assert!(!panel.is_editing());
    assert_eq!(panel.axis_domain().expect("domain").max, 23_000.0);

    panel.begin_edit();
    assert!(panel.cancel());
    assert_eq!(panel.axis_domain().expect("domain").max, 12_686.0);
    assert!(panel.tabs().iter().all(|tab| !tab.table().is_modified()));
}

#[test]
fn opportunities_panel_uses_compact_headroom_and_blank_fields() {
    let mut panel = opportunities::panel(AxisDomainPolicy::COMPACT).expect("panel");
    assert_eq!(panel.tabs()[0].label(), "Total Organic Keywords");
    assert_eq!(
        panel.axis_domain().expect("domain").max,
        (744_000.0_f64 * 1.1).ceil()
    );

    panel.begin_edit();
    assert!(panel.set_value_from_text("cisco", 0, ""));
    assert_eq!(
        panel.active_tab().table().current().series("cisco").map(|s| s.get(0)),
        Some(None)
    );
    // Cisco's remaining peak is 734K in January.
    assert_eq!(
        panel.axis_domain().expect("domain").max,
        (734_000.0_f64 * 1.1).ceil()
    );
}

#[test]
fn traffic_overview_tabs_chart_from_october_with_compact_headroom() {
    let mut panel = traffic_overview::panel(AxisDomainPolicy::COMPACT).expect("panel");
    let labels: Vec<&str> = panel.tabs().iter().map(|tab| tab.label()).collect();
    assert_eq!(labels, vec!["Overall Traffic", "Branded", "Non-Branded"]);
    assert_eq!(panel.active_kind(), MetricTabKind::Traffic);

    let rows = panel.chart_rows().expect("rows");
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].label, "Oct 2025");
    assert_eq!(rows[0].value("fortinet"), Some(4_500_000.0));
    // Cisco's November spike sets the overall ceiling.
    assert_eq!(
        panel.axis_domain().expect("domain").max,
        (33_500_000.0_f64 * 1.1).ceil()
    );
    panel.toggle_competitor("cisco");
    assert_eq!(
        panel.axis_domain().expect("domain").max,
        (4_900_000.0_f64 * 1.1).ceil()
    );
    panel.toggle_competitor("cisco");

    assert!(panel.select_tab(MetricTabKind::BrandedTraffic));
    let rows = panel.chart_rows().expect("rows");
    assert_eq!(rows[3].value("fortinet"), Some(541_000.0));
    assert_eq!(
        panel.axis_domain().expect("domain").max,
        (2_170_000.0_f64 * 1.1).ceil()
    );

    assert!(panel.select_tab(MetricTabKind::NonBrandedTraffic));
    assert_eq!(
        panel.axis_domain().expect("domain").max,
        (31_655_000.0_f64 * 1.1).ceil()
    );
    assert_eq!(panel.insights()[0].headline, "Non-Branded Leader");
}

#[test]
fn traffic_overview_blank_field_clears_the_point() {
    let mut panel = traffic_overview::panel(AxisDomainPolicy::COMPACT).expect("panel");
    panel.begin_edit();
    assert!(panel.set_value_from_text("cisco", 1, " "));
    assert_eq!(
        panel.active_tab().table().current().series("cisco").map(|s| s.get(1)),
        Some(None)
    );
    assert_eq!(
        panel.axis_domain().expect("domain").max,
        (26_300_000.0_f64 * 1.1).ceil()
    );
    panel.cancel();
    assert_eq!(
        panel.axis_domain().expect("domain").max,
        (33_500_000.0_f64 * 1.1).ceil()
    );
}
