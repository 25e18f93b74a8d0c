//! Competitive SEO sample dataset, Sep 2025 through Jan 2026.
//!
//! Static configuration only: views copy these tables and never write back.

use serde::{Deserialize, Serialize};

use crate::core::{AiPresence, Competitor, KeywordRecord, MetricTable, PeriodAxis};
use crate::error::DeckResult;

pub const MONTHS: [&str; 5] = ["2025-09", "2025-10", "2025-11", "2025-12", "2026-01"];

/// `(id, name, color)` in display order.
pub const COMPETITORS: [(&str, &str, &str); 6] = [
    ("fortinet", "Fortinet", "#EF4444"),
    ("cisco", "Cisco", "#FF7AB6"),
    ("hpe", "HPE", "#7ED957"),
    ("paloalto", "Palo Alto", "#FFB14A"),
    ("checkpoint", "Check Point", "#6C9AFF"),
    ("crowdstrike", "Crowdstrike", "#1F2937"),
];

type Row = (&'static str, [Option<f64>; 5]);

pub const ORGANIC_TRAFFIC: [Row; 6] = [
    ("fortinet", [None, Some(4_500_000.0), Some(4_400_000.0), Some(4_900_000.0), Some(4_800_000.0)]),
    ("cisco", [None, Some(19_700_000.0), Some(33_500_000.0), Some(26_300_000.0), Some(4_500_000.0)]),
    ("hpe", [None, Some(1_700_000.0), Some(1_600_000.0), Some(1_700_000.0), Some(1_600_000.0)]),
    ("paloalto", [None, Some(1_300_000.0), Some(1_000_000.0), Some(1_000_000.0), Some(900_000.0)]),
    ("checkpoint", [None, Some(1_100_000.0), Some(862_000.0), Some(838_000.0), Some(737_000.0)]),
    ("crowdstrike", [None, Some(679_000.0), Some(799_000.0), Some(569_000.0), Some(439_000.0)]),
];

/// Thousands of visits.
pub const BRANDED_TRAFFIC: [Row; 6] = [
    ("fortinet", [None, Some(878.0), Some(701.0), Some(593.0), Some(541.0)]),
    ("cisco", [None, Some(2_170.0), Some(1_870.0), Some(1_670.0), Some(1_510.0)]),
    ("hpe", [None, Some(482.0), Some(411.0), Some(413.0), Some(375.0)]),
    ("paloalto", [None, Some(303.0), Some(228.0), Some(257.0), Some(222.0)]),
    ("checkpoint", [None, Some(192.0), Some(180.0), Some(160.0), Some(158.0)]),
    ("crowdstrike", [None, Some(267.0), Some(218.0), Some(143.0), Some(109.0)]),
];

/// Thousands of visits.
pub const NON_BRANDED_TRAFFIC: [Row; 6] = [
    ("fortinet", [None, Some(3_617.0), Some(3_727.0), Some(4_303.0), Some(4_278.0)]),
    ("cisco", [None, Some(17_545.0), Some(31_655.0), Some(24_630.0), Some(2_957.0)]),
    ("hpe", [None, Some(1_241.0), Some(1_166.0), Some(1_298.0), Some(1_184.0)]),
    ("paloalto", [None, Some(951.0), Some(747.0), Some(722.0), Some(679.0)]),
    ("checkpoint", [None, Some(871.0), Some(682.0), Some(678.0), Some(679.0)]),
    ("crowdstrike", [None, Some(412.0), Some(580.0), Some(426.0), Some(330.0)]),
];

pub const ORGANIC_KEYWORDS: [Row; 6] = [
    ("fortinet", [None, Some(296_000.0), Some(296_000.0), Some(300_000.0), Some(337_000.0)]),
    ("cisco", [None, Some(744_000.0), Some(724_000.0), Some(724_000.0), Some(734_000.0)]),
    ("hpe", [None, Some(197_000.0), Some(202_000.0), Some(225_000.0), Some(231_000.0)]),
    ("paloalto", [None, Some(163_000.0), Some(166_000.0), Some(183_000.0), Some(189_000.0)]),
    ("checkpoint", [None, Some(108_000.0), Some(106_000.0), Some(108_000.0), Some(124_000.0)]),
    ("crowdstrike", [None, Some(103_000.0), Some(96_000.0), Some(93_000.0), Some(90_000.0)]),
];

pub const PAGE_ONE_KEYWORDS: [Row; 6] = [
    ("fortinet", [None, Some(42_000.0), Some(41_000.0), Some(42_000.0), Some(45_000.0)]),
    ("cisco", [None, Some(87_000.0), Some(86_000.0), Some(83_000.0), Some(89_000.0)]),
    ("hpe", [None, Some(25_000.0), Some(25_000.0), Some(25_000.0), Some(26_000.0)]),
    ("paloalto", [None, Some(20_000.0), Some(20_000.0), Some(20_000.0), Some(24_000.0)]),
    ("checkpoint", [None, Some(9_000.0), Some(9_000.0), Some(8_000.0), Some(8_000.0)]),
    ("crowdstrike", [None, Some(17_000.0), Some(16_000.0), Some(15_000.0), Some(15_000.0)]),
];

pub const DOMAIN_AUTHORITY: [Row; 6] = [
    ("fortinet", [Some(85.0), Some(86.0), Some(86.0), Some(87.0), Some(87.0)]),
    ("cisco", [Some(92.0), Some(92.0), Some(93.0), Some(93.0), Some(93.0)]),
    ("hpe", [Some(88.0), Some(88.0), Some(89.0), Some(89.0), Some(89.0)]),
    ("paloalto", [Some(82.0), Some(83.0), Some(83.0), Some(84.0), Some(84.0)]),
    ("checkpoint", [Some(79.0), Some(79.0), Some(80.0), Some(80.0), Some(81.0)]),
    ("crowdstrike", [Some(86.0), Some(87.0), Some(87.0), Some(88.0), Some(88.0)]),
];

pub const REFERRING_DOMAINS: [Row; 6] = [
    ("fortinet", [Some(45_000.0), Some(46_200.0), Some(47_100.0), Some(48_300.0), Some(49_200.0)]),
    ("cisco", [Some(128_000.0), Some(129_500.0), Some(131_000.0), Some(132_800.0), Some(134_200.0)]),
    ("hpe", [Some(98_000.0), Some(99_100.0), Some(100_200.0), Some(101_500.0), Some(102_800.0)]),
    ("paloalto", [Some(38_000.0), Some(39_200.0), Some(40_100.0), Some(41_000.0), Some(42_100.0)]),
    ("checkpoint", [Some(32_000.0), Some(32_800.0), Some(33_600.0), Some(34_200.0), Some(35_000.0)]),
    ("crowdstrike", [Some(52_000.0), Some(54_100.0), Some(56_300.0), Some(58_200.0), Some(60_100.0)]),
];

/// `(keyword, position, traffic share %, AI presence, competitor)`.
pub const TOP_KEYWORDS: [(&str, u32, f64, AiPresence, &str); 20] = [
    ("cybersecurity solutions", 2, 12.5, AiPresence::High, "cisco"),
    ("network firewall", 1, 18.3, AiPresence::Medium, "fortinet"),
    ("endpoint security", 3, 9.7, AiPresence::High, "crowdstrike"),
    ("cloud security platform", 4, 15.2, AiPresence::Medium, "paloalto"),
    ("enterprise networking", 1, 22.1, AiPresence::Low, "cisco"),
    ("threat intelligence", 5, 8.4, AiPresence::High, "crowdstrike"),
    ("zero trust security", 2, 11.9, AiPresence::High, "paloalto"),
    ("vpn gateway", 3, 10.2, AiPresence::Low, "checkpoint"),
    ("edge computing", 6, 7.8, AiPresence::Medium, "hpe"),
    ("network monitoring", 2, 13.6, AiPresence::Medium, "cisco"),
    ("malware protection", 4, 9.1, AiPresence::High, "fortinet"),
    ("siem solutions", 7, 6.3, AiPresence::Medium, "crowdstrike"),
    ("firewall software", 1, 16.7, AiPresence::Low, "fortinet"),
    ("hybrid cloud security", 5, 8.9, AiPresence::High, "hpe"),
    ("intrusion prevention", 3, 10.8, AiPresence::Medium, "checkpoint"),
    ("data center solutions", 4, 9.5, AiPresence::Low, "hpe"),
    ("next-gen firewall", 2, 14.2, AiPresence::Medium, "paloalto"),
    ("threat detection", 6, 7.1, AiPresence::High, "crowdstrike"),
    ("security analytics", 8, 5.9, AiPresence::High, "cisco"),
    ("network security", 1, 19.4, AiPresence::Medium, "fortinet"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyKind {
    Alert,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anomaly {
    pub kind: AnomalyKind,
    pub message: String,
    /// Competitor id, looked up against the competitor list.
    pub competitor: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickWin {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiVisibilitySummary {
    pub readiness_score: u32,
    pub triggering_queries: u32,
    pub llm_citations: u32,
    pub top_keywords: Vec<String>,
}

/// Every table of the sample report, materialized from the constants above.
#[derive(Debug, Clone, PartialEq)]
pub struct SeoDataset {
    pub periods: PeriodAxis,
    pub competitors: Vec<Competitor>,
    pub organic_traffic: MetricTable,
    pub branded_traffic: MetricTable,
    pub non_branded_traffic: MetricTable,
    pub organic_keywords: MetricTable,
    pub page_one_keywords: MetricTable,
    pub domain_authority: MetricTable,
    pub referring_domains: MetricTable,
    pub top_keywords: Vec<KeywordRecord>,
    pub anomalies: Vec<Anomaly>,
    pub quick_wins: Vec<QuickWin>,
    pub ai_visibility: AiVisibilitySummary,
}

impl SeoDataset {
    pub fn sample() -> DeckResult<Self> {
        let periods = PeriodAxis::from_month_keys(&MONTHS)?;
        let competitors = competitors()?;
        Ok(Self {
            organic_traffic: table(&ORGANIC_TRAFFIC)?,
            branded_traffic: table(&BRANDED_TRAFFIC)?,
            non_branded_traffic: table(&NON_BRANDED_TRAFFIC)?,
            organic_keywords: table(&ORGANIC_KEYWORDS)?,
            page_one_keywords: table(&PAGE_ONE_KEYWORDS)?,
            domain_authority: table(&DOMAIN_AUTHORITY)?,
            referring_domains: table(&REFERRING_DOMAINS)?,
            top_keywords: top_keywords(),
            anomalies: anomalies(),
            quick_wins: quick_wins(),
            ai_visibility: AiVisibilitySummary {
                readiness_score: 73,
                triggering_queries: 284,
                llm_citations: 156,
                top_keywords: [
                    "cybersecurity solutions",
                    "zero trust security",
                    "threat intelligence",
                    "endpoint security",
                ]
                .map(str::to_owned)
                .to_vec(),
            },
            periods,
            competitors,
        })
    }
}

pub fn competitors() -> DeckResult<Vec<Competitor>> {
    COMPETITORS
        .iter()
        .map(|(id, name, color)| Competitor::new(*id, *name, *color))
        .collect()
}

pub(crate) fn table<const N: usize>(rows: &[(&'static str, [Option<f64>; N])]) -> DeckResult<MetricTable> {
    MetricTable::from_series(N, rows.iter().map(|(id, values)| (*id, values.to_vec())))
}

fn top_keywords() -> Vec<KeywordRecord> {
    TOP_KEYWORDS
        .iter()
        .map(|(keyword, position, share, presence, competitor)| {
            KeywordRecord::new(*keyword, *position, *share, *presence, *competitor)
        })
        .collect()
}

fn anomalies() -> Vec<Anomaly> {
    [
        (
            AnomalyKind::Warning,
            "Cisco: major organic spike Oct–Nov (19.7M → 33.5M)",
            Some("cisco"),
        ),
        (
            AnomalyKind::Alert,
            "Cisco Non-Branded: large volume — confirm data source",
            Some("cisco"),
        ),
        (
            AnomalyKind::Info,
            "Data note: null = no data reported for month",
            None,
        ),
        (
            AnomalyKind::Warning,
            "Multiple competitors missing Jan 2026 branded data",
            None,
        ),
    ]
    .into_iter()
    .map(|(kind, message, competitor)| Anomaly {
        kind,
        message: message.to_owned(),
        competitor: competitor.map(str::to_owned),
    })
    .collect()
}

fn quick_wins() -> Vec<QuickWin> {
    [
        (
            "Cisco: Major Organic Spike Investigation",
            "Cisco shows massive traffic spike Oct-Nov (19.7M → 33.5M). Investigate content strategy, possible cannibalization, or data anomalies.",
            Priority::High,
        ),
        (
            "HPE: Consistent Performance",
            "HPE maintains steady organic traffic (1.6-1.9M). Opportunity to amplify winning content and expand keyword coverage.",
            Priority::Medium,
        ),
        (
            "Crowdstrike: Volatile Traffic Pattern",
            "Crowdstrike shows inconsistent traffic (946k → 569k). Analyze seasonal trends and content freshness for stabilization.",
            Priority::Medium,
        ),
    ]
    .into_iter()
    .map(|(title, description, priority)| QuickWin {
        title: title.to_owned(),
        description: description.to_owned(),
        priority,
    })
    .collect()
}
