use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Competitor, MetricTable, PeriodAxis, find_competitor};
use crate::data::SeoDataset;
use crate::error::{DeckError, DeckResult};

pub const DATASET_JSON_SCHEMA_V1: u32 = 1;

/// Interchange form of a report: periods, competitors and named metric tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSnapshot {
    pub periods: PeriodAxis,
    pub competitors: Vec<Competitor>,
    pub metrics: IndexMap<String, MetricTable>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetJsonContractV1 {
    pub schema_version: u32,
    #[serde(flatten)]
    pub dataset: DatasetSnapshot,
}

impl DatasetSnapshot {
    /// Checks colors, competitor references and that every table spans the period axis.
    pub fn validate(&self) -> DeckResult<()> {
        for competitor in &self.competitors {
            Competitor::new(
                competitor.id.as_str(),
                competitor.name.as_str(),
                competitor.color.as_str(),
            )?;
        }
        for (name, table) in &self.metrics {
            table.ensure_period_count(self.periods.len()).map_err(|e| {
                DeckError::InvalidData(format!("metric `{name}`: {e}"))
            })?;
            if let Some((id, _)) = table
                .iter()
                .find(|(id, _)| find_competitor(&self.competitors, id.as_str()).is_none())
            {
                return Err(DeckError::UnknownCompetitor(id.to_string()));
            }
        }
        Ok(())
    }

    pub fn to_json_contract_v1_pretty(&self) -> DeckResult<String> {
        let payload = DatasetJsonContractV1 {
            schema_version: DATASET_JSON_SCHEMA_V1,
            dataset: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DeckError::InvalidData(format!("failed to serialize dataset contract v1: {e}"))
        })
    }

    /// Accepts the versioned envelope or a bare snapshot.
    pub fn from_json_compat_str(input: &str) -> DeckResult<Self> {
        let payload: DatasetPayload = serde_json::from_str(input).map_err(|e| {
            DeckError::InvalidData(format!("failed to parse dataset json payload: {e}"))
        })?;
        if let Some(version) = payload.schema_version {
            if version != DATASET_JSON_SCHEMA_V1 {
                return Err(DeckError::InvalidData(format!(
                    "unsupported dataset schema version: {version}"
                )));
            }
        }
        payload.dataset.validate()?;
        Ok(payload.dataset)
    }
}

/// Envelope or bare snapshot, deserialized in document order.
#[derive(Deserialize)]
struct DatasetPayload {
    #[serde(default)]
    schema_version: Option<u32>,
    #[serde(flatten)]
    dataset: DatasetSnapshot,
}

impl SeoDataset {
    /// Metric tables keyed by their JSON names.
    #[must_use]
    pub fn snapshot(&self) -> DatasetSnapshot {
        let metrics = [
            ("organicTraffic", &self.organic_traffic),
            ("brandedTraffic", &self.branded_traffic),
            ("nonBrandedTraffic", &self.non_branded_traffic),
            ("organicKeywords", &self.organic_keywords),
            ("pageOneKeywords", &self.page_one_keywords),
            ("domainAuthority", &self.domain_authority),
            ("referringDomains", &self.referring_domains),
        ]
        .into_iter()
        .map(|(name, table)| (name.to_owned(), table.clone()))
        .collect();
        DatasetSnapshot {
            periods: self.periods.clone(),
            competitors: self.competitors.clone(),
            metrics,
        }
    }
}
