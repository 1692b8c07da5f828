use serde::{Deserialize, Serialize};

use crate::core::ChartBounds;
use crate::error::{ChartError, ChartResult};
use crate::render::DrawCommand;

pub const RENDER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable capture of one render pass for regression fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub bounds: ChartBounds,
    pub commands: Vec<DrawCommand>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: RenderSnapshot,
}

impl RenderSnapshot {
    #[must_use]
    pub fn new(bounds: ChartBounds, commands: Vec<DrawCommand>) -> Self {
        Self { bounds, commands }
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = RenderSnapshotJsonContractV1 {
            schema_version: RENDER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render snapshot v1: {e}"))
        })
    }

    pub fn from_json_contract_v1_str(input: &str) -> ChartResult<Self> {
        let payload: RenderSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse render snapshot json: {e}"))
        })?;
        if payload.schema_version != RENDER_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported render snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
