//! Batch runs over a JSON list of calculation requests
//!
//! A failing request is recorded on its entry; it never aborts the batch.

use super::calculation_service::CalculationService;
use chrono::{DateTime, Utc};
use hvacalc_types::{CalculationError, CalculationInput, CalculationResult, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// One request: a calculator key plus its input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Calculator key, e.g. `room-btu`. Parsed per entry so an unknown key
    /// only fails that entry.
    pub calculator: String,
    /// Free-form label carried into the report
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub input: CalculationInput,
}

impl CalculationRequest {
    pub fn new(calculator: &str, input: CalculationInput) -> Self {
        Self {
            calculator: calculator.to_string(),
            label: None,
            input,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }
}

/// Outcome of one request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub index: usize,
    pub label: Option<String>,
    pub calculator: String,
    pub result: Option<CalculationResult>,
    pub error: Option<CalculationError>,
}

impl BatchEntry {
    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }
}

/// Batch calculation results
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResults {
    /// Per-request entries, in request order
    pub entries: Vec<BatchEntry>,
    /// Total requests processed
    pub total_processed: usize,
    /// Number of successful calculations
    pub successful: usize,
    /// Number of failed calculations
    pub failed: usize,
    /// Batch start time
    pub started_at: DateTime<Utc>,
    /// Batch end time
    pub completed_at: DateTime<Utc>,
}

/// Read a JSON array of requests
pub fn load_requests(path: &Path) -> Result<Vec<CalculationRequest>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let requests: Vec<CalculationRequest> = serde_json::from_str(&content)?;
    Ok(requests)
}

impl CalculationService {
    /// Run every request, recording failures per entry
    pub fn run_batch(&self, requests: &[CalculationRequest]) -> BatchResults {
        let started_at = Utc::now();
        info!(requests = requests.len(), "batch started");

        let entries: Vec<BatchEntry> = requests
            .iter()
            .enumerate()
            .map(|(index, request)| {
                let outcome = self.calculate_key(&request.calculator, &request.input);
                if let Err(e) = &outcome {
                    warn!(
                        index,
                        calculator = %request.calculator,
                        error = %e,
                        "batch entry failed"
                    );
                }
                let (result, error) = match outcome {
                    Ok(result) => (Some(result), None),
                    Err(e) => (None, Some(e)),
                };
                BatchEntry {
                    index,
                    label: request.label.clone(),
                    calculator: request.calculator.clone(),
                    result,
                    error,
                }
            })
            .collect();

        let successful = entries.iter().filter(|e| e.is_success()).count();
        let failed = entries.len() - successful;
        info!(successful, failed, "batch complete");

        BatchResults {
            total_processed: entries.len(),
            successful,
            failed,
            entries,
            started_at,
            completed_at: Utc::now(),
        }
    }
}
