use log::{debug, info};

use crate::error::{AnalyzerError, Result};
use crate::llm::client::{GeminiClient, DEFAULT_MODEL};
use crate::llm::prompts;
use crate::llm::types::Content;
use crate::schema::FinancialAnalysis;

/// Temperature for analysis requests; low to keep extraction deterministic.
const ANALYSIS_TEMPERATURE: f64 = 0.2;

/// Drives one schema-constrained analysis request against the model and
/// returns the typed report.
pub struct StatementAnalyzer {
    client: GeminiClient,
    model: String,
    system_prompt: String,
}

impl StatementAnalyzer {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: DEFAULT_MODEL.to_string(),
            system_prompt: prompts::SYSTEM_PROMPT_ANALYST.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Swap the default analyst persona, e.g. for a different market.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Submits statement text for analysis.
    ///
    /// The response schema generated from [`FinancialAnalysis`] constrains
    /// the model's output; a reply that still fails to deserialize surfaces
    /// as [`AnalyzerError::InvalidResponse`]. A recommendation outside
    /// Buy/Hold/Sell becomes `N/A`, and a missing company name is back-filled
    /// from the request.
    pub async fn analyze(
        &self,
        statement_text: &str,
        company_name: &str,
    ) -> Result<FinancialAnalysis> {
        info!("Requesting financial analysis for {}", company_name);

        let response_schema = serde_json::to_value(FinancialAnalysis::generate_json_schema())?;
        let request = prompts::analysis_request(company_name, statement_text);

        let raw = self
            .client
            .generate_content(
                &self.model,
                &self.system_prompt,
                vec![Content::user(request)],
                Some(response_schema),
                Some(ANALYSIS_TEMPERATURE),
            )
            .await?;

        let mut analysis: FinancialAnalysis =
            serde_json::from_str(raw.trim()).map_err(|e| {
                AnalyzerError::InvalidResponse(format!("analysis JSON parse failed: {}", e))
            })?;

        if analysis.company_name.is_empty() {
            analysis.company_name = company_name.to_string();
        }

        debug!(
            "Analysis for {} extracted {} figures and {} ratios ({})",
            analysis.company_name,
            analysis.extracted_data.len(),
            analysis.ratios.len(),
            analysis.recommendation.as_str()
        );

        Ok(analysis)
    }
}
