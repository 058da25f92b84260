//! Typed model of the analysis report returned by the model.
//!
//! These structs serve double duty: the response schema handed to the
//! generative API is generated from them via `schemars`, and the JSON reply
//! is deserialized back into them. Field names are camelCase on the wire.

use schemars::gen::SchemaGenerator;
use schemars::schema::{InstanceType, Schema, SchemaObject};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// One extracted figure: an opaque metric label and the value exactly as it
/// appears in the statement, currency formatting included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedDatum {
    #[schemars(description = "The metric label as it appears in the statement")]
    pub metric: String,

    #[schemars(description = "Value as a string, including currency if present.")]
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRatio {
    pub name: String,

    pub value: String,

    #[schemars(
        description = "A professional, one-sentence interpretation of what this ratio indicates about the company's financial health."
    )]
    pub interpretation: String,
}

/// Investment recommendation. The model is only offered `Buy`, `Hold` and
/// `Sell`; anything else in a reply deserializes to [`Recommendation::NotAvailable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    Buy,
    Hold,
    Sell,
    #[default]
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl Recommendation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Recommendation::Buy => "Buy",
            Recommendation::Hold => "Hold",
            Recommendation::Sell => "Sell",
            Recommendation::NotAvailable => "N/A",
        }
    }
}

impl<'de> Deserialize<'de> for Recommendation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "Buy" => Recommendation::Buy,
            "Hold" => Recommendation::Hold,
            "Sell" => Recommendation::Sell,
            _ => Recommendation::NotAvailable,
        })
    }
}

fn recommendation_schema(_gen: &mut SchemaGenerator) -> Schema {
    let mut schema = SchemaObject {
        instance_type: Some(InstanceType::String.into()),
        enum_values: Some(vec!["Buy".into(), "Hold".into(), "Sell".into()]),
        ..Default::default()
    };
    schema.metadata().description = Some(
        "An investment recommendation, which must be one of: 'Buy', 'Hold', or 'Sell'.".to_string(),
    );
    Schema::Object(schema)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(description = "A detailed summary written from the perspective of a chartered financial analyst.")]
pub struct AnalysisSummary {
    #[schemars(description = "1-2 sentences highlighting the key financial strengths.")]
    pub strengths: String,

    #[schemars(description = "1-2 sentences highlighting the key financial weaknesses or risks.")]
    pub weaknesses: String,

    #[schemars(
        description = "A 1-2 sentence forward-looking statement on the company's financial trajectory based on this statement."
    )]
    pub outlook: String,
}

/// The full analysis report for one statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialAnalysis {
    // The model occasionally omits this; the analyzer back-fills it from the
    // request, so an absent field must not fail deserialization.
    #[serde(default)]
    #[schemars(description = "The name of the company being analyzed.")]
    pub company_name: String,

    #[schemars(
        description = "The type of financial statement (e.g., Balance Sheet, Income Statement, Cash Flow Statement)."
    )]
    pub statement_type: String,

    #[schemars(
        description = "Key-value pairs of financial data extracted. Include at least 5-10 key metrics."
    )]
    pub extracted_data: Vec<ExtractedDatum>,

    #[schemars(description = "Calculated financial ratios. Provide at least 3 relevant ratios.")]
    pub ratios: Vec<FinancialRatio>,

    pub summary: AnalysisSummary,

    #[schemars(schema_with = "recommendation_schema")]
    pub recommendation: Recommendation,

    #[schemars(
        description = "A standard disclaimer that this AI-generated analysis is for informational purposes and not a substitute for professional financial advice."
    )]
    pub cfa_disclaimer: String,
}

impl FinancialAnalysis {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(FinancialAnalysis)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}
