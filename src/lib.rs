//! # Financial Statement Analyzer
//!
//! A library for AI-assisted analysis of financial statements: statement text
//! goes to a schema-constrained Gemini request, and the structured report that
//! comes back (figures, ratios, narrative summary, recommendation) is turned
//! into chart-ready geometry and SVG.
//!
//! ## Core Concepts
//!
//! - **Analysis report**: a typed [`FinancialAnalysis`] mirroring the JSON the
//!   model is constrained to produce
//! - **Value parsing**: formatted monetary strings ("AED 1,250,000", "(2.3M)")
//!   become signed magnitudes; anything unparseable degrades to `0.0`
//! - **Chart layout**: the first ten chartable figures become horizontal bar
//!   geometry with a zero axis that centers only when negatives are present
//! - **Export seam**: PDF/image conversion is an injected capability, not a
//!   bundled renderer
//!
//! ## Example
//!
//! ```rust,ignore
//! use financial_statement_analyzer::llm::{GeminiClient, StatementAnalyzer};
//! use financial_statement_analyzer::{chart_svg, Theme};
//!
//! let client = GeminiClient::from_env()?;
//! let analyzer = StatementAnalyzer::new(client);
//! let analysis = analyzer.analyze(statement_text, "Emaar Properties").await?;
//!
//! match chart_svg(&analysis.extracted_data, Theme::Dark) {
//!     Some(svg) => println!("{}", svg),
//!     None => println!("No data available for visualization."),
//! }
//! ```

pub mod chart;
pub mod error;
pub mod export;
pub mod render;
pub mod schema;
pub mod theme;
pub mod value;

#[cfg(feature = "gemini")]
pub mod llm;

pub use chart::{chart_data, layout, BarRow, ChartDatum, ChartLayout, TextAnchor};
pub use error::{AnalyzerError, Result};
pub use export::{export_surface, report_file_name, ExportOptions, SurfaceRenderer};
pub use render::{chart_svg, render_layout, NO_DATA_MESSAGE};
pub use schema::{
    AnalysisSummary, ExtractedDatum, FinancialAnalysis, FinancialRatio, Recommendation,
};
pub use theme::{Palette, Theme};
pub use value::parse_value;

/// One-shot convenience wrapper around [`llm::StatementAnalyzer`].
#[cfg(feature = "gemini")]
pub async fn analyze_financial_statement(
    client: llm::GeminiClient,
    statement_text: &str,
    company_name: &str,
) -> Result<FinancialAnalysis> {
    llm::StatementAnalyzer::new(client)
        .analyze(statement_text, company_name)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_to_chart_end_to_end() {
        let report = r#"{
            "companyName": "Gulf Cement PJSC",
            "statementType": "Income Statement",
            "extractedData": [
                {"metric": "Revenue", "value": "AED 10,000,000"},
                {"metric": "Net Loss", "value": "(2,000,000)"},
                {"metric": "Notes", "value": "See appendix"}
            ],
            "ratios": [
                {"name": "Net Margin", "value": "-20%", "interpretation": "The company is loss-making."}
            ],
            "summary": {
                "strengths": "Solid revenue base.",
                "weaknesses": "Persistent losses.",
                "outlook": "Recovery depends on cost control."
            },
            "recommendation": "Sell",
            "cfaDisclaimer": "For informational purposes only."
        }"#;

        let analysis: FinancialAnalysis = serde_json::from_str(report).unwrap();
        assert_eq!(analysis.recommendation, Recommendation::Sell);

        let chart = layout(&analysis.extracted_data).unwrap();
        assert_eq!(chart.rows.len(), 2);
        assert!(chart.has_negative);
        assert_eq!(chart.max_magnitude, 1e7);

        let svg = chart_svg(&analysis.extracted_data, Theme::Dark).unwrap();
        assert!(svg.contains("Revenue"));
        assert!(svg.contains("<line"));

        assert_eq!(
            report_file_name(&analysis.company_name),
            "financial_report_gulf_cement_pjsc.pdf"
        );
    }
}
