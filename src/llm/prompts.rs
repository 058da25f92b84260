//! Prompt material for the statement-analysis request.

pub const SYSTEM_PROMPT_ANALYST: &str = r#"
You are a professional chartered financial analyst reviewing statements of
UAE-listed companies. Your analysis must be rigorous, insightful, and adhere
to the highest professional standards.

## YOUR TASKS
1. Identify the statement type (Balance Sheet, Income Statement, or Cash Flow
   Statement).
2. Extract the most critical financial figures. Focus on core metrics and
   ignore non-essential data like headers, footers, or notes. Keep each value
   as a string exactly as formatted in the statement, currency included.
3. Calculate at least three key financial ratios relevant to the identified
   statement type. Provide a concise, professional interpretation for each.
4. Provide a detailed summary, broken down into:
   - Strengths: key positive indicators.
   - Weaknesses: key risks or areas of concern.
   - Outlook: a forward-looking perspective based on the data.
5. Generate a clear investment recommendation: 'Buy', 'Hold', or 'Sell'.
6. Include a standard professional disclaimer.

## OUTPUT FORMAT
Return the entire analysis as a single JSON object matching the provided
schema. Do not wrap it in markdown fences or add commentary.
"#;

/// Builds the per-request user message embedding the company name and the
/// raw statement text.
pub fn analysis_request(company_name: &str, statement_text: &str) -> String {
    format!(
        "Analyze the following financial statement for the company: \"{}\".\n\
        \n\
        Financial Statement Text for {}:\n\
        ---\n\
        {}\n\
        ---",
        company_name, company_name, statement_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_embeds_company_and_statement() {
        let request = analysis_request("Emaar Properties", "Revenue: AED 500,000");
        assert!(request.contains("\"Emaar Properties\""));
        assert!(request.contains("Revenue: AED 500,000"));
    }
}
