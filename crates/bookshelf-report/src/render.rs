use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

use bookshelf_core::models::suggestion::RankedSuggestion;

use crate::error::ReportError;
use crate::template::{DEFAULT_TEMPLATE, DEFAULT_TEMPLATE_NAME};

/// Reference document figures shown in the report header.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSummary {
    pub filename: String,
    pub character_count: u32,
    pub word_count: u32,
    pub line_count: u32,
    pub estimated_reading_minutes: u32,
    pub image_count: u32,
}

/// Everything a report template can reference.
#[derive(Debug, Clone, Serialize)]
pub struct ReportInput<'a> {
    pub generated_at: jiff::Timestamp,
    pub phenotype: &'a str,
    pub document: DocumentSummary,
    pub suggestions: &'a [RankedSuggestion],
    pub image_analyses: &'a [String],
}

/// Render the built-in plain-text report.
pub fn render_report(input: &ReportInput<'_>) -> Result<String, ReportError> {
    render_with_template(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE, input)
}

/// Render a caller-supplied Tera template with a report input.
///
/// The `template_content` is the raw template string (Jinja2 syntax).
/// The `input` fields become the template context variables.
pub fn render_with_template(
    template_name: &str,
    template_content: &str,
    input: &ReportInput<'_>,
) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(input)?;
    let context =
        Context::from_value(value).map_err(|e| ReportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    debug!(
        template_name,
        suggestions = input.suggestions.len(),
        len = rendered.len(),
        "report rendered"
    );
    Ok(rendered)
}
