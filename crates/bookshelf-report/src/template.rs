/// Name the built-in template is registered under. The `.txt` suffix keeps
/// Tera's HTML autoescaping off.
pub const DEFAULT_TEMPLATE_NAME: &str = "report.txt";

pub const DEFAULT_TEMPLATE: &str = r#"DIAGNOSIS SUPPORT REPORT
========================
Generated: {{ generated_at }}

PHENOTYPE DESCRIPTION
---------------------
{{ phenotype }}

REFERENCE DOCUMENT
------------------
Source: {{ document.filename }}
Characters: {{ document.character_count }}
Words: {{ document.word_count }}
Lines: {{ document.line_count }}
Estimated reading time: {{ document.estimated_reading_minutes }} min
Images: {{ document.image_count }}

DIAGNOSIS SUGGESTIONS
---------------------
{% if suggestions -%}
{% for suggestion in suggestions -%}
{{ loop.index }}. {{ suggestion.condition }}
   Confidence: {{ suggestion.confidence }}
   Matching features: {{ suggestion.matching_features | join(sep=", ") }}
   Evidence: {{ suggestion.evidence | join(sep="; ") }}
{% if suggestion.additional_info %}   Additional information: {{ suggestion.additional_info }}
{% endif %}
{% endfor -%}
{% else -%}
No diagnosis suggestions matched the phenotype description.

{% endif -%}
IMAGE ANALYSIS
--------------
{% if image_analyses -%}
{% for analysis in image_analyses -%}
{{ analysis }}

{% endfor -%}
{% else -%}
No images were found in the reference document.

{% endif -%}
DISCLAIMER
----------
These suggestions are generated by literal text matching against the
reference document. They support, and do not replace, clinical judgment.
"#;
