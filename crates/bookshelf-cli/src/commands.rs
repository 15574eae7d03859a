//! Command handlers. Each returns the text to print on stdout.

use std::path::Path;

use bookshelf_analyzer::Analyzer;
use bookshelf_analyzer::images::describe_images;
use bookshelf_core::models::document::{NewDocument, TextStats, clean_text};
use bookshelf_core::models::suggestion::RankedSuggestion;
use bookshelf_report::render::{DocumentSummary, ReportInput, render_report};
use bookshelf_store::memory::MemoryStore;
use bookshelf_store::store::AnalysisStore;
use eyre::{Result, WrapErr};
use serde::Serialize;
use tracing::info;

use crate::args::{AnalyzeArgs, ConfigAction, HistoryQuery, OutputFormat};
use crate::config::{BookshelfConfig, save_config};

/// JSON shape of `analyze --format json`.
#[derive(Debug, Serialize)]
pub struct AnalysisOutput {
    pub suggestions: Vec<RankedSuggestion>,
    pub image_analyses: Vec<String>,
}

/// Read a text file, normalize line endings to `\n` and clean it with
/// [`clean_text`].
pub fn read_corpus(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read corpus at {}", path.display()))?;
    Ok(clean_text(&raw.replace("\r\n", "\n").replace('\r', "\n")))
}

fn read_phenotype(args: &AnalyzeArgs) -> Result<String> {
    let phenotype = match (&args.phenotype, &args.phenotype_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read phenotype at {}", path.display()))?,
        (None, None) => return Err(eyre::eyre!("a phenotype description is required")),
    };

    let phenotype = phenotype.trim().to_string();
    if phenotype.is_empty() {
        return Err(eyre::eyre!("phenotype description is empty"));
    }
    Ok(phenotype)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn analyze(config: &BookshelfConfig, args: &AnalyzeArgs) -> Result<String> {
    let corpus = read_corpus(&args.corpus)?;
    let file_size = std::fs::metadata(&args.corpus)
        .wrap_err_with(|| format!("failed to stat corpus at {}", args.corpus.display()))?
        .len();
    let phenotype = read_phenotype(args)?;
    let analyzer = Analyzer::with_config(config.analyzer.clone())?;

    let suggestions = analyzer.analyze_phenotype(&phenotype, &corpus);
    let image_analyses = describe_images(args.images);

    let stats = TextStats::measure(&corpus);
    let filename = file_name(&args.corpus);
    let image_count = u32::try_from(args.images).unwrap_or(u32::MAX);
    let report = render_report(&ReportInput {
        generated_at: jiff::Timestamp::now(),
        phenotype: &phenotype,
        document: DocumentSummary {
            filename: filename.clone(),
            character_count: stats.character_count,
            word_count: stats.word_count,
            line_count: stats.line_count,
            estimated_reading_minutes: stats.estimated_reading_minutes,
            image_count,
        },
        suggestions: &suggestions,
        image_analyses: &image_analyses,
    })?;

    if args.save {
        let store_path = config.resolved_store_path()?;
        let store = MemoryStore::load(&store_path)?;
        let document = store.store_document(NewDocument {
            filename,
            file_size,
            text_content: corpus.clone(),
            image_count,
        })?;
        store.store_terms(document.id, &analyzer.extract_categorized_terms(&corpus))?;
        let analysis = store.store_analysis(document.id, &phenotype, &suggestions, &report)?;
        store.save(&store_path)?;
        info!(analysis_id = %analysis.id, path = %store_path.display(), "analysis saved");
    }

    match args.format {
        OutputFormat::Text => Ok(report),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&AnalysisOutput {
            suggestions,
            image_analyses,
        })?),
    }
}

pub fn terms(config: &BookshelfConfig, corpus_path: &Path) -> Result<String> {
    let corpus = read_corpus(corpus_path)?;
    let analyzer = Analyzer::with_config(config.analyzer.clone())?;

    let mut output = String::new();
    for key_term in analyzer.extract_categorized_terms(&corpus) {
        output.push_str(&format!("{}\t{}\n", key_term.category, key_term.term));
    }
    Ok(output)
}

pub fn history(config: &BookshelfConfig, query: &HistoryQuery) -> Result<String> {
    let store = MemoryStore::load(&config.resolved_store_path()?)?;
    let mut output = String::new();

    match query {
        HistoryQuery::Stats => {
            let stats = store.statistics()?;
            output.push_str(&format!("documents\t{}\n", stats.total_documents));
            output.push_str(&format!("analyses\t{}\n", stats.total_analyses));
            output.push_str(&format!("suggestions\t{}\n", stats.total_suggestions));
        }
        HistoryQuery::Conditions { limit } => {
            for frequency in store.common_conditions(*limit)? {
                output.push_str(&format!("{}\t{}\n", frequency.count, frequency.condition));
            }
        }
        HistoryQuery::Search { term, limit } => {
            for analysis in store.search_analyses(term, *limit)? {
                output.push_str(&format!(
                    "{}\t{}\t{}\n",
                    analysis.analyzed_at, analysis.id, analysis.phenotype_description
                ));
                if let Some((_, suggestions)) = store.analysis_with_suggestions(analysis.id)? {
                    for suggestion in suggestions {
                        output.push_str(&format!(
                            "\t- {} ({})\n",
                            suggestion.condition_name, suggestion.confidence_level
                        ));
                    }
                }
            }
        }
        HistoryQuery::Documents { limit } => {
            for document in store.recent_documents(*limit)? {
                let analyses = store.analyses_for_document(document.id)?;
                output.push_str(&format!(
                    "{}\t{}\t{} words\t{} images\t{} analyses\n",
                    document.uploaded_at,
                    document.filename,
                    document.word_count,
                    document.image_count,
                    analyses.len()
                ));
            }
        }
    }

    Ok(output)
}

pub fn config(config: &BookshelfConfig, path: &Path, action: &ConfigAction) -> Result<String> {
    match action {
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(eyre::eyre!(
                    "config already exists at {} (use --force to overwrite)",
                    path.display()
                ));
            }
            save_config(&BookshelfConfig::default(), path)?;
            Ok(format!("wrote default config to {}\n", path.display()))
        }
        ConfigAction::Show => {
            let mut output = serde_json::to_string_pretty(config)?;
            output.push('\n');
            Ok(output)
        }
    }
}
