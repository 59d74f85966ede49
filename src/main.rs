//! ATS CV analyzer: CV scoring and professional rewriting tool

use ats_cv_analyzer::analysis::{suggest_keyword_usage, CvAnalyzer, Rewriter};
use ats_cv_analyzer::cli::{self, Cli, Commands, ConfigAction, RoleAction};
use ats_cv_analyzer::config::{Config, OutputFormat};
use ats_cv_analyzer::error::{AtsAnalyzerError, Result};
use ats_cv_analyzer::input::Extractor;
use ats_cv_analyzer::keywords::{self, KeywordList};
use ats_cv_analyzer::output::report::AnalysisReport;
use ats_cv_analyzer::output::{save_report_to_file, ReportGenerator};
use ats_cv_analyzer::storage::{AnalysisRecord, AnalyticsStore, SubscriberRecord};
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            cv,
            keywords,
            role,
            output,
            save,
            no_rewrite,
            no_log,
            detailed,
        } => {
            cli::validate_file_extension(&cv, &["pdf", "txt", "md"])
                .map_err(|e| AtsAnalyzerError::InvalidInput(format!("CV file: {}", e)))?;

            let output_format = cli::parse_output_format(&output)
                .map_err(AtsAnalyzerError::InvalidInput)?;

            let cv_name = cv
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "uploaded_cv".to_string());

            info!("Starting CV analysis for '{}'", cv_name);

            let mut extractor = Extractor::new();
            let text = extractor.extract_text(&cv).await?;
            info!("Extracted {} characters", text.len());

            let (keyword_list, keyword_source) =
                resolve_keywords(&config, &cv_name, keywords, role).await?;
            if keyword_list.is_empty() {
                warn!("No job keywords available; scoring on section presence only");
            }

            let analyzer = CvAnalyzer::new();
            let analysis = analyzer.analyze(&text, &keyword_list);
            let suggestions = suggest_keyword_usage(&analysis.missing_keywords, &text);

            let rewritten_cv = if no_rewrite {
                None
            } else {
                Some(Rewriter::new().rewrite(&text, &keyword_list))
            };

            if config.storage.log_analyses && !no_log {
                let store = AnalyticsStore::new(&config.storage.data_dir);
                let record = AnalysisRecord::new(
                    &cv_name,
                    analysis.ats_score,
                    &analysis.matched_keywords,
                    &analysis.missing_keywords,
                );
                store.log_analysis(&record).await?;
            }

            let report = AnalysisReport::new(
                &cv_name,
                keyword_source,
                keyword_list.len(),
                analysis,
                suggestions,
                rewritten_cv,
            );

            let use_colors =
                config.output.color_output && output_format == OutputFormat::Console && save.is_none();
            let generator =
                ReportGenerator::with_options(use_colors, detailed || config.output.detailed);
            let rendered = generator.generate_report(&report, output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&rendered, &path)?;
                    println!("📥 Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }

            Ok(())
        }

        Commands::Roles { action } => run_roles_command(action, &config).await,

        Commands::Stats => {
            let store = AnalyticsStore::new(&config.storage.data_dir);
            let analyses = store.load_analyses().await?;
            let subscribers = store.load_subscribers().await?;

            println!("📊 Analytics Dashboard");
            println!("Total CVs analyzed: {}", analyses.len());
            if !analyses.is_empty() {
                let total: u64 = analyses.iter().map(|r| r.ats_score as u64).sum();
                println!("Average ATS score: {:.1}", total as f64 / analyses.len() as f64);

                let count_keywords = |joined: &str| {
                    if joined.is_empty() {
                        0
                    } else {
                        joined.split(',').count()
                    }
                };
                let matched_total: usize = analyses
                    .iter()
                    .map(|r| count_keywords(&r.matched_keywords))
                    .sum();
                let missing_total: usize = analyses
                    .iter()
                    .map(|r| count_keywords(&r.missing_keywords))
                    .sum();
                println!("Total matched keywords: {}", matched_total);
                println!("Total missing keywords: {}", missing_total);
            }

            println!("\n📧 Newsletter Subscribers: {}", subscribers.len());
            for sub in &subscribers {
                println!(
                    "  {} ({}) at {}",
                    sub.email,
                    sub.phone.as_deref().unwrap_or("no phone"),
                    sub.timestamp.format("%Y-%m-%d %H:%M:%S")
                );
            }

            Ok(())
        }

        Commands::Subscribe { email, phone } => {
            let record = SubscriberRecord::new(&email, phone.as_deref())?;
            let store = AnalyticsStore::new(&config.storage.data_dir);
            store.save_subscriber(&record).await?;
            println!("✅ Thank you! You've been added to our list.");
            Ok(())
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Reset) => {
                    let config = Config::default();
                    config.save()?;
                    println!("Configuration reset to defaults");
                }
                Some(ConfigAction::Show) | None => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        AtsAnalyzerError::Configuration(format!(
                            "Failed to serialize config: {}",
                            e
                        ))
                    })?;
                    println!("# {}", Config::config_path().display());
                    println!("{}", content);
                }
            }
            Ok(())
        }
    }
}

/// Pick the keyword list for this analysis: explicit file beats role name
/// beats auto-detection from the CV file name.
async fn resolve_keywords(
    config: &Config,
    cv_name: &str,
    keywords_file: Option<PathBuf>,
    role: Option<String>,
) -> Result<(KeywordList, Option<String>)> {
    if let Some(path) = keywords_file {
        let list = KeywordList::load(&path).await?;
        return Ok((list, Some(path.display().to_string())));
    }

    if let Some(role) = role {
        let path = config
            .keywords
            .keywords_dir
            .join(format!("{}.txt", role));
        let list = KeywordList::load(&path).await?;
        return Ok((list, Some(path.display().to_string())));
    }

    match keywords::detect_role_file(cv_name, &config.keywords.keywords_dir).await? {
        Some(path) => {
            let list = KeywordList::load(&path).await?;
            Ok((list, Some(path.display().to_string())))
        }
        None => Ok((KeywordList::default(), None)),
    }
}

async fn run_roles_command(action: RoleAction, config: &Config) -> Result<()> {
    let keywords_dir = &config.keywords.keywords_dir;

    match action {
        RoleAction::List => {
            let mut roles: Vec<String> = Vec::new();
            if let Ok(mut entries) = tokio::fs::read_dir(keywords_dir).await {
                while let Some(entry) = entries.next_entry().await? {
                    let path = entry.path();
                    if path.extension().and_then(|e| e.to_str()) == Some("txt") {
                        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                            roles.push(stem.to_string());
                        }
                    }
                }
            }
            roles.sort();

            if roles.is_empty() {
                println!(
                    "No keyword files in {}. Run `ats-cv-analyzer roles init` to seed them.",
                    keywords_dir.display()
                );
            } else {
                println!("Available roles ({}):", keywords_dir.display());
                for role in roles {
                    println!("  {}", role);
                }
            }
        }
        RoleAction::Show { role } => {
            let path = keywords_dir.join(format!("{}.txt", role));
            let list = KeywordList::load(&path).await?;
            println!("{} ({} keywords):", role, list.len());
            for kw in list.iter() {
                println!("  {}", kw);
            }
        }
        RoleAction::Init => {
            let written = keywords::seed_role_files(keywords_dir).await?;
            println!(
                "Seeded {} role keyword files in {}",
                written.len(),
                keywords_dir.display()
            );
        }
    }

    Ok(())
}
