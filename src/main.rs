use clap::Parser;
use figure_fusion::{cli, config, error, export, gemini, interactive, logging, normalizer, progress, studio, workflow};
use cli::{Cli, Commands};
use config::Config;
use error::{ErrorKind, FusionError, Result};
use figure_fusion_common::{build_soccer_uniform_prompt, GenerationResult, Localizer};
use normalizer::{ImageNormalizer, SourceImage};
use std::path::Path;
use std::process::ExitCode;
use workflow::Workflow;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            let localizer = Localizer::new(cli.lang.unwrap_or_default());
            report_error(&localizer, &err);
            return ExitCode::FAILURE;
        }
    };
    let localizer = Localizer::new(cli.lang.unwrap_or(config.language));

    match run(cli.command, config, &localizer).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&localizer, &err);
            ExitCode::FAILURE
        }
    }
}

fn report_error(localizer: &Localizer, err: &FusionError) {
    match err.kind() {
        ErrorKind::Validation | ErrorKind::SoftFailure => tracing::warn!(kind = ?err.kind(), "{err}"),
        _ => tracing::error!(kind = ?err.kind(), "{err}"),
    }
    eprintln!("\n{}: {}", localizer.t("errorTitle"), err.user_message(localizer));
}

fn banner(localizer: &Localizer, workflow: Workflow) {
    println!("🧸 figure-fusion - {}\n", localizer.t(workflow.title_key()));
}

fn studio_from(config: &Config) -> Result<studio::Studio<gemini::GeminiClient>> {
    let client = gemini::GeminiClient::from_config(config)?;
    Ok(studio::Studio::new(client, ImageNormalizer::new()))
}

fn finish(localizer: &Localizer, workflow: Workflow, result: &GenerationResult, output: Option<&Path>) -> Result<()> {
    let path = export::save_generated_image(result, workflow, output)?;
    println!("✔ {}", localizer.t(workflow.result_key()));
    println!("✔ {}: {}", localizer.t("savedTo"), path.display());
    if let Some(text) = &result.text {
        println!("\n{}: {}", localizer.t("modelNote"), text);
    }
    Ok(())
}

async fn run(command: Commands, mut config: Config, localizer: &Localizer) -> Result<()> {
    match command {
        Commands::Figure(args) => {
            banner(localizer, Workflow::Figure);

            let mut options = args.figure_options()?;
            if args.interactive {
                options = interactive::pick_figure_options(localizer, &options)?;
            }
            let image = SourceImage::from_path(&args.image)?;

            if args.output.dry_run {
                let prompt = studio::preview_figure_prompt(&ImageNormalizer::new(), image, &options).await?;
                println!("{prompt}");
                return Ok(());
            }

            let studio = studio_from(&config)?;
            let result = progress::with_spinner(localizer, studio.transform_figure(image, &options)).await?;
            finish(localizer, Workflow::Figure, &result, args.output.output.as_deref())?;
        }

        Commands::TryOn(args) => {
            banner(localizer, Workflow::TryOn);

            let options = args.try_on_options();
            let person = SourceImage::from_path(&args.person)?;
            let items = args
                .items
                .iter()
                .map(|path| SourceImage::from_path(path))
                .collect::<Result<Vec<_>>>()?;

            if args.output.dry_run {
                let prompt =
                    studio::preview_try_on_prompt(&ImageNormalizer::new(), Some(person), items, &options).await?;
                println!("{prompt}");
                return Ok(());
            }

            let studio = studio_from(&config)?;
            let result =
                progress::with_spinner(localizer, studio.virtual_try_on(Some(person), items, &options)).await?;
            finish(localizer, Workflow::TryOn, &result, args.output.output.as_deref())?;
        }

        Commands::Uniform(args) => {
            banner(localizer, Workflow::SoccerUniform);

            let options = args.uniform_options()?;
            if args.output.dry_run {
                println!("{}", build_soccer_uniform_prompt(&options));
                return Ok(());
            }

            let studio = studio_from(&config)?;
            let result = progress::with_spinner(localizer, studio.design_uniform(&options)).await?;
            finish(localizer, Workflow::SoccerUniform, &result, args.output.output.as_deref())?;
        }

        Commands::Options { workflow } => {
            banner(localizer, workflow);
            for section in interactive::option_catalog(localizer, workflow) {
                println!("{}:", section.title);
                for line in section.lines {
                    println!("  - {line}");
                }
                println!();
            }
        }

        Commands::Config { set_api_key, prompt_api_key, language, model, show } => {
            let mut changed = false;

            if let Some(key) = set_api_key {
                config.set_api_key(key);
                changed = true;
            } else if prompt_api_key {
                config.set_api_key(interactive::prompt_api_key()?);
                changed = true;
            }
            if let Some(language) = language {
                config.language = language;
                changed = true;
            }
            if let Some(model) = model {
                config.model = model;
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ Config saved: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("Config:");
                println!("  model: {}", config.model);
                println!("  api_base: {}", config.api_base);
                println!("  language: {}", config.language);
                println!("  timeout_seconds: {}", config.timeout_seconds);
                println!(
                    "  api_key: {}",
                    config.masked_api_key().unwrap_or_else(|| "(not set)".to_string())
                );
            }
        }
    }

    Ok(())
}
