//! The `generate` subcommand.

use crate::cli::ConsoleProgress;
use std::path::PathBuf;
use storybook_book::{BookModels, BookPipeline, SaveOutcome, page_filename};
use storybook_client::{OpenRouterClient, OpenRouterConfig};

/// Run the full generation pipeline and print the storyboard.
pub async fn run_generate(
    prompt: &str,
    text_model: Option<String>,
    image_model: Option<String>,
    output: PathBuf,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = OpenRouterConfig::from_env()?;
    if let Some(model) = text_model {
        config = config.with_text_model(model);
    }
    if let Some(model) = image_model {
        config = config.with_image_model(model);
    }

    let models = BookModels::new(config.text_model().clone(), config.image_model().clone());
    let client = OpenRouterClient::new(config);
    let pipeline = BookPipeline::new(client)
        .with_models(models)
        .with_output_root(output);

    let run = pipeline.generate(prompt, &mut ConsoleProgress).await?;

    if let Some(error) = run.script_degraded() {
        println!("\nWarning: story generation failed: {error}");
    }

    println!("\nStoryboard:");
    for entry in run.storyboard() {
        let marker = match entry.degraded() {
            Some(error) => format!(" [placeholder: {error}]"),
            None => String::new(),
        };
        println!(
            "  Page {}: {} ({}x{}, {}){marker}",
            entry.page().number(),
            entry.page().text(),
            entry.image().width(),
            entry.image().height(),
            page_filename(entry.page().number()),
        );
    }

    println!("\n{}", run.status());

    if let SaveOutcome::Saved(path) = run.save() {
        println!("\nRead it back with: read_book {}", path.display());
    }

    Ok(())
}
