use storybook::{Cli, Commands, run_generate, run_read};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse_args();

    let verbose = matches!(
        cli.command,
        Commands::Generate { verbose: true, .. }
    );

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if verbose { "debug" } else { "info" })
            }),
        )
        .init();

    match cli.command {
        Commands::Generate {
            prompt,
            text_model,
            image_model,
            output,
            verbose: _,
        } => {
            run_generate(&prompt, text_model, image_model, output).await?;
        }
        Commands::Read { folder } => {
            run_read(folder)?;
        }
    }

    Ok(())
}
