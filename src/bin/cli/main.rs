mod client;
mod output;

use clap::{Parser, Subcommand};
use client::TaskcardsClient;
use output::OutputFormat;
use std::process;
use taskcards::dto::CreateCardDto;

/// CLI for the taskcards server
#[derive(Parser, Debug)]
#[clap(name = "taskcards-cli", about = "CLI for the taskcards server")]
struct Cli {
    /// Server URL to connect to
    #[clap(
        long,
        env = "TASKCARDS_URL",
        default_value = "http://localhost:3000",
        global = true
    )]
    server_url: String,

    /// Output format
    #[clap(long, value_enum, default_value_t = OutputFormat::Human, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a card
    Create {
        #[clap(long, default_value = "")]
        subject: String,
        #[clap(long, default_value = "")]
        task_name: String,
        #[clap(long, default_value = "")]
        color: String,
        #[clap(long, default_value = "")]
        deadline: String,
        #[clap(long, default_value = "")]
        task_info_link: String,
        #[clap(long, default_value = "")]
        task_submission_link: String,
        #[clap(long, default_value = "")]
        task_enrollment_link: String,
    },
    /// List all cards
    List,
    /// Get a specific card by ID
    Get {
        /// The card ID
        id: i64,
    },
}

async fn execute(client: &TaskcardsClient, command: Commands, format: OutputFormat) -> anyhow::Result<()> {
    match command {
        Commands::Create {
            subject,
            task_name,
            color,
            deadline,
            task_info_link,
            task_submission_link,
            task_enrollment_link,
        } => {
            let dto = CreateCardDto {
                subject,
                task_name,
                color,
                deadline,
                task_info_link,
                task_submission_link,
                task_enrollment_link,
            };
            let card = client.create_card(&dto).await?;
            output::print_card(&card, format)
        }
        Commands::List => {
            let cards = client.list_cards().await?;
            output::print_cards(&cards, format)
        }
        Commands::Get { id } => {
            let card = client.get_card(id).await?;
            output::print_card(&card, format)
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let client = TaskcardsClient::new(cli.server_url);

    if let Err(e) = execute(&client, cli.command, cli.format).await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
