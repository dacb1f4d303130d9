use anyhow::Result;
use clap::ValueEnum;
use taskcards::models::Card;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn print_card_human(card: &Card) {
    println!("#{} {} / {}", card.get_id(), card.get_subject(), card.get_task_name());
    let details = [
        ("color", card.get_color()),
        ("deadline", card.get_deadline()),
        ("info", card.get_task_info_link()),
        ("submit", card.get_task_submission_link()),
        ("enroll", card.get_task_enrollment_link()),
    ];
    for (label, value) in details {
        if !value.is_empty() {
            println!("    {:<9}{}", label, value);
        }
    }
}

/// Prints a single card in the specified format
pub fn print_card(card: &Card, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => print_card_human(card),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(card)?),
    }
    Ok(())
}

/// Prints a list of cards in the specified format
pub fn print_cards(cards: &[Card], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if cards.is_empty() {
                println!("No cards found.");
            }
            for card in cards {
                print_card_human(card);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(cards)?),
    }
    Ok(())
}
