use clap::Args;
use std::path::PathBuf;

use fitapp_core::QuestionCatalog;

#[derive(Args)]
pub struct QuestionsArgs {
    /// JSON question catalog to show instead of the built-in questions
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Print the catalog as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: QuestionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = match args.catalog {
        Some(path) => QuestionCatalog::load(&path)?,
        None => QuestionCatalog::builtin(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    for (i, q) in catalog.iter().enumerate() {
        println!("{:>2}. {} [{:?} -> {}]", i + 1, q.prompt, q.answer_kind, q.target_field);
        if !q.choices.is_empty() {
            println!("    {}", q.choices.join(" | "));
        }
    }
    Ok(())
}
