//! Interactive onboarding over stdin.
//!
//! Each input line answers the current question and moves on. `:back` and
//! `:next` navigate without answering. Choice questions take an option number
//! or its text; multi-choice questions take a comma-separated list of options
//! to toggle.

use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use fitapp_core::{
    AnswerKind, AnswerValue, InMemoryUserStore, QuestionCatalog, QuestionDescriptor,
    QuestionnaireEngine, UserProfile, UserStore,
};

#[derive(Args)]
pub struct OnboardArgs {
    /// JSON question catalog to use instead of the built-in questions
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Print the finished profile as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: OnboardArgs) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = match args.catalog {
        Some(path) => QuestionCatalog::load(&path)?,
        None => QuestionCatalog::builtin(),
    };
    tracing::debug!(questions = catalog.len(), "starting onboarding");
    let mut engine = QuestionnaireEngine::new(catalog);
    let mut users = InMemoryUserStore::new();

    let stdin = io::stdin();
    let mut stderr = io::stderr();
    run_session(&mut engine, &mut users, stdin.lock(), &mut stderr)?;

    let profile = users
        .user()
        .ok_or("input ended before onboarding was completed")?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(profile)?);
    } else {
        print_profile(profile);
    }
    Ok(())
}

/// Drive `engine` with lines from `input`, writing prompts to `prompts`.
///
/// Returns when onboarding completes or input runs out.
pub fn run_session<R: BufRead, W: Write>(
    engine: &mut QuestionnaireEngine,
    users: &mut dyn UserStore,
    input: R,
    prompts: &mut W,
) -> io::Result<()> {
    let mut lines = input.lines();
    while !engine.is_completed() {
        render_question(engine, prompts)?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        match line.trim() {
            ":back" => {
                engine.back();
            }
            ":next" => {
                engine.next(users);
            }
            _ => {
                apply_line(engine, &line);
                engine.next(users);
            }
        }
    }
    Ok(())
}

fn apply_line(engine: &mut QuestionnaireEngine, line: &str) {
    let question = engine.current_question().clone();
    match question.answer_kind {
        AnswerKind::Text | AnswerKind::Number => {
            engine.answer(line.trim());
        }
        AnswerKind::SingleChoice => {
            engine.answer(&resolve_choice(&question, line.trim()));
        }
        AnswerKind::MultiChoice => {
            for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                engine.answer(&resolve_choice(&question, token));
            }
        }
    }
}

/// Map an option number (1-based) or case-insensitive option text to the
/// option itself. Anything else is passed through unchanged.
fn resolve_choice(question: &QuestionDescriptor, token: &str) -> String {
    if let Ok(n) = token.parse::<usize>() {
        if let Some(choice) = n.checked_sub(1).and_then(|i| question.choices.get(i)) {
            return choice.clone();
        }
    }
    question
        .choices
        .iter()
        .find(|c| c.eq_ignore_ascii_case(token))
        .cloned()
        .unwrap_or_else(|| token.to_string())
}

fn render_question<W: Write>(engine: &QuestionnaireEngine, out: &mut W) -> io::Result<()> {
    let question = engine.current_question();
    writeln!(
        out,
        "[{}/{}] {}",
        engine.step_index() + 1,
        engine.catalog().len(),
        question.prompt
    )?;

    if question.answer_kind.has_choices() {
        for (i, choice) in question.choices.iter().enumerate() {
            let mark = if engine.is_option_selected(choice) { "x" } else { " " };
            writeln!(out, "  {}. [{}] {}", i + 1, mark, choice)?;
        }
    } else {
        match engine.current_answer() {
            Some(AnswerValue::Text(v)) if !v.is_empty() => writeln!(out, "  (current: {v})")?,
            Some(AnswerValue::Number(n)) if n != 0 => writeln!(out, "  (current: {n})")?,
            _ => {}
        }
    }
    write!(out, "> ")?;
    out.flush()
}

fn print_profile(profile: &UserProfile) {
    let join = |set: &std::collections::BTreeSet<String>| {
        set.iter().cloned().collect::<Vec<_>>().join(", ")
    };

    println!("Onboarding complete.");
    println!();
    println!("  Name: {}", profile.name);
    println!("  Age: {}", profile.age);
    println!("  Gender: {}", profile.gender);
    println!("  Height: {} cm", profile.height);
    println!("  Weight: {} kg", profile.weight);
    println!("  Goal Weight: {} kg", profile.goal_weight);
    println!(
        "  Fitness Level: {}",
        profile
            .fitness_level
            .map(|l| l.label())
            .unwrap_or_else(|| "Not set".to_string())
    );
    println!("  Fitness Goals: {}", join(&profile.fitness_goals));
    println!("  Workout Days: {}", join(&profile.preferred_workout_days));
    println!("  Workout Duration: {} min", profile.workout_duration);
}
