//! Terminal rendering for surveys and aggregated results.

use std::collections::BTreeMap;

use colored::Colorize;

use mensa_types::{Question, QuestionKind, QuestionResults, ResultData, Survey, SurveyResponse};

const BAR_WIDTH: usize = 30;
const RAW_SAMPLE_LIMIT: usize = 10;

pub fn survey_line(survey: &Survey) -> String {
    let status = if survey.is_active {
        "active".green()
    } else {
        "inactive".red()
    };
    format!(
        "{:>4}  {}  [{}] ({} questions)",
        survey.id,
        survey.title.bold(),
        status,
        survey.questions.len()
    )
}

pub fn print_survey(survey: &Survey) {
    println!("{} (#{})", survey.title.bold(), survey.id);
    if !survey.description.is_empty() {
        println!("{}", survey.description);
    }
    let pages = mensa_types::Pages::group(survey.questions.clone());
    for (page, questions) in pages.iter() {
        println!();
        println!("{}", format!("Page {page}").underline());
        for question in questions {
            println!("  {}", question_line(question));
        }
    }
}

fn question_line(question: &Question) -> String {
    let required = if question.required { " *" } else { "" };
    let mut line = format!(
        "{:>4}  {}{} ({})",
        question.id,
        question.text,
        required.red(),
        question.kind.as_str().cyan()
    );
    if question.kind.has_options() && !question.options.is_empty() {
        line.push_str(&format!(" [{}]", question.options.join(", ")));
    }
    line
}

pub fn response_line(response: &SurveyResponse) -> String {
    let when = response
        .submitted_at
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:>4}  {}  {} ({} answers)",
        response.id,
        response.survey_title.bold(),
        when.dimmed(),
        response.answers.len()
    )
}

pub fn print_results(survey: &Survey, results: &[QuestionResults]) {
    println!("{} — results", survey.title.bold());
    for entry in results {
        println!();
        println!(
            "{} {}",
            entry.text.bold(),
            format!("({} answers)", entry.total).dimmed()
        );
        match &entry.results {
            ResultData::RatingStats {
                average,
                distribution,
            } => {
                let unit = if entry.kind == QuestionKind::Star {
                    "stars"
                } else {
                    "points"
                };
                println!("  average: {}", format!("{average:.1} {unit}").yellow());
                print_bars(distribution);
            }
            ResultData::OptionCounts(counts) => print_bars(counts),
            ResultData::Raw(values) => {
                for value in values.iter().take(RAW_SAMPLE_LIMIT) {
                    println!("  · {value}");
                }
                if values.len() > RAW_SAMPLE_LIMIT {
                    println!("  … and {} more", values.len() - RAW_SAMPLE_LIMIT);
                }
            }
            ResultData::Empty => println!("  {}", "No answers yet.".dimmed()),
        }
    }
}

fn print_bars(counts: &BTreeMap<String, u64>) {
    let width = counts.keys().map(String::len).max().unwrap_or(0);
    let max = counts.values().copied().max().unwrap_or(0);
    for (label, count) in counts {
        let filled = if max == 0 {
            0
        } else {
            (*count as usize * BAR_WIDTH).div_ceil(max as usize)
        };
        println!(
            "  {label:>width$}  {} {count}",
            "█".repeat(filled).cyan(),
        );
    }
}
