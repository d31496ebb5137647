// src/cli/handlers.rs
use serde::Serialize;
use serde_json::json;

use crate::cli::GenerateArgs;
use crate::core::config::Config;
use crate::generators::{GeneratorError, PasswordGenerator, RandomSource};
use crate::generators::random::seeded;
use crate::models::PasswordGenerationOptions;
use crate::strength::{self, PasswordAnalysis};

// One generated password with the numbers shown next to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationReport {
    pub password: String,
    pub score: i64,
    pub charset_length: usize,
    pub entropy_bits: f64,
}

pub fn generate_reports<R>(
    generator: &PasswordGenerator,
    options: &PasswordGenerationOptions,
    random: &mut R,
    count: usize,
) -> Result<Vec<GenerationReport>, GeneratorError>
where
    R: RandomSource + ?Sized,
{
    (0..count)
        .map(|_| {
            let generated = generator.generate(options, random)?;
            Ok(GenerationReport {
                score: strength::score_password(&generated.value),
                entropy_bits: strength::entropy_bits(options.drawn_length(), generated.charset_length),
                charset_length: generated.charset_length,
                password: generated.value,
            })
        })
        .collect()
}

pub fn render_reports(reports: &[GenerationReport], json: bool) -> String {
    if json {
        return json!({
            "success": true,
            "passwords": reports,
        })
        .to_string();
    }

    reports
        .iter()
        .map(|report| {
            format!(
                "{}\n  Score: {} | Charset: {} characters | Entropy: {:.1} bits",
                report.password, report.score, report.charset_length, report.entropy_bits
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_analysis(password: &str, analysis: &PasswordAnalysis, json: bool) -> String {
    if json {
        return json!({
            "success": true,
            "password": password,
            "analysis": analysis,
        })
        .to_string();
    }

    let mut lines = vec![format!("Score: {} ({})", analysis.score, analysis.strength)];
    lines.extend(analysis.feedback.iter().map(|tip| format!("  - {}", tip)));
    lines.join("\n")
}

pub fn render_error(error: &GeneratorError, json: bool) -> String {
    if json {
        json!({
            "success": false,
            "error": format!("Failed to generate password: {}", error),
        })
        .to_string()
    } else {
        format!("❌ Failed to generate password: {}", error)
    }
}

pub fn handle_generate(
    args: &GenerateArgs,
    config: &Config,
    generator: &PasswordGenerator,
    json: bool,
) -> Result<(), GeneratorError> {
    let options = args.to_options(config);
    log::debug!("Generating {} password(s) with {:?}", args.count, options);

    let result = match args.seed {
        Some(seed) => generate_reports(generator, &options, &mut seeded(seed), args.count),
        None => generate_reports(generator, &options, &mut rand::thread_rng(), args.count),
    };

    match result {
        Ok(reports) => {
            println!("{}", render_reports(&reports, json));
            Ok(())
        }
        Err(e) => {
            if json {
                println!("{}", render_error(&e, json));
            } else {
                eprintln!("{}", render_error(&e, json));
            }
            Err(e)
        }
    }
}

pub fn handle_score(password: &str, json: bool) {
    let analysis = strength::analyze_password(password);
    println!("{}", render_analysis(password, &analysis, json));
}
