// src/cli/menu.rs
use inquire::{Confirm, CustomType, Select, Text};
use std::error::Error;

use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::{PartsOptions, PasswordGenerationOptions};
use crate::strength;

const REGENERATE: &str = "🔄 Regenerate";
const CHANGE_SETTINGS: &str = "⚙️  Change settings";
const SCORE_OWN: &str = "📊 Score my own password";
const QUIT: &str = "🚪 Quit";

fn prompt_options(current: &PasswordGenerationOptions) -> Result<PasswordGenerationOptions, Box<dyn Error>> {
    let lowercase = Confirm::new("Include lowercase letters?")
        .with_default(current.lowercase)
        .prompt()?;

    let uppercase = Confirm::new("Include uppercase letters?")
        .with_default(current.uppercase)
        .prompt()?;

    let numbers = Confirm::new("Include numbers?")
        .with_default(current.numbers)
        .prompt()?;

    let special = Confirm::new("Include special characters?")
        .with_default(current.special)
        .prompt()?;

    let extended = Confirm::new("Include extended (Latin-1) characters?")
        .with_default(current.extended)
        .prompt()?;

    let length = CustomType::<usize>::new("Characters per part:")
        .with_default(current.parts.length)
        .prompt()?;

    let amount = CustomType::<usize>::new("Number of parts:")
        .with_default(current.parts.amount)
        .prompt()?;

    let delimiter = if amount > 1 {
        Text::new("Delimiter:")
            .with_default(&current.parts.delimiter)
            .prompt()?
    } else {
        current.parts.delimiter.clone()
    };

    Ok(PasswordGenerationOptions {
        lowercase,
        uppercase,
        numbers,
        special,
        extended,
        parts: PartsOptions {
            amount,
            length,
            delimiter,
        },
    })
}

fn show_generated(generator: &PasswordGenerator, options: &PasswordGenerationOptions) {
    match generator.generate(options, &mut rand::thread_rng()) {
        Ok(generated) => {
            let analysis = strength::analyze_password(&generated.value);
            println!("\nGenerated Password: {}", generated.value);
            println!("Strength: {} ({})", analysis.score, analysis.strength);
            println!(
                "Entropy: {:.1} bits\n",
                strength::entropy_bits(options.drawn_length(), generated.charset_length)
            );
        }
        Err(e) => {
            log::warn!("Generation failed: {}", e);
            println!("\n❌ {}\n", e);
        }
    }
}

pub fn run_cli_menu(config: &Config, generator: &PasswordGenerator) -> Result<(), Box<dyn Error>> {
    println!("🦀🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║        🦀 RUST PASSWORD GENERATOR     ║");
    println!("╚══════════════════════════════════════╝");

    let mut options = config.default_options();
    show_generated(generator, &options);

    loop {
        let choice = Select::new("What next?", vec![REGENERATE, CHANGE_SETTINGS, SCORE_OWN, QUIT]).prompt()?;

        match choice {
            REGENERATE => show_generated(generator, &options),
            CHANGE_SETTINGS => {
                options = prompt_options(&options)?;
                show_generated(generator, &options);
            }
            SCORE_OWN => {
                let password = inquire::Password::new("Password to score:")
                    .with_display_mode(inquire::PasswordDisplayMode::Hidden)
                    .without_confirmation()
                    .prompt()?;
                let analysis = strength::analyze_password(&password);
                println!("\nStrength: {} ({})", analysis.score, analysis.strength);
                for tip in &analysis.feedback {
                    println!("  - {}", tip);
                }
                println!();
            }
            _ => break,
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}
