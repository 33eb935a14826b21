//! # Trestle CLI Application
//!
//! Terminal-based front-end over trestle_core: pick a preset, tweak the
//! main dimensions, get the cut list.
//!
//! ## Usage
//!
//! ```text
//! trestle_cli [preset]
//! ```
//!
//! where `preset` is one of original, table, big, bench, kiefer
//! (default: original).

use std::io::{self, BufRead, Write};

use trestle_core::model::Table;
use trestle_core::presets::Preset;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Trestle CLI - Lath Frame Cut-List Generator");
    println!("===========================================");
    println!();

    let preset = match std::env::args().nth(1) {
        Some(key) => match Preset::from_key(&key) {
            Ok(preset) => preset,
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!(
                    "Known presets: {}",
                    Preset::ALL
                        .iter()
                        .map(|p| p.key())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                std::process::exit(1);
            }
        },
        None => Preset::Original,
    };

    let mut config = preset.config();
    println!(
        "Preset: {} (laths {} x {} cm)",
        preset.title(),
        config.q1,
        config.q2
    );
    println!();

    config.length = prompt_f64(
        &format!("Enter frame length (cm) [{:.1}]: ", config.length),
        config.length,
    );
    config.width = prompt_f64(
        &format!("Enter board width (cm) [{:.1}]: ", config.width),
        config.width,
    );
    config.height = prompt_f64(
        &format!("Enter frame height (cm) [{:.1}]: ", config.height),
        config.height,
    );

    println!();
    println!("Building frame model...");
    println!();

    match Table::build(&config) {
        Ok(table) => {
            println!("═══════════════════════════════════════");
            println!("  TRESTLE FRAME CUT LIST");
            println!("═══════════════════════════════════════");
            println!();
            println!("Frame:");
            println!("  Length:   {:.1} cm", table.length);
            println!(
                "  Width:    {:.1} cm ({} pitch units, snapped)",
                table.width, table.an
            );
            println!("  Height:   {:.1} cm", table.height);
            println!("  Overhang: {:.1} cm per keel end", table.krag);
            println!();
            println!("Laths ({} x {} cm cross-section):", table.q1, table.q2);
            for (name, group) in &table.lengths {
                println!(
                    "  {}: {:>3} x {:>7.1} cm = {:>8.1} cm",
                    name,
                    group.count,
                    group.length,
                    group.count as f64 * group.length
                );
            }
            println!();
            println!("═══════════════════════════════════════");
            println!(
                "  TOTAL: {} laths, {:.1} cm of material",
                table.laths.len(),
                table.total_length
            );
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&table) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}
