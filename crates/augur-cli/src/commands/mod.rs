pub mod daily;
pub mod gliding;
pub mod oracle;
pub mod ritual;

use std::io::{self, BufRead, Write};

use colored::Colorize;

use augur_games::{Game, GameReport, GameStatus};

/// Drive a game from stdin until it ends or input runs out.
pub fn play(game: &mut dyn Game, json: bool) -> Result<(), String> {
    println!("{}\n", game.intro().bold());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while !game.is_over() {
        print!("{}", game.prompt());
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match game.submit(input) {
            Ok(output) => println!("{}\n", paint(game.status(), &output)),
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }
    }

    let report = game.report();
    if json {
        let out = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{out}");
    } else {
        print_report(&report);
    }
    Ok(())
}

fn paint(status: GameStatus, text: &str) -> String {
    match status {
        GameStatus::Won => text.green().to_string(),
        GameStatus::Lost(_) => text.red().to_string(),
        GameStatus::InProgress => text.to_string(),
    }
}

fn print_report(report: &GameReport) {
    let label = match report.status {
        GameStatus::Won => "Won".green().bold(),
        GameStatus::Lost(_) => "Lost".red().bold(),
        GameStatus::InProgress => "Abandoned".yellow().bold(),
    };
    println!(
        "  {label} {} after {} turn{}. {}",
        report.game,
        report.turns_used,
        if report.turns_used == 1 { "" } else { "s" },
        report.summary
    );
}
