//! Rendering of private views and the public reveal.
use colored::Colorize;
use imp_gameplay::*;
use std::io::Write;

/// A player's private screen.
pub fn view(view: &View, sports: bool) {
    println!();
    println!("  {} {}", format!("SEAT {}", view.seat() + 1).dimmed(), view.name().bold());
    println!();
    match view.role() {
        Role::Imposter => {
            println!("  {}", view.label().red().bold());
            println!("  {}", "BLEND IN WITHOUT KNOWING".dimmed());
        }
        Role::Civilian => {
            println!("  {}", view.label().to_uppercase().bold());
            println!(
                "  {}",
                format!("YOU KNOW THE {}", if sports { "PLAYER" } else { "WORD" }).dimmed()
            );
        }
    }
    println!();
    if let Some(category) = view.category() {
        println!("  {:<10}{}", "CATEGORY".dimmed(), category);
    }
    if let Some(hint) = view.hint() {
        println!("  {:<10}{}", "HINT".dimmed(), hint);
    }
    if let Some(length) = view.length() {
        println!("  {:<10}{} LETTERS", "LENGTH".dimmed(), length);
    }
    if !view.allies().is_empty() {
        let heading = if view.allies().len() > 1 {
            "OTHER IMPOSTERS"
        } else {
            "OTHER IMPOSTER"
        };
        println!("  {}", heading.red());
        for name in view.allies() {
            println!("    {}", name);
        }
    }
    println!();
}

/// The reveal screen.
pub fn summary(summary: &Summary, sports: bool) {
    println!();
    println!("  {}", "ROUND OVER".bold());
    println!();
    println!(
        "  THE {} WAS  {}",
        if sports { "PLAYER" } else { "WORD" },
        summary.secret.green().bold()
    );
    if let Some(hint) = &summary.hint {
        println!("  {:<16}{}", "HINT".dimmed(), hint);
    }
    let heading = if summary.n_imposters() > 1 {
        "IMPOSTERS"
    } else {
        "IMPOSTER"
    };
    println!("  {}", heading.red().bold());
    for name in summary.imposters.iter() {
        println!("    {}", name.red());
    }
    println!();
    println!("  {:<16}{}", "CATEGORY".dimmed(), summary.pool);
    println!("  {:<16}{}", "PLAYERS".dimmed(), summary.players);
    println!("  {:<16}{}", "IMPOSTERS".dimmed(), summary.n_imposters());
    println!("  {:<16}{}", "OPENED BY".dimmed(), summary.speaker);
    if summary.hard {
        println!("  {}", "HARD MODE WAS ACTIVE".red());
    }
    println!();
}

/// Banner shown between turns. Never includes anything private.
pub fn table(round: &Round) {
    println!();
    println!(
        "  {} {}",
        "CURRENT SPEAKER".dimmed(),
        round.players()[round.speaker()].name().bold()
    );
    println!("  {} still to check", round.remaining());
    println!();
}

/// Terminal rendition of a feedback cue: one bell per pitch, held for the
/// length of the cue so the next screen does not cut it short.
pub fn ring(cue: Cue) -> std::io::Result<()> {
    let ref mut out = std::io::stdout();
    for (i, _) in cue.pitches().iter().enumerate() {
        if i > 0 {
            std::thread::sleep(imp_core::CUE_CHIME_STEP);
        }
        write!(out, "\x07")?;
        out.flush()?;
    }
    std::thread::sleep(cue.duration());
    Ok(())
}
