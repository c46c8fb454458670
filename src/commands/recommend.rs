use anyhow::Result;
use colored::Colorize;

use lathe::catalog::Catalog;
use lathe::recommend::{self, UsageHistory, UserProfile};

pub fn execute(json: bool) -> Result<()> {
    let profile = UserProfile::load()?;
    let history = UsageHistory::load()?;
    let catalog = Catalog::load()?;

    let recommendations = recommend::recommend(&profile, &history, catalog.all());

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }

    if recommendations.is_empty() {
        println!("No templates scored above the cutoff for your profile.");
        println!("Set preferences with 'lathe profile set --languages rust --skill beginner'.");
        return Ok(());
    }

    println!("🎯 Recommended templates:\n");
    for rec in &recommendations {
        println!(
            "  {:.2}  {}  {} [{}]",
            rec.score,
            rec.template.bold(),
            rec.description,
            rec.language
        );
    }

    Ok(())
}
