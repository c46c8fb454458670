use anyhow::Result;
use colored::Colorize;

use lathe::catalog::Catalog;
use lathe::marketplace::Marketplace;
use lathe::Config;

pub fn publish(template_name: &str, author: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let catalog = Catalog::load()?;
    let template = catalog.get(template_name)?.clone();

    let author = author.unwrap_or(&config.author);
    let mut market = Marketplace::load()?;
    let entry = market.publish(template, author)?;
    let id = entry.id;
    market.save()?;

    println!("📦 Published '{}' as {} (entry {})", template_name, author, id);

    Ok(())
}

pub fn search(query: &str) -> Result<()> {
    let market = Marketplace::load()?;
    let matches = market.search(query);

    if matches.is_empty() {
        println!("No marketplace entries match '{}'.", query);
        return Ok(());
    }

    println!("🔍 {} match(es):\n", matches.len());
    for entry in matches {
        print_entry(entry);
    }

    Ok(())
}

pub fn install(template_name: &str) -> Result<()> {
    let mut market = Marketplace::load()?;
    let template = market.install(template_name)?;
    market.save()?;

    println!(
        "✨ Installed '{}' - generate with 'lathe new <name> --template {}'",
        template.name, template.name
    );

    Ok(())
}

pub fn rate(template_name: &str, stars: u8) -> Result<()> {
    let mut market = Marketplace::load()?;
    market.rate(template_name, stars)?;
    market.save()?;

    println!("⭐ Rated '{}' {} star(s)", template_name, stars);

    Ok(())
}

pub fn list() -> Result<()> {
    let market = Marketplace::load()?;

    if market.is_empty() {
        println!("The marketplace is empty. Publish with 'lathe market publish <template>'.");
        return Ok(());
    }

    println!("🛒 {} entr(ies):\n", market.len());
    for entry in market.list() {
        print_entry(entry);
    }

    Ok(())
}

fn print_entry(entry: &lathe::marketplace::MarketplaceEntry) {
    let rating = entry
        .average_rating()
        .map(|r| format!("{:.1}★", r))
        .unwrap_or_else(|| "unrated".to_string());
    println!(
        "  {}  by {} - {} downloads, {}",
        entry.template.name.bold(),
        entry.author,
        entry.downloads,
        rating.dimmed()
    );
}
