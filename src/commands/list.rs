use anyhow::Result;
use colored::Colorize;

use lathe::catalog::Catalog;

pub fn execute(
    project_type: Option<&str>,
    language: Option<&str>,
    tag: Option<&str>,
    json: bool,
) -> Result<()> {
    let catalog = Catalog::load()?;
    let templates = catalog.filter(project_type, language, tag);

    if json {
        println!("{}", serde_json::to_string_pretty(&templates)?);
        return Ok(());
    }

    if templates.is_empty() {
        println!("No templates match the given filters.");
        return Ok(());
    }

    println!("📋 {} template(s):\n", templates.len());
    for template in templates {
        let framework = template
            .framework
            .as_deref()
            .map(|f| format!(" + {}", f))
            .unwrap_or_default();
        println!(
            "  {}  {} [{}{}] ({})",
            template.name.bold(),
            template.description,
            template.language,
            framework,
            template.complexity.as_str().dimmed()
        );
    }

    Ok(())
}
