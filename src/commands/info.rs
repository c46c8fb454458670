use anyhow::Result;
use colored::Colorize;

use lathe::catalog::Catalog;

pub fn execute(template_name: &str) -> Result<()> {
    let catalog = Catalog::load()?;
    let template = catalog.get(template_name)?;

    println!("{}", template.name.bold());
    println!("  {}", template.description);
    println!();
    println!("  type:       {}", template.project_type);
    println!("  language:   {}", template.language);
    if let Some(framework) = &template.framework {
        println!("  framework:  {}", framework);
    }
    if let Some(database) = &template.database {
        println!("  database:   {}", database);
    }
    if let Some(testing) = &template.testing {
        println!("  testing:    {}", testing);
    }
    if let Some(build_tool) = &template.build_tool {
        println!("  build tool: {}", build_tool);
    }
    println!("  complexity: {}", template.complexity.as_str());
    if !template.tags.is_empty() {
        println!("  tags:       {}", template.tags.join(", "));
    }
    if !template.features.is_empty() {
        println!("\n  Features:");
        for feature in &template.features {
            println!("    - {}", feature);
        }
    }

    println!("\n  Emits:");
    for folder in &template.structure.folders {
        println!("    {}/", folder.dimmed());
    }
    for file in &template.structure.files {
        println!("    {}", file.path);
    }

    Ok(())
}
