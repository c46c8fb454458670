use anyhow::Result;

use lathe::catalog::Catalog;

pub fn execute(json: bool) -> Result<()> {
    let builtin_count = Catalog::builtin().len();

    if json {
        let info = serde_json::json!({
            "lathe": env!("CARGO_PKG_VERSION"),
            "builtin_templates": builtin_count,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("lathe {}", env!("CARGO_PKG_VERSION"));
    println!("{} built-in template(s)", builtin_count);

    Ok(())
}
