use anyhow::Result;

use lathe::cache::Cache;
use lathe::Config;

pub fn stats(json: bool) -> Result<()> {
    let config = Config::load()?;
    let cache = Cache::open(&config)?;
    let stats = cache.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("🗃️  Cache:");
    println!("  entries:    {}", stats.entries);
    println!("  hits:       {}", stats.hits);
    println!("  misses:     {}", stats.misses);
    println!("  last sweep: {}", stats.last_sweep.to_rfc3339());

    Ok(())
}

pub fn clear() -> Result<()> {
    let config = Config::load()?;
    let mut cache = Cache::open(&config)?;
    cache.clear();
    cache.save()?;

    println!("✓ Cache cleared");

    Ok(())
}
