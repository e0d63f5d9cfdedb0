use drills_compress::CompressionVariant;

pub fn run() -> anyhow::Result<()> {
    println!("Compression Strategies");
    println!("======================");
    for variant in CompressionVariant::ALL {
        println!("  {:<5} {}", variant.label().to_ascii_lowercase(), variant);
    }
    Ok(())
}
