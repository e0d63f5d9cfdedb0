pub fn run() -> anyhow::Result<()> {
    println!("drills {}", env!("CARGO_PKG_VERSION"));
    println!("Strategy-pattern compressor and expense tracker");
    Ok(())
}
