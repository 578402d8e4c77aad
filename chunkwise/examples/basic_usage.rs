//! Basic usage example for chunkwise

use chunkwise::{for_each_chunk, split, Chunker, Config, Signal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let items: Vec<u32> = (1..=10).collect();

    // Method 1: Convenience function
    println!("=== Method 1: Convenience Function ===");
    for (i, chunk) in split(&items, 4).iter().enumerate() {
        println!("  Chunk {}: {:?}", i + 1, chunk);
    }

    // Method 2: Visiting chunks with early exit
    println!("\n=== Method 2: Visiting Chunks ===");
    let result: Result<(), String> = for_each_chunk(&items, 4, |chunk| {
        if chunk.contains(&7) {
            return Signal::Stop;
        }
        println!("  Visited {:?}", chunk);
        Signal::Continue
    });
    println!("  Outcome: {:?}", result);

    // Method 3: Configuration from TOML
    println!("\n=== Method 3: Configuration ===");
    let config = Config::from_toml_str("[chunking]\nmax_size = 3\n")?;
    let chunker = Chunker::with_config(config);
    let layout = chunker.layout(items.len());

    println!("  {} chunks for max size {}", layout.chunk_count(), layout.max_size);
    println!("  {}", layout.to_json()?);

    Ok(())
}
