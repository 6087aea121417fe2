//! Basic usage of the word segmentation API

use tadkham_api::{segment_with, Config, ExecutionMode, WordSegmenter};

const DICTIONARY: &str = "กิน\nข้าว\nคำ\nตัด\nตัดคำ\nบ้าน\nไหม\n";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Inline dictionary, default settings
    println!("=== Method 1: Inline Dictionary ===");
    let segmenter = WordSegmenter::from_text(DICTIONARY)?;
    println!("{}", segmenter.segment("ตัดคำไหม").join(" | "));

    // Method 2: Tokens with offsets
    println!("\n=== Method 2: Tokens ===");
    let output = segment_with(&segmenter, "กินข้าวที่บ้าน")?;
    for token in &output.tokens {
        println!(
            "  {:<8} chars {}..{} ({})",
            token.text,
            token.char_offset,
            token.char_offset + token.char_len,
            token.kind
        );
    }
    println!(
        "{} segments, {} unknown, {:.3}ms",
        output.metadata.word_count, output.metadata.unknown_count, output.metadata.processing_time_ms
    );

    // Method 3: Unsorted dictionary, parallel batch
    println!("\n=== Method 3: Batch ===");
    let config = Config::builder()
        .dictionary_text("ไหม\nคำ\nตัด\n")
        .sort(true)
        .execution_mode(ExecutionMode::Parallel)
        .threads(Some(2))
        .build()?;
    let segmenter = WordSegmenter::with_config(config)?;
    let documents = ["ตัดคำ", "คำไหม", "ไหมตัด"];
    for output in segmenter.process_batch(&documents)? {
        println!("  {}", output.segments().join(" | "));
    }

    Ok(())
}
