//! Basic tests for tadkham-engine

use std::io::Write;
use tadkham_engine::*;

fn thai_dictionary_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "คำ\nตัด\nตัดคำ\nไหม").unwrap();
    file
}

#[test]
fn test_engine_config_creation() {
    let config = EngineConfig::default();
    assert_eq!(config.parallel_threshold, 100_000);
    assert_eq!(config.execution_mode, ExecutionMode::Adaptive);

    let sequential = EngineConfig::sequential();
    assert_eq!(sequential.execution_mode, ExecutionMode::Sequential);
}

#[test]
fn test_execution_mode_selection() {
    use tadkham_engine::executor::auto_select;

    assert_eq!(auto_select(1, 500_000, 100_000), ExecutionMode::Sequential);
    assert_eq!(auto_select(10, 10_000, 100_000), ExecutionMode::Sequential);

    #[cfg(feature = "parallel")]
    assert_eq!(auto_select(10, 200_000, 100_000), ExecutionMode::Parallel);
}

#[test]
fn test_segmenter_from_file() {
    let file = thai_dictionary_file();
    let segmenter = SegmenterBuilder::new()
        .dictionary_file(file.path())
        .build()
        .unwrap();

    assert_eq!(segmenter.dictionary().len(), 4);
    assert_eq!(segmenter.segment("ตัดคำไหม"), vec!["ตัดคำ", "ไหม"]);
}

#[test]
fn test_missing_dictionary_file_fails_before_segmenting() {
    let result = SegmenterBuilder::new()
        .dictionary_file("/nonexistent/dict.txt")
        .build();
    match result {
        Err(EngineError::DictionaryLoad { source_name, .. }) => {
            assert!(source_name.contains("dict.txt"));
        }
        other => panic!("Expected DictionaryLoad error, got {other:?}"),
    }
}

#[test]
fn test_sorted_load_accepts_unsorted_file() {
    let segmenter = SegmenterBuilder::new()
        .dictionary_text("ไหม\nตัดคำ\nคำ\nตัด")
        .load_options(LoadOptions::sorted())
        .build()
        .unwrap();
    assert_eq!(segmenter.segment("ตัดคำไหม"), vec!["ตัดคำ", "ไหม"]);
}

#[test]
fn test_process_file_input() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    write!(input, "ตัดคำABไหม").unwrap();

    let segmenter = Segmenter::new(Dictionary::from_words(["ตัด", "ตัดคำ", "คำ", "ไหม"]));
    let output = segmenter.process(Input::from_file(input.path())).unwrap();

    assert_eq!(output.segments(), vec!["ตัดคำ", "A", "B", "ไหม"]);
    let kinds: Vec<TokenKind> = output.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Word,
            TokenKind::Unknown,
            TokenKind::Unknown,
            TokenKind::Word
        ]
    );
    assert_eq!(output.metadata.unknown_count, 2);
}

#[test]
fn test_token_offsets_cover_input() {
    let segmenter = Segmenter::new(Dictionary::from_words(["ตัด", "คำ"]));
    let text = "ตัด คำ!";
    let output = segmenter.tokenize(text);

    let mut char_pos = 0;
    let mut byte_pos = 0;
    for token in &output.tokens {
        assert_eq!(token.char_range.start, char_pos);
        assert_eq!(token.byte_range.start, byte_pos);
        assert_eq!(&text[token.byte_range.clone()], token.text);
        char_pos = token.char_range.end;
        byte_pos = token.byte_range.end;
    }
    assert_eq!(char_pos, text.chars().count());
    assert_eq!(byte_pos, text.len());
}

#[test]
fn test_batch_matches_single_documents() {
    let segmenter = SegmenterBuilder::new()
        .dictionary(Dictionary::from_words(["ตัด", "ตัดคำ", "คำ", "ไหม"]))
        .execution_mode(ExecutionMode::Parallel)
        .threads(Some(3))
        .build()
        .unwrap();

    let documents: Vec<String> = (0..20)
        .map(|i| "ตัดคำไหม".repeat(i % 4) + if i % 3 == 0 { "z" } else { "" })
        .collect();
    let outputs = segmenter.segment_batch(&documents).unwrap();

    assert_eq!(outputs.len(), documents.len());
    for (document, output) in documents.iter().zip(&outputs) {
        assert_eq!(output.segments(), segmenter.segment(document));
    }
}

#[test]
fn test_wrap_segmented_output() {
    let segmenter = Segmenter::new(Dictionary::from_words(["ตัด", "ตัดคำ", "คำ", "ไหม"]));
    let segments = segmenter.segment("ตัดคำไหมตัดคำไหม");
    let lines = wrap_tokens(&segments, 8);
    assert_eq!(lines, vec!["ตัดคำไหม", "ตัดคำไหม"]);
}
