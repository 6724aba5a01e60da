use pi_words_core::pipeline::corpus_model::CorpusModel;
use pi_words_core::pipeline::searcher::PiWordSearcher;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load all corpora from the "data" directory (.txt files)
    // Binary .bin caches are reused automatically when present
    let searcher = match PiWordSearcher::new("./data") {
        Ok(searcher) => searcher,
        Err(_) => {
            // No data directory: fall back to a small built-in corpus
            let entries: Vec<String> = [
                "the quick brown fox jumps over the lazy dog",
                "pack my box with five dozen liquor jugs",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect();

            let mut searcher = PiWordSearcher::default();
            searcher.add_model(CorpusModel::from_entries("builtin", &entries))?;
            searcher
        }
    };

    // Create a search input selecting every loaded corpus
    let mut input = searcher.make_search_input();

    // Base the digits are rendered in; also the alphabet length
    input.set_base(26)?;

    // Number of fractional digits of pi to generate
    input.set_precision(500)?;

    // Target words to look for in the rendered digit string
    input.words = vec!["pi".to_owned(), "on".to_owned(), "at".to_owned(), "word".to_owned()];

    // Attempting to set invalid parameters
    match input.set_base(1) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Base 1 is invalid, must be at least 2"),
    }
    match input.set_precision(-1) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("Precision -1 is invalid, must be non-negative"),
    }
    match input.set_corpora(&["unknown".to_owned()]) {
        Ok(_) => println!("Should not happen"),
        Err(_) => println!("This corpus ('unknown') does not exist"),
    }

    println!("Loaded corpora: {}", searcher.get_corpus_names().join(", "));

    // Run the pipeline: alphabet, pi digits, translation, rendering, search
    let report = searcher.search(&input)?;

    println!("Alphabet ({} slots): {}", report.alphabet.len(), report.alphabet);
    println!("Haystack: {}", report.haystack);
    for word in &input.words {
        match report.occurrences.get(word) {
            Some(offset) => println!("Found {:?} at offset {}", word, offset),
            None => println!("No occurrence of {:?}", word),
        }
    }

    Ok(())
}
