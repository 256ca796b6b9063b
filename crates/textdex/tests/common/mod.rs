#![allow(dead_code)]

use tempfile::TempDir;

/// Write `(relative path, content)` pairs into a fresh temp directory
pub fn write_corpus(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for (name, content) in files {
        let path = temp_dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }
    temp_dir
}

pub fn cat_corpus() -> TempDir {
    write_corpus(&[
        ("doc1.txt", "The cat sat. The cat ran."),
        ("doc2.txt", "A cat meowed."),
    ])
}

/// Deterministic prose: `docs` documents of `sentences` sentences each
pub fn synthetic_texts(docs: usize, sentences: usize) -> Vec<(String, String)> {
    const WORDS: &[&str] = &[
        "river", "stone", "Light", "forest", "the", "a", "shadow", "river", "wind", "STONE",
        "of", "mountain", "and", "light", "echo",
    ];

    (0..docs)
        .map(|d| {
            let text = (0..sentences)
                .map(|s| {
                    let len = 3 + (d + s) % 6;
                    let words: Vec<_> = (0..len)
                        .map(|w| WORDS[(d * 7 + s * 3 + w * 5) % WORDS.len()])
                        .collect();
                    capitalize(&format!("{}.", words.join(" ")))
                })
                .collect::<Vec<_>>()
                .join(" ");
            (format!("doc{:03}.txt", d), text)
        })
        .collect()
}

fn capitalize(sentence: &str) -> String {
    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
