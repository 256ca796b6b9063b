use super::{separator, Session};
use crate::cli::Cli;
use serde::Serialize;
use std::fmt::Write;
use textdex_index::Occurrences;

#[derive(Debug, Serialize)]
struct Lookup<'a> {
    word: &'a str,
    frequency: usize,
    #[serde(flatten)]
    occurrences: Occurrences,
}

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let session = Session::open(cli)?;
    let engine = session.engine();

    let mut lookups = Vec::with_capacity(cli.words.len());
    for word in &cli.words {
        lookups.push(Lookup {
            word,
            frequency: engine.index().frequency(word),
            occurrences: engine.fetch_occurrences(word)?,
        });
    }

    print!("{}", render(&lookups, cli.json)?);
    Ok(())
}

fn render(lookups: &[Lookup<'_>], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(lookups)? + "\n");
    }

    let separator = separator();
    let mut out = String::new();
    for lookup in lookups {
        if lookup.occurrences.is_empty() {
            writeln!(out, "{}: no occurrences", lookup.word)?;
        } else {
            writeln!(
                out,
                "{} ({}) | {} | {}",
                lookup.word,
                lookup.frequency,
                lookup.occurrences.files.join(","),
                lookup.occurrences.sentences.join("\n")
            )?;
        }
        writeln!(out, "{}\n", separator)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_found_and_missing() {
        let lookups = vec![
            Lookup {
                word: "cat",
                frequency: 2,
                occurrences: Occurrences {
                    files: vec!["a.txt".to_string()],
                    sentences: vec!["*cat* one".to_string(), "*cat* two".to_string()],
                },
            },
            Lookup {
                word: "dog",
                frequency: 0,
                occurrences: Occurrences::default(),
            },
        ];
        let out = render(&lookups, false).unwrap();
        let dashes = "-".repeat(80);

        assert_eq!(
            out,
            format!("cat (2) | a.txt | *cat* one\n*cat* two\n{dashes}\n\ndog: no occurrences\n{dashes}\n\n")
        );
    }

    #[test]
    fn test_render_json_flattens_occurrences() {
        let lookups = vec![Lookup {
            word: "cat",
            frequency: 1,
            occurrences: Occurrences {
                files: vec!["a.txt".to_string()],
                sentences: vec!["*cat*".to_string()],
            },
        }];
        let out = render(&lookups, true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["word"], "cat");
        assert_eq!(parsed[0]["files"][0], "a.txt");
        assert_eq!(parsed[0]["sentences"][0], "*cat*");
    }
}
