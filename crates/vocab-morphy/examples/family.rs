use std::env;

use anyhow::{Context, Result, bail};
use vocab_morphy::Morphy;
use vocab_types::Pos;

const USAGE: &str = "usage: cargo run -p vocab-morphy --example family -- <pos> [--demo | <word>]";

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let pos = args.next().map(|raw| Pos::parse(&raw)).context(USAGE)?;
    let next = args.next();
    if args.next().is_some() {
        bail!("too many arguments");
    }

    let words: Vec<String> = match next.as_deref() {
        Some("--demo") => vec![
            "go".into(),
            "jog".into(),
            "study".into(),
            "colour".into(),
            "happy".into(),
        ],
        Some(word) => vec![word.to_string()],
        None => bail!(USAGE),
    };

    let morph = Morphy::new();
    for word in words {
        println!("\nHeadword: {word} ({pos})");
        println!("  lemma key: {}", morph.lemma_key(&word, pos));
        for form in morph.family(&word, pos) {
            let variants = morph.variants(&form);
            if variants.is_empty() {
                println!("    {form}");
            } else {
                println!(
                    "    {:<12} us={:?} uk={:?}",
                    form, variants.american, variants.british
                );
            }
        }
    }

    Ok(())
}
