use aimers_core::quotes;

use super::CliResult;

pub fn run(after: Option<usize>) -> CliResult {
    let index = match after {
        Some(i) => quotes::next_index(i),
        None => quotes::random_quote_index(),
    };
    let quote = quotes::quote_at(index);
    println!("[{index}] {:?}: \"{}\"", quote.kind, quote.text);
    println!("  -- {}", quote.source);
    Ok(())
}
