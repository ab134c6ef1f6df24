//! Motivational reminders shown on the dashboard.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteKind {
    Quran,
    Hadith,
    Quote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub source: &'static str,
    #[serde(rename = "type")]
    pub kind: QuoteKind,
}

pub const QUOTES: &[Quote] = &[
    Quote {
        text: "My Lord, increase me in knowledge.",
        source: "Surah Taha 20:114",
        kind: QuoteKind::Quran,
    },
    Quote {
        text: "Indeed, with hardship [will be] ease.",
        source: "Surah Ash-Sharh 94:6",
        kind: QuoteKind::Quran,
    },
    Quote {
        text: "He who goes forth in search of knowledge is considered as struggling in the Cause of Allah until he returns.",
        source: "Tirmidhi",
        kind: QuoteKind::Hadith,
    },
    Quote {
        text: "Actions are judged by intentions.",
        source: "Bukhari",
        kind: QuoteKind::Hadith,
    },
    Quote {
        text: "The strong believer is better and more beloved to Allah than the weak believer, while there is good in both.",
        source: "Muslim",
        kind: QuoteKind::Hadith,
    },
    Quote {
        text: "Success comes with Sabr and Salah.",
        source: "Reminder",
        kind: QuoteKind::Quote,
    },
    Quote {
        text: "Don't stress, do your best, and leave the rest to Allah.",
        source: "Reminder",
        kind: QuoteKind::Quote,
    },
    Quote {
        text: "Your time is your capital; do not waste it.",
        source: "Reminder",
        kind: QuoteKind::Quote,
    },
];

pub fn random_index<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.gen_range(0..QUOTES.len())
}

/// Random index from the thread-local RNG.
pub fn random_quote_index() -> usize {
    random_index(&mut rand::thread_rng())
}

/// Index after `index`, cycling back to the first quote.
pub fn next_index(index: usize) -> usize {
    (index % QUOTES.len() + 1) % QUOTES.len()
}

/// Quote at `index`, wrapping out-of-range indices.
pub fn quote_at(index: usize) -> &'static Quote {
    &QUOTES[index % QUOTES.len()]
}
