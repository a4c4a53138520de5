//! Spoken languages and the per-language phrase and file-name rules.

use super::deck::Card;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    /// Processing order of a batch run.
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    /// Two-letter prefix of output file names.
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
        }
    }

    /// Spoken phrase for a card, e.g. "A of Spades" or "As de Picas".
    pub fn phrase(&self, card: &Card) -> String {
        match self {
            Self::English => format!("{} of {}", card.rank.token(), card.suit.english_name()),
            Self::Spanish => format!("{} de {}", card.rank.spanish_name(), card.suit.spanish_name()),
        }
    }

    /// `{lang}_{rank}_{suit}.mp3`. The suit part is the English key in both languages.
    pub fn file_name(&self, card: &Card) -> String {
        format!("{}_{}.mp3", self.code(), card.id())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => f.write_str("English"),
            Self::Spanish => f.write_str("Spanish"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{deck, Rank, Suit};
    use std::collections::HashSet;

    #[test]
    fn test_ace_of_spades() {
        let card = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(Language::English.phrase(&card), "A of Spades");
        assert_eq!(Language::English.file_name(&card), "en_A_spades.mp3");
        assert_eq!(Language::Spanish.phrase(&card), "As de Picas");
        assert_eq!(Language::Spanish.file_name(&card), "es_A_spades.mp3");
    }

    #[test]
    fn test_ten_of_clubs() {
        let card = Card::new(Rank::Ten, Suit::Clubs);
        assert_eq!(Language::English.phrase(&card), "10 of Clubs");
        assert_eq!(Language::English.file_name(&card), "en_10_clubs.mp3");
        assert_eq!(Language::Spanish.phrase(&card), "Diez de Tréboles");
        assert_eq!(Language::Spanish.file_name(&card), "es_10_clubs.mp3");
    }

    #[test]
    fn test_face_cards_in_spanish() {
        assert_eq!(
            Language::Spanish.phrase(&Card::new(Rank::Jack, Suit::Hearts)),
            "Jota de Corazones"
        );
        assert_eq!(
            Language::Spanish.phrase(&Card::new(Rank::Queen, Suit::Diamonds)),
            "Reina de Diamantes"
        );
        assert_eq!(
            Language::English.phrase(&Card::new(Rank::King, Suit::Diamonds)),
            "K of Diamonds"
        );
    }

    #[test]
    fn test_file_names_are_injective() {
        let names: HashSet<String> = Language::ALL
            .iter()
            .flat_map(|lang| deck().map(move |card| lang.file_name(&card)))
            .collect();
        assert_eq!(names.len(), 104);
    }
}
