//! 牌面数据模块：静态的点数、花色与语言表。
//!
//! # Card Tables
//!
//! Static, read-only lookup tables for the 52-card deck and the two spoken
//! languages. Everything here is pure: the same card and language always
//! produce the same phrase and the same file name.
//!
//! | Item | Description |
//! |------|-------------|
//! | [`Rank`] | A, 2..10, J, Q, K with Spanish names |
//! | [`Suit`] | spades, hearts, diamonds, clubs with display names |
//! | [`Card`] | (rank, suit) pair |
//! | [`Language`] | English / Spanish phrase and file-name rules |
//! | [`deck`] | The 52 cards in generation order |

mod deck;
mod language;

pub use deck::{deck, Card, Rank, Suit};
pub use language::Language;
