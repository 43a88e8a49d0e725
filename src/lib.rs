//! Emoji Equations
//!
//! A daily quiz: each round shows an equation of emoji with one slot hidden,
//! and the player picks the missing emoji from a handful of options.
//!
//! # Quick Start
//!
//! ```rust
//! use emoji_equations::core::{EquationItem, Round};
//! use emoji_equations::session::{SessionEngine, SubmitResult};
//! use emoji_equations::share::ShareEncoder;
//!
//! let round = Round::new(
//!     1,
//!     vec![
//!         EquationItem::emoji("🐝"),
//!         EquationItem::operator("+"),
//!         EquationItem::emoji("🌸"),
//!         EquationItem::operator("="),
//!         EquationItem::emoji("🍯"),
//!     ],
//!     4,
//!     vec!["🍯".to_string(), "🍭".to_string()],
//!     "Bees make honey.",
//! )
//! .unwrap();
//!
//! let mut engine = SessionEngine::new(ShareEncoder::new("2025-03-10"));
//! engine.start(vec![round]).unwrap();
//!
//! assert!(matches!(engine.submit("🍭"), SubmitResult::Incorrect { .. }));
//! assert!(matches!(engine.submit("🍯"), SubmitResult::Resolved(_)));
//! engine.advance();
//!
//! assert_eq!(
//!     engine.share_string().unwrap(),
//!     "Emoji Equations 2025-03-10 1/1\n🟥🟩⬜\nhttps://emojiequations.app"
//! );
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Runtime configuration
pub mod config;

// Session state machine
pub mod session;

// Share string encoding
pub mod share;

// Puzzle data and repositories
pub mod puzzles;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
