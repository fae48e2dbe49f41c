//! Headless engines behind the folio frontend: cursor tracking, scroll
//! progress mapping, section reveal latches, translations, preferences and
//! the simulated contact submission.
//!
//! Nothing in this crate touches a browser API; the `folio-web` crate wires
//! these types to DOM events on wasm32.

pub mod constants;
pub mod contact;
pub mod cursor;
pub mod i18n;
pub mod particles;
pub mod prefs;
pub mod reveal;
pub mod scroll;
pub mod spring;
pub mod translations;

pub use constants::*;
pub use contact::*;
pub use cursor::*;
pub use i18n::*;
pub use particles::*;
pub use prefs::*;
pub use reveal::*;
pub use scroll::*;
pub use spring::*;
