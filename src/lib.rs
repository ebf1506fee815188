//! pagesift
//!
//! Terminal screen pairing a five-page image carousel with a search field
//! and the filtered entry list of the active page. Typing a query jumps the
//! carousel to the first page that has a match.
//!
//! Pure Core / Impure Shell: `model` and `state` hold data and transitions,
//! `view`, `config` and `logging` talk to the outside world.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
