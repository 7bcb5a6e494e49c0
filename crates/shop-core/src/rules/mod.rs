//! Synchronous validation rules.
//!
//! # Why split local and remote checks? (for beginners)
//!
//! Some rules can be decided by looking at the text alone: is it empty, does
//! it contain an emoji, is it long enough.  Others need a round trip to a
//! server ("is this shop name already taken?").  The local rules live here
//! and run on every keystroke; the remote ones are expressed as a trait in
//! the application layer and only run once every local rule has passed.

/// Unicode emoji detection.
pub mod emoji;

/// Shop-name rules and the domain-name suggestion.
pub mod shop_name;
