// Page effects: typing reveal, scroll reveal, accordion, cursor glow.
// Timer/observer effects run as tokio tasks and publish through an epoch-guarded cell,
// so cancelling a handle stops all further updates.

pub mod accordion;
pub mod cell;
pub mod pointer;
pub mod reveal;
pub mod typing;

pub use accordion::Accordion;
pub use pointer::{GlowOpacity, PointerTracker};
pub use reveal::{normalize_threshold, IntersectionEntry, RevealState, ScrollReveal};
pub use typing::{TypingParams, TypingReveal, TypingState};
