//! Coach Module - Conversational onboarding turns.
//!
//! One user message plus the partial profile gathered so far goes in; a warm
//! reply and a conservative profile patch come back. The service keeps no
//! conversation state: the caller merges the patch and sends the profile again
//! on the next turn.

mod prompt;
mod reply;
mod request;

pub use prompt::{render_coach_prompt, COACH_INSTRUCTIONS};
pub use reply::CoachReply;
pub use request::CoachRequest;
