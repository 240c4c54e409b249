//! Decision Module - Request, prompt and reply types for decision analysis.
//!
//! # Components
//!
//! - `DecisionRequest` / `UserContext` - Inbound request and psychographic context
//! - `render_prompt` / `SYSTEM_INSTRUCTIONS` - Prompt templating for the upstream model
//! - `DecisionResponse` - Structured advice parsed from the model reply
//!
//! Everything here is pure: no ports, no I/O. The application layer drives the
//! upstream call and stitches these pieces together.

mod errors;
mod prompt;
mod request;
mod response;

pub use errors::{DecisionValidationError, ReplyParseError};
pub use prompt::{render_prompt, SYSTEM_INSTRUCTIONS, UNSPECIFIED};
pub use request::{DecisionRequest, UserContext, MIN_OPTIONS};
pub use response::DecisionResponse;
