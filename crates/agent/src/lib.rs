//! Storefront agent action group
//!
//! Adapts invocation envelopes from the orchestration caller to the
//! catalog queries in `storefront-core`:
//!
//! 1. **Envelope decoding** (`envelope`) - wire types for the
//!    invocation event and the response wrapper
//! 2. **Dispatch** (`dispatch`) - parameter flattening, path routing,
//!    and the top-level fault boundary
//!
//! Every invocation is stateless and handled exactly once; all three
//! outcome kinds (not-found, unsupported path, processing fault)
//! resolve to a returned envelope, never to a panic or abnormal exit.

pub mod dispatch;
pub mod envelope;

pub use dispatch::{handle_invocation, handle_raw_invocation, DispatchError};
pub use envelope::{AgentResponse, ApiResponse, InvocationEvent, Parameter};
