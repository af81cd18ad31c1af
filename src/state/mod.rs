//! Shared client-side state.
//!
//! DESIGN
//! ======
//! One store: the session. The state struct itself is plain data with pure
//! transitions so it can be tested directly; the reactive wrapper is a
//! single `RwSignal` provided via context at the application root, and
//! every mutation funnels through the `Session` handle.

pub mod session;
