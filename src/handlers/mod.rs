//! HTTP request handlers
//!
//! - `api` - Health check endpoint
//! - `calls` - Outbound call initiation via the Twilio REST API
//! - `twiml` - ConversationRelay TwiML call-control document

pub mod api;
pub mod calls;
pub mod twiml;
