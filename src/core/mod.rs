//! Core integration logic: the Twilio REST client and TwiML rendering

pub mod twilio;
pub mod twiml;
