//! TwiML rendering for the ConversationRelay call-control document
//!
//! The rendered document tells Twilio to bridge the in-progress call into
//! ConversationRelay with ElevenLabs as the TTS provider. Rendering is a pure
//! function of its inputs, so identical inputs produce byte-identical output.
//!
//! Attribute values are XML-escaped before interpolation. The service this
//! replaces spliced caller-controlled text into the attributes verbatim,
//! which let a crafted `prompt` or `greeting` break out of the attribute and
//! inject markup; escaping closes that gap.

/// Default conversation opener used when no `prompt` query parameter is given
pub const DEFAULT_PROMPT: &str = "مرحبا مؤمل، شلونك؟";

/// Default welcome greeting used when no `greeting` query parameter is given
pub const DEFAULT_GREETING: &str = "اهلا وسهلا بيك مؤمل!";

/// Escape the characters that are reserved inside an XML attribute value
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render the `<Connect><ConversationRelay .../></Connect>` document.
///
/// `voice_config` is the composite voice string from
/// [`crate::config::ServerConfig::voice_config`]; `prompt` and `greeting`
/// are the already-resolved text values (defaults applied by the handler).
pub fn render_connect_relay(voice_config: &str, prompt: &str, greeting: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Response>
  <Connect>
    <ConversationRelay
      ttsProvider="ElevenLabs"
      voice="{voice}"
      elevenlabsTextNormalization="on"
      welcomeGreeting="{greeting}"
      conversationStartText="{prompt}"
    />
  </Connect>
</Response>"#,
        voice = escape_attr(voice_config),
        greeting = escape_attr(greeting),
        prompt = escape_attr(prompt),
    )
}
