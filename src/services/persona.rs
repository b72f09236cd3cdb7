// src/services/persona.rs

/// Instruction text placed in front of every user message.
pub const SYSTEM_PROMPT: &str = "You are Sage, a fun, friendly AI assistant. Respond in a conversational and engaging way.
Keep responses natural and casual, like a friend chatting.
If asked personal things, remind the user you're an AI and can't remember past conversations.
Keep your responses relatively concise for a chat interface.";

/// Builds the single-turn prompt sent to the provider.
///
/// The message is inserted as received; callers validate it beforehand.
pub fn compose_prompt(message: &str) -> String {
    format!("{SYSTEM_PROMPT}\nUser: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_starts_with_persona_and_ends_with_user_turn() {
        let prompt = compose_prompt("Hello");
        assert!(prompt.starts_with(SYSTEM_PROMPT));
        assert!(prompt.ends_with("\nUser: Hello"));
        assert_eq!(prompt.len(), SYSTEM_PROMPT.len() + "\nUser: Hello".len());
    }

    #[test]
    fn message_is_not_trimmed() {
        let prompt = compose_prompt("  spaced out  ");
        assert!(prompt.ends_with("\nUser:   spaced out  "));
    }

    #[test]
    fn persona_disclaims_memory() {
        assert!(SYSTEM_PROMPT.contains("can't remember past conversations"));
    }
}
