//! Conversation payloads and prompt assembly.
//!
//! The surrounding service hands the core an already-validated conversation
//! payload. This module mirrors that payload shape and turns it into the
//! transcript and prompt text a summarization model consumes. The prompt
//! asks for prose followed by a JSON reminder array, the exact shape
//! [`extract::split`](crate::extract::split) expects back.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A participant in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub participant_id: String,
    pub full_name: String,
    pub role: String,
}

/// A single message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub timestamp: String,
    pub sender_id: String,
    pub message: String,
}

/// One conversation as delivered by the request layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub metadata: HashMap<String, Value>,
    pub participants: Vec<Participant>,
    pub chat_history: Vec<Message>,
    pub processing_results: HashMap<String, Value>,
}

impl Conversation {
    /// Render the chat history as one speaker-labelled line per message.
    ///
    /// Sender ids resolve to participant names; a sender missing from the
    /// participant list keeps its raw id rather than dropping the line.
    pub fn format_transcript(&self) -> String {
        let names: HashMap<&str, &str> = self
            .participants
            .iter()
            .map(|p| (p.participant_id.as_str(), p.full_name.as_str()))
            .collect();

        let mut transcript = String::new();
        for message in &self.chat_history {
            let speaker = names
                .get(message.sender_id.as_str())
                .copied()
                .unwrap_or(message.sender_id.as_str());
            transcript.push_str(&format!("{}: {}\n", speaker, message.message));
        }

        transcript
    }

    /// Build the full summarization prompt for this conversation.
    pub fn summary_prompt(&self) -> String {
        format!(
            "You are a meeting assistant. Read the transcript below and reply with:\n\
             1. A short prose summary of the discussion.\n\
             2. A JSON array of reminders agreed on in the conversation, shaped like\n\
             [{{\"event\": \"...\", \"date\": \"YYYY-MM-DD\", \"time\": \"HH:MM\"}}].\n\
             Omit \"date\" or \"time\" when the transcript does not give them.\n\
             Reply with [] when no reminders were agreed on.\n\
             \n\
             Transcript:\n{}",
            self.format_transcript()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_conversation() -> Conversation {
        Conversation {
            metadata: HashMap::new(),
            participants: vec![
                Participant {
                    participant_id: "u1".to_string(),
                    full_name: "Ayşe Demir".to_string(),
                    role: "host".to_string(),
                },
                Participant {
                    participant_id: "u2".to_string(),
                    full_name: "Mark Chen".to_string(),
                    role: "guest".to_string(),
                },
            ],
            chat_history: vec![
                Message {
                    message_id: 1,
                    timestamp: "2025-04-01T09:00:00Z".to_string(),
                    sender_id: "u1".to_string(),
                    message: "Shall we move the review to Thursday?".to_string(),
                },
                Message {
                    message_id: 2,
                    timestamp: "2025-04-01T09:00:41Z".to_string(),
                    sender_id: "u2".to_string(),
                    message: "Thursday at 14:00 works.".to_string(),
                },
            ],
            processing_results: HashMap::new(),
        }
    }

    #[test]
    fn test_transcript_resolves_speaker_names_in_order() {
        let transcript = sample_conversation().format_transcript();

        assert_eq!(
            transcript,
            "Ayşe Demir: Shall we move the review to Thursday?\n\
             Mark Chen: Thursday at 14:00 works.\n"
        );
    }

    #[test]
    fn test_transcript_keeps_unknown_sender_id() {
        let mut conversation = sample_conversation();
        conversation.chat_history.push(Message {
            message_id: 3,
            timestamp: "2025-04-01T09:01:00Z".to_string(),
            sender_id: "u9".to_string(),
            message: "Joining late.".to_string(),
        });

        let transcript = conversation.format_transcript();
        assert!(transcript.ends_with("u9: Joining late.\n"));
    }

    #[test]
    fn test_transcript_of_empty_history_is_empty() {
        let mut conversation = sample_conversation();
        conversation.chat_history.clear();

        assert_eq!(conversation.format_transcript(), "");
    }

    #[test]
    fn test_prompt_embeds_transcript_and_reminder_shape() {
        let prompt = sample_conversation().summary_prompt();

        assert!(prompt.contains("Mark Chen: Thursday at 14:00 works."));
        assert!(prompt.contains(r#"[{"event": "...", "date": "YYYY-MM-DD", "time": "HH:MM"}]"#));
        assert!(prompt.contains("Reply with []"));
    }

    #[test]
    fn test_payload_deserializes_from_request_json() {
        let payload = r#"{
            "metadata": {"channel": "weekly-sync", "duration_seconds": 1800},
            "participants": [
                {"participant_id": "u1", "full_name": "Ayşe Demir", "role": "host"}
            ],
            "chat_history": [
                {"message_id": 1, "timestamp": "2025-04-01T09:00:00Z",
                 "sender_id": "u1", "message": "Hello all"}
            ],
            "processing_results": {}
        }"#;

        let conversation: Conversation = serde_json::from_str(payload).unwrap();

        assert_eq!(conversation.metadata["channel"], "weekly-sync");
        assert_eq!(conversation.participants[0].full_name, "Ayşe Demir");
        assert_eq!(conversation.chat_history[0].message_id, 1);
        assert!(conversation.processing_results.is_empty());
    }

    #[test]
    fn test_payload_missing_required_section_errors() {
        let payload = r#"{"metadata": {}, "participants": []}"#;
        let result = serde_json::from_str::<Conversation>(payload);

        assert!(result.is_err());
    }
}
