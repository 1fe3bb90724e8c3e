#[cfg(test)]
mod tests {
    use crate::message::*;
    use crate::event::*;
    use crate::persona::*;
    use crate::config::*;
    use crate::request::*;
    use crate::session::*;
    use crate::error::*;
    use std::collections::HashMap;

    // ─── Turn Tests ──────────────────────────────────────────

    #[test]
    fn test_turn_user() {
        let turn = Turn::user("Hello");
        assert_eq!(turn.role, Role::User);
        assert_eq!(turn.content, "Hello");
    }

    #[test]
    fn test_turn_assistant() {
        let turn = Turn::assistant("I can help");
        assert_eq!(turn.role, Role::Assistant);
        assert_eq!(turn.content, "I can help");
    }

    #[test]
    fn test_turn_wire_shape() {
        let json = serde_json::to_string(&Turn::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);

        let json = serde_json::to_string(&Turn::assistant("yo")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"yo"}"#);
    }

    #[test]
    fn test_role_rejects_system() {
        let result = serde_json::from_str::<Role>(r#""system""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::User.label(), "User");
        assert_eq!(Role::Assistant.label(), "Assistant");
    }

    // ─── Persona Tests ───────────────────────────────────────

    #[test]
    fn test_six_personas_in_order() {
        let names: Vec<&str> = PersonaId::all().map(|id| id.persona().name).collect();
        assert_eq!(
            names,
            vec![
                "Default Persona",
                "Hashtag Generator",
                "Tech Guru",
                "Friendly Companion",
                "Professional Advisor",
                "Creative Thinker",
            ]
        );
    }

    #[test]
    fn test_default_persona_id() {
        assert_eq!(PersonaId::default().persona().name, "Default Persona");
    }

    #[test]
    fn test_persona_lookup() {
        let id = PersonaId::from_name("Tech Guru").unwrap();
        assert!(id.persona().system_prompt.starts_with("You are an expert in technology"));
        assert!(PersonaId::from_name("tech guru").is_none());
        assert!(PersonaId::from_name("Pirate").is_none());
    }

    #[test]
    fn test_persona_compact_name() {
        let id = PersonaId::from_name("Professional Advisor").unwrap();
        assert_eq!(id.persona().compact_name(), "ProfessionalAdvisor");
    }

    #[test]
    fn test_multiline_prompts_are_exact() {
        let default = PersonaId::default().persona();
        assert_eq!(
            default.system_prompt,
            "You are a helpful assistant. \nOutput Format-\n- Return all extracted facts as a JSON object with a single key \"output\", containing a list of strings.\n{\n'output': <string goes here>\n}    \n"
        );

        let hashtag = PersonaId::from_name("Hashtag Generator").unwrap().persona();
        assert_eq!(
            hashtag.system_prompt,
            "You are a hashtag generator AI agent. Your job is to generate hashtags based on give user \ntext / situation / example etc.\n\nOutput Format-\n- Return the generated hashtags as a comma separated list of strings.\n- Do not generate anything else.\n\nOutput Examples-\n- Example 1:\n#Technology, #ArtificialIntelligence, #Economics\n- Example 2:\n#Startup, #Marketing, #Design\n- Example 3:\n#Business, #Marketing, #Finance\n\n"
        );
        assert_eq!(
            hashtag.system_message(),
            format!("{} Generate replies in 100 to 300 words max.", hashtag.system_prompt)
        );
    }

    #[test]
    fn test_system_message_has_length_instruction() {
        let persona = PersonaId::from_name("Creative Thinker").unwrap().persona();
        let msg = persona.system_message();
        assert!(msg.starts_with(persona.system_prompt));
        assert!(msg.ends_with(" Generate replies in 100 to 300 words max."));
    }

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_session_id_compose() {
        let persona = PersonaId::from_name("Tech Guru").unwrap().persona();
        let id = SessionId::compose("alice", persona);
        assert_eq!(id.as_str(), "aliceTechGuru");
        assert_eq!(id.to_string(), "aliceTechGuru");
    }

    #[test]
    fn test_session_id_keeps_username_as_typed() {
        let id = SessionId::compose(" ", PersonaId::default().persona());
        assert_eq!(id.as_str(), " DefaultPersona");
    }

    #[test]
    fn test_session_id_all_personas() {
        for pid in PersonaId::all() {
            let persona = pid.persona();
            let id = SessionId::compose("bob", persona);
            assert_eq!(id.as_str(), format!("bob{}", persona.name.replace(' ', "")));
            assert!(!id.as_str().contains(' '));
        }
    }

    #[test]
    fn test_message_token_shape() {
        for _ in 0..50 {
            let token = MessageToken::generate();
            assert!(token.is_well_formed(), "bad token {}", token);
        }
    }

    #[test]
    fn test_message_token_from_entropy() {
        let token = MessageToken::from_entropy(&[0, 25, 26, 35, 36, 99]).unwrap();
        assert_eq!(token.as_str(), "AZ09A");
    }

    #[test]
    fn test_message_token_skips_biased_bytes() {
        let token = MessageToken::from_entropy(&[252, 0, 255, 1, 253, 2, 3, 254, 4]).unwrap();
        assert_eq!(token.as_str(), "ABCDE");
        assert!(MessageToken::from_entropy(&[1, 2, 252, 253, 254, 255]).is_none());
    }

    #[test]
    fn test_message_token_alphabet_is_uniform() {
        let mut counts: HashMap<char, usize> = HashMap::new();
        for b in 0..=255u8 {
            match MessageToken::from_entropy(&[b; TOKEN_LEN]) {
                Some(token) => {
                    let c = token.as_str().chars().next().unwrap();
                    *counts.entry(c).or_default() += 1;
                }
                None => assert!(b >= 252, "byte {} rejected", b),
            }
        }
        assert_eq!(counts.len(), 36);
        assert!(counts.values().all(|n| *n == 7), "{:?}", counts);
    }

    #[test]
    fn test_session_info_new() {
        let info = SessionInfo::new();
        assert!(info.message_token.is_well_formed());
        assert!(!info.started_at.is_empty());
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = ChatConfig::default();
        assert_eq!(config.llm.provider, "groq");
        assert_eq!(config.llm.base_url, "https://api.groq.com/openai/v1");
        assert_eq!(config.embedding.provider, "ollama");
        assert_eq!(config.embedding.model, "nomic-embed-text");
        assert!(config.embedding.api_key.is_none());
        assert_eq!(config.chroma, ChromaSettings::default());
        assert!(config.memory_settings.try_queries);
        assert_eq!(config.memory_settings.results_per_query, 1);
        assert!(config.memory);
        assert!(!config.summarize_memory);
        assert_eq!(config.collection_name, "conversation");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_lookup() {
        let env: HashMap<&str, &str> = [
            (ENV_LLM_API_KEY, "gsk-123"),
            (ENV_MODEL_NAME, "llama-3.1-8b-instant"),
        ]
        .into_iter()
        .collect();
        let config = ChatConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.llm.api_key.as_deref(), Some("gsk-123"));
        assert_eq!(config.llm.model.as_deref(), Some("llama-3.1-8b-instant"));
        assert!(config.chat_service_url.is_none());
        assert!(config.missing_env().is_empty());
    }

    #[test]
    fn test_config_missing_env_is_not_invalid() {
        let config = ChatConfig::from_lookup(|_| None);
        assert_eq!(config.missing_env(), vec![ENV_LLM_API_KEY, ENV_MODEL_NAME]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_blank_env_counts_as_missing() {
        let config = ChatConfig::from_lookup(|_| Some("   ".to_string()));
        assert!(config.llm.api_key.is_none());
        assert!(config.chat_service_url.is_none());
    }

    #[test]
    fn test_config_rejects_zero_results() {
        let mut config = ChatConfig::default();
        config.memory_settings.results_per_query = 0;
        assert!(matches!(config.validate(), Err(ChatError::Config(_))));
    }

    #[test]
    fn test_config_rejects_half_chroma() {
        let mut config = ChatConfig::default();
        config.chroma.host = Some("localhost".to_string());
        assert!(config.validate().is_err());
        config.chroma.port = Some(8000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_bad_urls() {
        let mut config = ChatConfig::default();
        config.llm.base_url = "api.groq.com".to_string();
        assert!(config.validate().is_err());

        let mut config = ChatConfig::default();
        config.chat_service_url = Some("ftp://example".to_string());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains(ENV_CHAT_SERVICE_URL));
    }

    // ─── Request Tests ───────────────────────────────────────

    fn sample_request() -> CollaboratorRequest {
        let config = ChatConfig::default();
        let persona = PersonaId::from_name("Tech Guru").unwrap().persona();
        let session_id = SessionId::compose("alice", persona);
        let token = MessageToken::from_entropy(b"ABCDE").unwrap();
        CollaboratorRequest::new(
            &config,
            "What is a CPU cache?",
            persona.system_message(),
            &session_id,
            &token,
            &[Turn::user("hi"), Turn::assistant("hello")],
        )
    }

    #[test]
    fn test_request_carries_named_parameters() {
        let json = serde_json::to_value(sample_request()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        for key in [
            "query",
            "system_message",
            "llm_provider_settings",
            "chroma_settings",
            "embedding_model_settings",
            "memory_settings",
            "memory",
            "summarize_memory",
            "collection_name",
            "unique_session_id",
            "unique_message_id",
            "buffer_window_chats",
        ] {
            assert!(keys.contains(&key), "missing {}", key);
        }
        assert_eq!(keys.len(), 12);
    }

    #[test]
    fn test_request_values() {
        let req = sample_request();
        assert_eq!(req.query, "What is a CPU cache?");
        assert_eq!(req.unique_session_id, "aliceTechGuru");
        assert_eq!(req.unique_message_id.len(), TOKEN_LEN);
        assert!(req.memory);
        assert!(!req.summarize_memory);
        assert_eq!(req.buffer_window_chats.len(), 2);

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["chroma_settings"]["host"], serde_json::Value::Null);
        assert_eq!(json["memory_settings"]["results_per_query"], 1);
        assert_eq!(json["buffer_window_chats"][1]["role"], "assistant");
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_chat_event_serialization() {
        let event = ChatEvent::SendFailed { message: "401".to_string() };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("SendFailed"));
        let back: ChatEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = ChatError::Collaborator("HTTP 401".to_string());
        assert_eq!(err.to_string(), "Collaborator error: HTTP 401");

        let err = ChatError::UnknownPersona("Pirate".to_string());
        assert_eq!(err.to_string(), "Unknown persona: Pirate");

        let err = ChatError::Config("bad".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad");
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{invalid}}").unwrap_err();
        let err: ChatError = serde_err.into();
        assert!(matches!(err, ChatError::Serialization(_)));
    }
}
