#![allow(dead_code)]

use async_trait::async_trait;
use meeting_brief::ai::{BriefPayload, Summarizer};
use meeting_brief::core::models::EngineMode;
use meeting_brief::errors::BriefError;
use std::sync::Mutex;

/// Fake engine that records every call and answers with a fixed result.
pub struct RecordingSummarizer {
    reply: Result<String, String>,
    calls: Mutex<Vec<(BriefPayload, EngineMode)>>,
}

impl RecordingSummarizer {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            reply: Err(reason.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(BriefPayload, EngineMode)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for RecordingSummarizer {
    async fn summarize(
        &self,
        payload: &BriefPayload,
        mode: EngineMode,
    ) -> Result<String, BriefError> {
        self.calls.lock().unwrap().push((payload.clone(), mode));
        self.reply
            .clone()
            .map_err(BriefError::EngineUnavailable)
    }
}
