//! In-process completion backend for session tests

#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use tense_drill::services::{CompletionBackend, CompletionError};
use tokio::sync::oneshot;

/// What the scripted backend answers to one call
pub enum Reply {
    Text(Option<String>),
    Fail,
    /// Hold the call until the test sends the text
    Wait(oneshot::Receiver<Option<String>>),
}

impl Reply {
    pub fn text(text: &str) -> Self {
        Reply::Text(Some(text.to_string()))
    }
}

/// Answers calls from a queue of replies and records every prompt
#[derive(Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Reply>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedBackend {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, prompt: &str) -> Result<Option<String>, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected completion call");

        match reply {
            Reply::Text(text) => Ok(text),
            Reply::Fail => Err(CompletionError::Status(500)),
            Reply::Wait(rx) => Ok(rx.await.unwrap_or(None)),
        }
    }
}
