use anyhow::Result;
use futures_util::{Stream, StreamExt};
use hallbot_model::PresetId;
use log::error;
use serde::Serialize;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::broadcast::{Receiver, Sender};
use tokio_stream::wrappers::BroadcastStream;

use super::ui_state::UiState;

#[derive(Clone)]
pub(crate) struct MessageBus(Sender<Message>);

impl MessageBus {
    pub fn new() -> Self {
        let (sender, _) = tokio::sync::broadcast::channel(100);
        Self(sender)
    }

    pub fn send(&self, message: Message) {
        if let Err(message) = self.0.send(message) {
            error!("Message not sent {:?}", message);
        }
    }

    pub fn subscribe(&self) -> MessageBusSubscription {
        MessageBusSubscription(self.0.subscribe())
    }
}

pub(crate) struct MessageBusSubscription(Receiver<Message>);

impl MessageBusSubscription {
    pub async fn recv(&mut self) -> Option<Message> {
        Self::translate_recv(self.0.recv().await)
    }

    pub fn stream(self) -> impl Stream<Item = Result<Message>> {
        BroadcastStream::new(self.0).map(|r| r.map_err(anyhow::Error::from))
    }

    pub fn ui_update_stream(self) -> impl Stream<Item = Result<UiUpdate>> {
        self.stream().filter_map(|r| async move {
            match r {
                Ok(Message::UiUpdate(ui_update)) => Some(Ok(ui_update)),
                Err(e) => Some(Err(e)),
                _ => None,
            }
        })
    }

    fn translate_recv(r: Result<Message, RecvError>) -> Option<Message> {
        match r {
            Ok(message) => Some(message),
            Err(RecvError::Lagged(_)) => {
                panic!("MessageBus receiver lagged!");
            }
            Err(RecvError::Closed) => None,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Message {
    UiUpdate(UiUpdate),
    UiCommand(UiCommand),
    Event(Event),
}

impl From<UiState> for Message {
    fn from(value: UiState) -> Self {
        Message::UiUpdate(UiUpdate::State(value))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UiUpdate {
    State(UiState),
    Notice(Notice),
}

/// Transient banner shown by the frontend and dropped after `ttl_ms`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    pub ttl_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NoticeLevel {
    Info,
    Success,
    #[allow(dead_code)]
    Error,
}

/// Fired by the reply timer once the simulated typing delay elapses. Carries
/// the original prompt so the responder sees raw text.
#[derive(Debug, Clone)]
pub enum Event {
    ReplyDue { prompt: String },
}

#[derive(Clone, Debug)]
pub enum UiCommand {
    InitializeUi,
    SendMessage(String),
    UsePreset(PresetId),
    ClearChat,
    AttachFile,
    CloseApplication,
}
