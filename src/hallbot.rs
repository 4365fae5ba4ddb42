use std::time::Duration;

use hallbot_model::transcript::{Transcript, Turn};
use hallbot_model::PresetId;
use log::{debug, info, warn};
use rand::Rng as _;
use respondo::Responder;

use crate::hallbot::config::Config;
use crate::hallbot::message_bus::{
    Event, Message, MessageBus, Notice, NoticeLevel, UiCommand, UiUpdate,
};
use crate::hallbot::ui_state::UiState;

pub(crate) mod config;
mod markup;
pub(crate) mod message_bus;
pub(crate) mod store;
pub(crate) mod ui_state;

pub struct HallBot {
    transcript: Transcript,
    reply_pending: bool,
    responder: Responder,
    config: Config,
    message_bus: MessageBus,
}

impl HallBot {
    pub fn new(config: Config, responder: Responder, message_bus: MessageBus) -> Self {
        let transcript = Transcript::with_welcome(config.welcome_message.clone());
        HallBot {
            transcript,
            reply_pending: false,
            responder,
            config,
            message_bus,
        }
    }

    pub async fn run(mut self) {
        info!("HallBot worker started.");
        let mut subscription = self.message_bus.subscribe();
        loop {
            match subscription.recv().await {
                Some(Message::UiCommand(UiCommand::CloseApplication)) | None => break,
                Some(Message::UiCommand(command)) => {
                    self.dispatch_ui_command(command);
                    self.message_bus.send(self.ui_state().into());
                }
                Some(Message::Event(Event::ReplyDue { prompt })) => {
                    self.reply_due(&prompt);
                    self.message_bus.send(self.ui_state().into());
                }
                Some(Message::UiUpdate(_)) => {}
            }
        }
        info!("HallBot worker stopped.");
    }

    pub fn dispatch_ui_command(&mut self, ui_command: UiCommand) {
        match ui_command {
            UiCommand::InitializeUi => {}
            UiCommand::SendMessage(text) => self.send_message(&text),
            UiCommand::UsePreset(preset_id) => self.use_preset(&preset_id),
            UiCommand::ClearChat => self.clear_chat(),
            UiCommand::AttachFile => self.attach_file(),
            UiCommand::CloseApplication => {}
        }
    }

    pub fn ui_state(&self) -> UiState {
        UiState::new(&self.config, self.transcript.turns(), self.reply_pending)
    }

    fn send_message(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring blank submission");
            return;
        }
        if self.reply_pending {
            debug!("Reply already pending, ignoring submission");
            return;
        }
        self.transcript.push(Turn::user(text));
        self.reply_pending = true;
        self.schedule_reply(String::from(text));
    }

    // The timer is never cancelled: a reply scheduled before ClearChat still
    // lands in the cleared transcript.
    fn schedule_reply(&self, prompt: String) {
        let min = self.config.reply_delay_min_ms;
        let max = self.config.reply_delay_max_ms.max(min);
        let delay = Duration::from_millis(rand::thread_rng().gen_range(min..=max));
        debug!("Reply scheduled in {delay:?}");
        let message_bus = self.message_bus.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            message_bus.send(Message::Event(Event::ReplyDue { prompt }));
        });
    }

    fn reply_due(&mut self, prompt: &str) {
        self.reply_pending = false;
        let reply = self.responder.respond(prompt);
        self.transcript.push(Turn::assistant(reply));
    }

    fn use_preset(&mut self, preset_id: &PresetId) {
        let Some(preset) = self.config.preset(preset_id).cloned() else {
            warn!("Unknown preset `{preset_id}`");
            return;
        };
        self.send_message(&preset.message);
    }

    fn clear_chat(&mut self) {
        self.transcript.clear();
        self.notify(NoticeLevel::Success, "Chat cleared successfully!");
    }

    fn attach_file(&self) {
        self.notify(NoticeLevel::Info, "File attachment feature coming soon!");
    }

    fn notify(&self, level: NoticeLevel, text: &str) {
        self.message_bus.send(Message::UiUpdate(UiUpdate::Notice(Notice {
            level,
            text: String::from(text),
            ttl_ms: self.config.notice_ttl_ms,
        })));
    }
}
