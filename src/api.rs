use std::fmt::Display;
use std::sync::Arc;

use anyhow::Context as _;
use axum::extract::ws::{self, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{any, get, post};
use axum::{Json, Router};
use futures_util::StreamExt as _;
use hallbot_model::PresetId;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use crate::hallbot::config::Config;
use crate::hallbot::message_bus::{Message, MessageBus, UiCommand};
use crate::utils::ResultExt as _;

struct AppState {
    message_bus: MessageBus,
}

type AppStateArg = State<Arc<AppState>>;

#[derive(Serialize)]
struct EmptyResponse;

impl IntoResponse for EmptyResponse {
    fn into_response(self) -> Response {
        serde_json::to_string(&EmptyResponse)
            .unwrap()
            .into_response()
    }
}

async fn initialize_ui(State(state): AppStateArg) -> impl IntoResponse {
    debug!("initialize_ui");
    state
        .message_bus
        .send(Message::UiCommand(UiCommand::InitializeUi));
    EmptyResponse
}

#[derive(Debug, Deserialize)]
struct SendMessageBody {
    text: String,
}
async fn send_message(
    State(state): AppStateArg,
    Json(body): Json<SendMessageBody>,
) -> impl IntoResponse {
    debug!("send_message({:?})", body);
    state
        .message_bus
        .send(Message::UiCommand(UiCommand::SendMessage(body.text)));
    EmptyResponse
}

#[derive(Debug, Deserialize)]
struct UsePresetBody {
    id: PresetId,
}
async fn use_preset(
    State(state): AppStateArg,
    Json(body): Json<UsePresetBody>,
) -> impl IntoResponse {
    debug!("use_preset({:?})", body);
    state
        .message_bus
        .send(Message::UiCommand(UiCommand::UsePreset(body.id)));
    EmptyResponse
}

async fn clear_chat(State(state): AppStateArg) -> impl IntoResponse {
    debug!("clear_chat()");
    state
        .message_bus
        .send(Message::UiCommand(UiCommand::ClearChat));
    EmptyResponse
}

async fn attach_file(State(state): AppStateArg) -> impl IntoResponse {
    debug!("attach_file()");
    state
        .message_bus
        .send(Message::UiCommand(UiCommand::AttachFile));
    EmptyResponse
}

async fn create_ui_event_stream(ws: WebSocketUpgrade, State(state): AppStateArg) -> Response {
    ws.on_upgrade(move |socket| ui_event_stream(socket, state.message_bus.clone()))
}

fn wrap_result<T: Serialize, E: Display>(
    r: std::result::Result<T, E>,
) -> std::result::Result<ws::Message, axum::Error> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    enum WrappedResult<T> {
        Success(T),
        Error(String),
    }
    let wrapped_result = match r {
        Ok(data) => WrappedResult::Success(data),
        Err(e) => WrappedResult::Error(e.to_string()),
    };
    let json_text = serde_json::to_string_pretty(&wrapped_result)
        .unwrap_or_else(|e| format!("{{ \"error\": \"JSON serialization failed: {e}\" }}"));
    Ok(ws::Message::text(json_text))
}

async fn ui_event_stream(socket: WebSocket, message_bus: MessageBus) {
    info!("New UI event stream started.");
    let stream = message_bus.subscribe().ui_update_stream().map(wrap_result);
    match stream.forward(socket).await {
        Ok(()) => {
            info!("UI event stream closed.");
        }
        Err(e) => {
            info!("UI event stream closed with: {e}.");
        }
    }
}

async fn redirect_to_ui() -> impl IntoResponse {
    Redirect::permanent("/ui")
}

pub async fn serve(config: Config, message_bus: MessageBus) {
    let shared_state = Arc::new(AppState { message_bus });
    let app = Router::new()
        .route("/", get(redirect_to_ui))
        .nest(
            "/ui/api/v1",
            Router::new()
                .route("/ui_stream", any(create_ui_event_stream))
                .route("/initialize_ui", post(initialize_ui))
                .route("/send_message", post(send_message))
                .route("/use_preset", post(use_preset))
                .route("/clear_chat", post(clear_chat))
                .route("/attach_file", post(attach_file))
                .with_state(shared_state),
        )
        .fallback_service(ServeDir::new(&config.static_serving_dir));
    let listener = tokio::net::TcpListener::bind(&config.serving_addr)
        .await
        .unwrap();
    axum::serve(listener, app)
        .await
        .context("Api server failed")
        .print_err();
}
