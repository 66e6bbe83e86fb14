//! Socket.io chat simulator.
//!
//! Every conversation plays the scripted exchange from
//! [`gobuddy_core::chat`]: the visitor's opener appears first, the
//! partner "types" for a moment, then answers. At most one reply task is
//! pending per socket; a newer message or a disconnect aborts it.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use socketioxide::{
    SocketIo,
    extract::{Data, SocketRef, State},
};
use tokio::sync::Mutex;
use tokio::task::AbortHandle;

use gobuddy_core::chat::{self, ChatScript, ScriptedReply};

/// One scripted conversation, keyed by socket id.
struct ChatSession {
    script: ChatScript,
    partner: String,
    pending: Option<AbortHandle>,
}

/// Shared state for the chat namespace.
#[derive(Clone, Default)]
pub struct ChatState {
    sessions: Arc<Mutex<HashMap<String, ChatSession>>>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    sender: &'a str,
    text: &'a str,
}

/// Configure the chat namespace.
pub fn configure_socket_handlers(io: SocketIo) {
    io.ns("/chat", |socket: SocketRef| async move {
        tracing::info!(socket_id = %socket.id, "Chat client connected");

        // Open a thread with a partner. The client renders the visitor's
        // opener locally; echoing it keeps both ends on the same script.
        socket.on(
            "start",
            |socket: SocketRef, Data::<String>(partner), State(state): State<ChatState>| async move {
                tracing::info!(socket_id = %socket.id, partner = %partner, "Conversation started");

                let sid = socket.id.to_string();
                {
                    let mut sessions = state.sessions.lock().await;
                    let previous = sessions.insert(
                        sid,
                        ChatSession {
                            script: ChatScript::new(),
                            partner,
                            pending: None,
                        },
                    );
                    if let Some(pending) = previous.and_then(|p| p.pending) {
                        pending.abort();
                    }
                }

                socket
                    .emit(
                        "message",
                        &WireMessage {
                            sender: "me",
                            text: chat::OPENER,
                        },
                    )
                    .ok();

                schedule_reply(&socket, &state, |script| script.open()).await;
            },
        );

        // Visitor message: supersede any owed reply with the next one.
        socket.on(
            "message",
            |socket: SocketRef, Data::<String>(text), State(state): State<ChatState>| async move {
                tracing::debug!(socket_id = %socket.id, "Visitor message received");
                schedule_reply(&socket, &state, move |script| script.reply_to(&text)).await;
            },
        );

        socket.on_disconnect(
            |socket: SocketRef, State(state): State<ChatState>| async move {
                let mut sessions = state.sessions.lock().await;
                if let Some(session) = sessions.remove(&socket.id.to_string()) {
                    if let Some(pending) = session.pending {
                        pending.abort();
                    }
                    tracing::info!(
                        socket_id = %socket.id,
                        partner = %session.partner,
                        "Chat client disconnected"
                    );
                }
            },
        );
    });
}

/// Advance the script and spawn the delayed delivery: typing on, wait out
/// the scripted delay, typing off, message. The task's abort handle is
/// stored on the session so the next message or a disconnect can cancel
/// it before the reply lands.
async fn schedule_reply(
    socket: &SocketRef,
    state: &ChatState,
    advance: impl FnOnce(&mut ChatScript) -> ScriptedReply,
) {
    let sid = socket.id.to_string();
    let mut sessions = state.sessions.lock().await;
    let Some(session) = sessions.get_mut(&sid) else {
        tracing::debug!(socket_id = %sid, "Message outside a conversation, ignoring");
        return;
    };

    if let Some(pending) = session.pending.take() {
        pending.abort();
    }

    let reply = advance(&mut session.script);

    let task = tokio::spawn({
        let socket = socket.clone();
        let sessions = Arc::clone(&state.sessions);
        let sid = sid.clone();
        async move {
            socket.emit("typing", &true).ok();
            tokio::time::sleep(reply.delay).await;
            socket.emit("typing", &false).ok();
            socket
                .emit(
                    "message",
                    &WireMessage {
                        sender: "them",
                        text: &reply.text,
                    },
                )
                .ok();

            let mut sessions = sessions.lock().await;
            if let Some(session) = sessions.get_mut(&sid) {
                session.script.delivered();
                session.pending = None;
            }
        }
    });
    session.pending = Some(task.abort_handle());
}

/// Bind the chat simulator on its own listener. The socket.io handshake
/// lives at the default `/socket.io` path.
pub async fn serve(host: &str, port: u16) -> std::io::Result<()> {
    let (layer, io) = SocketIo::builder()
        .with_state(ChatState::default())
        .build_layer();
    configure_socket_handlers(io);

    let app = axum::Router::new().layer(tower::ServiceBuilder::new().layer(layer));

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!(%host, %port, "Chat simulator listening");
    axum::serve(listener, app).await
}
