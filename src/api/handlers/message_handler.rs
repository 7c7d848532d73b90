//! Message Ingestion Handlers
//!
//! Entry point for the platform gateway: every delivered message lands
//! here, is routed through the command dispatcher, and non-command text is
//! scored and folded into the sender's aura record.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;
use validator::Validate;

use crate::{
    api::{
        app_state::AppState,
        dto::message_dto::{IngestMessageRequest, IngestMessageResponse},
    },
    error::AppError,
    gateway::InboundMessage,
};

/// Ingest a message event
///
/// POST /api/v1/messages
pub async fn ingest_message(
    State(state): State<AppState>,
    Json(request): Json<IngestMessageRequest>,
) -> Result<impl IntoResponse, AppError> {
    request.validate()?;
    debug!("Ingesting message from user: {}", request.user_id);

    let message = InboundMessage {
        user_id: request.user_id,
        display_name: request.display_name,
        content: request.content,
        attachments: request.attachments.into_iter().map(Into::into).collect(),
        channel_id: None,
    };

    let reply = state.dispatcher.handle_message(&message).await?;

    let response = match reply {
        // 命令消息：不计分，返回回复文本
        Some(reply) => {
            state.metrics.record_command();
            IngestMessageResponse {
                score: 0,
                aura: None,
                reply: Some(reply.text),
            }
        }
        // 普通消息：已折算，读取最新记录
        None => {
            state.metrics.record_message_scored();
            let score = state.score_engine.score(&message.content);
            let aura = state
                .aura_aggregator
                .get(&message.user_id)
                .await?
                .map(Into::into);
            IngestMessageResponse {
                score,
                aura,
                reply: None,
            }
        }
    };

    Ok((StatusCode::OK, Json(response)))
}
