//! Axum route handlers for the HTTP API.
//!
//! Bodies are taken as `Result<Json<T>, JsonRejection>` so malformed JSON is
//! answered with the same `{"error": ...}` shape as validation failures.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use lexis_core::types::{
    BackTranslationResult, BatchBackTranslation, BatchTranslation, QualityAssessment,
    TranslationResult,
};
use lexis_lang_igala::PosTagger;
use lexis_translator::Translator;

use crate::error::{ApiError, ApiResult};
use crate::history::QualityReport;
use crate::models::{
    BackTranslateRequest, BatchBackTranslateRequest, BatchTranslateRequest,
    DetectLanguageRequest, DetectLanguageResponse, HealthResponse, PosTagRequest,
    PosTagResponse, QualityRequest, SuggestionsRequest, SuggestionsResponse, TranslateRequest,
    parse_direction, parse_language, require_text, require_texts,
};
use crate::state::AppState;

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(request)| request).map_err(ApiError::from)
}

/// `GET /health`
///
/// ```json
/// {"status": "ok", "version": "0.1.0", "dictionary_entries": 16}
/// ```
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dictionary_entries: state.processor.metadata().entry_count,
    })
}

/// `POST /translate`: word-by-word dictionary translation.
///
/// The text may be sent as `text` or `english-text`.
pub async fn translate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> ApiResult<TranslationResult> {
    let request = body(payload)?;
    let text = require_text(request.text, "text")?;
    let direction = parse_direction(request.direction.as_deref())?;

    let result = state.translator.translate(&text, direction);
    tracing::info!(
        %direction,
        user_id = request.user_id.as_deref(),
        session_id = request.session_id.as_deref(),
        confidence = result.confidence,
        "translated text"
    );
    Ok(Json(result))
}

/// `POST /translate/batch`
pub async fn translate_batch(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BatchTranslateRequest>, JsonRejection>,
) -> ApiResult<BatchTranslation> {
    let request = body(payload)?;
    let texts = require_texts(request.texts, "texts")?;
    let direction = parse_direction(request.direction.as_deref())?;

    let batch = state.translator.translate_batch(&texts, direction);
    tracing::info!(
        %direction,
        count = texts.len(),
        average_confidence = batch.average_confidence,
        "translated batch"
    );
    Ok(Json(batch))
}

/// `POST /back-translate`: round-trip `text` and score the result.
///
/// When `user_id` is present the score is added to that user's history.
pub async fn back_translate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BackTranslateRequest>, JsonRejection>,
) -> ApiResult<BackTranslationResult> {
    let request = body(payload)?;
    let text = require_text(request.text, "text")?;
    let direction = parse_direction(request.source_direction.as_deref())?;

    let result = state.back_translator.back_translate(&text, direction);

    if let Some(user_id) = request.user_id.as_deref() {
        state
            .history
            .write()
            .await
            .record(user_id, request.session_id.as_deref(), &result);
    }

    tracing::info!(
        %direction,
        score = result.overall_quality.overall_score,
        level = %result.overall_quality.quality_level,
        "back translation complete"
    );
    Ok(Json(result))
}

/// `POST /back-translate/batch`
pub async fn back_translate_batch(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<BatchBackTranslateRequest>, JsonRejection>,
) -> ApiResult<BatchBackTranslation> {
    let request = body(payload)?;
    let texts = require_texts(request.texts, "texts")?;
    let direction = parse_direction(request.source_direction.as_deref())?;

    let batch = state.back_translator.batch_back_translate(&texts, direction);

    if let Some(user_id) = request.user_id.as_deref() {
        let mut history = state.history.write().await;
        for result in &batch.results {
            history.record(user_id, request.session_id.as_deref(), result);
        }
    }

    tracing::info!(
        %direction,
        count = batch.summary.total_texts,
        average = batch.summary.average_quality_score,
        "batch back translation complete"
    );
    Ok(Json(batch))
}

/// `POST /translation-quality`: score a translation supplied by the caller
pub async fn translation_quality(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QualityRequest>, JsonRejection>,
) -> ApiResult<QualityAssessment> {
    let request = body(payload)?;
    let original_text = require_text(request.original_text, "original_text")?;
    let translated_text = require_text(request.translated_text, "translated_text")?;
    let direction = parse_direction(request.direction.as_deref())?;

    Ok(Json(state.back_translator.assess_existing_translation(
        &original_text,
        &translated_text,
        direction,
    )))
}

/// `POST /detect-language`
pub async fn detect_language(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DetectLanguageRequest>, JsonRejection>,
) -> ApiResult<DetectLanguageResponse> {
    let request = body(payload)?;
    let text = require_text(request.text, "text")?;

    let detected_language = state.translator.detect_language(&text);
    Ok(Json(DetectLanguageResponse {
        text,
        detected_language,
    }))
}

/// `POST /suggestions`: dictionary headwords starting with `partial_word`
pub async fn suggestions(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SuggestionsRequest>, JsonRejection>,
) -> ApiResult<SuggestionsResponse> {
    let request = body(payload)?;
    let partial_word = require_text(request.partial_word, "partial_word")?;
    let language = parse_language(request.language.as_deref())?;
    let limit = state.config.suggestions.effective_limit(request.limit);

    let suggestions = state.translator.suggestions(&partial_word, language, limit);
    Ok(Json(SuggestionsResponse {
        partial_word,
        language,
        suggestions,
    }))
}

/// `POST /pos-tags`
pub async fn pos_tags(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PosTagRequest>, JsonRejection>,
) -> ApiResult<PosTagResponse> {
    let request = body(payload)?;
    let text = require_text(request.translation_text, "translation_text")?;

    let tagged_words = state.processor.tag(&text);
    Ok(Json(PosTagResponse {
        pos_tags: PosTagger::tags_string(&tagged_words),
        original_text: text,
        tagged_words,
    }))
}

/// `GET /quality-report/{user_id}`
pub async fn quality_report(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Json<QualityReport> {
    let window = state.config.history.trend_window;
    Json(state.history.read().await.report(&user_id, window))
}
