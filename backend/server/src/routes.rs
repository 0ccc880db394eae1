use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{debug, info};

use crate::{
    error::AppError,
    models::{Butterfly, Message, NewButterfly},
    quiz::{QuizQuestion, compose_question},
    state::AppState,
};

pub async fn root_handler() -> Json<Message> {
    Json(Message::new("Butterfly Identification API"))
}

pub async fn butterflies_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Butterfly>>, AppError> {
    Ok(Json(state.store.list_all().await?))
}

pub async fn create_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewButterfly>,
) -> Result<Json<Butterfly>, AppError> {
    let created = state.store.insert_one(payload).await?;
    info!("Created butterfly {} ({})", created.id, created.common_name);

    Ok(Json(created))
}

pub async fn update_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<NewButterfly>,
) -> Result<Json<Butterfly>, AppError> {
    let updated = state.store.update_by_id(&id, payload).await?;
    info!("Updated butterfly {id}");

    Ok(Json(updated))
}

pub async fn delete_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Message>, AppError> {
    state.store.delete_by_id(&id).await?;
    info!("Deleted butterfly {id}");

    Ok(Json(Message::new("Butterfly deleted successfully")))
}

pub async fn quiz_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<QuizQuestion>, AppError> {
    let catalog = state.store.list_all().await?;
    let question = compose_question(&catalog, &mut rand::rng())?;

    debug!(
        "Quiz question from {} records, answer {}",
        catalog.len(),
        question.correct_answer.id
    );

    Ok(Json(question))
}

/// Seeds an empty catalog. The count check and the bulk insert are separate
/// store calls, two concurrent first calls can both seed.
pub async fn init_handler(State(state): State<Arc<AppState>>) -> Result<Json<Message>, AppError> {
    let count = state.store.count().await?;

    if count > 0 {
        return Ok(Json(Message::new(format!(
            "Database already initialized with {count} butterflies"
        ))));
    }

    let seeds = bank::species().iter().map(NewButterfly::from).collect();
    let ids = state.store.insert_many(seeds).await?;
    info!("Seeded {} butterflies", ids.len());

    Ok(Json(Message::new(format!(
        "Successfully initialized {} butterflies",
        ids.len()
    ))))
}
