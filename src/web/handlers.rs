use crate::core::add::AddLogic;
use crate::core::del::DeleteLogic;
use crate::core::logic::Core;
use crate::core::week::WeekLogic;
use crate::errors::AppResult;
use crate::web::forms::{AddRecordForm, AddWeekForm, field};
use crate::web::page::IndexTemplate;
use crate::web::{AppState, with_db};
use askama::Template;
use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use tracing::info;

/// GET / - balance, lunch records and weeks, most recent first.
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let overview = with_db(&state, |pool, cfg| Core::overview(pool, cfg)).await?;
    let page = IndexTemplate::from(overview);
    Ok(Html(page.render()?))
}

/// POST /add
pub async fn add_record(
    State(state): State<AppState>,
    Form(form): Form<AddRecordForm>,
) -> AppResult<Redirect> {
    let date = field("data", form.data)?;
    let departure = field("hora_saida", form.hora_saida)?;
    let ret = field("hora_retorno", form.hora_retorno)?;

    let record = with_db(&state, move |pool, cfg| {
        AddLogic::apply(pool, cfg, &date, &departure, &ret)
    })
    .await?;

    info!(
        id = record.id,
        break_minutes = record.break_minutes,
        deficit_minutes = record.deficit_minutes,
        "lunch record added"
    );
    Ok(Redirect::to("/"))
}

/// POST /delete/{id}
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    with_db(&state, move |pool, _| DeleteLogic::apply(pool, id)).await?;
    info!(id, "lunch record deleted");
    Ok(Redirect::to("/"))
}

/// POST /reset
pub async fn reset(State(state): State<AppState>) -> AppResult<Redirect> {
    let removed = with_db(&state, |pool, _| DeleteLogic::reset(pool)).await?;
    info!(removed, "lunch records reset");
    Ok(Redirect::to("/"))
}

/// POST /add_semana
pub async fn add_week(
    State(state): State<AppState>,
    Form(form): Form<AddWeekForm>,
) -> AppResult<Redirect> {
    let name = field("nome", form.nome)?;
    let week = with_db(&state, move |pool, _| WeekLogic::close(pool, &name)).await?;
    info!(id = week.id, deficit_total = week.deficit_total, "week closed");
    Ok(Redirect::to("/"))
}

/// POST /delete_semana/{id}
pub async fn delete_week(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    with_db(&state, move |pool, _| WeekLogic::delete(pool, id)).await?;
    info!(id, "week deleted");
    Ok(Redirect::to("/"))
}
