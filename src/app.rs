use std::sync::Arc;

use axum::{
    extract::{Form, Path, Query, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::{get, post, MethodRouter},
    Router,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::api::TodoApi;
use crate::error::AppError;
use crate::icons::IconRegistry;
use crate::models::{SortOrder, TodoPatch};
use crate::routes::{self, Target, ViewKind, ROUTE_TABLE};
use crate::validation::Title;
use crate::views;

#[derive(Clone)]
pub struct AppState {
    pub api: TodoApi,
    pub icons: Arc<IconRegistry>,
}

impl AppState {
    pub fn new(api: TodoApi) -> Self {
        Self {
            api,
            icons: Arc::new(IconRegistry::new()),
        }
    }
}

#[derive(Deserialize)]
struct ListQuery {
    #[serde(default)]
    sort: SortOrder,
}

#[derive(Deserialize)]
struct TitleForm {
    #[serde(default)]
    title: String,
}

#[derive(Deserialize)]
struct CompletionForm {
    complete: bool,
    #[serde(default)]
    back: Option<String>,
}

pub fn router(state: AppState) -> Router {
    let mut app = Router::new();
    for def in &ROUTE_TABLE {
        app = app.route(def.pattern, page(def.target));
    }

    app.route(routes::TODO_TITLE, post(edit_title))
        .route(routes::TODO_COMPLETE, post(set_completion))
        .route(routes::TODO_DELETE, post(delete_todo))
        .fallback(not_found)
        .with_state(state)
}

fn page(target: Target) -> MethodRouter<AppState> {
    match target {
        Target::Redirect(to) => get(move || async move { redirect(StatusCode::FOUND, to) }),
        Target::View(ViewKind::List) => get(list_view),
        Target::View(ViewKind::Create) => get(create_view).post(create_todo),
        Target::View(ViewKind::Detail) => get(detail_view),
    }
}

async fn list_view(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>, AppError> {
    let mut todos = state.api.list().await?;
    query.sort.sort(&mut todos);
    Ok(Html(views::list_page(&state.icons, &todos, query.sort)))
}

async fn create_view(State(state): State<AppState>) -> Html<String> {
    Html(views::create_page(&state.icons, "", None))
}

async fn create_todo(
    State(state): State<AppState>,
    Form(form): Form<TitleForm>,
) -> Result<Response, AppError> {
    let title = match Title::parse(&form.title) {
        Ok(title) => title,
        Err(errors) => {
            info!(%errors, "rejected new todo title");
            let html = views::create_page(&state.icons, &form.title, Some(&errors));
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
        }
    };

    let todo = state.api.create(&title).await?;
    info!(id = %todo.id, "created todo");
    Ok(see_other(routes::TODOS))
}

async fn detail_view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, AppError> {
    let todo = state.api.get(&id).await?;
    Ok(Html(views::detail_page(&state.icons, &todo, None, None)))
}

async fn edit_title(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<TitleForm>,
) -> Result<Response, AppError> {
    let title = match Title::parse(&form.title) {
        Ok(title) => title,
        Err(errors) => {
            info!(%id, %errors, "rejected title edit");
            let todo = state.api.get(&id).await?;
            let html = views::detail_page(&state.icons, &todo, Some(&form.title), Some(&errors));
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response());
        }
    };

    state.api.update(&id, &TodoPatch::title(&title)).await?;
    info!(%id, "renamed todo");
    Ok(see_other(&routes::detail_path(&id)))
}

async fn set_completion(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<CompletionForm>,
) -> Result<Response, AppError> {
    state
        .api
        .update(&id, &TodoPatch::completion(form.complete))
        .await?;
    info!(%id, complete = form.complete, "updated completion");

    let back = form
        .back
        .filter(|path| routes::resolve(path).is_some_and(|route| route.is_view()))
        .unwrap_or_else(|| routes::TODOS.to_string());
    Ok(see_other(&back))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    state.api.delete(&id).await?;
    info!(%id, "deleted todo");
    Ok(see_other(routes::TODOS))
}

/// Paths outside the table. A trailing slash on a known path redirects to
/// the canonical form; anything else is a 404 page.
async fn not_found(uri: Uri) -> Result<Response, AppError> {
    let path = uri.path();
    let trimmed = path.trim_end_matches('/');
    if trimmed.len() < path.len() && !trimmed.is_empty() && routes::resolve(trimmed).is_some() {
        let canonical = match uri.query() {
            Some(query) => format!("{trimmed}?{query}"),
            None => trimmed.to_string(),
        };
        return Ok(redirect(StatusCode::PERMANENT_REDIRECT, &canonical));
    }

    warn!(%path, "no route");
    Err(AppError::PageNotFound(path.to_string()))
}

fn see_other(to: &str) -> Response {
    redirect(StatusCode::SEE_OTHER, to)
}

fn redirect(status: StatusCode, to: &str) -> Response {
    (status, [(header::LOCATION, to.to_string())]).into_response()
}

/// One line per route table entry, logged at startup.
pub fn describe_routes() -> Vec<String> {
    ROUTE_TABLE
        .iter()
        .map(|def| match def.target {
            Target::Redirect(to) => format!("{} -> {}", def.pattern, to),
            Target::View(kind) => format!("{} => {:?}", def.pattern, kind),
        })
        .collect()
}
