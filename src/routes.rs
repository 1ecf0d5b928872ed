//! Route table shared by the axum router and [`resolve`].

use crate::models::SortOrder;

pub const ROOT: &str = "/";
pub const TODOS: &str = "/todos";
pub const TODOS_ADD: &str = "/todos/add";
pub const TODO_DETAIL: &str = "/todos/:id";

// Form actions. These are not pages and are not in the table.
pub const TODO_TITLE: &str = "/todos/:id/title";
pub const TODO_COMPLETE: &str = "/todos/:id/complete";
pub const TODO_DELETE: &str = "/todos/:id/delete";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    List,
    Create,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Redirect(&'static str),
    View(ViewKind),
}

#[derive(Debug)]
pub struct RouteDef {
    pub pattern: &'static str,
    pub target: Target,
}

/// Static segments are listed before parameterised ones so `/todos/add`
/// is never read as a detail id.
pub static ROUTE_TABLE: [RouteDef; 4] = [
    RouteDef {
        pattern: ROOT,
        target: Target::Redirect(TODOS),
    },
    RouteDef {
        pattern: TODOS,
        target: Target::View(ViewKind::List),
    },
    RouteDef {
        pattern: TODOS_ADD,
        target: Target::View(ViewKind::Create),
    },
    RouteDef {
        pattern: TODO_DETAIL,
        target: Target::View(ViewKind::Detail),
    },
];

/// Result of matching a path against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Redirect(&'static str),
    List,
    Create,
    Detail { id: String },
}

impl Route {
    pub fn is_view(&self) -> bool {
        !matches!(self, Route::Redirect(_))
    }
}

/// Any `?query` suffix is ignored.
pub fn resolve(path: &str) -> Option<Route> {
    let path = path.split_once('?').map_or(path, |(path, _)| path);
    ROUTE_TABLE.iter().find_map(|def| {
        let id = match_pattern(def.pattern, path)?;
        Some(match def.target {
            Target::Redirect(to) => Route::Redirect(to),
            Target::View(ViewKind::List) => Route::List,
            Target::View(ViewKind::Create) => Route::Create,
            Target::View(ViewKind::Detail) => Route::Detail { id: id? },
        })
    })
}

/// Outer `None`: no match. Inner value: the `:id` capture, if any.
fn match_pattern(pattern: &str, path: &str) -> Option<Option<String>> {
    let mut pattern_segments = pattern.split('/');
    let mut path_segments = path.split('/');
    let mut captured = None;

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(captured),
            (Some(expected), Some(actual)) => {
                if expected.starts_with(':') {
                    if actual.is_empty() {
                        return None;
                    }
                    captured = Some(actual.to_string());
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

pub fn list_path(sort: SortOrder) -> String {
    format!("{TODOS}?sort={}", sort.as_str())
}

pub fn detail_path(id: &str) -> String {
    format!("{TODOS}/{id}")
}

pub fn title_action(id: &str) -> String {
    format!("{TODOS}/{id}/title")
}

pub fn complete_action(id: &str) -> String {
    format!("{TODOS}/{id}/complete")
}

pub fn delete_action(id: &str) -> String {
    format!("{TODOS}/{id}/delete")
}
