//! HTML for each page. Handlers in [`crate::app`] fetch the data and call
//! into these.

use axum::http::StatusCode;

use crate::icons::{Icon, IconRegistry};
use crate::models::{SortOrder, Todo};
use crate::routes;
use crate::validation::TitleErrors;

const STYLE: &str = r#"
    :root {
      color-scheme: light;
      font-family: "Inter", system-ui, -apple-system, sans-serif;
      background: #f1f5f4;
    }
    body { margin: 0; padding: 32px; display: flex; justify-content: center; }
    a { color: inherit; }
    .app {
      width: min(720px, 100%);
      background: #ffffff;
      border-radius: 16px;
      box-shadow: 0 24px 48px rgba(15, 23, 42, 0.08);
      padding: 28px;
    }
    header { display: flex; align-items: center; justify-content: space-between; margin-bottom: 20px; }
    h1 { margin: 0; font-size: 26px; letter-spacing: -0.02em; }
    .muted { color: #64748b; font-size: 13px; }
    .icon { vertical-align: middle; }
    form.inline { display: inline; margin: 0; }
    .field { display: flex; flex-direction: column; gap: 8px; margin-bottom: 16px; }
    input[type="text"] { padding: 12px 14px; border-radius: 10px; border: 1px solid #d1dbd8; font-size: 15px; }
    input.invalid { border-color: #dc2626; }
    ul.errors { margin: 0; padding-left: 18px; color: #b91c1c; font-size: 13px; }
    button, .button {
      border: none; border-radius: 10px; padding: 10px 14px;
      background: #35495e; color: white; font-weight: 600; cursor: pointer;
      text-decoration: none; display: inline-flex; align-items: center; gap: 6px;
    }
    button.ghost { background: #e2e8f0; color: #0f172a; }
    button.danger { background: #fee2e2; color: #991b1b; }
    .todo-list { display: grid; gap: 10px; }
    .todo {
      display: flex; align-items: center; gap: 12px; padding: 12px 16px;
      border-radius: 12px; background: #f8fafc; border: 1px solid #e2e8f0;
    }
    .todo .grip { color: #94a3b8; cursor: grab; }
    .todo .title { flex: 1; font-weight: 600; }
    .todo.done .title { text-decoration: line-through; color: #64748b; }
    .status { font-size: 12px; text-transform: uppercase; letter-spacing: 0.08em;
      background: #e2e8f0; padding: 4px 8px; border-radius: 999px; }
    .status.done { background: #d1fae5; color: #065f46; }
    dl { display: grid; grid-template-columns: max-content 1fr; gap: 6px 16px; }
    dt { color: #64748b; }
    .actions { display: flex; gap: 8px; margin-top: 16px; }
"#;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title}</title>
  <style>{STYLE}</style>
</head>
<body>
  <div class="app">
{content}
  </div>
</body>
</html>"#,
        title = html_escape(title),
    )
}

pub fn list_page(icons: &IconRegistry, todos: &[Todo], sort: SortOrder) -> String {
    let sort_icon = match sort {
        SortOrder::Newest => Icon::AngleDown,
        SortOrder::Oldest => Icon::AngleUp,
    };

    let mut body = format!(
        r#"    <header>
      <h1>Todos</h1>
      <a class="button" href="{add}">Add todo</a>
    </header>
    <p class="muted"><a href="{toggle}" title="Toggle sort order">{sort_icon} {label} first</a></p>
    <div class="todo-list">
"#,
        add = routes::TODOS_ADD,
        toggle = routes::list_path(sort.toggled()),
        sort_icon = icons.svg(sort_icon),
        label = sort.as_str(),
    );

    if todos.is_empty() {
        body.push_str(r#"      <p class="muted">No todos yet. Add one!</p>"#);
    }

    for todo in todos {
        let row_class = if todo.is_complete { "todo done" } else { "todo" };
        body.push_str(&format!(
            r#"      <div class="{row_class}">
        <span class="grip">{grip}</span>
        <a class="title" href="{detail}">{title}</a>
        {toggle}
        {delete}
      </div>
"#,
            grip = icons.svg(Icon::GripLines),
            detail = html_escape(&routes::detail_path(&todo.id)),
            title = html_escape(&todo.title),
            toggle = completion_form(icons, todo, &routes::list_path(sort)),
            delete = delete_form(icons, todo),
        ));
    }

    body.push_str("    </div>");
    layout("Todos", &body)
}

/// `value` is echoed back into the input so a rejected title is not lost.
pub fn create_page(icons: &IconRegistry, value: &str, errors: Option<&TitleErrors>) -> String {
    let body = format!(
        r#"    <header>
      <h1>New todo</h1>
      <a href="{list}">Back to list</a>
    </header>
    <form method="post" action="{action}">
{field}
      <div class="actions">
        <button type="submit">{check} Create</button>
      </div>
    </form>"#,
        list = routes::TODOS,
        action = routes::TODOS_ADD,
        field = title_field(value, errors),
        check = icons.svg(Icon::SquareCheck),
    );
    layout("New todo", &body)
}

pub fn detail_page(
    icons: &IconRegistry,
    todo: &Todo,
    edit_value: Option<&str>,
    errors: Option<&TitleErrors>,
) -> String {
    let (status_class, status_label) = if todo.is_complete {
        ("status done", "Complete")
    } else {
        ("status", "Open")
    };

    let body = format!(
        r#"    <header>
      <h1>{title}</h1>
      <a href="{list}">Back to list</a>
    </header>
    <dl>
      <dt>Id</dt><dd><code>{id}</code></dd>
      <dt>Status</dt><dd><span class="{status_class}">{status_label}</span></dd>
      <dt>Created</dt><dd>{created}</dd>
      <dt>Updated</dt><dd>{updated}</dd>
    </dl>
    <form method="post" action="{edit_action}">
{field}
      <div class="actions">
        <button type="submit">{pen} Save title</button>
      </div>
    </form>
    <div class="actions">
      {toggle}
      {delete}
    </div>"#,
        title = html_escape(&todo.title),
        list = routes::TODOS,
        id = html_escape(&todo.id),
        created = todo.created_at.format(TIMESTAMP_FORMAT),
        updated = todo.updated_at.format(TIMESTAMP_FORMAT),
        edit_action = html_escape(&routes::title_action(&todo.id)),
        field = title_field(edit_value.unwrap_or(&todo.title), errors),
        pen = icons.svg(Icon::PenToSquare),
        toggle = completion_form(icons, todo, &routes::detail_path(&todo.id)),
        delete = delete_form(icons, todo),
    );
    layout(&todo.title, &body)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        r#"    <header>
      <h1>{code}</h1>
      <a href="{list}">Back to list</a>
    </header>
    <p>{reason}</p>
    <p class="muted">{message}</p>"#,
        code = status.as_u16(),
        list = routes::TODOS,
        reason = status.canonical_reason().unwrap_or("Error"),
        message = html_escape(message),
    );
    layout(status.canonical_reason().unwrap_or("Error"), &body)
}

fn title_field(value: &str, errors: Option<&TitleErrors>) -> String {
    let mut field = String::from(r#"      <div class="field">
        <label for="title">Title</label>
"#);

    let input_class = if errors.is_some() { "invalid" } else { "" };
    field.push_str(&format!(
        r#"        <input type="text" id="title" name="title" class="{input_class}" value="{value}" placeholder="Learn Vue 3" />
"#,
        value = html_escape(value),
    ));

    if let Some(errors) = errors {
        field.push_str("        <ul class=\"errors\">\n");
        for message in errors.messages() {
            field.push_str(&format!("          <li>{}</li>\n", html_escape(message)));
        }
        field.push_str("        </ul>\n");
    }

    field.push_str("      </div>");
    field
}

fn completion_form(icons: &IconRegistry, todo: &Todo, back: &str) -> String {
    let (icon, label, next) = if todo.is_complete {
        (Icon::SquareXmark, "Reopen", false)
    } else {
        (Icon::SquareCheck, "Complete", true)
    };
    format!(
        r#"<form class="inline" method="post" action="{action}">
          <input type="hidden" name="complete" value="{next}" />
          <input type="hidden" name="back" value="{back}" />
          <button class="ghost" type="submit" title="{label}">{svg} {label}</button>
        </form>"#,
        action = html_escape(&routes::complete_action(&todo.id)),
        back = html_escape(back),
        svg = icons.svg(icon),
    )
}

fn delete_form(icons: &IconRegistry, todo: &Todo) -> String {
    format!(
        r#"<form class="inline" method="post" action="{action}">
          <button class="danger" type="submit" title="Delete">{svg} Delete</button>
        </form>"#,
        action = html_escape(&routes::delete_action(&todo.id)),
        svg = icons.svg(Icon::Trash),
    )
}

fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::validation::Title;

    fn todo(id: &str, title: &str, is_complete: bool) -> Todo {
        let at = Utc.with_ymd_and_hms(2023, 9, 1, 10, 0, 0).unwrap();
        Todo {
            id: id.to_string(),
            title: title.to_string(),
            is_complete,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn list_links_each_todo_to_its_detail_page() {
        let icons = IconRegistry::new();
        let html = list_page(
            &icons,
            &[todo("a1", "Learn Vue", false), todo("b2", "Ship Vue", true)],
            SortOrder::Newest,
        );
        assert!(html.contains(r#"href="/todos/a1""#));
        assert!(html.contains(r#"href="/todos/b2""#));
        assert!(html.contains(r#"class="todo done""#));
        assert!(html.contains("icon-grip-lines"));
        assert!(html.contains("?sort=oldest"));
        assert!(html.contains(r#"name="back" value="/todos?sort=newest""#));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let html = list_page(&IconRegistry::new(), &[], SortOrder::Oldest);
        assert!(html.contains("No todos yet"));
        assert!(html.contains("icon-angle-up"));
    }

    #[test]
    fn create_page_lists_every_error_and_keeps_input() {
        let errors = Title::parse("<b>").unwrap_err();
        let html = create_page(&IconRegistry::new(), "<b>", Some(&errors));
        assert!(html.contains("value=\"&lt;b&gt;\""));
        assert!(html.contains("Title must include &quot;Vue&quot;"));
        assert!(html.contains("Title cannot contain symbols"));
        assert!(!html.contains("Title is required"));
    }

    #[test]
    fn detail_page_offers_reopen_for_completed_todo() {
        let html = detail_page(&IconRegistry::new(), &todo("abc123", "Vue", true), None, None);
        assert!(html.contains("<code>abc123</code>"));
        assert!(html.contains("Reopen"));
        assert!(html.contains(r#"name="complete" value="false""#));
        assert!(html.contains(r#"action="/todos/abc123/title""#));
        assert!(html.contains("2023-09-01 10:00"));
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(html_escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }
}
