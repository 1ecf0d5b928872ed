//! Built-in icon set, rendered as inline SVG.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    AngleUp,
    AngleDown,
    GripLines,
    PenToSquare,
    SquareCheck,
    SquareXmark,
    Trash,
}

impl Icon {
    pub const ALL: [Icon; 7] = [
        Icon::AngleUp,
        Icon::AngleDown,
        Icon::GripLines,
        Icon::PenToSquare,
        Icon::SquareCheck,
        Icon::SquareXmark,
        Icon::Trash,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Icon::AngleUp => "angle-up",
            Icon::AngleDown => "angle-down",
            Icon::GripLines => "grip-lines",
            Icon::PenToSquare => "pen-to-square",
            Icon::SquareCheck => "square-check",
            Icon::SquareXmark => "square-xmark",
            Icon::Trash => "trash",
        }
    }

    fn paths(self) -> &'static str {
        match self {
            Icon::AngleUp => r#"<path d="M4 10l4-4 4 4"/>"#,
            Icon::AngleDown => r#"<path d="M4 6l4 4 4-4"/>"#,
            Icon::GripLines => r#"<path d="M3 6h10M3 10h10"/>"#,
            Icon::PenToSquare => {
                r#"<path d="M9 3H3v10h10V7"/><path d="M7 9l6-6"/>"#
            }
            Icon::SquareCheck => r#"<rect x="2" y="2" width="12" height="12" rx="2"/><path d="M5 8l2 2 4-4"/>"#,
            Icon::SquareXmark => r#"<rect x="2" y="2" width="12" height="12" rx="2"/><path d="M5.5 5.5l5 5M10.5 5.5l-5 5"/>"#,
            Icon::Trash => r#"<path d="M3 4h10M6 4V2h4v2M4 4l1 10h6l1-10"/>"#,
        }
    }
}

/// Icon markup keyed by icon, built once at startup and shared read-only.
#[derive(Debug)]
pub struct IconRegistry {
    markup: HashMap<Icon, String>,
}

impl IconRegistry {
    pub fn new() -> Self {
        let markup = Icon::ALL
            .iter()
            .map(|&icon| (icon, render(icon)))
            .collect();
        Self { markup }
    }

    pub fn svg(&self, icon: Icon) -> &str {
        self.markup.get(&icon).map(String::as_str).unwrap_or_default()
    }
}

fn render(icon: Icon) -> String {
    format!(
        r#"<svg class="icon icon-{name}" viewBox="0 0 16 16" width="16" height="16" fill="none" stroke="currentColor" stroke-width="1.5" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{paths}</svg>"#,
        name = icon.name(),
        paths = icon.paths(),
    )
}
