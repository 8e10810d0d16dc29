use std::fmt::Write;

use sf_core::view::{ActionStyle, FeedbackTone, ScreenLayout, ScreenSpec, StyleMap};

/// Render `screen` as plain text, with `style` describing the surface look.
pub fn render_screen(screen: &ScreenSpec, style: &StyleMap) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n==== {} ====", screen.name);

    if !style.is_empty() {
        let active: Vec<String> = style
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect();
        let _ = writeln!(out, "{{ {} }}", active.join("; "));
    }

    if let Some(heading) = &screen.content.heading {
        let _ = writeln!(out, "# {heading}");
    }
    for paragraph in &screen.content.paragraphs {
        let _ = writeln!(out, "{paragraph}");
    }
    if let Some(image) = &screen.content.image {
        let _ = writeln!(out, "[image: {}]", image.alt);
        let _ = writeln!(out, "  <{}>", image.src);
    }

    match &screen.layout {
        ScreenLayout::Feedback { text, tone, .. } => {
            let _ = writeln!(out, "{} {text}...", tone_marker(*tone));
        }
        ScreenLayout::Interactive { actions } => {
            for (index, action) in actions.iter().enumerate() {
                let _ = write!(out, "  {}) {}", index + 1, action.label);
                if let Some(tag) = style_tag(action.style) {
                    let _ = write!(out, " ({tag})");
                }
                out.push('\n');
            }
            out.push_str("> ");
        }
        ScreenLayout::Message => {}
    }
    out
}

pub(crate) fn choice_prompt(count: usize) -> String {
    if count == 1 {
        "Press enter or type 1\n> ".to_string()
    } else {
        format!("Type a number from 1 to {count}\n> ")
    }
}

fn tone_marker(tone: FeedbackTone) -> &'static str {
    match tone {
        FeedbackTone::Loading => "[~]",
        FeedbackTone::Saving => "[+]",
        FeedbackTone::Deleting => "[-]",
    }
}

fn style_tag(style: ActionStyle) -> Option<&'static str> {
    match style {
        ActionStyle::Primary => None,
        ActionStyle::Danger => Some("danger"),
        ActionStyle::Neutral => Some("neutral"),
        ActionStyle::Different => Some("different"),
        ActionStyle::Absurd => Some("absurd"),
    }
}
