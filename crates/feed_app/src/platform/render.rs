use std::fmt::Write;

use feed_core::{CategoryFilter, FeedViewModel};

const TITLE: &str = "Today I Learned";

/// Draws the whole screen for one view snapshot.
pub(crate) fn render(view: &FeedViewModel) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "== {TITLE} ==  [{}]", view.form_button_label);

    if let Some(form) = &view.form {
        let _ = writeln!(out, "-- new fact --");
        let _ = writeln!(out, "  text:     {} ({} left)", form.text, form.remaining_chars);
        let _ = writeln!(out, "  source:   {}", form.source);
        let category = if form.category.is_empty() {
            "Choose category:"
        } else {
            form.category.as_str()
        };
        let _ = writeln!(out, "  category: {category}");
        if form.submitting {
            let _ = writeln!(out, "  posting...");
        }
        if let Some(error) = &form.error {
            let _ = writeln!(out, "  ! {error}");
        }
    }

    out.push_str(&filter_bar(view));
    out.push('\n');

    if view.loading {
        let _ = writeln!(out, "Loading...");
    } else if let Some(message) = view.empty_message {
        let _ = writeln!(out, "{message}");
    } else {
        for fact in &view.facts {
            let _ = writeln!(
                out,
                "#{} {} (Source: {}) [{}] 👍 {} 🤯 {} ⛔️ {}",
                fact.id,
                fact.text,
                fact.source,
                fact.category,
                fact.votes_interesting,
                fact.votes_mindblowing,
                fact.votes_false
            );
        }
        let _ = writeln!(
            out,
            "There are {} facts in the database. Add your own!",
            view.fact_count
        );
    }

    if let Some(notice) = &view.notice {
        let _ = writeln!(out, "!! {notice} (type `ok` to dismiss)");
    }

    out
}

fn filter_bar(view: &FeedViewModel) -> String {
    let mark = |active: bool, name: &str| {
        if active {
            format!("*{}*", name.to_uppercase())
        } else {
            name.to_string()
        }
    };

    let mut entries = vec![mark(view.filter == CategoryFilter::All, "all")];
    entries.extend(
        view.categories
            .iter()
            .map(|chip| mark(view.filter.to_string() == chip.name, chip.name)),
    );
    entries.join(" | ")
}
