use feed_core::{CategoryFilter, FactId, Msg, VoteKind};

pub(crate) const HELP: &str = "\
commands:
  all | <category> | filter <name>   choose what the feed shows
  share                              open or close the fact form
  text <..> / source <..> / category <..>
                                     edit the draft
  post                               submit the draft
  vote <id> interesting|mindblowing|false
  ok                                 dismiss the current alert
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Input {
    Dispatch(Msg),
    Help,
    Quit,
    Empty,
    Invalid(String),
}

/// Maps one line typed at the prompt to an input action.
pub(crate) fn parse_line(line: &str) -> Input {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (command, rest) = match trimmed.split_once(' ') {
        Some((command, rest)) => (command, rest),
        None => (trimmed, ""),
    };

    match command {
        "" => Input::Empty,
        "help" | "?" => Input::Help,
        "quit" | "exit" => Input::Quit,
        "share" | "close" => Input::Dispatch(Msg::FormToggled),
        "post" => Input::Dispatch(Msg::SubmitClicked),
        "ok" => Input::Dispatch(Msg::NoticeDismissed),
        "text" => Input::Dispatch(Msg::DraftTextChanged(rest.to_string())),
        "source" => Input::Dispatch(Msg::DraftSourceChanged(rest.trim().to_string())),
        "category" => Input::Dispatch(Msg::DraftCategoryChanged(rest.trim().to_string())),
        "filter" => parse_filter(rest.trim()),
        "vote" => parse_vote(rest),
        other => match other.parse::<CategoryFilter>() {
            Ok(filter) if rest.trim().is_empty() => Input::Dispatch(Msg::FilterSelected(filter)),
            _ => Input::Invalid(format!("unknown command {other:?}")),
        },
    }
}

fn parse_filter(raw: &str) -> Input {
    match raw.parse::<CategoryFilter>() {
        Ok(filter) => Input::Dispatch(Msg::FilterSelected(filter)),
        Err(err) => Input::Invalid(err.to_string()),
    }
}

fn parse_vote(rest: &str) -> Input {
    let mut parts = rest.split_whitespace();
    let (Some(id), Some(kind), None) = (parts.next(), parts.next(), parts.next()) else {
        return Input::Invalid("usage: vote <id> interesting|mindblowing|false".to_string());
    };
    let Ok(fact_id) = id.parse::<FactId>() else {
        return Input::Invalid(format!("{id:?} is not a fact id"));
    };
    let vote = match kind {
        "interesting" => VoteKind::Interesting,
        "mindblowing" => VoteKind::Mindblowing,
        "false" => VoteKind::False,
        other => return Input::Invalid(format!("unknown vote {other:?}")),
    };
    Input::Dispatch(Msg::VoteClicked { fact_id, vote })
}

#[cfg(test)]
mod tests {
    use feed_core::Category;

    use super::*;

    #[test]
    fn category_names_select_filters() {
        assert_eq!(
            parse_line("science\n"),
            Input::Dispatch(Msg::FilterSelected(Category::Science.into()))
        );
        assert_eq!(
            parse_line("all"),
            Input::Dispatch(Msg::FilterSelected(CategoryFilter::All))
        );
        assert_eq!(
            parse_line("filter news"),
            Input::Dispatch(Msg::FilterSelected(Category::News.into()))
        );
        assert!(matches!(parse_line("filter gossip"), Input::Invalid(_)));
    }

    #[test]
    fn draft_text_keeps_inner_spacing() {
        assert_eq!(
            parse_line("text Lisbon is  the capital\r\n"),
            Input::Dispatch(Msg::DraftTextChanged("Lisbon is  the capital".to_string()))
        );
        assert_eq!(
            parse_line("text"),
            Input::Dispatch(Msg::DraftTextChanged(String::new()))
        );
        assert_eq!(
            parse_line("source  https://s.com "),
            Input::Dispatch(Msg::DraftSourceChanged("https://s.com".to_string()))
        );
    }

    #[test]
    fn votes_parse_id_and_kind() {
        assert_eq!(
            parse_line("vote 12 mindblowing"),
            Input::Dispatch(Msg::VoteClicked {
                fact_id: 12,
                vote: VoteKind::Mindblowing
            })
        );
        assert!(matches!(parse_line("vote x false"), Input::Invalid(_)));
        assert!(matches!(parse_line("vote 1 meh"), Input::Invalid(_)));
        assert!(matches!(parse_line("vote 1"), Input::Invalid(_)));
    }

    #[test]
    fn control_words() {
        assert_eq!(parse_line("  "), Input::Empty);
        assert_eq!(parse_line("quit"), Input::Quit);
        assert_eq!(parse_line("?"), Input::Help);
        assert_eq!(parse_line("post"), Input::Dispatch(Msg::SubmitClicked));
        assert_eq!(parse_line("share"), Input::Dispatch(Msg::FormToggled));
        assert!(matches!(parse_line("science fiction"), Input::Invalid(_)));
    }
}
