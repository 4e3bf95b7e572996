//! Decision CLI commands: put, likes, count.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use explore_types::decision::{ListLikedYouResponse, PutDecisionRequest, PutDecisionResponse};
use explore_types::error::DecisionError;

use crate::state::AppState;

/// Record a like or pass.
///
/// # Examples
///
/// ```bash
/// explore put 1 3          # user 1 likes user 3
/// explore put 1 2 --pass   # user 1 passes on user 2
/// ```
pub async fn put_decision(
    state: &AppState,
    actor: String,
    recipient: String,
    liked: bool,
    json: bool,
) -> Result<()> {
    let request = PutDecisionRequest {
        actor_user_id: actor,
        recipient_user_id: recipient,
        liked_recipient: liked,
    };

    let outcome = state.decision_service.put_decision(&request).await;
    let (response, match_check_error) = split_match_check(outcome)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        let verb = if liked { "liked" } else { "passed on" };
        println!();
        println!(
            "  {} {} {} {}",
            style("✓").green().bold(),
            style(&request.actor_user_id).cyan(),
            verb,
            style(&request.recipient_user_id).cyan()
        );
        if response.mutual_likes {
            println!("  {} It's a match!", style("♥").magenta().bold());
        }
        println!();
    }

    // The decision is stored either way; report the failed lookup last.
    match match_check_error {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

/// Separate a failed match check from other failures.
///
/// The decision is already stored when the match check fails, so its partial
/// response is kept alongside the error.
fn split_match_check(
    outcome: Result<PutDecisionResponse, DecisionError>,
) -> Result<(PutDecisionResponse, Option<DecisionError>), DecisionError> {
    match outcome {
        Ok(response) => Ok((response, None)),
        Err(e @ DecisionError::MatchCheck { .. }) => {
            Ok((e.partial_response().unwrap_or_default(), Some(e)))
        }
        Err(e) => Err(e),
    }
}

/// List users who liked `user` (optionally only unseen ones).
pub async fn list_likes(
    state: &AppState,
    user: &str,
    only_new: bool,
    token: &str,
    json: bool,
) -> Result<()> {
    let page = if only_new {
        state.decision_service.list_new_liked_you(user, token).await?
    } else {
        state.decision_service.list_liked_you(user, token).await?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    print_likers(user, only_new, &page);
    Ok(())
}

fn print_likers(user: &str, only_new: bool, page: &ListLikedYouResponse) {
    if page.likers.is_empty() {
        let what = if only_new { "No new likes" } else { "No likes" };
        println!();
        println!("  {} {what} for {}", style("i").blue().bold(), style(user).cyan());
        println!();
        return;
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Liked by").fg(Color::White),
        Cell::new("When").fg(Color::White),
    ]);

    for liker in &page.likers {
        table.add_row(vec![
            Cell::new(&liker.actor_id).fg(Color::Cyan),
            Cell::new(format_timestamp(liker.unix_timestamp)),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} next page: {}",
        style("→").dim(),
        style(format!(
            "explore likes {user}{} --token '{}'",
            if only_new { " --new" } else { "" },
            page.next_pagination_token
        ))
        .yellow()
    );
    println!();
}

/// Count users who liked `user`.
pub async fn count_likes(state: &AppState, user: &str, json: bool) -> Result<()> {
    let count = state.decision_service.count_liked_you(user).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&count)?);
    } else {
        println!();
        println!(
            "  {} {} liked by {} user(s)",
            style("♥").magenta().bold(),
            style(user).cyan(),
            style(count.count).bold()
        );
        println!();
    }

    Ok(())
}

fn format_timestamp(unix: u64) -> String {
    chrono::DateTime::from_timestamp(unix as i64, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| unix.to_string())
}
