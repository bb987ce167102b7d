//! Non-interactive commands.

use std::io::Write;

use exoview_client::{ArchiveClient, load_session};
use exoview_core::{FilterCriteria, ListView, MethodFilter, SessionState};

use crate::Result;
use crate::config::ExoviewConfig;

/// Fetch once, filter, and print the matching cards.
///
/// A failed fetch is printed as the list's error message, the same text the
/// browser shows, and then returned as an error.
pub async fn run_list(
    config: &ExoviewConfig,
    search: &str,
    method: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let client = ArchiveClient::new(&config.archive)?;
    log::debug!("Listing via {}: {}", client.endpoint(), client.query().adql());
    let criteria = FilterCriteria::new()
        .with_search(search)
        .with_method(MethodFilter::from_selector(method));

    let mut session = SessionState::new();
    let view = match load_session(&client, &mut session).await {
        Ok(_) => ListView::from_matches(
            session
                .records()
                .iter()
                .enumerate()
                .filter(|(_, record)| criteria.matches(record)),
        ),
        Err(e) => {
            let view = ListView::load_error(&e);
            write_list(&view, json, out)?;
            return Err(e.into());
        }
    };

    log::debug!(
        "{} of {} records match",
        view.cards().len(),
        session.records().len()
    );
    write_list(&view, json, out)
}

/// Print a list view as text or JSON.
pub fn write_list(view: &ListView, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, view)?;
        writeln!(out)?;
        return Ok(());
    }

    if let Some(message) = view.message() {
        writeln!(out, "{message}")?;
        return Ok(());
    }

    for card in view.cards() {
        writeln!(out, "{}", card.title)?;
        for field in &card.fields {
            writeln!(out, "  {}: {}", field.label, field.value)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
