use anyhow::{ensure, Context, Result};
use plalz_core::domain::quote::QuoteStatus;
use plalz_core::store::{QuoteStoreHandle, SnapshotStore};

use super::parse_quote_id;
use crate::QuoteCommand;

pub fn run<S: SnapshotStore>(
    handle: &mut QuoteStoreHandle<S>,
    command: QuoteCommand,
) -> Result<String> {
    match command {
        QuoteCommand::Save => {
            let id = handle.save_quote().context("store is not hydrated")?;
            Ok(format!("saved quote {id} at estimated price {}", handle.estimated_price()))
        }
        QuoteCommand::List { json } => list(handle, json),
        QuoteCommand::Show { id } => {
            let id = parse_quote_id(&id)?;
            let quote =
                handle.find_quote(&id).with_context(|| format!("no quote with id {id}"))?;
            Ok(serde_json::to_string_pretty(quote)?)
        }
        QuoteCommand::Submit { id } => {
            let id = parse_quote_id(&id)?;
            ensure!(handle.submit_quote(&id), "no quote with id {id}");
            Ok(format!("quote {id} submitted"))
        }
        QuoteCommand::Load { id } => {
            let id = parse_quote_id(&id)?;
            ensure!(handle.load_quote(&id), "no quote with id {id}");
            Ok(format!(
                "quote {id} loaded into the draft; estimated price {}",
                handle.estimated_price()
            ))
        }
        QuoteCommand::Delete { id } => {
            let id = parse_quote_id(&id)?;
            ensure!(handle.delete_quote(&id), "no quote with id {id}");
            Ok(format!("quote {id} deleted"))
        }
        QuoteCommand::SetStatus { id, status } => set_status(handle, &id, status),
    }
}

fn set_status<S: SnapshotStore>(
    handle: &mut QuoteStoreHandle<S>,
    raw_id: &str,
    status: QuoteStatus,
) -> Result<String> {
    let id = parse_quote_id(raw_id)?;
    // The store accepts any target status; the advisory path check only
    // annotates the output.
    let on_path = handle.find_quote(&id).map(|quote| quote.can_transition_to(status));
    ensure!(handle.update_quote_status(&id, status), "no quote with id {id}");

    let mut output = format!("quote {id} status set to {status:?}");
    if on_path == Some(false) {
        output.push_str(" (outside the usual draft -> submitted -> in-review -> quoted path)");
    }
    Ok(output)
}

fn list<S: SnapshotStore>(handle: &QuoteStoreHandle<S>, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(handle.quotes())?);
    }

    if handle.quotes().is_empty() {
        return Ok("no saved quotes".to_string());
    }

    let rows: Vec<String> = handle
        .quotes()
        .iter()
        .map(|quote| {
            format!(
                "{}  {:<9}  {:>8}  {}",
                quote.id,
                format!("{:?}", quote.status),
                quote.estimated_price.to_string(),
                quote.created_at.format("%Y-%m-%d %H:%M")
            )
        })
        .collect();
    Ok(rows.join("\n"))
}
