use anyhow::Result;
use plalz_core::store::{QuoteStoreHandle, SnapshotStore};

use super::render_option;
use crate::DraftCommand;

pub fn run<S: SnapshotStore>(
    handle: &mut QuoteStoreHandle<S>,
    command: DraftCommand,
) -> Result<String> {
    match command {
        DraftCommand::Show { json } => show(handle, json),
        DraftCommand::Update { step, form } => {
            let step = step.unwrap_or_else(|| handle.current_step());
            handle.update_quote_data(step, form.into_patch());
            Ok(format!(
                "draft updated at step {step}; estimated price {}",
                handle.estimated_price()
            ))
        }
        DraftCommand::Step { step } => {
            handle.set_current_step(step);
            Ok(format!("step cursor moved to {step}"))
        }
        DraftCommand::Clear => {
            handle.clear_current_quote();
            Ok("draft cleared".to_string())
        }
    }
}

fn show<S: SnapshotStore>(handle: &QuoteStoreHandle<S>, json: bool) -> Result<String> {
    if json {
        let payload = serde_json::json!({
            "current_step": handle.current_step(),
            "estimated_price": handle.estimated_price(),
            "current_quote": handle.current_quote(),
        });
        return Ok(serde_json::to_string_pretty(&payload)?);
    }

    let draft = handle.current_quote();
    let features: Vec<&str> =
        draft.selected_features.iter().map(|feature| feature.0.as_str()).collect();
    let integrations: Vec<&str> =
        draft.selected_integrations.iter().map(|integration| integration.0.as_str()).collect();

    Ok([
        format!("step            {}", handle.current_step()),
        format!("project type    {}", render_option(draft.project_type)),
        format!("industry        {}", render_option(draft.industry)),
        format!(
            "features        {}",
            if features.is_empty() { "(none)".to_string() } else { features.join(", ") }
        ),
        format!(
            "integrations    {}",
            if integrations.is_empty() { "(none)".to_string() } else { integrations.join(", ") }
        ),
        format!("design          {}", render_option(draft.design_type())),
        format!("priority        {}", render_option(draft.timeline_priority())),
        format!("estimated       {}", handle.estimated_price()),
    ]
    .join("\n"))
}
