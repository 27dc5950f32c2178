use inbox_pilot::config::AgentConfig;
use inbox_pilot::inbox::{MailboxSource, MockInbox};
use inbox_pilot::pipeline::processor::InboxProcessor;
use inbox_pilot::state::AppState;
use inbox_pilot::store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AgentConfig::from_env();

    eprintln!("📬 Inbox Pilot v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Data dir: {}", config.data_dir.display());
    eprintln!("   Pacing: {:?} per email\n", config.pacing_delay);

    let store = Store::new(config.data_dir.clone());
    store.ensure_dirs().await?;

    let mut state = AppState::load(&store).await;

    // Persist the prompt templates so a first run leaves an editable file
    // behind for the interactive surface.
    state.save_prompts(&store).await?;

    let source = MockInbox;
    let emails = source.fetch().await?;
    eprintln!("   Inbox ({}): {} emails", source.name(), emails.len());

    let processor = InboxProcessor::new(config.pacing_delay);
    processor.process_inbox(&emails, &mut state, &store).await?;

    eprintln!();
    for email in &emails {
        if let Some(result) = state.processed.get(&email.id) {
            eprintln!(
                "   [{}] {:<10} {} ({} action{})",
                email.id,
                result.category.to_string(),
                email.subject,
                result.actions.len(),
                if result.actions.len() == 1 { "" } else { "s" },
            );
        }
    }

    // Show the agent's analysis for the first email with extracted actions.
    if let Some((id, result)) = state
        .processed
        .iter()
        .find(|(_, r)| !r.actions.is_empty())
    {
        eprintln!("\n   Agent analysis for {}:", id);
        for line in result.analysis().lines() {
            eprintln!("   {}", line);
        }
    }

    Ok(())
}
