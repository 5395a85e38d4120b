use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::info;

use triple_translate::{
    EngineConfig, Language, MyMemoryProvider, SlotStatus, TranslatorEngine,
};

/// Type a text into the first slot and watch it fan out to the others.
#[derive(Parser, Debug)]
#[command(name = "triple-translate", version, about)]
struct Args {
    /// Text typed into the first slot
    text: String,

    /// Slot languages, comma separated (e.g. ko,en,ja)
    #[arg(long, default_value = "ko,en,ja", value_delimiter = ',')]
    languages: Vec<Language>,

    /// Interface language for localized labels
    #[arg(long, default_value = "ko")]
    ui_lang: Language,

    /// Quiet period before the fan-out, in milliseconds
    #[arg(long, default_value_t = 800)]
    debounce_ms: u64,

    /// Contact email sent to MyMemory (raises the free-tier quota)
    #[arg(long)]
    contact_email: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let mut provider = MyMemoryProvider::new()?;
    if let Some(email) = &args.contact_email {
        provider = provider.with_contact_email(email);
    }

    let engine = TranslatorEngine::new(
        Arc::new(provider),
        EngineConfig {
            languages: args.languages.clone(),
            debounce: Duration::from_millis(args.debounce_ms),
            ui_locale: args.ui_lang,
        },
    );
    let ui = engine.ui_text();
    println!("{}", ui.title());

    let mut changes = engine.subscribe();
    info!(slots = args.languages.len(), "typing into slot 0");
    engine.edit_text(0, &args.text);

    // Wait for every non-source slot to settle (translated or errored),
    // with a ceiling for slow provider round trips
    let deadline = tokio::time::Instant::now()
        + Duration::from_millis(args.debounce_ms)
        + Duration::from_secs(30);
    loop {
        let settled = changes
            .borrow_and_update()
            .iter()
            .skip(1)
            .all(|s| s.status != SlotStatus::Translating && !s.text.is_empty());
        if settled {
            break;
        }
        tokio::select! {
            changed = changes.changed() => {
                if changed.is_err() {
                    break;
                }
            }
            _ = tokio::time::sleep_until(deadline) => break,
        }
    }

    println!();
    for slot in engine.snapshot() {
        let marker = match slot.status {
            SlotStatus::Idle => " ",
            SlotStatus::Translating => "…",
            SlotStatus::Errored => "!",
        };
        println!("{} [{}] {}", marker, slot.language.native_name(), slot.text);
    }
    println!("\n{}", ui.powered_by());

    Ok(())
}
