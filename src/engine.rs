//! Multi-slot simultaneous translation engine
//!
//! The engine owns a fixed set of translation slots, each holding a
//! language, the current text, and a status. Editing one slot's text fans
//! the committed text out to every other slot through a
//! [`TranslationProvider`](crate::provider::TranslationProvider) after a
//! debounce window; changing a slot's language immediately re-translates
//! into that slot from the first sibling that has content.
//!
//! All slot mutations are applied as minimal per-slot patches, so
//! concurrent completions from one fan-out never corrupt each other: each
//! in-flight call only ever writes to its own target slot. A presentation
//! layer observes the engine through a [`tokio::sync::watch`] channel that
//! carries a full snapshot of the slots after every mutation.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use triple_translate::{EngineConfig, TranslatorEngine, MyMemoryProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Arc::new(MyMemoryProvider::new()?);
//!     let engine = TranslatorEngine::new(provider, EngineConfig::default());
//!     let mut changes = engine.subscribe();
//!
//!     engine.edit_text(0, "안녕");
//!     changes.changed().await?;
//!     for slot in changes.borrow().iter() {
//!         println!("{}: {}", slot.language, slot.text);
//!     }
//!     Ok(())
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::language::Language;
use crate::provider::TranslationProvider;
use crate::ui_text::UiText;

/// Quiet period after the last edit before the fan-out runs
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(800);

/// State of a single translation slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    /// Nothing in flight for this slot
    Idle,
    /// A translation targeting this slot is in flight
    Translating,
    /// The last translation targeting this slot failed
    Errored,
}

/// One (language, text, status) triple in the translation grid
#[derive(Debug)]
struct Slot {
    id: usize,
    language: Language,
    text: String,
    status: SlotStatus,
}

impl Slot {
    fn snapshot(&self) -> SlotSnapshot {
        SlotSnapshot {
            id: self.id,
            language: self.language,
            text: self.text.clone(),
            status: self.status,
        }
    }
}

/// Immutable view of a slot, published to observers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSnapshot {
    /// Stable identity, assigned at creation and never reused
    pub id: usize,
    pub language: Language,
    pub text: String,
    pub status: SlotStatus,
}

/// Engine construction parameters
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Initial language of each slot; the slot count is fixed to this
    /// length for the engine's lifetime. Duplicates are allowed.
    pub languages: Vec<Language>,
    /// Quiet period before an edit fans out
    pub debounce: Duration,
    /// Interface language for the localized in-slot error marker
    pub ui_locale: Language,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            languages: vec![Language::Korean, Language::English, Language::Japanese],
            debounce: DEFAULT_DEBOUNCE,
            ui_locale: Language::Korean,
        }
    }
}

/// The translation slot engine
///
/// Owns the slot collection and the single pending debounce timer. All
/// operations are non-blocking and infallible from the caller's point of
/// view: provider failures degrade to a per-slot error marker and never
/// propagate. Must be used inside a tokio runtime.
pub struct TranslatorEngine {
    inner: Arc<EngineInner>,
}

struct EngineInner {
    slots: Mutex<Vec<Slot>>,
    provider: Arc<dyn TranslationProvider>,
    debounce: Duration,
    ui: UiText,
    /// At most one scheduled fan-out exists system-wide; a newer edit
    /// replaces and aborts it
    pending: Mutex<Option<JoinHandle<()>>>,
    changes: watch::Sender<Vec<SlotSnapshot>>,
}

impl TranslatorEngine {
    /// Create an engine with one slot per configured language, all empty
    /// and idle
    pub fn new(provider: Arc<dyn TranslationProvider>, config: EngineConfig) -> Self {
        let slots: Vec<Slot> = config
            .languages
            .iter()
            .enumerate()
            .map(|(id, &language)| Slot {
                id,
                language,
                text: String::new(),
                status: SlotStatus::Idle,
            })
            .collect();

        let initial: Vec<SlotSnapshot> = slots.iter().map(Slot::snapshot).collect();
        let (changes, _) = watch::channel(initial);

        Self {
            inner: Arc::new(EngineInner {
                slots: Mutex::new(slots),
                provider,
                debounce: config.debounce,
                ui: UiText::new(config.ui_locale),
                pending: Mutex::new(None),
                changes,
            }),
        }
    }

    /// Observe slot changes; the receiver always holds the latest snapshot
    pub fn subscribe(&self) -> watch::Receiver<Vec<SlotSnapshot>> {
        self.inner.changes.subscribe()
    }

    /// Current state of every slot, in slot order
    pub fn snapshot(&self) -> Vec<SlotSnapshot> {
        self.inner
            .slots
            .lock()
            .expect("slot state poisoned")
            .iter()
            .map(Slot::snapshot)
            .collect()
    }

    pub fn slot_count(&self) -> usize {
        self.inner.slots.lock().expect("slot state poisoned").len()
    }

    /// Localized interface strings for the configured UI language
    pub fn ui_text(&self) -> UiText {
        self.inner.ui
    }

    /// Record a text edit in a slot
    ///
    /// The edited slot reflects the new text immediately. A fan-out to
    /// every other slot is scheduled after the debounce window, capturing
    /// the committed text now; any previously scheduled fan-out is
    /// cancelled. A commit that trims to empty clears every slot instead
    /// of translating.
    pub fn edit_text(&self, index: usize, text: &str) {
        {
            let mut slots = self.inner.slots.lock().expect("slot state poisoned");
            let Some(slot) = slots.get_mut(index) else {
                warn!(index, "edit for unknown slot ignored");
                return;
            };
            slot.text = text.to_string();
        }
        self.inner.publish();

        let mut pending = self.inner.pending.lock().expect("debounce state poisoned");
        if let Some(superseded) = pending.take() {
            superseded.abort();
        }

        let inner = Arc::clone(&self.inner);
        let committed = text.to_string();
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(inner.debounce).await;
            inner.fan_out(index, committed).await;
        }));
    }

    /// Reassign a slot's language
    ///
    /// The language takes effect immediately. If any other slot has
    /// content, the first one in index order becomes the content source
    /// and a single translation into the changed slot starts at once,
    /// without waiting for a debounce window. With several non-empty
    /// siblings the lowest index wins; this is the documented policy, not
    /// recency.
    pub fn change_language(&self, index: usize, language: Language) {
        let source = {
            let mut slots = self.inner.slots.lock().expect("slot state poisoned");
            let Some(slot) = slots.get_mut(index) else {
                warn!(index, "language change for unknown slot ignored");
                return;
            };
            slot.language = language;
            slots
                .iter()
                .enumerate()
                .find(|(i, s)| *i != index && !s.text.trim().is_empty())
                .map(|(_, s)| (s.language, s.text.clone()))
        };
        self.inner.publish();

        if let Some((source_lang, text)) = source {
            debug!(slot = index, language = %language, source = %source_lang,
                "language changed, re-translating from content source");
            let inner = Arc::clone(&self.inner);
            tokio::spawn(async move {
                inner.translate_to(index, source_lang, text).await;
            });
        }
    }
}

impl Drop for TranslatorEngine {
    fn drop(&mut self) {
        // Disposal cancels the scheduled fan-out; in-flight provider
        // calls are left to finish against the surviving inner state
        if let Ok(mut pending) = self.inner.pending.lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
        }
    }
}

impl EngineInner {
    /// Debounce expired: translate the committed text into every other
    /// slot, or clear everything if the commit was blank
    async fn fan_out(self: Arc<Self>, source_index: usize, text: String) {
        if text.trim().is_empty() {
            debug!(slot = source_index, "blank commit, clearing all slots");
            self.clear_all();
            return;
        }

        let (source_lang, targets) = {
            let slots = self.slots.lock().expect("slot state poisoned");
            let Some(source) = slots.get(source_index) else {
                return;
            };
            let targets: Vec<usize> = (0..slots.len()).filter(|&i| i != source_index).collect();
            (source.language, targets)
        };

        debug!(slot = source_index, language = %source_lang, targets = targets.len(),
            "fanning out translation");
        for target in targets {
            let engine = Arc::clone(&self);
            let text = text.clone();
            tokio::spawn(async move {
                engine.translate_to(target, source_lang, text).await;
            });
        }
    }

    /// Translate `text` into one target slot
    ///
    /// Same-language pairs short-circuit to a verbatim copy so the
    /// provider never sees a same-language request. A failure marks only
    /// this slot; sibling targets from the same fan-out are unaffected.
    async fn translate_to(&self, target_index: usize, source_lang: Language, text: String) {
        let target_lang = {
            let mut slots = self.slots.lock().expect("slot state poisoned");
            let Some(target) = slots.get_mut(target_index) else {
                return;
            };
            if target.language == source_lang {
                target.text = text.clone();
                target.status = SlotStatus::Idle;
                None
            } else {
                target.status = SlotStatus::Translating;
                Some(target.language)
            }
        };
        self.publish();

        let Some(target_lang) = target_lang else {
            return;
        };

        let outcome = self
            .provider
            .translate(&text, source_lang.code(), target_lang.code())
            .await;

        {
            let mut slots = self.slots.lock().expect("slot state poisoned");
            let Some(target) = slots.get_mut(target_index) else {
                return;
            };
            match outcome {
                Ok(translated) => {
                    target.text = translated;
                    target.status = SlotStatus::Idle;
                }
                Err(err) => {
                    warn!(slot = target_index, language = %target_lang, error = %err,
                        "translation failed");
                    target.text = self.ui.error_marker();
                    target.status = SlotStatus::Errored;
                }
            }
        }
        self.publish();
    }

    fn clear_all(&self) {
        {
            let mut slots = self.slots.lock().expect("slot state poisoned");
            for slot in slots.iter_mut() {
                slot.text.clear();
                slot.status = SlotStatus::Idle;
            }
        }
        self.publish();
    }

    fn publish(&self) {
        let snapshot: Vec<SlotSnapshot> = {
            let slots = self.slots.lock().expect("slot state poisoned");
            slots.iter().map(Slot::snapshot).collect()
        };
        self.changes.send_replace(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{MockMode, MockProvider};

    /// Debounce long enough that it never fires inside a paused-clock test
    const NEVER: Duration = Duration::from_secs(3600);

    fn engine_with(
        mock: &MockProvider,
        languages: Vec<Language>,
        debounce: Duration,
    ) -> TranslatorEngine {
        TranslatorEngine::new(
            Arc::new(mock.clone()),
            EngineConfig {
                languages,
                debounce,
                ui_locale: Language::Korean,
            },
        )
    }

    /// Sleep past the debounce window and let the fan-out settle
    async fn settle(debounce: Duration) {
        tokio::time::sleep(debounce + Duration::from_millis(100)).await;
    }

    // ========== Edit / Fan-out Tests ==========

    #[tokio::test(start_paused = true)]
    async fn test_edit_is_synchronous() {
        let mock = MockProvider::new(MockMode::Suffix);
        let engine = engine_with(&mock, vec![Language::Korean, Language::English], NEVER);

        engine.edit_text(0, "안녕");
        // Visible immediately, before any debounce window elapses
        assert_eq!(engine.snapshot()[0].text, "안녕");
        assert!(mock.recorded_calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fanout_translates_every_other_slot() {
        let mock = MockProvider::new(MockMode::Suffix);
        let engine = engine_with(
            &mock,
            vec![Language::Korean, Language::English, Language::Japanese],
            DEFAULT_DEBOUNCE,
        );

        engine.edit_text(0, "안녕");
        settle(DEFAULT_DEBOUNCE).await;

        let slots = engine.snapshot();
        assert_eq!(slots[0].text, "안녕");
        assert_eq!(slots[1].text, "안녕_en");
        assert_eq!(slots[2].text, "안녕_ja");
        assert!(slots.iter().all(|s| s.status == SlotStatus::Idle));

        let mut targets: Vec<String> = mock
            .recorded_calls()
            .into_iter()
            .map(|(text, source, target)| {
                assert_eq!(text, "안녕");
                assert_eq!(source, "ko");
                target
            })
            .collect();
        targets.sort();
        assert_eq!(targets, vec!["en", "ja"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_edits_produce_single_fanout_with_last_text() {
        let mock = MockProvider::new(MockMode::Suffix);
        let engine = engine_with(
            &mock,
            vec![Language::Korean, Language::English, Language::Japanese],
            DEFAULT_DEBOUNCE,
        );

        engine.edit_text(0, "안");
        engine.edit_text(0, "안녕");
        engine.edit_text(0, "안녕하세요");
        settle(DEFAULT_DEBOUNCE).await;

        let calls = mock.recorded_calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(text, _, _)| text == "안녕하세요"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_edit_in_another_slot_supersedes_pending_fanout() {
        let mock = MockProvider::new(MockMode::Suffix);
        let engine = engine_with(
            &mock,
            vec![Language::Korean, Language::English, Language::Japanese],
            DEFAULT_DEBOUNCE,
        );

        engine.edit_text(0, "안녕");
        engine.edit_text(1, "hello");
        settle(DEFAULT_DEBOUNCE).await;

        // Only slot 1's fan-out ran
        let calls = mock.recorded_calls();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(text, source, _)| text == "hello" && source == "en"));
        assert_eq!(engine.snapshot()[0].text, "hello_ko");
        assert_eq!(engine.snapshot()[2].text, "hello_ja");
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_commit_clears_every_slot() {
        let mock = MockProvider::new(MockMode::Suffix);
        let engine = engine_with(
            &mock,
            vec![Language::Korean, Language::English, Language::Japanese],
            DEFAULT_DEBOUNCE,
        );

        engine.edit_text(0, "안녕");
        settle(DEFAULT_DEBOUNCE).await;
        assert_eq!(engine.snapshot()[1].text, "안녕_en");

        engine.edit_text(1, "   ");
        settle(DEFAULT_DEBOUNCE).await;

        let slots = engine.snapshot();
        assert!(slots.iter().all(|s| s.text.is_empty()));
        assert!(slots.iter().all(|s| s.status == SlotStatus::Idle));
        // The blank commit itself issued no translations
        assert_eq!(mock.recorded_calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_commit_resets_errored_slots() {
        let mock = MockProvider::new(MockMode::FailTarget("ja".to_string()));
        let engine = engine_with(
            &mock,
            vec![Language::Korean, Language::English, Language::Japanese],
            DEFAULT_DEBOUNCE,
        );

        engine.edit_text(0, "안녕");
        settle(DEFAULT_DEBOUNCE).await;
        assert_eq!(engine.snapshot()[2].status, SlotStatus::Errored);

        engine.edit_text(0, "");
        settle(DEFAULT_DEBOUNCE).await;

        let slots = engine.snapshot();
        assert!(slots.iter().all(|s| s.text.is_empty()));
        assert!(slots.iter().all(|s| s.status == SlotStatus::Idle));
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_edit_supersedes_pending_fanout() {
        let mock = MockProvider::new(MockMode::Suffix);
        let engine = engine_with(
            &mock,
            vec![Language::Korean, Language::English, Language::Japanese],
            DEFAULT_DEBOUNCE,
        );

        engine.edit_text(1, "hello");
        engine.edit_text(1, "");
        settle(DEFAULT_DEBOUNCE).await;

        assert!(mock.recorded_calls().is_empty());
        assert!(engine.snapshot().iter().all(|s| s.text.is_empty()));
    }

    // ========== Same-language Short-circuit Tests ==========

    #[tokio::test(start_paused = true)]
    async fn test_same_language_pair_copies_without_provider() {
        let mock = MockProvider::new(MockMode::Suffix);
        let engine = engine_with(
            &mock,
            vec![Language::English, Language::English],
            DEFAULT_DEBOUNCE,
        );

        engine.edit_text(0, "hello");
        settle(DEFAULT_DEBOUNCE).await;

        let slots = engine.snapshot();
        assert_eq!(slots[1].text, "hello");
        assert_eq!(slots[1].status, SlotStatus::Idle);
        assert!(mock.recorded_calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_duplicate_language_slot_skipped_in_mixed_fanout() {
        let mock = MockProvider::new(MockMode::Suffix);
        let engine = engine_with(
            &mock,
            vec![Language::English, Language::English, Language::Japanese],
            DEFAULT_DEBOUNCE,
        );

        engine.edit_text(0, "hi");
        settle(DEFAULT_DEBOUNCE).await;

        let slots = engine.snapshot();
        assert_eq!(slots[1].text, "hi");
        assert_eq!(slots[2].text, "hi_ja");
        let calls = mock.recorded_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].2, "ja");
    }

    // ========== Language Change Tests ==========

    #[tokio::test(start_paused = true)]
    async fn test_language_change_translates_immediately() {
        let mock = MockProvider::new(MockMode::Suffix);
        let engine = engine_with(
            &mock,
            vec![Language::Korean, Language::English, Language::Japanese],
            NEVER,
        );

        engine.edit_text(0, "안녕");
        engine.change_language(1, Language::French);
        // No debounce window: a single yield is enough
        tokio::time::sleep(Duration::from_millis(1)).await;

        let calls = mock.recorded_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            ("안녕".to_string(), "ko".to_string(), "fr".to_string())
        );
        let slots = engine.snapshot();
        assert_eq!(slots[1].language, Language::French);
        assert_eq!(slots[1].text, "안녕_fr");
    }

    #[tokio::test(start_paused = true)]
    async fn test_language_change_sources_from_lowest_index() {
        let mock = MockProvider::new(MockMode::Suffix);
        let engine = engine_with(
            &mock,
            vec![Language::Korean, Language::English, Language::Japanese],
            NEVER,
        );

        engine.edit_text(1, "hello");
        engine.edit_text(2, "こんにちは");
        engine.change_language(0, Language::German);
        tokio::time::sleep(Duration::from_millis(1)).await;

        let calls = mock.recorded_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            ("hello".to_string(), "en".to_string(), "de".to_string())
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_language_change_with_no_content_does_nothing() {
        let mock = MockProvider::new(MockMode::Suffix);
        let engine = engine_with(
            &mock,
            vec![Language::Korean, Language::English, Language::Japanese],
            NEVER,
        );

        engine.change_language(2, Language::Russian);
        tokio::time::sleep(Duration::from_millis(1)).await;

        assert!(mock.recorded_calls().is_empty());
        let slots = engine.snapshot();
        assert_eq!(slots[2].language, Language::Russian);
        assert!(slots.iter().all(|s| s.text.is_empty()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_language_change_to_source_language_copies_verbatim() {
        let mock = MockProvider::new(MockMode::Suffix);
        let engine = engine_with(
            &mock,
            vec![Language::Korean, Language::English, Language::Japanese],
            NEVER,
        );

        engine.edit_text(0, "안녕");
        engine.change_language(1, Language::Korean);
        tokio::time::sleep(Duration::from_millis(1)).await;

        assert!(mock.recorded_calls().is_empty());
        assert_eq!(engine.snapshot()[1].text, "안녕");
    }

    // ========== Failure Isolation Tests ==========

    #[tokio::test(start_paused = true)]
    async fn test_failure_marks_only_its_target_slot() {
        let mock = MockProvider::new(MockMode::FailTarget("ja".to_string()));
        let engine = engine_with(
            &mock,
            vec![Language::Korean, Language::English, Language::Japanese],
            DEFAULT_DEBOUNCE,
        );

        engine.edit_text(0, "안녕");
        settle(DEFAULT_DEBOUNCE).await;

        let slots = engine.snapshot();
        assert_eq!(slots[1].text, "안녕_en");
        assert_eq!(slots[1].status, SlotStatus::Idle);
        assert_eq!(slots[2].text, "[번역 오류]");
        assert_eq!(slots[2].status, SlotStatus::Errored);
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_marker_follows_ui_locale() {
        let mock = MockProvider::new(MockMode::FailAlways("down".to_string()));
        let engine = TranslatorEngine::new(
            Arc::new(mock),
            EngineConfig {
                languages: vec![Language::Korean, Language::English],
                debounce: DEFAULT_DEBOUNCE,
                ui_locale: Language::English,
            },
        );

        engine.edit_text(0, "안녕");
        settle(DEFAULT_DEBOUNCE).await;

        assert_eq!(engine.snapshot()[1].text, "[Translation Error]");
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovery_after_failure() {
        let mock = MockProvider::new(MockMode::FailAlways("down".to_string()));
        let engine = engine_with(
            &mock,
            vec![Language::Korean, Language::English],
            DEFAULT_DEBOUNCE,
        );

        engine.edit_text(0, "안녕");
        settle(DEFAULT_DEBOUNCE).await;
        assert_eq!(engine.snapshot()[1].status, SlotStatus::Errored);

        // No automatic retry: the user re-edits the source to try again
        let retry = MockProvider::new(MockMode::Suffix);
        drop(engine);
        let engine = engine_with(&retry, vec![Language::Korean, Language::English], DEFAULT_DEBOUNCE);
        engine.edit_text(0, "안녕");
        settle(DEFAULT_DEBOUNCE).await;
        assert_eq!(engine.snapshot()[1].status, SlotStatus::Idle);
    }

    // ========== Status Visibility Tests ==========

    #[tokio::test(start_paused = true)]
    async fn test_translating_status_while_call_in_flight() {
        let mock = MockProvider::with_delay(MockMode::Suffix, 100);
        let engine = engine_with(
            &mock,
            vec![Language::Korean, Language::English, Language::Japanese],
            DEFAULT_DEBOUNCE,
        );

        engine.edit_text(0, "안녕");
        // Past the debounce, but before the simulated network resolves
        tokio::time::sleep(DEFAULT_DEBOUNCE + Duration::from_millis(50)).await;
        let slots = engine.snapshot();
        assert_eq!(slots[1].status, SlotStatus::Translating);
        assert_eq!(slots[2].status, SlotStatus::Translating);

        tokio::time::sleep(Duration::from_millis(100)).await;
        let slots = engine.snapshot();
        assert_eq!(slots[1].status, SlotStatus::Idle);
        assert_eq!(slots[2].status, SlotStatus::Idle);
    }

    // ========== Observer / Identity Tests ==========

    #[tokio::test(start_paused = true)]
    async fn test_watch_receives_snapshots() {
        let mock = MockProvider::new(MockMode::Suffix);
        let engine = engine_with(
            &mock,
            vec![Language::Korean, Language::English],
            DEFAULT_DEBOUNCE,
        );
        let mut changes = engine.subscribe();

        engine.edit_text(0, "안녕");
        changes.changed().await.unwrap();
        assert_eq!(changes.borrow()[0].text, "안녕");

        settle(DEFAULT_DEBOUNCE).await;
        assert_eq!(changes.borrow_and_update()[1].text, "안녕_en");
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_fanout() {
        let mock = MockProvider::new(MockMode::Suffix);
        let engine = engine_with(
            &mock,
            vec![Language::Korean, Language::English, Language::Japanese],
            DEFAULT_DEBOUNCE,
        );

        engine.edit_text(0, "안녕");
        drop(engine);
        // Well past the debounce window the aborted timer must not fire
        tokio::time::sleep(DEFAULT_DEBOUNCE * 2).await;

        assert!(mock.recorded_calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_slot_ids_are_stable() {
        let mock = MockProvider::new(MockMode::Suffix);
        let engine = engine_with(
            &mock,
            vec![Language::Korean, Language::English, Language::Japanese],
            DEFAULT_DEBOUNCE,
        );

        engine.edit_text(0, "안녕");
        engine.change_language(2, Language::French);
        settle(DEFAULT_DEBOUNCE).await;

        let ids: Vec<usize> = engine.snapshot().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_range_operations_are_ignored() {
        let mock = MockProvider::new(MockMode::Suffix);
        let engine = engine_with(&mock, vec![Language::Korean, Language::English], NEVER);

        engine.edit_text(7, "안녕");
        engine.change_language(7, Language::French);
        tokio::time::sleep(Duration::from_millis(1)).await;

        assert!(mock.recorded_calls().is_empty());
        assert!(engine.snapshot().iter().all(|s| s.text.is_empty()));
    }
}
