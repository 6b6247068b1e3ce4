// AudioErrorDialogManager - classifies audio error codes.
//
// missingSpeaker gets the dedicated instructional dialog; every other code is
// translated and re-dispatched as a generic display-error action, which then
// flows through the notification pathway. Handling is serialized: the run
// loop awaits the translation before taking the next value, so codes are
// processed strictly in emission order.

use crate::metrics::shell_metrics;
use crate::models::AudioError;
use crate::services::translation::Translator;
use crate::state::{Action, Selection, StateManager};
use crate::ui::surface::DialogHost;
use std::sync::Arc;

/// Routes audio error codes to the instructional dialog or the generic error
/// pathway.
pub struct AudioErrorDialogManager {
    store: StateManager,
    dialogs: Arc<dyn DialogHost>,
    translator: Arc<dyn Translator>,
}

impl AudioErrorDialogManager {
    pub fn new(
        store: StateManager,
        dialogs: Arc<dyn DialogHost>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            store,
            dialogs,
            translator,
        }
    }

    /// Consume the audio error stream until the store goes away.
    pub async fn run(self, mut audio_errors: Selection<Option<AudioError>>) {
        tracing::debug!("audio error dialog manager started");

        while let Some(value) = audio_errors.next().await {
            let Some(error) = value else {
                continue;
            };
            self.on_error(error).await;
        }

        tracing::debug!("audio error dialog manager stopped");
    }

    /// Handle one audio error code.
    pub async fn on_error(&self, error: AudioError) {
        match error {
            AudioError::MissingSpeaker => {
                tracing::info!("audio error missingSpeaker - opening instructions dialog");
                self.dialogs.open_audio_instructions();
                shell_metrics().record_instruction_dialog_opened();
            }
            other => {
                let key = other.translation_key();
                let text = match self.translator.translate(&key).await {
                    Ok(text) => {
                        shell_metrics().record_translation_resolved();
                        text
                    }
                    Err(err) => {
                        // Surface the raw key rather than dropping the error.
                        shell_metrics().record_translation_failed();
                        tracing::warn!(
                            "translation failed for audio error {}: {} - falling back to key",
                            other,
                            err
                        );
                        key
                    }
                };

                tracing::debug!("audio error {} resolved to generic message", other);
                self.store.dispatch(Action::DisplayError(text));
            }
        }
    }
}
