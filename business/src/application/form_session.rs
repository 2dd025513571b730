use std::sync::Arc;

use crate::application::image_intake::{AcceptedImage, ImageIntake};
use crate::application::list_store::EntityListStore;
use crate::domain::form::errors::SessionError;
use crate::domain::form::model::EntityForm;
use crate::domain::gateway::{Gateway, Resource};
use crate::domain::image::errors::ImageError;
use crate::domain::image::model::CompressedImage;
use crate::domain::image::preview::{Preview, PreviewHandle};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Editing,
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
struct PendingImage {
    image: CompressedImage,
    preview: PreviewHandle,
}

/// State of one create/edit form and the dispatch of its result.
///
/// `Idle -> Editing` on `start_create`/`start_edit`/field edits,
/// `Editing -> Submitting` on `submit`, then back to `Idle` on success
/// (list refreshed) or `Editing` on failure (fields kept).
pub struct FormSession<F: EntityForm> {
    gateway: Arc<dyn Gateway<F::Entity>>,
    logger: Arc<dyn Logger>,
    intake: Option<Arc<ImageIntake>>,
    fields: F,
    editing_id: Option<EntityId>,
    pending_image: Option<PendingImage>,
    preview: Option<Preview>,
    phase: SessionPhase,
}

impl<F: EntityForm> FormSession<F> {
    pub fn new(gateway: Arc<dyn Gateway<F::Entity>>, logger: Arc<dyn Logger>) -> Self {
        Self {
            gateway,
            logger,
            intake: None,
            fields: F::default(),
            editing_id: None,
            pending_image: None,
            preview: None,
            phase: SessionPhase::Idle,
        }
    }

    pub fn with_image_intake(mut self, intake: Arc<ImageIntake>) -> Self {
        self.intake = Some(intake);
        self
    }

    pub fn fields(&self) -> &F {
        &self.fields
    }

    /// Mutable access for field edits; moves an idle session into editing.
    pub fn fields_mut(&mut self) -> &mut F {
        if self.phase == SessionPhase::Idle {
            self.phase = SessionPhase::Editing;
        }
        &mut self.fields
    }

    pub fn editing_id(&self) -> Option<&EntityId> {
        self.editing_id.as_ref()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn pending_image(&self) -> Option<&CompressedImage> {
        self.pending_image.as_ref().map(|pending| &pending.image)
    }

    pub fn start_create(&mut self) {
        self.clear();
        self.phase = SessionPhase::Editing;
    }

    pub fn start_edit(&mut self, entity: &F::Entity) {
        self.clear();
        self.fields = F::from_entity(entity);
        self.editing_id = Some(entity.id().clone());
        self.preview = F::remote_preview(entity).map(Preview::Remote);
        self.phase = SessionPhase::Editing;
        self.logger.debug(&format!(
            "Editing {} {}",
            <F::Entity as Resource>::KIND,
            entity.id()
        ));
    }

    /// Drops all form state and returns to `Idle`.
    pub fn reset(&mut self) {
        self.clear();
        self.phase = SessionPhase::Idle;
    }

    /// Makes an intake result the pending picture, replacing (and releasing) any previous one.
    ///
    /// Stale results, from before a reset or a newer selection, are released and rejected.
    pub fn attach_image(&mut self, accepted: AcceptedImage) -> Result<(), ImageError> {
        let Some(intake) = self.intake.clone() else {
            return Err(ImageError::IntakeUnavailable);
        };

        if !intake.is_current(&accepted) {
            intake.release(&accepted.preview);
            self.logger.debug("Dropping stale image selection");
            return Err(ImageError::Superseded);
        }

        self.release_pending_image();
        self.preview = Some(Preview::Local(accepted.preview.clone()));
        self.pending_image = Some(PendingImage {
            image: accepted.image,
            preview: accepted.preview,
        });
        if self.phase == SessionPhase::Idle {
            self.phase = SessionPhase::Editing;
        }
        Ok(())
    }

    /// Validates, sends create or update, and on success resets the form and refreshes `store`.
    pub async fn submit(
        &mut self,
        store: &mut EntityListStore<F::Entity>,
    ) -> Result<F::Entity, SessionError> {
        let kind = <F::Entity as Resource>::KIND;

        let missing = self.fields.missing_fields();
        if !missing.is_empty() {
            self.logger.warn(&format!(
                "Rejected {} form, missing: {}",
                kind,
                missing.join(", ")
            ));
            return Err(SessionError::MissingFields(missing));
        }

        let payload = self
            .fields
            .to_payload(self.pending_image.as_ref().map(|p| p.image.clone()));
        self.phase = SessionPhase::Submitting;

        let result = match &self.editing_id {
            Some(id) => {
                self.logger.info(&format!("Updating {}: {}", kind, id));
                self.gateway.update(id, payload).await
            }
            None => {
                self.logger.info(&format!("Creating {}", kind));
                self.gateway.create(payload).await
            }
        };

        match result {
            Ok(entity) => {
                self.logger
                    .info(&format!("Saved {} with id: {}", kind, entity.id()));
                self.reset();
                // The save already happened; a failed refresh only marks the store.
                let _ = store.refresh().await;
                Ok(entity)
            }
            Err(e) => {
                self.logger
                    .error(&format!("Failed to save {}: {}", kind, e.detail()));
                self.phase = SessionPhase::Editing;
                Err(SessionError::Gateway(e))
            }
        }
    }

    fn clear(&mut self) {
        self.release_pending_image();
        if let Some(intake) = &self.intake {
            intake.invalidate();
        }
        self.fields = F::default();
        self.editing_id = None;
        self.preview = None;
    }

    fn release_pending_image(&mut self) {
        if let Some(pending) = self.pending_image.take()
            && let Some(intake) = &self.intake
        {
            intake.release(&pending.preview);
        }
    }
}

impl<F: EntityForm> Drop for FormSession<F> {
    /// Frees the pending preview and makes in-flight selections stale.
    fn drop(&mut self) {
        self.release_pending_image();
        if let Some(intake) = &self.intake {
            intake.invalidate();
        }
    }
}
