use crate::domain::model::{
    normalize_field_value, to_field_value, DialogLayout, DialogRequest, DialogResponse, DialogSeed,
    DialogText, Ingredient, Locale, NormalizeMode,
};
use crate::domain::ports::{DialogGateway, EntryAccessor, FieldStore, LocaleSource};
use crate::utils::error::Result;

/// Construction-time knobs. `Default` gives permissive normalization and the
/// stock dialog text.
#[derive(Debug, Clone, Default)]
pub struct ControllerOptions {
    pub normalize: NormalizeMode,
    pub text: DialogText,
}

/// Owns the in-memory ingredient list of one field locale and keeps it
/// synchronized with the bound field store. Every mutation writes through to
/// the store first; the cached list moves only after the write succeeded, so
/// the list never runs ahead of what the host persisted.
pub struct IngredientListController<F, D, L, E>
where
    F: FieldStore,
    D: DialogGateway,
    L: LocaleSource,
    E: EntryAccessor,
{
    field: F,
    dialogs: D,
    locales: L,
    entry: E,
    options: ControllerOptions,
    list: Vec<Ingredient>,
}

impl<F, D, L, E> IngredientListController<F, D, L, E>
where
    F: FieldStore,
    D: DialogGateway,
    L: LocaleSource,
    E: EntryAccessor,
{
    pub async fn new(field: F, dialogs: D, locales: L, entry: E) -> Result<Self> {
        Self::with_options(field, dialogs, locales, entry, ControllerOptions::default()).await
    }

    pub async fn with_options(
        field: F,
        dialogs: D,
        locales: L,
        entry: E,
        options: ControllerOptions,
    ) -> Result<Self> {
        let mut controller = Self {
            field,
            dialogs,
            locales,
            entry,
            options,
            list: Vec::new(),
        };
        controller.resync().await?;
        Ok(controller)
    }

    /// Re-derives the list from the current field value. Runs at construction
    /// and whenever the host changed the value behind the controller's back.
    pub async fn resync(&mut self) -> Result<usize> {
        let raw = self.field.get_value().await?;
        self.list = normalize_field_value(raw.as_ref(), self.options.normalize)?;
        tracing::debug!(
            locale = %self.field.locale(),
            rows = self.list.len(),
            "list synchronized from field"
        );
        Ok(self.list.len())
    }

    /// Swaps the bound field, e.g. after a locale switch, and resyncs.
    pub async fn rebind(&mut self, field: F) -> Result<usize> {
        self.field = field;
        self.resync().await
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn locale(&self) -> Locale {
        self.field.locale()
    }

    /// Bulk editing only makes sense once there are rows to edit.
    pub fn can_bulk_edit(&self) -> bool {
        !self.list.is_empty()
    }

    pub fn can_clear(&self) -> bool {
        !self.list.is_empty()
    }

    /// Copying is offered only for an empty list in a non-default locale.
    pub fn can_copy_from_default_locale(&self) -> bool {
        self.list.is_empty() && self.field.locale() != self.locales.default_locale()
    }

    /// Appends a record. `None` (a cancelled dialog) and blank records leave
    /// the list untouched without a write. Returns the resulting list length.
    pub async fn add(&mut self, ingredient: Option<Ingredient>) -> Result<usize> {
        let Some(ingredient) = ingredient else {
            tracing::debug!("add skipped: no record to apply");
            return Ok(self.list.len());
        };
        if ingredient.is_blank() {
            tracing::debug!("add skipped: blank record");
            return Ok(self.list.len());
        }

        let mut next = self.list.clone();
        next.push(ingredient);
        self.commit(next).await?;
        Ok(self.list.len())
    }

    pub async fn open_add_dialog(&mut self) -> Result<usize> {
        let request = DialogRequest {
            title: self.options.text.add_title.clone(),
            seed: DialogSeed::Empty,
            layout: DialogLayout::Default,
        };
        let response = self.dialogs.open_dialog(request).await?;
        self.add(Self::single_record(response)).await
    }

    /// Replaces the record at `index`. A missing or blank record, or an index
    /// beyond the list, leaves the list untouched and writes nothing.
    pub async fn edit(&mut self, ingredient: Option<Ingredient>, index: usize) -> Result<()> {
        let Some(ingredient) = ingredient else {
            tracing::debug!(index, "edit skipped: no record to apply");
            return Ok(());
        };
        if ingredient.is_blank() || index >= self.list.len() {
            tracing::debug!(index, len = self.list.len(), "edit skipped: blank record or index out of range");
            return Ok(());
        }

        let mut next = self.list.clone();
        next[index] = ingredient;
        self.commit(next).await
    }

    pub async fn open_edit_dialog(&mut self, index: usize) -> Result<()> {
        let Some(current) = self.list.get(index) else {
            tracing::debug!(index, len = self.list.len(), "edit dialog skipped: index out of range");
            return Ok(());
        };
        let request = DialogRequest {
            title: self.options.text.edit_title.clone(),
            seed: DialogSeed::Ingredient(current.clone()),
            layout: DialogLayout::Default,
        };
        let response = self.dialogs.open_dialog(request).await?;
        self.edit(Self::single_record(response), index).await
    }

    /// Replaces the whole list. An empty row set is a no-op: a blank bulk
    /// submission must not wipe existing rows.
    pub async fn bulk_replace(&mut self, rows: Vec<Ingredient>) -> Result<()> {
        if rows.is_empty() {
            tracing::debug!("bulk replace skipped: empty row set");
            return Ok(());
        }
        self.commit(rows).await
    }

    pub async fn open_bulk_edit_dialog(&mut self) -> Result<()> {
        let request = DialogRequest {
            title: self.options.text.bulk_edit_title.clone(),
            seed: DialogSeed::Rows(self.list.clone()),
            layout: DialogLayout::FullWidth,
        };
        let response = self.dialogs.open_dialog(request).await?;
        match Self::row_set(response) {
            Some(rows) => self.bulk_replace(rows).await,
            None => Ok(()),
        }
    }

    /// Drops the record at `index`, keeping the order of the rest. An
    /// out-of-range index is a guaranteed no-op without a write.
    pub async fn remove(&mut self, index: usize) -> Result<()> {
        if index >= self.list.len() {
            tracing::debug!(index, len = self.list.len(), "remove skipped: index out of range");
            return Ok(());
        }
        let mut next = self.list.clone();
        next.remove(index);
        self.commit(next).await
    }

    /// Empties the list once the user confirms. Declining changes nothing.
    pub async fn clear_all(&mut self) -> Result<()> {
        let confirmed = self
            .dialogs
            .open_confirm(self.options.text.clear_confirm())
            .await?;
        if !confirmed {
            tracing::debug!("clear declined");
            return Ok(());
        }
        self.commit(Vec::new()).await
    }

    /// Seeds an empty localized list from the default locale. The source value
    /// passes through the same boundary normalization as a field read, so a
    /// wrapper-shaped source still lands as a plain array. Outside its
    /// preconditions this is a no-op without a write.
    pub async fn copy_from_default_locale(&mut self) -> Result<()> {
        if !self.can_copy_from_default_locale() {
            tracing::debug!(
                locale = %self.field.locale(),
                rows = self.list.len(),
                "copy from default locale skipped: preconditions not met"
            );
            return Ok(());
        }

        let default_locale = self.locales.default_locale();
        let raw = self.entry.field_value_for(&default_locale).await?;
        let rows = normalize_field_value(raw.as_ref(), self.options.normalize)?;
        tracing::debug!(from = %default_locale, rows = rows.len(), "copying rows from default locale");
        self.commit(rows).await
    }

    fn single_record(response: DialogResponse) -> Option<Ingredient> {
        match response {
            DialogResponse::Ingredient(ingredient) => Some(ingredient),
            DialogResponse::Cancelled => None,
            DialogResponse::Rows(_) => {
                tracing::warn!("single-record dialog resolved with a row set; ignoring");
                None
            }
        }
    }

    fn row_set(response: DialogResponse) -> Option<Vec<Ingredient>> {
        match response {
            DialogResponse::Rows(rows) => Some(rows),
            DialogResponse::Cancelled => None,
            DialogResponse::Ingredient(_) => {
                tracing::warn!("bulk dialog resolved with a single record; ignoring");
                None
            }
        }
    }

    /// Write-through: the store sees the new value first, the cache moves only
    /// after the write succeeded.
    async fn commit(&mut self, next: Vec<Ingredient>) -> Result<()> {
        self.field.set_value(to_field_value(&next)).await?;
        tracing::debug!(locale = %self.field.locale(), rows = next.len(), "field value persisted");
        self.list = next;
        Ok(())
    }
}
