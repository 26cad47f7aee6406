use care_api::{ApiClient, ApiError, Mutation, Resource};
use care_core::entities::Psychologist;
use care_core::pagination::{ListQuery, Pagination};

use crate::RequestStatus;

/// Client-side state for one REST collection.
#[derive(Debug)]
pub struct ResourceStore<R: Resource> {
    client: ApiClient,
    items: Vec<R>,
    pagination: Pagination,
    selected: Option<R>,
    status: RequestStatus,
    error: Option<String>,
    success: Option<String>,
    query: ListQuery,
}

impl<R: Resource> ResourceStore<R> {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self::with_query(client, ListQuery::default())
    }

    /// Store whose first re-fetch uses `query`.
    #[must_use]
    pub fn with_query(client: ApiClient, query: ListQuery) -> Self {
        Self {
            client,
            items: Vec::new(),
            pagination: Pagination::default(),
            selected: None,
            status: RequestStatus::Idle,
            error: None,
            success: None,
            query,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[R] {
        &self.items
    }

    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    #[must_use]
    pub const fn selected(&self) -> Option<&R> {
        self.selected.as_ref()
    }

    #[must_use]
    pub const fn status(&self) -> RequestStatus {
        self.status
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Query used by the last list fetch.
    #[must_use]
    pub const fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn clear_messages(&mut self) {
        self.error = None;
        self.success = None;
    }

    fn begin(&mut self) {
        self.status = RequestStatus::Pending;
        self.error = None;
        self.success = None;
    }

    fn reject(&mut self, error: ApiError) -> ApiError {
        tracing::debug!(resource = R::PLURAL, %error, "request rejected");
        self.status = RequestStatus::Rejected;
        self.error = Some(error.notification());
        error
    }

    fn succeed(&mut self, message: String) {
        self.status = RequestStatus::Fulfilled;
        self.success = Some(message);
    }

    /// Load one page. On failure the current items stay in place.
    ///
    /// # Errors
    ///
    /// Propagates the [`ApiError`] after recording its message.
    pub async fn fetch(&mut self, query: ListQuery) -> Result<(), ApiError> {
        self.begin();
        match self.client.list::<R>(&query).await {
            Ok(page) => {
                tracing::debug!(
                    resource = R::PLURAL,
                    items = page.items.len(),
                    total = page.pagination.total,
                    "page loaded"
                );
                self.items = page.items;
                self.pagination = page.pagination;
                self.query = query;
                self.status = RequestStatus::Fulfilled;
                Ok(())
            }
            Err(e) => Err(self.reject(e)),
        }
    }

    /// Load one record into `selected`.
    ///
    /// # Errors
    ///
    /// Propagates the [`ApiError`] after recording its message.
    pub async fn fetch_one(&mut self, id: &str) -> Result<&R, ApiError> {
        self.begin();
        match self.client.get::<R>(id).await {
            Ok(record) => {
                self.status = RequestStatus::Fulfilled;
                Ok(self.selected.insert(record))
            }
            Err(e) => Err(self.reject(e)),
        }
    }

    /// Create a record, then re-fetch the list once with the last query.
    ///
    /// Returns the created record when the server echoed it. A failed
    /// re-fetch is recorded in [`Self::error`] without failing the create.
    ///
    /// # Errors
    ///
    /// Validation, transport or status errors from the create itself.
    pub async fn create(&mut self, draft: &R::Draft) -> Result<Option<R>, ApiError> {
        self.begin();
        let created = match self.client.create::<R>(draft).await {
            Ok(m) => m,
            Err(e) => return Err(self.reject(e)),
        };
        let query = self.query.clone();
        if let Err(error) = self.fetch(query).await {
            tracing::warn!(resource = R::PLURAL, %error, "re-fetch after create failed");
        }
        // The re-fetch resets messages; the create's own message survives it.
        self.success = Some(created.message);
        Ok(created.record)
    }

    /// Apply a patch and swap the updated record into `items` and
    /// `selected`.
    ///
    /// # Errors
    ///
    /// Validation (including checks against the stored record), transport
    /// or status errors.
    pub async fn update(&mut self, id: &str, patch: &R::Patch) -> Result<R, ApiError> {
        self.begin();
        if R::CHECKS_PATCH
            && let Err(e) = self.check_against_current(id, patch).await
        {
            return Err(self.reject(e));
        }

        let Mutation { record, message } = match self.client.update::<R>(id, patch).await {
            Ok(m) => m,
            Err(e) => return Err(self.reject(e)),
        };
        let record = match record {
            Some(record) => record,
            None => match self.client.get::<R>(id).await {
                Ok(record) => record,
                Err(e) => return Err(self.reject(e)),
            },
        };

        self.replace(id, &record);
        self.succeed(message);
        Ok(record)
    }

    async fn check_against_current(&self, id: &str, patch: &R::Patch) -> Result<(), ApiError> {
        let loaded = self
            .selected
            .iter()
            .chain(self.items.iter())
            .find(|r| r.id() == id)
            .cloned();
        let current = match loaded {
            Some(current) => current,
            None => self.client.get::<R>(id).await?,
        };
        R::check_patch(&current, patch)?;
        Ok(())
    }

    fn replace(&mut self, id: &str, record: &R) {
        if let Some(slot) = self.items.iter_mut().find(|r| r.id() == id) {
            *slot = record.clone();
        }
        if let Some(selected) = self.selected.as_mut()
            && selected.id() == id
        {
            *selected = record.clone();
        }
    }

    /// Delete a record and drop exactly that record from local state.
    ///
    /// # Errors
    ///
    /// Transport or status errors; local state is untouched on failure.
    pub async fn delete(&mut self, id: &str) -> Result<(), ApiError> {
        self.begin();
        let deleted = match self.client.delete::<R>(id).await {
            Ok(m) => m,
            Err(e) => return Err(self.reject(e)),
        };

        if let Some(pos) = self.items.iter().position(|r| r.id() == id) {
            self.items.remove(pos);
            self.pagination.record_removed();
        }
        if self.selected.as_ref().is_some_and(|r| r.id() == id) {
            self.selected = None;
        }
        self.succeed(deleted.message);
        Ok(())
    }
}

impl ResourceStore<Psychologist> {
    /// Activate or deactivate a psychologist account in place.
    ///
    /// # Errors
    ///
    /// Transport or status errors.
    pub async fn set_active(&mut self, id: &str, active: bool) -> Result<Psychologist, ApiError> {
        self.begin();
        let Mutation { record, message } =
            match self.client.set_psychologist_active(id, active).await {
                Ok(m) => m,
                Err(e) => return Err(self.reject(e)),
            };

        let record = record.or_else(|| {
            self.selected
                .iter()
                .chain(self.items.iter())
                .find(|p| p.id == id)
                .cloned()
                .map(|p| Psychologist {
                    is_active: active,
                    ..p
                })
        });
        let record = match record {
            Some(record) => record,
            None => match self.client.get::<Psychologist>(id).await {
                Ok(record) => record,
                Err(e) => return Err(self.reject(e)),
            },
        };

        self.replace(id, &record);
        self.succeed(message);
        Ok(record)
    }
}
