//! Contact repository for managing contact operations.

use std::future::Future;

use diesel::dsl::now;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::{Contact, NewContact, UpdateContact};
use crate::schema::contacts;
use crate::types::{ContactFilter, OffsetPage, OffsetPagination};
use crate::{PgConnection, PgError, PgResult, TRACING_TARGET_QUERY};

/// Repository for contact database operations.
///
/// Every read, count and mutation ignores soft-deleted rows, so a deleted
/// contact is indistinguishable from one that never existed.
pub trait ContactRepository {
    /// Creates a new contact.
    ///
    /// Fails with a query error carrying the `contacts_email_unique_idx`
    /// constraint when a live contact already uses the email.
    fn create_contact(
        &mut self,
        contact: NewContact,
    ) -> impl Future<Output = PgResult<Contact>> + Send;

    /// Finds a live contact by ID.
    fn find_contact_by_id(
        &mut self,
        contact_id: i64,
    ) -> impl Future<Output = PgResult<Option<Contact>>> + Send;

    /// Applies partial changes to a live contact and refreshes `updated_at`.
    ///
    /// Returns `None` if no live contact has the ID.
    fn update_contact(
        &mut self,
        contact_id: i64,
        changes: UpdateContact,
    ) -> impl Future<Output = PgResult<Option<Contact>>> + Send;

    /// Soft deletes a contact by setting the deletion timestamp.
    ///
    /// Returns `false` if no live contact has the ID.
    fn delete_contact(&mut self, contact_id: i64) -> impl Future<Output = PgResult<bool>> + Send;

    /// Counts live contacts matching the filter.
    fn count_contacts(
        &mut self,
        filter: &ContactFilter,
    ) -> impl Future<Output = PgResult<i64>> + Send;

    /// Lists live contacts matching the filter.
    ///
    /// Returns contacts ordered by creation time with most recent first,
    /// ties broken by descending ID.
    fn find_contacts(
        &mut self,
        filter: &ContactFilter,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<Contact>>> + Send;

    /// Lists one page of contacts together with the total match count.
    ///
    /// The count query only runs when `include_count` is set.
    fn find_contacts_page(
        &mut self,
        filter: &ContactFilter,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<OffsetPage<Contact>>> + Send;

    /// Inserts the given contacts if there are no live contacts yet.
    ///
    /// Returns the number of inserted rows.
    fn seed_contacts(
        &mut self,
        contacts: Vec<NewContact>,
    ) -> impl Future<Output = PgResult<usize>> + Send;
}

/// Builds the base query over live contacts matching the filter.
pub(crate) fn filtered_contacts(filter: &ContactFilter) -> contacts::BoxedQuery<'static, Pg> {
    use contacts::dsl;

    let mut query = contacts::table
        .filter(dsl::deleted_at.is_null())
        .into_boxed();

    if let Some(pattern) = filter.search_pattern() {
        query = query.filter(
            dsl::name
                .ilike(pattern.clone())
                .or(dsl::email.ilike(pattern.clone()))
                .or(dsl::company.ilike(pattern)),
        );
    }

    query
}

impl ContactRepository for PgConnection {
    async fn create_contact(&mut self, contact: NewContact) -> PgResult<Contact> {
        let contact = diesel::insert_into(contacts::table)
            .values(&contact)
            .returning(Contact::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        tracing::debug!(
            target: TRACING_TARGET_QUERY,
            contact_id = contact.id,
            "Contact created"
        );

        Ok(contact)
    }

    async fn find_contact_by_id(&mut self, contact_id: i64) -> PgResult<Option<Contact>> {
        use crate::schema::contacts::dsl::*;

        let contact = contacts
            .filter(id.eq(contact_id))
            .filter(deleted_at.is_null())
            .select(Contact::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(contact)
    }

    async fn update_contact(
        &mut self,
        contact_id: i64,
        changes: UpdateContact,
    ) -> PgResult<Option<Contact>> {
        use crate::schema::contacts::dsl::*;

        let contact = diesel::update(contacts)
            .filter(id.eq(contact_id))
            .filter(deleted_at.is_null())
            .set((&changes, updated_at.eq(now)))
            .returning(Contact::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(contact)
    }

    async fn delete_contact(&mut self, contact_id: i64) -> PgResult<bool> {
        use crate::schema::contacts::dsl::*;

        let affected = diesel::update(contacts)
            .filter(id.eq(contact_id))
            .filter(deleted_at.is_null())
            .set(deleted_at.eq(now))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(affected > 0)
    }

    async fn count_contacts(&mut self, filter: &ContactFilter) -> PgResult<i64> {
        let count = filtered_contacts(filter)
            .count()
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(count)
    }

    async fn find_contacts(
        &mut self,
        filter: &ContactFilter,
        pagination: OffsetPagination,
    ) -> PgResult<Vec<Contact>> {
        use contacts::dsl;

        let contact_list = filtered_contacts(filter)
            .select(Contact::as_select())
            .order((dsl::created_at.desc(), dsl::id.desc()))
            .limit(pagination.limit)
            .offset(pagination.offset)
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(contact_list)
    }

    async fn find_contacts_page(
        &mut self,
        filter: &ContactFilter,
        pagination: OffsetPagination,
    ) -> PgResult<OffsetPage<Contact>> {
        let total = if pagination.include_count {
            Some(self.count_contacts(filter).await?)
        } else {
            None
        };

        let items = self.find_contacts(filter, pagination).await?;

        tracing::debug!(
            target: TRACING_TARGET_QUERY,
            limit = pagination.limit,
            offset = pagination.offset,
            returned = items.len(),
            total = ?total,
            "Contact page loaded"
        );

        Ok(OffsetPage::new(items, total))
    }

    async fn seed_contacts(&mut self, samples: Vec<NewContact>) -> PgResult<usize> {
        let existing = self.count_contacts(&ContactFilter::new()).await?;
        if existing > 0 {
            tracing::info!(
                target: TRACING_TARGET_QUERY,
                existing,
                "Contacts table is not empty, skipping seed"
            );
            return Ok(0);
        }

        let inserted = diesel::insert_into(contacts::table)
            .values(&samples)
            .execute(self)
            .await
            .map_err(PgError::from)?;

        tracing::info!(
            target: TRACING_TARGET_QUERY,
            inserted,
            "Seeded contacts table"
        );

        Ok(inserted)
    }
}
