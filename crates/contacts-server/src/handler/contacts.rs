//! Contact handlers for listing, searching and CRUD operations.
//!
//! Handlers acquire their database connection only after every extractor
//! has accepted the request, so malformed input is reported as a 400 even
//! while the database is unavailable.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use contacts_postgres::PgClient;
use contacts_postgres::query::ContactRepository;
use contacts_postgres::types::ContactFilter;

use crate::extract::{Json, Path, Query, ValidateJson};
use crate::handler::request::{
    ContactPathParams, CreateContact, PageQuery, SearchQuery, UpdateContact,
};
use crate::handler::response::{Contact, ContactsPage, ErrorResponse};
use crate::handler::{ErrorKind, PgResultExt, Result};
use crate::service::ServiceState;

/// Tracing target for contact operations.
const TRACING_TARGET: &str = "contacts_server::handler::contacts";

/// Lists live contacts, newest first.
#[tracing::instrument(skip_all, fields(page = ?query.page, limit = ?query.limit))]
async fn list_contacts(
    State(pg_client): State<PgClient>,
    Query(query): Query<PageQuery>,
) -> Result<(StatusCode, Json<ContactsPage>)> {
    let pagination = query.pagination();
    let mut conn = pg_client
        .get_connection()
        .await
        .or_message("Failed to fetch contacts")?;

    let page = conn
        .find_contacts_page(&ContactFilter::new(), pagination)
        .await
        .or_message("Failed to fetch contacts")?;

    let response = ContactsPage::from_offset_page(page, &pagination, Contact::from_model);

    tracing::debug!(
        target: TRACING_TARGET,
        count = response.data.len(),
        total = response.total,
        "Contacts listed",
    );

    Ok((StatusCode::OK, Json(response)))
}

fn list_contacts_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List contacts")
        .description(
            "Returns one page of contacts ordered by creation time, most recent first. \
             Invalid `page` or `limit` values fall back to page 1 and 10 items.",
        )
        .response::<200, Json<ContactsPage>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Searches live contacts by name, email or company.
#[tracing::instrument(skip_all, fields(q = ?query.q))]
async fn search_contacts(
    State(pg_client): State<PgClient>,
    Query(query): Query<SearchQuery>,
) -> Result<(StatusCode, Json<ContactsPage>)> {
    let Some(filter) = query.filter() else {
        return Err(ErrorKind::BadRequest.with_message("Search query is required"));
    };

    let pagination = query.pagination();
    let mut conn = pg_client
        .get_connection()
        .await
        .or_message("Failed to search contacts")?;

    let page = conn
        .find_contacts_page(&filter, pagination)
        .await
        .or_message("Failed to search contacts")?;

    let response = ContactsPage::from_offset_page(page, &pagination, Contact::from_model);

    tracing::debug!(
        target: TRACING_TARGET,
        count = response.data.len(),
        total = response.total,
        "Contacts searched",
    );

    Ok((StatusCode::OK, Json(response)))
}

fn search_contacts_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Search contacts")
        .description(
            "Returns contacts whose name, email or company contains `q`, ignoring case. \
             Paginated like the contact list.",
        )
        .response::<200, Json<ContactsPage>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Retrieves a single live contact.
#[tracing::instrument(skip_all, fields(contact_id = path_params.contact_id))]
async fn read_contact(
    State(pg_client): State<PgClient>,
    Path(path_params): Path<ContactPathParams>,
) -> Result<(StatusCode, Json<Contact>)> {
    let contact_id = path_params.contact_id()?;
    let mut conn = pg_client
        .get_connection()
        .await
        .or_message("Failed to fetch contact")?;

    let Some(contact) = conn
        .find_contact_by_id(contact_id)
        .await
        .or_message("Failed to fetch contact")?
    else {
        return Err(contact_not_found(contact_id));
    };

    Ok((StatusCode::OK, Json(Contact::from_model(contact))))
}

fn read_contact_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get contact")
        .description("Returns a single contact. Deleted contacts are not found.")
        .response::<200, Json<Contact>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Creates a new contact.
#[tracing::instrument(skip_all)]
async fn create_contact(
    State(pg_client): State<PgClient>,
    ValidateJson(request): ValidateJson<CreateContact>,
) -> Result<(StatusCode, Json<Contact>)> {
    tracing::debug!(target: TRACING_TARGET, "Creating contact");

    let mut conn = pg_client
        .get_connection()
        .await
        .or_message("Failed to create contact")?;

    let contact = conn
        .create_contact(request.into_model())
        .await
        .or_message("Failed to create contact")?;

    tracing::info!(target: TRACING_TARGET, contact_id = contact.id, "Contact created");

    Ok((StatusCode::CREATED, Json(Contact::from_model(contact))))
}

fn create_contact_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create contact")
        .description(
            "Creates a new contact. `name` and `email` are required, `phone` and \
             `company` default to empty strings.",
        )
        .response::<201, Json<Contact>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Applies a partial update to a live contact.
#[tracing::instrument(skip_all, fields(contact_id = path_params.contact_id))]
async fn update_contact(
    State(pg_client): State<PgClient>,
    Path(path_params): Path<ContactPathParams>,
    ValidateJson(request): ValidateJson<UpdateContact>,
) -> Result<(StatusCode, Json<Contact>)> {
    let contact_id = path_params.contact_id()?;
    tracing::debug!(target: TRACING_TARGET, "Updating contact");

    let mut conn = pg_client
        .get_connection()
        .await
        .or_message("Failed to update contact")?;

    let Some(contact) = conn
        .update_contact(contact_id, request.into_model())
        .await
        .or_message("Failed to update contact")?
    else {
        return Err(contact_not_found(contact_id));
    };

    tracing::info!(target: TRACING_TARGET, "Contact updated");

    Ok((StatusCode::OK, Json(Contact::from_model(contact))))
}

fn update_contact_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update contact")
        .description(
            "Updates the fields present in the body and leaves the others untouched. \
             An empty `phone` or `company` clears it.",
        )
        .response::<200, Json<Contact>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

/// Soft-deletes a live contact.
#[tracing::instrument(skip_all, fields(contact_id = path_params.contact_id))]
async fn delete_contact(
    State(pg_client): State<PgClient>,
    Path(path_params): Path<ContactPathParams>,
) -> Result<StatusCode> {
    let contact_id = path_params.contact_id()?;
    let mut conn = pg_client
        .get_connection()
        .await
        .or_message("Failed to delete contact")?;

    let deleted = conn
        .delete_contact(contact_id)
        .await
        .or_message("Failed to delete contact")?;

    if !deleted {
        return Err(contact_not_found(contact_id));
    }

    tracing::info!(target: TRACING_TARGET, "Contact deleted");

    Ok(StatusCode::NO_CONTENT)
}

fn delete_contact_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete contact")
        .description("Soft-deletes a contact. It disappears from every other endpoint.")
        .response::<204, ()>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<500, Json<ErrorResponse>>()
}

fn contact_not_found(contact_id: i64) -> crate::handler::Error<'static> {
    ErrorKind::NotFound
        .with_message("Contact not found")
        .with_context(format!("contact_id={contact_id}"))
}

/// Returns a [`Router`] with all contact-related routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/api/v1/contacts",
            get_with(list_contacts, list_contacts_docs)
                .post_with(create_contact, create_contact_docs),
        )
        .api_route(
            "/api/v1/contacts/search",
            get_with(search_contacts, search_contacts_docs),
        )
        .api_route(
            "/api/v1/contacts/{contact_id}",
            get_with(read_contact, read_contact_docs)
                .put_with(update_contact, update_contact_docs)
                .delete_with(delete_contact, delete_contact_docs),
        )
        .with_path_items(|item| item.tag("Contacts"))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    use crate::handler::test::{create_test_server, create_unreachable_test_server};

    /// Suffix that keeps rows created by one test apart from every other row.
    fn unique_tag() -> String {
        format!("t{}", jiff::Timestamp::now().as_nanosecond())
    }

    /// Creates a contact and returns its JSON representation.
    async fn post_contact(server: &axum_test::TestServer, body: Value) -> Value {
        let response = server.post("/api/v1/contacts").json(&body).await;
        response.assert_status(StatusCode::CREATED);
        response.json()
    }

    fn names(page: &Value) -> Vec<&str> {
        page["data"]
            .as_array()
            .map(|data| data.iter().filter_map(|c| c["name"].as_str()).collect())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() -> anyhow::Result<()> {
        let server = create_unreachable_test_server()?;

        for response in [
            server.get("/api/v1/contacts/abc").await,
            server.put("/api/v1/contacts/abc").json(&json!({})).await,
            server.delete("/api/v1/contacts/-1").await,
        ] {
            response.assert_status(StatusCode::BAD_REQUEST);
            response.assert_json(&json!({ "error": "Invalid contact ID" }));
        }
        Ok(())
    }

    #[tokio::test]
    async fn out_of_range_id_is_rejected() -> anyhow::Result<()> {
        let server = create_unreachable_test_server()?;

        let response = server.get("/api/v1/contacts/18446744073709551615").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Invalid contact ID" }));
        Ok(())
    }

    #[tokio::test]
    async fn search_requires_query() -> anyhow::Result<()> {
        let server = create_unreachable_test_server()?;

        for path in ["/api/v1/contacts/search", "/api/v1/contacts/search?q="] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            response.assert_json(&json!({ "error": "Search query is required" }));
        }
        Ok(())
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() -> anyhow::Result<()> {
        let server = create_unreachable_test_server()?;

        let response = server
            .post("/api/v1/contacts")
            .content_type("application/json")
            .text("{not json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({ "error": "Invalid request body" }));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_contact_fails_validation() -> anyhow::Result<()> {
        let server = create_unreachable_test_server()?;

        let response = server
            .post("/api/v1/contacts")
            .json(&json!({ "name": "A", "email": "not-an-email", "phone": "123" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Validation failed");

        let details = body["details"].as_str().unwrap_or_default();
        assert!(details.contains("'name'"));
        assert!(details.contains("'email'"));
        assert!(details.contains("'phone'"));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_update_fails_validation() -> anyhow::Result<()> {
        let server = create_unreachable_test_server()?;

        let response = server
            .put("/api/v1/contacts/1")
            .json(&json!({ "company": "c".repeat(101) }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Validation failed");
        assert!(body["details"].as_str().is_some_and(|d| d.contains("'company'")));
        Ok(())
    }

    #[tokio::test]
    async fn storage_failures_name_the_operation() -> anyhow::Result<()> {
        let server = create_unreachable_test_server()?;

        let cases = [
            (server.get("/api/v1/contacts").await, "Failed to fetch contacts"),
            (
                server.get("/api/v1/contacts/search?q=silva").await,
                "Failed to search contacts",
            ),
            (server.get("/api/v1/contacts/1").await, "Failed to fetch contact"),
            (
                server
                    .post("/api/v1/contacts")
                    .json(&json!({ "name": "Ana Costa", "email": "ana@example.com" }))
                    .await,
                "Failed to create contact",
            ),
            (
                server
                    .put("/api/v1/contacts/1")
                    .json(&json!({ "name": "Updated Name" }))
                    .await,
                "Failed to update contact",
            ),
            (server.delete("/api/v1/contacts/1").await, "Failed to delete contact"),
        ];

        for (response, message) in cases {
            response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
            response.assert_json(&json!({ "error": message }));
        }
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn contact_lifecycle() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        let email = format!("lifecycle.{}@example.com", jiff::Timestamp::now().as_nanosecond());

        let response = server
            .post("/api/v1/contacts")
            .json(&json!({
                "name": "Original Name",
                "email": email,
                "phone": "+55 11 90000-0000",
                "company": "Acme",
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: Value = response.json();
        let id = created["id"].as_i64().unwrap_or_default();
        assert_eq!(created["email"], email.as_str());
        assert!(created.get("deleted_at").is_none());

        let response = server
            .put(&format!("/api/v1/contacts/{id}"))
            .json(&json!({ "name": "Updated Name" }))
            .await;
        response.assert_status_ok();
        let updated: Value = response.json();
        assert_eq!(updated["name"], "Updated Name");
        assert_eq!(updated["email"], created["email"]);
        assert_eq!(updated["phone"], created["phone"]);
        assert_eq!(updated["company"], created["company"]);

        let response = server
            .get(&format!("/api/v1/contacts/search?q={email}"))
            .await;
        response.assert_status_ok();
        let page: Value = response.json();
        assert_eq!(page["total"], 1);
        assert_eq!(page["total_pages"], 1);

        server
            .delete(&format!("/api/v1/contacts/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let response = server.get(&format!("/api/v1/contacts/{id}")).await;
        response.assert_status_not_found();
        response.assert_json(&json!({ "error": "Contact not found" }));

        let response = server
            .get(&format!("/api/v1/contacts/search?q={email}"))
            .await;
        let page: Value = response.json();
        assert_eq!(page["total"], 0);
        assert_eq!(page["total_pages"], 0);
        assert_eq!(page["data"], json!([]));
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn duplicate_email_is_not_created() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        let email = format!("duplicate.{}@example.com", jiff::Timestamp::now().as_nanosecond());
        let body = json!({ "name": "Maria Santos", "email": email });

        server
            .post("/api/v1/contacts")
            .json(&body)
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.post("/api/v1/contacts").json(&body).await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "error": "Failed to create contact" }));
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn created_contact_echoes_every_field() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        let email = format!("echo.{}@example.com", unique_tag());

        let created = post_contact(
            &server,
            json!({
                "name": "Ana Costa",
                "email": email,
                "phone": "+55 21 98888-7777",
                "company": "Costa Ltda",
            }),
        )
        .await;

        assert!(created["id"].as_i64().is_some_and(|id| id > 0));
        assert_eq!(created["name"], "Ana Costa");
        assert_eq!(created["email"], email.as_str());
        assert_eq!(created["phone"], "+55 21 98888-7777");
        assert_eq!(created["company"], "Costa Ltda");
        assert!(created["created_at"].is_string());
        assert!(created["updated_at"].is_string());
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn search_ignores_case() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        let tag = unique_tag();

        for (name, local) in [
            ("João Silva", "joao"),
            ("Maria Santos", "maria"),
            ("Pedro Oliveira", "pedro"),
        ] {
            post_contact(
                &server,
                json!({ "name": format!("{name} {tag}"), "email": format!("{local}.{tag}@example.com") }),
            )
            .await;
        }

        let response = server
            .get("/api/v1/contacts/search")
            .add_query_param("q", format!("João Silva {tag}"))
            .await;
        response.assert_status_ok();
        let page: Value = response.json();
        assert_eq!(page["total"], 1);
        assert_eq!(names(&page), vec![format!("João Silva {tag}").as_str()]);

        let response = server
            .get("/api/v1/contacts/search")
            .add_query_param("q", format!("jOÃO silva {}", tag.to_uppercase()))
            .await;
        let page: Value = response.json();
        assert_eq!(page["total"], 1);

        let response = server
            .get("/api/v1/contacts/search")
            .add_query_param("q", &tag)
            .await;
        let page: Value = response.json();
        assert_eq!(page["total"], 3);
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn pages_list_newest_first() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        let tag = unique_tag();

        let mut ids = Vec::new();
        for n in 1..=3 {
            let created = post_contact(
                &server,
                json!({ "name": format!("Contact {n} {tag}"), "email": format!("c{n}.{tag}@example.com") }),
            )
            .await;
            ids.push(created["id"].as_i64().unwrap_or_default());
        }

        let first: Value = server
            .get("/api/v1/contacts/search")
            .add_query_param("q", &tag)
            .add_query_param("limit", 2)
            .await
            .json();
        assert_eq!(first["total"], 3);
        assert_eq!(first["page"], 1);
        assert_eq!(first["total_pages"], 2);
        assert_eq!(first["data"][0]["id"], ids[2]);
        assert_eq!(first["data"][1]["id"], ids[1]);

        let second: Value = server
            .get("/api/v1/contacts/search")
            .add_query_param("q", &tag)
            .add_query_param("page", 2)
            .add_query_param("limit", 2)
            .await
            .json();
        assert_eq!(second["page"], 2);
        assert_eq!(second["total_pages"], 2);
        assert_eq!(names(&second), vec![format!("Contact 1 {tag}").as_str()]);

        // Unfiltered listing starts with the most recently created contact.
        let latest: Value = server
            .get("/api/v1/contacts")
            .add_query_param("limit", 1)
            .await
            .json();
        let newest = latest["data"][0]["id"].as_i64().unwrap_or_default();
        assert!(newest >= ids[2]);
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL instance"]
    async fn delete_lowers_list_total() -> anyhow::Result<()> {
        let server = create_test_server().await?;
        let tag = unique_tag();
        let created = post_contact(
            &server,
            json!({ "name": format!("Removed {tag}"), "email": format!("removed.{tag}@example.com") }),
        )
        .await;
        let id = created["id"].as_i64().unwrap_or_default();

        let before: Value = server.get("/api/v1/contacts").await.json();
        server
            .delete(&format!("/api/v1/contacts/{id}"))
            .await
            .assert_status(StatusCode::NO_CONTENT);
        let after: Value = server.get("/api/v1/contacts").await.json();

        let total = |page: &Value| page["total"].as_i64().unwrap_or_default();
        assert_eq!(total(&after), total(&before) - 1);
        Ok(())
    }
}
