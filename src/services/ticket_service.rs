use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::Ticket;
use crate::store::ScopedRepository;

use super::scoped::{delete_owned, find_owned, update_owned};
use super::validation::{NumberInput, Validator, MIN_TICKET_DESCRIPTION, MIN_TICKET_NAME};
use super::ServiceResult;

const LABEL: &str = "Ticket";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    pub name: Option<String>,
    pub price: Option<NumberInput>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// Fields absent from the payload keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketUpdate {
    pub name: Option<String>,
    pub price: Option<NumberInput>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Clone)]
pub struct TicketService {
    tickets: Arc<dyn ScopedRepository<Ticket>>,
}

impl TicketService {
    pub fn new(tickets: Arc<dyn ScopedRepository<Ticket>>) -> Self {
        Self { tickets }
    }

    pub async fn list(&self, institution_id: &str) -> ServiceResult<Vec<Ticket>> {
        Ok(self.tickets.list_for(institution_id).await?)
    }

    pub async fn create(&self, institution_id: &str, input: NewTicket) -> ServiceResult<Ticket> {
        let mut v = Validator::new();
        let name = v.required_text("name", input.name.as_deref(), MIN_TICKET_NAME);
        let price = v.required_amount("price", input.price.as_ref());
        let description = v.required_text("description", input.description.as_deref(), MIN_TICKET_DESCRIPTION);
        v.finish("Name, price, and description are required")?;

        let ticket = Ticket {
            id: Uuid::new_v4().to_string(),
            institution_id: institution_id.to_string(),
            name: name.unwrap_or_default(),
            price: price.unwrap_or_default(),
            description: description.unwrap_or_default(),
            is_active: input.is_active.unwrap_or(true),
            created_at: Utc::now(),
        };

        let ticket = self.tickets.insert(ticket).await?;
        tracing::info!("Ticket '{}' created for institution '{}'", ticket.id, institution_id);
        Ok(ticket)
    }

    pub async fn update(&self, institution_id: &str, ticket_id: &str, input: TicketUpdate) -> ServiceResult<Ticket> {
        find_owned(self.tickets.as_ref(), institution_id, ticket_id, LABEL).await?;

        let mut v = Validator::new();
        let name = v.optional_text("name", input.name.as_deref(), MIN_TICKET_NAME);
        let price = v.optional_amount("price", input.price.as_ref());
        let description = v.optional_text("description", input.description.as_deref(), MIN_TICKET_DESCRIPTION);
        v.finish("Invalid ticket fields")?;

        let is_active = input.is_active;
        update_owned(
            self.tickets.as_ref(),
            ticket_id,
            LABEL,
            Box::new(move |ticket: &mut Ticket| {
                if let Some(name) = name {
                    ticket.name = name;
                }
                if let Some(price) = price {
                    ticket.price = price;
                }
                if let Some(description) = description {
                    ticket.description = description;
                }
                if let Some(is_active) = is_active {
                    ticket.is_active = is_active;
                }
                Ok(())
            }),
        )
        .await
    }

    pub async fn delete(&self, institution_id: &str, ticket_id: &str) -> ServiceResult<()> {
        delete_owned(self.tickets.as_ref(), institution_id, ticket_id, LABEL).await?;
        tracing::info!("Ticket '{}' deleted from institution '{}'", ticket_id, institution_id);
        Ok(())
    }
}
