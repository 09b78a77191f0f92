use crate::config::DEFAULT_TICKET_FALLBACK;
use crate::error::InvalidTickets;
use crate::ParkResult;
use serde_json::Value;
use snafu::ResultExt;
use std::collections::HashMap;
use std::fmt;
use std::iter::FromIterator;

/// Ticket ids mapped to the holder's name, or `None` while the ticket is unsold
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Tickets {
    entries: HashMap<String, Option<String>>,
}

impl Tickets {
    pub fn new() -> Tickets {
        Tickets::default()
    }

    pub fn from_json(value: &Value) -> ParkResult<Tickets> {
        serde_json::from_value(value.clone()).context(InvalidTickets)
    }

    pub fn parse(json: &str) -> ParkResult<Tickets> {
        serde_json::from_str(json).context(InvalidTickets)
    }

    pub fn add_unsold(&mut self, ticket_id: &str) {
        self.entries.insert(ticket_id.to_string(), None);
    }

    pub fn sell(&mut self, ticket_id: &str, holder: &str) {
        self.entries
            .insert(ticket_id.to_string(), Some(holder.to_string()));
    }

    /// `None` when the id is unknown, `Some(None)` when it is known but unsold
    pub fn get(&self, ticket_id: &str) -> Option<Option<&str>> {
        self.entries
            .get(ticket_id)
            .map(|holder| holder.as_ref().map(|h| h.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Option<String>)> for Tickets {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Tickets {
        Tickets {
            entries: iter.into_iter().collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TicketStatus<'a> {
    Unknown,
    NotSold,
    SoldTo(&'a str),
}

impl<'a> TicketStatus<'a> {
    pub fn lookup(tickets: &'a Tickets, ticket_id: &str) -> TicketStatus<'a> {
        match tickets.get(ticket_id) {
            None => {
                debug!(target: "park::tickets", "Lookup of unknown ticket id {}", ticket_id);
                TicketStatus::Unknown
            }
            Some(None) => TicketStatus::NotSold,
            Some(Some(holder)) => TicketStatus::SoldTo(holder),
        }
    }
}

impl<'a> fmt::Display for TicketStatus<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TicketStatus::Unknown => write!(f, "unknown ticket id"),
            TicketStatus::NotSold => write!(f, "not sold"),
            TicketStatus::SoldTo(holder) => write!(f, "sold to {}", holder),
        }
    }
}

pub fn ticket_status(tickets: &Tickets, ticket_id: &str) -> String {
    TicketStatus::lookup(tickets, ticket_id).to_string()
}

/// The holder's name, or `"invalid ticket !!!"` for unknown, unsold or blank entries
pub fn simple_ticket_status(tickets: &Tickets, ticket_id: &str) -> String {
    simple_ticket_status_with(tickets, ticket_id, DEFAULT_TICKET_FALLBACK)
}

pub fn simple_ticket_status_with(tickets: &Tickets, ticket_id: &str, fallback: &str) -> String {
    match tickets.get(ticket_id) {
        Some(Some(holder)) if !holder.is_empty() => holder.to_string(),
        _ => fallback.to_string(),
    }
}
