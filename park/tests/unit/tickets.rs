use park::*;

fn park_tickets() -> Tickets {
    let mut tickets = Tickets::new();
    tickets.add_unsold("0H2AZ123");
    tickets.sell("23LA9T41", "Verena Nardi");
    tickets.sell("BLANK001", "");
    tickets
}

#[test]
fn ticket_status_unknown() {
    assert_eq!(park::ticket_status(&Tickets::new(), "x"), "unknown ticket id");
    assert_eq!(park::ticket_status(&park_tickets(), "RE90VAW7"), "unknown ticket id");
}

#[test]
fn ticket_status_not_sold() {
    let tickets = Tickets::parse(r#"{"123": null}"#).unwrap();
    assert_eq!(park::ticket_status(&tickets, "123"), "not sold");
    assert_eq!(park::ticket_status(&park_tickets(), "0H2AZ123"), "not sold");
}

#[test]
fn ticket_status_sold() {
    let tickets = Tickets::from_json(&json!({"1": "Alice"})).unwrap();
    assert_eq!(park::ticket_status(&tickets, "1"), "sold to Alice");
    assert_eq!(park::ticket_status(&park_tickets(), "23LA9T41"), "sold to Verena Nardi");
}

#[test]
fn ticket_status_lookup() {
    let tickets = park_tickets();
    assert_eq!(TicketStatus::lookup(&tickets, "nope"), TicketStatus::Unknown);
    assert_eq!(TicketStatus::lookup(&tickets, "0H2AZ123"), TicketStatus::NotSold);
    assert_eq!(
        TicketStatus::lookup(&tickets, "23LA9T41"),
        TicketStatus::SoldTo("Verena Nardi")
    );
}

#[test]
fn simple_ticket_status() {
    let tickets = park_tickets();
    assert_eq!(park::simple_ticket_status(&Tickets::new(), "x"), "invalid ticket !!!");
    assert_eq!(park::simple_ticket_status(&tickets, "23LA9T41"), "Verena Nardi");
    assert_eq!(park::simple_ticket_status(&tickets, "0H2AZ123"), "invalid ticket !!!");
    assert_eq!(park::simple_ticket_status(&tickets, "BLANK001"), "invalid ticket !!!");
}

#[test]
fn simple_ticket_status_with_fallback() {
    let tickets = park_tickets();
    assert_eq!(
        park::simple_ticket_status_with(&tickets, "RE90VAW7", "no such ticket"),
        "no such ticket"
    );
    assert_eq!(
        park::simple_ticket_status_with(&tickets, "23LA9T41", "no such ticket"),
        "Verena Nardi"
    );
}

#[test]
fn tickets_reject_non_string_holders() {
    let result = Tickets::from_json(&json!({"1": 42}));
    match result {
        Ok(_) => panic!("Unexpected Ok result"),
        Err(ParkError::InvalidTickets { .. }) => (),
        Err(e) => panic!("Unexpected error {}", e),
    }
    assert!(Tickets::parse("[]").is_err());
}

#[test]
fn tickets_from_iterator() {
    let tickets: Tickets = vec![
        ("1".to_string(), Some("Alice".to_string())),
        ("2".to_string(), None),
    ]
    .into_iter()
    .collect();
    assert_eq!(tickets.len(), 2);
    assert!(!tickets.is_empty());
    assert_eq!(tickets.get("1"), Some(Some("Alice")));
    assert_eq!(tickets.get("2"), Some(None));
    assert_eq!(tickets.get("3"), None);
}
