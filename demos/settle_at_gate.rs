//! Settle at the Gate
//!
//! This demo walks a fare adjustment terminal through a morning of cards.
//!
//! Key concepts:
//! - Terminal configured from JSON
//! - Distinguishing why a card was not taken into settlement
//! - Refused partial payments and credited overpayments
//! - Cancelling an abandoned session
//!
//! Run with: cargo run --example settle_at_gate

use fare_adjust::{
    CardHandle, ChargeError, FareMachine, IcCard, StartError, StartOutcome, TerminalConfig,
};

const CONFIG: &str = r#"{
    "name": "Central exit 3",
    "fares": { "Harbor": 180, "Market": 200, "Airport": 620 }
}"#;

fn present(machine: &mut FareMachine, label: &str, card: &CardHandle) {
    print!("  {label}: ");
    match machine.try_start(card) {
        Ok(StartOutcome::Settling { shortage, .. }) => {
            println!("please pay {shortage}");
        }
        Ok(StartOutcome::NoShortage { fare, balance }) => {
            println!("welcome (fare {fare}, balance {balance})");
        }
        Err(StartError::Busy { .. }) => println!("terminal busy, please wait"),
        Err(StartError::MissingEntry | StartError::UnknownStation { .. }) => {
            println!("see attendant")
        }
        Err(err) => println!("error: {err}"),
    }
}

fn pay(machine: &mut FareMachine, amount: i64) {
    print!("  insert {amount}: ");
    match machine.try_charge(amount) {
        Ok(receipt) => println!(
            "settled, balance now {} (change credited: {})",
            receipt.balance_after,
            receipt.overpayment()
        ),
        Err(ChargeError::Underpayment { shortage, .. }) => {
            println!("not enough, {shortage} required")
        }
        Err(err) => println!("refused: {err}"),
    }
}

fn main() {
    println!("=== Settle at the Gate ===\n");

    let config = TerminalConfig::from_json_str(CONFIG).expect("demo config is valid");
    let name = config.name.clone().unwrap_or_default();
    let mut machine: FareMachine = config.into_machine();
    println!("Terminal '{name}' ({})", machine.id());
    println!("Stations: {:?}\n", machine.fares().stations().collect::<Vec<_>>());

    println!("Scenario 1: Card with enough balance");
    let commuter = CardHandle::new(IcCard::new("Harbor", 500));
    present(&mut machine, "commuter", &commuter);

    println!("\nScenario 2: Shortage paid after a refused partial payment");
    let tourist = CardHandle::new(IcCard::new("Airport", 400));
    present(&mut machine, "tourist", &tourist);
    let student = CardHandle::new(IcCard::new("Market", 0));
    present(&mut machine, "student", &student);
    pay(&mut machine, 100);
    pay(&mut machine, 250);

    println!("\nScenario 3: Abandoned session");
    present(&mut machine, "student", &student);
    if let Some(session) = machine.cancel() {
        println!("  cancelled session {session}");
    }

    println!("\nScenario 4: Cards the terminal cannot price");
    present(&mut machine, "no entry", &CardHandle::new(IcCard::without_entry(0)));
    present(&mut machine, "other line", &CardHandle::new(IcCard::new("Depot", 0)));

    println!("\nSessions opened: {}", machine.history().entries_into(&fare_adjust::TerminalState::Settling));
    println!("Tourist balance: {}", tourist.balance());

    println!("\n=== Demo Complete ===");
}
