//! Order Checkout
//!
//! This example validates a checkout form with Brazilian documents and
//! lookups that may find nothing.
//!
//! Key concepts:
//! - Configuration loaded from JSON (sequential execution here)
//! - `try_field` for fallible accessors, absent values for missing lookups
//! - Inline closure rules next to library rules
//!
//! Run with: cargo run --example order_checkout

use chrono::{Duration, NaiveDate, Utc};
use fieldcheck::{rules, CaptureError, Outcome, ValidationSession, ValidatorConfig, ValidatorError};
use std::collections::HashMap;

struct Checkout {
    customer_cpf: String,
    company_cnpj: Option<String>,
    postal_code: String,
    delivery_date: NaiveDate,
    items: HashMap<String, u32>,
}

fn validate(checkout: Checkout, config: ValidatorConfig) -> Result<(), ValidatorError> {
    let today = Utc::now().date_naive();

    ValidationSession::with_config(checkout, config)
        .field("customerCpf", |c| c.customer_cpf.clone())
        .add(rules::not_blank("CPF is required."))
        .add(rules::cpf("CPF is invalid."))
        .end()?
        .field_opt("companyCnpj", |c| c.company_cnpj.clone())
        .add(rules::cnpj("CNPJ is invalid."))
        .end()?
        .field("postalCode", |c| c.postal_code.clone())
        .add(rules::cep("CEP must have 8 digits."))
        .end()?
        .field("deliveryDate", |c| c.delivery_date)
        .add(rules::min(
            today + Duration::days(1),
            "Delivery must be scheduled from tomorrow on.",
        ))
        .add(rules::max(
            today + Duration::days(30),
            "Delivery must be within 30 days.",
        ))
        .end()?
        .try_field("coffeeQuantity", |c| {
            c.items
                .get("coffee")
                .copied()
                .ok_or_else(|| CaptureError::NoSuchElement("coffee".into()))
        })?
        .add(rules::is_some("The order must contain coffee."))
        .add_fn(|quantity| match quantity {
            Some(q) if *q > 10 => Outcome::invalid("At most 10 packs of coffee per order."),
            _ => Outcome::valid(),
        })
        .end()?
        .finalize()?;
    Ok(())
}

fn print_result(result: Result<(), ValidatorError>) {
    match result {
        Ok(()) => println!("  Checkout accepted\n"),
        Err(ValidatorError::Invalid(error)) => {
            println!("  {}", error);
            for entry in error.field_errors() {
                println!("    {}: {}", entry.field_name, entry.messages.join(" | "));
            }
            println!();
        }
        Err(other) => println!("  Unexpected error: {}\n", other),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fieldcheck=info".into()),
        )
        .init();

    println!("=== Order Checkout Example ===\n");

    let config = match ValidatorConfig::from_json(r#"{ "mode": "sequential" }"#) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("invalid configuration: {error}");
            return;
        }
    };
    println!("Loaded configuration: {:?}\n", config);

    let delivery = Utc::now().date_naive() + Duration::days(2);

    println!("Example 1: Valid checkout");
    print_result(validate(
        Checkout {
            customer_cpf: "529.982.247-25".into(),
            company_cnpj: None,
            postal_code: "01310-100".into(),
            delivery_date: delivery,
            items: HashMap::from([("coffee".to_string(), 2)]),
        },
        config.clone(),
    ));

    println!("Example 2: Invalid documents and a missing item");
    print_result(validate(
        Checkout {
            customer_cpf: "111.111.111-11".into(),
            company_cnpj: Some("11.222.333/0001-82".into()),
            postal_code: "0131".into(),
            delivery_date: delivery + Duration::days(90),
            items: HashMap::from([("tea".to_string(), 1)]),
        },
        config,
    ));

    println!("=== Example Complete ===");
}
