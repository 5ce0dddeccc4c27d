//! # Sample Order Totals
//!
//! Loads a sample order into an `OrderForm`, recomputes its totals and prints
//! the submission payload.
//!
//! ## Usage
//! ```bash
//! # Purchase order PO-2024-001 (default)
//! cargo run -p stockwise-forms --bin sample-orders
//!
//! # Sales order SO-2024-001
//! cargo run -p stockwise-forms --bin sample-orders -- --kind sales
//!
//! # Print the JSON submission payload
//! cargo run -p stockwise-forms --bin sample-orders -- --json
//! ```
//!
//! Defaults come from `STOCKWISE_*` environment variables (see `FormConfig`).

use std::env;
use stockwise_core::OrderKind;
use stockwise_forms::samples::{sample_purchase_order, sample_sales_order};
use stockwise_forms::{init_tracing, FormConfig, OrderForm};

/// Parsed command-line options.
#[derive(Debug, PartialEq)]
struct Options {
    kind: OrderKind,
    as_json: bool,
    help: bool,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        kind: OrderKind::Purchase,
        as_json: false,
        help: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--kind" | "-k" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| format!("{} requires a value", args[i]))?;
                options.kind = value.parse().map_err(|e| format!("{}", e))?;
                i += 1;
            }
            "--json" | "-j" => options.as_json = true,
            "--help" | "-h" => options.help = true,
            _ => {}
        }
        i += 1;
    }

    Ok(options)
}

const USAGE: &str = "\
Stockwise Sample Orders

Usage: sample-orders [OPTIONS]

Options:
  -k, --kind <KIND>  purchase or sales (default: purchase)
  -j, --json         Print the submission payload as JSON
  -h, --help         Show this help message";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {}", message);
            eprintln!();
            eprintln!("{}", USAGE);
            return Err(message.into());
        }
    };

    if options.help {
        println!("{}", USAGE);
        return Ok(());
    }

    init_tracing();

    let kind = options.kind;
    let config = FormConfig::from_env();
    let draft = match kind {
        OrderKind::Purchase => sample_purchase_order(),
        OrderKind::Sales => sample_sales_order(),
    };

    let form = OrderForm::from_draft(kind, draft, &config);
    let submission = form.submit()?;

    if options.as_json {
        println!("{}", serde_json::to_string_pretty(&submission)?);
        return Ok(());
    }

    let view = form.view();
    println!("Order {}", submission.order_number);
    println!("==============================");
    for line in &submission.items {
        println!(
            "  {:<40} {:>6} x {:>10.2}  -{:>5}%  = {:>10.2}",
            line.description, line.quantity, line.unit_price, line.discount_percent, line.net
        );
    }
    println!();
    println!("  Subtotal: {:>14}", view.subtotal);
    println!("  Discount: {:>14}", format!("-{}", view.discount_amount));
    println!("  Tax:      {:>14}", view.tax_amount);
    println!("  Total:    {:>14}", view.total);

    Ok(())
}
