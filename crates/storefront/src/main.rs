//! Interactive catalog browser.
//!
//! A minimal stdin-driven front end over the domain crates: each line is one
//! input event for the session, exactly like a widget callback would be.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use mmomart_catalog::{sample, FilterKind};
use mmomart_storefront::{CatalogSession, CatalogView, CriteriaUpdate};

fn main() -> Result<()> {
    mmomart_observability::init();

    let products = sample::catalog();
    tracing::info!(products = products.len(), "catalog loaded");

    let mut session = CatalogSession::new(products, sample::PRICE_BOUNDS);
    render(&session.view());

    let stdin = io::stdin();
    let mut out = io::stdout();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let update = match command {
            "quit" | "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            "list" => {
                render(&session.view());
                continue;
            }
            "json" => {
                println!("{}", serde_json::to_string_pretty(&session.view())?);
                continue;
            }
            "facets" => {
                println!("categories: all, {}", session.category_facets().join(", "));
                println!("sellers:    all, {}", session.seller_facets().join(", "));
                continue;
            }
            "search" => CriteriaUpdate::SearchChanged(rest.to_string()),
            "category" => CriteriaUpdate::CategorySelected(selection(rest)),
            "seller" => CriteriaUpdate::SellerSelected(selection(rest)),
            "price" => match rest.split_once(' ') {
                Some((min, max)) => CriteriaUpdate::PriceTyped {
                    min: min.to_string(),
                    max: max.trim().to_string(),
                },
                None => {
                    println!("usage: price <min> <max>");
                    continue;
                }
            },
            "remove" => match filter_kind(rest) {
                Some(kind) => CriteriaUpdate::TagRemoved(kind),
                None => {
                    println!("usage: remove <search|category|seller|price>");
                    continue;
                }
            },
            "reset" => CriteriaUpdate::Reset,
            other => {
                println!("unknown command: {other} (try 'help')");
                continue;
            }
        };

        render(&session.apply(update));
    }

    Ok(())
}

/// The literal word `all` in a dropdown command means "no constraint".
fn selection(raw: &str) -> Option<String> {
    if raw.is_empty() || raw == "all" {
        None
    } else {
        Some(raw.to_string())
    }
}

fn filter_kind(raw: &str) -> Option<FilterKind> {
    match raw {
        "search" => Some(FilterKind::Search),
        "category" => Some(FilterKind::Category),
        "seller" => Some(FilterKind::Seller),
        "price" => Some(FilterKind::Price),
        _ => None,
    }
}

fn render(view: &CatalogView) {
    if !view.active_tags.is_empty() {
        let tags: Vec<String> = view.active_tags.iter().map(|t| t.to_string()).collect();
        println!("active filters: {}", tags.join(", "));
    }
    if view.is_empty() {
        println!("No products found. Try adjusting your filters, or type 'reset'.");
        return;
    }
    for product in &view.products {
        let category = product.category.as_deref().unwrap_or("-");
        let seller = product.seller.as_deref().unwrap_or("-");
        let stock = if product.in_stock { "" } else { " [out of stock]" };
        println!(
            "  [{}] {} - {} ({category}, {seller}, {} stars){stock}",
            product.id, product.title, product.price, product.rating
        );
    }
}

fn print_help() {
    println!("commands:");
    println!("  list                       show the current view");
    println!("  search <text>              case-insensitive title search");
    println!("  category <name|all>        exact category match");
    println!("  seller <name|all>          exact seller match");
    println!("  price <min> <max>          inclusive price bounds (free text, digits kept)");
    println!("  remove <kind>              remove one active filter tag");
    println!("  facets                     dropdown contents");
    println!("  json                       dump the view as JSON");
    println!("  reset                      clear all filters");
    println!("  quit");
}
