//! threadbare-report - Wardrobe analytics CLI
//!
//! Compute and print a user's wardrobe analytics report.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use std::path::PathBuf;
use threadbare_core::analytics::{generate_report, Insight, WardrobeReport};
use threadbare_core::{Config, Database};

#[derive(Parser, Debug)]
#[command(name = "threadbare-report")]
#[command(about = "Wardrobe analytics report")]
#[command(version)]
struct Args {
    /// User to report on
    #[arg(long)]
    user: String,

    /// Reference date for the underutilization rule (format: YYYY-MM-DD,
    /// default: today)
    #[arg(long)]
    as_of: Option<String>,

    /// Export format (md = markdown, json = JSON)
    #[arg(long)]
    export: Option<String>,

    /// Database path (default: from config)
    #[arg(long)]
    db: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration and database
    let config = Config::load().context("failed to load configuration")?;
    let _log_guard = threadbare_core::logging::init(&config.logging).ok();

    let db_path = args.db.clone().unwrap_or_else(|| config.database_path());
    let db = Database::open(&db_path).context("failed to open database")?;
    db.migrate().context("failed to run migrations")?;

    let as_of = match &args.as_of {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid --as-of date. Use YYYY-MM-DD (e.g., 2025-06-15)")?,
        None => Utc::now().date_naive(),
    };

    let report =
        generate_report(&db, &args.user, as_of).context("failed to compute wardrobe report")?;

    match args.export.as_deref() {
        Some("json") => print_json(&report)?,
        Some("md") => print_markdown(&args.user, &report),
        Some(other) => anyhow::bail!("Unknown export format: {}. Use 'md' or 'json'", other),
        None => print_terminal(&args.user, &report),
    }

    Ok(())
}

fn print_terminal(user: &str, report: &WardrobeReport) {
    let title = format!("WARDROBE REPORT: {}", user);

    // Header
    println!();
    println!("╭{}╮", "─".repeat(60));
    println!("│{:^60}│", title);
    println!("╰{}╯", "─".repeat(60));
    println!();

    if report.overview.total_items == 0 {
        println!("  No owned items found for this user.");
        println!();
        return;
    }

    // Overview
    println!("OVERVIEW");
    println!(
        "   Items:    {:<12} Value: {}",
        report.overview.total_items,
        format_money(report.overview.total_value)
    );
    println!(
        "   Avg:      {:<12} Savings: {}",
        format_money(report.overview.avg_price),
        format_money(report.overview.savings)
    );
    println!(
        "   Outfits:  {:<12} Sustainability: {}%",
        report.outfits.total_outfits, report.overview.sustainability_score
    );
    println!();

    // Wear
    println!("WEAR");
    println!(
        "   Total wears: {}   Avg per item: {:.1}   Avg cost/wear: {}",
        report.wear.total_wears,
        report.wear.avg_wears_per_item,
        format_money(report.wear.avg_cost_per_wear)
    );
    if let Some(top) = report.wear.most_worn_items.first() {
        println!("   Most worn:   {} ({} wears)", top.name, top.times_worn);
    }
    if report.wear.never_worn > 0 {
        println!("   Never worn:  {} items", report.wear.never_worn);
    }
    println!();

    // Value
    if !report.value.best_value_items.is_empty() {
        println!("BEST VALUE");
        for (i, entry) in report.value.best_value_items.iter().enumerate() {
            println!(
                "   {}. {:<24} {}/wear ({} wears)",
                i + 1,
                entry.name,
                format_money(entry.cost_per_wear),
                entry.times_worn
            );
        }
        println!();
    }

    // Categories
    if !report.categories.is_empty() {
        println!("TOP CATEGORIES");
        for category in report.categories.iter().take(5) {
            println!(
                "   {:<20} {:>4} items  {}",
                category.name,
                category.count,
                format_money(category.value)
            );
        }
        println!();
    }

    // Brands
    if !report.brands.is_empty() {
        println!("TOP BRANDS");
        for brand in report.brands.iter().take(5) {
            println!(
                "   {:<20} {:>4} items  {}",
                brand.name,
                brand.count,
                format_money(brand.value)
            );
        }
        println!();
    }

    // Underutilized
    if report.underutilized.count > 0 {
        println!("UNDERUTILIZED ({} items)", report.underutilized.count);
        for item in report.underutilized.items.iter().take(5) {
            println!(
                "   {:<24} {}  ({} wears)",
                item.name,
                item.price.map_or("-".to_string(), format_money),
                item.times_worn
            );
        }
        println!();
    }

    // Insights
    if !report.insights.is_empty() {
        println!("INSIGHTS");
        for insight in &report.insights {
            println!("   [{}] {}", insight.kind.as_str(), insight.message);
        }
        println!();
    }
}

fn print_markdown(user: &str, report: &WardrobeReport) {
    println!("# Wardrobe Report: {}", user);
    println!();

    if report.overview.total_items == 0 {
        println!("*No owned items found for this user.*");
        return;
    }

    println!("## Overview");
    println!();
    println!("| Metric | Value |");
    println!("|--------|-------|");
    println!("| Items | {} |", report.overview.total_items);
    println!(
        "| Total value | {} |",
        format_money(report.overview.total_value)
    );
    println!(
        "| Average price | {} |",
        format_money(report.overview.avg_price)
    );
    println!("| Savings | {} |", format_money(report.overview.savings));
    println!(
        "| Sustainability | {}% |",
        report.overview.sustainability_score
    );
    println!("| Outfits | {} |", report.outfits.total_outfits);
    println!();

    println!("## Wear");
    println!();
    println!("- **Total wears:** {}", report.wear.total_wears);
    println!(
        "- **Average cost per wear:** {}",
        format_money(report.wear.avg_cost_per_wear)
    );
    println!("- **Never worn:** {} items", report.wear.never_worn);
    println!();

    if !report.value.best_value_items.is_empty() {
        println!("## Best Value");
        println!();
        for (i, entry) in report.value.best_value_items.iter().enumerate() {
            println!(
                "{}. **{}** - {}/wear over {} wears",
                i + 1,
                entry.name,
                format_money(entry.cost_per_wear),
                entry.times_worn
            );
        }
        println!();
    }

    if !report.insights.is_empty() {
        println!("## Insights");
        println!();
        for Insight {
            kind,
            category,
            message,
        } in &report.insights
        {
            println!("- *{}* ({}): {}", kind.as_str(), category, message);
        }
        println!();
    }

    println!("---");
    println!("*Generated by threadbare-report*");
}

fn print_json(report: &WardrobeReport) -> Result<()> {
    // The serialized struct is the stable consumer contract
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn format_money(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(1234.5), "$1234.50");
        assert_eq!(format_money(-20.0), "-$20.00");
    }
}
