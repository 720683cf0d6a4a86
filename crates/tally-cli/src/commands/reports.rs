//! Report command implementations

use anyhow::Result;
use tally_core::analytics::{self, ForecastBasis};
use tally_core::db::Database;

use super::{format_amount, progress_bar, truncate};

pub fn cmd_dashboard(db: &Database, json: bool) -> Result<()> {
    let transactions = db.load_all()?;
    let dashboard = analytics::dashboard(&transactions);

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    println!();
    println!("📊 Expense Overview");
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   Income: {}   Expenses: {}   Entries: {}",
        format_amount(dashboard.total_income),
        format_amount(dashboard.total_expense),
        dashboard.transaction_count
    );

    if !dashboard.has_expenses() {
        println!();
        println!("   No expense data found.");
        return Ok(());
    }

    println!();
    println!("   Monthly Expenses");
    println!("   {:8} │ {:>14}", "Month", "Amount");
    println!("   ─────────┼────────────────");
    for month in &dashboard.monthly_expenses {
        println!(
            "   {:8} │ {:>14}",
            month.month.to_string(),
            format_amount(month.total)
        );
    }

    println!();
    println!("   Expense Breakdown");
    println!(
        "   {:25} │ {:>14} │ {:>6}",
        "Category", "Amount", "%"
    );
    println!("   ──────────────────────────┼────────────────┼────────");
    for cat in &dashboard.category_expenses {
        let share = if dashboard.total_expense > 0.0 {
            cat.total / dashboard.total_expense * 100.0
        } else {
            0.0
        };
        println!(
            "   {:25} │ {:>14} │ {:>5.1}%",
            truncate(&cat.category, 25),
            format_amount(cat.total),
            share
        );
    }

    Ok(())
}

pub fn cmd_forecast(db: &Database, json: bool) -> Result<()> {
    let transactions = db.load_all()?;
    let forecast = analytics::forecast_expenses(&transactions);

    if json {
        println!("{}", serde_json::to_string_pretty(&forecast)?);
        return Ok(());
    }

    println!();
    println!("📈 {}-Month Expense Forecast", analytics::FORECAST_MONTHS);
    println!("   ─────────────────────────────────────────────────────────────");

    match forecast.basis {
        ForecastBasis::NoData => {
            println!("   No expense data found. Add some expenses to see a forecast.");
            return Ok(());
        }
        ForecastBasis::FlatProjection { level } => {
            println!(
                "   Only one month of expenses so far; projecting {} per month.",
                format_amount(level)
            );
        }
        ForecastBasis::Regression { slope, .. } => {
            let trend = if slope > 0.0 {
                "rising"
            } else if slope < 0.0 {
                "falling"
            } else {
                "flat"
            };
            println!(
                "   Trend: {} ({}{} per month over {} months of history)",
                trend,
                if slope < 0.0 { "" } else { "+" },
                format_amount(slope),
                forecast.historical.len()
            );
        }
    }

    println!();
    println!("   {:8} │ {:>14} │", "Month", "Amount");
    println!("   ─────────┼────────────────┼──────────");
    for month in &forecast.historical {
        println!(
            "   {:8} │ {:>14} │ actual",
            month.month.to_string(),
            format_amount(month.total)
        );
    }
    for month in &forecast.projected {
        println!(
            "   {:8} │ {:>14} │ \x1b[2mforecast\x1b[0m",
            month.month.to_string(),
            format_amount(month.total)
        );
    }

    Ok(())
}

pub fn cmd_goal(db: &Database, target: f64, json: bool) -> Result<()> {
    let transactions = db.load_all()?;
    let progress = analytics::savings_progress(&transactions, target)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&progress)?);
        return Ok(());
    }

    println!();
    println!("🎯 Goal Tracker");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Goal:          {}", format_amount(progress.goal));
    println!("   Total Savings: {}", format_amount(progress.savings));
    println!(
        "   {} {:.1}%",
        progress_bar(progress.display_percent(), 30),
        progress.percent
    );

    if progress.goal_reached() {
        println!();
        println!("   🎉 Goal reached!");
    } else if progress.savings < 0.0 {
        println!();
        println!("   Expenses currently exceed income.");
    }

    Ok(())
}
