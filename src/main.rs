use cycle_tracker::config::Config;
use cycle_tracker::indicators::{builtin_catalog, load_catalog, parse_weight, IndicatorRegistry};
use cycle_tracker::logging;
use cycle_tracker::models::{Indicator, IndicatorUpdate, Phase};
use cycle_tracker::reports::{load_report, PerformanceTier, PositionSummary, TierFilter, TraderSummary};
use cycle_tracker::signals::{progress_bar, BoardSummary};
use cycle_tracker::store::{FileMedium, FileOverrideStore, OverrideStore};
use dotenvy::dotenv;
use std::env;
use std::process;
use tracing::info;

const USAGE: &str = "usage: cycle-tracker [summary | weight <id> <0-100> | reset <id> | delete <id> | restore [<id>] | positions | traders [all|strong|watch|avoid]]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = Config::from_env();
    let args: Vec<String> = env::args().skip(1).collect();

    let catalog = match &config.catalog_path {
        Some(path) => load_catalog(path)?,
        None => builtin_catalog(),
    };

    info!(data_dir = %config.data_dir.display(), "Opening override store");
    let store = FileOverrideStore::new(FileMedium::new(&config.data_dir));
    let mut registry = IndicatorRegistry::load(&catalog, store);

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] | ["summary"] => {}
        ["weight", id, value] => {
            require_live(&registry, id);
            match parse_weight(value) {
                Ok(weight) => {
                    registry.update(id, IndicatorUpdate::weight(weight));
                    println!("{} weight set to {}%", id, weight);
                }
                Err(e) => {
                    let current = registry.get(id).map(|i| i.weight.value()).unwrap_or(0);
                    println!("Rejected weight input ({}), keeping {}%", e, current);
                }
            }
        }
        ["reset", id] => {
            require_live(&registry, id);
            if let Some(weight) = registry.reset_weight(id, &catalog) {
                println!("{} weight reset to {}%", id, weight);
            }
        }
        ["delete", id] => {
            registry.remove(id);
            println!("{} deleted", id);
        }
        ["restore"] => {
            let restored = registry.restore_all(&catalog);
            println!("Restored {} indicator(s)", restored);
        }
        ["restore", id] => {
            if registry.restore(id, &catalog) {
                println!("{} restored", id);
            } else {
                println!("{} is not a deleted catalog indicator", id);
            }
        }
        ["positions"] => {
            let Some(path) = &config.positions_report else {
                usage_error("CYCLE_TRACKER_POSITIONS_REPORT is not set");
            };
            let report: PositionSummary = load_report(path)?;
            print_positions(&report, config.top_n);
            return Ok(());
        }
        ["traders"] | ["traders", _] => {
            let filter = match args.get(1) {
                Some(raw) => raw.parse().unwrap_or_else(|e: String| usage_error(&e)),
                None => TierFilter::All,
            };
            let Some(path) = &config.traders_report else {
                usage_error("CYCLE_TRACKER_TRADERS_REPORT is not set");
            };
            let report: TraderSummary = load_report(path)?;
            print_traders(&report, filter, config.top_n);
            return Ok(());
        }
        _ => usage_error("unrecognized command"),
    }

    print_board(registry.indicators(), registry.summary(), registry.store());
    Ok(())
}

fn require_live<S: OverrideStore>(registry: &IndicatorRegistry<S>, id: &str) {
    if registry.get(id).is_none() {
        usage_error(&format!("no live indicator with id {}", id));
    }
}

fn usage_error(message: &str) -> ! {
    eprintln!("error: {}", message);
    eprintln!("{}", USAGE);
    process::exit(2);
}

fn print_board<S: OverrideStore>(indicators: &[Indicator], summary: &BoardSummary, store: &S) {
    println!("Recommendation: {}", summary.recommendation);
    println!();

    if summary.phases.is_empty() {
        println!("No indicators tracked yet. Add indicators to each phase to begin.");
    }
    for stats in &summary.phases {
        println!(
            "  {:<14} [{}] {:>3} / {:<3} ({:.0}%)",
            stats.phase.short_label(),
            progress_bar(stats.percentage, 20),
            stats.score,
            stats.total_weight,
            stats.percentage
        );
    }

    for phase in Phase::ALL {
        let rows: Vec<&Indicator> = indicators.iter().filter(|i| i.phase == phase).collect();
        if rows.is_empty() {
            continue;
        }
        println!();
        println!("{} ({})", phase, rows.len());
        for indicator in rows {
            let marker = if indicator.is_triggered { "x" } else { " " };
            let custom = if store.is_weight_customized(&indicator.id) { "*" } else { "" };
            println!(
                "  [{}] {:<8} {:<28} {:>3}%{:<1} {}",
                marker, indicator.id, indicator.name, indicator.weight.value(), custom, indicator.reliability
            );
        }
    }
}

fn print_positions(report: &PositionSummary, top_n: usize) {
    let totals = &report.summary;
    println!("Positions summary (generated {})", report.generated_at);
    println!(
        "  users: {} ({} with positions), positions: {}, value: ${:.0}",
        totals.total_users, totals.users_with_positions, totals.total_positions, totals.total_position_value
    );

    let mut levels: Vec<&String> = report.risk_distribution.keys().collect();
    levels.sort();
    let shares: Vec<String> = levels
        .iter()
        .map(|level| format!("{} {:.0}%", level, report.risk_share(level)))
        .collect();
    println!("  risk: {}", shares.join(", "));

    println!();
    println!("Top coins");
    for coin in report.top_coins(top_n) {
        println!(
            "  {:<8} {:>5} pos  ${:>14.0}  L/S {:>4}/{:<4} ratio {:.2}",
            coin.coin, coin.count, coin.total_value, coin.longs, coin.shorts, coin.long_short_ratio
        );
    }

    println!();
    println!("Largest positions");
    for position in report.top_positions(top_n) {
        println!(
            "  {:<8} {:?} ${:>14.0}  pnl ${:>12.0}  {}",
            position.coin, position.direction, position.position_value, position.unrealized_pnl, position.risk_level
        );
    }
}

fn print_traders(report: &TraderSummary, filter: TierFilter, top_n: usize) {
    let totals = &report.summary;
    println!("Trader leaderboard (generated {})", report.generated_at);
    println!(
        "  traders: {} ({} with positions), positions: {}",
        totals.total_traders, totals.traders_with_positions, totals.total_positions
    );
    println!(
        "  tiers: strong {}, watch {}, avoid {}",
        report.tier_count(PerformanceTier::Strong),
        report.tier_count(PerformanceTier::Watch),
        report.tier_count(PerformanceTier::Avoid)
    );
    let categories: Vec<String> = report
        .top_categories(5)
        .iter()
        .map(|(category, count)| format!("{} ({})", category, count))
        .collect();
    if !categories.is_empty() {
        println!("  categories: {}", categories.join(", "));
    }

    println!();
    for trader in report.top_traders(filter, top_n) {
        let profit = trader
            .total_profit
            .map(|p| format!("${:.0}", p))
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "  {:<20} {:<14} {:<6} profit {:>12}  coins {}",
            trader.name,
            trader.short_address(),
            trader.performance_tier.as_str(),
            profit,
            trader.top_coins.join(",")
        );
    }
}
