use tabled::Table;

use crate::{
    config, error,
    management::SelectionManager,
    service, success,
    types::{BreakdownTableRow, ChangeResult},
    utils::{self, DENOMINATION_CATALOG, Denomination},
};

/// Calculates the minimum-coin breakdown for an amount.
///
/// The amount is validated locally before anything touches the network.
/// Explicit `--denomination` flags (or `--all`) override the persisted
/// selection for this invocation only; otherwise the persisted selection is
/// used as-is.
pub async fn calculate(
    amount: String,
    denominations: Vec<Denomination>,
    all: bool,
    api_url: Option<String>,
) {
    let api_url = config::resolve_api_url(api_url);

    let amount_cents = match utils::parse_amount(&amount) {
        Ok(cents) => cents,
        Err(e) => error!("{}", e),
    };

    let selected: Vec<Denomination> = if all {
        DENOMINATION_CATALOG.to_vec()
    } else if !denominations.is_empty() {
        SelectionManager::new(Some(denominations)).selected()
    } else {
        match SelectionManager::load().await {
            Ok(manager) => manager.selected(),
            Err(_) => Vec::new(),
        }
    };

    let pb = utils::spinner(&format!(
        "Calculating change for {}...",
        utils::format_cents(amount_cents)
    ));
    let result = service::submit(&api_url, amount_cents, &selected).await;
    pb.finish_and_clear();

    match result {
        Ok(result) => render_breakdown(&result),
        Err(e) => error!("{}", e),
    }
}

fn render_breakdown(result: &ChangeResult) {
    let rows: Vec<BreakdownTableRow> = result
        .coins
        .iter()
        .map(|entry| BreakdownTableRow {
            denomination: format!("{:.2}", entry.denomination),
            count: entry.count,
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
    success!("Total coins: {}", result.total_coins);
}
