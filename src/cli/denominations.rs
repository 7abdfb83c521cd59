use tabled::Table;

use crate::{
    config, error, info,
    management::SelectionManager,
    service, success,
    types::DenominationTableRow,
    utils::{self, DENOMINATION_CATALOG, Denomination},
};

/// Shows the fixed catalog with a marker for each selected denomination.
pub async fn list_denominations() {
    let manager = load_or_empty().await;

    let rows: Vec<DenominationTableRow> = DENOMINATION_CATALOG
        .iter()
        .map(|denomination| DenominationTableRow {
            denomination: denomination.to_string(),
            selected: if manager.is_selected(*denomination) {
                "x".to_string()
            } else {
                String::new()
            },
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
    info!(
        "{} of {} denominations selected.",
        manager.count(),
        DENOMINATION_CATALOG.len()
    );
}

pub async fn select_denominations(values: Vec<Denomination>) {
    let mut manager = load_or_empty().await;
    for value in &values {
        manager.select(*value);
    }
    persist_and_report(&manager).await;
}

pub async fn deselect_denominations(values: Vec<Denomination>) {
    let mut manager = load_or_empty().await;
    for value in &values {
        manager.deselect(*value);
    }
    persist_and_report(&manager).await;
}

pub async fn select_all_denominations() {
    let mut manager = load_or_empty().await;
    manager.select_all();
    persist_and_report(&manager).await;
}

pub async fn clear_denominations() {
    let mut manager = load_or_empty().await;
    manager.clear();
    persist_and_report(&manager).await;
}

/// Shows the denominations the service itself advertises as valid.
pub async fn remote_denominations(api_url: Option<String>) {
    let api_url = config::resolve_api_url(api_url);

    let pb = utils::spinner("Fetching valid denominations...");
    let result = service::valid_denominations(&api_url).await;
    pb.finish_and_clear();

    match result {
        Ok(response) => {
            let values = response
                .denominations
                .iter()
                .map(|d| format!("{:.2}", d))
                .collect::<Vec<_>>()
                .join(", ");
            info!("The service accepts: {}", values);
            success!("{} denominations advertised.", response.denominations.len());
        }
        Err(e) => error!("{}", e),
    }
}

async fn load_or_empty() -> SelectionManager {
    SelectionManager::load()
        .await
        .unwrap_or_else(|_| SelectionManager::new(None))
}

async fn persist_and_report(manager: &SelectionManager) {
    match manager.persist().await {
        Ok(_) => {
            if manager.count() == 0 {
                success!("Selection cleared.");
            } else {
                success!(
                    "Selection updated: {}",
                    utils::join_denominations(&manager.selected())
                );
            }
        }
        Err(e) => error!("Cannot persist selection. Err: {}", e),
    }
}
